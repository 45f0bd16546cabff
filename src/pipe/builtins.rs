use crate::pipe::{Pipe, PipeError, PipeResult};
use async_trait::async_trait;
use std::marker::PhantomData;
use validator::{Validate, ValidationErrors};

/// A pipe that turns an optional query value into a record id
///
/// An absent or empty value is `Missing`; anything that is not a base-10
/// 64-bit integer is a `Transformation` failure. Range checks against the
/// stored id type are left to the caller.
#[derive(Default)]
pub struct ParseIdPipe;

#[async_trait]
impl Pipe for ParseIdPipe {
    type Input = Option<String>;
    type Output = i64;

    async fn transform(&self, input: Option<String>) -> PipeResult<i64> {
        let raw = input
            .filter(|value| !value.is_empty())
            .ok_or_else(|| PipeError::Missing("id".to_string()))?;
        raw.parse::<i64>()
            .map_err(|_| PipeError::Transformation(format!("invalid id {:?}", raw)))
    }
}

/// A pipe that runs `validator` rules and passes the value through
pub struct ValidationPipe<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> ValidationPipe<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for ValidationPipe<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Pipe for ValidationPipe<T>
where
    T: Validate + Send + 'static,
{
    type Input = T;
    type Output = T;

    async fn transform(&self, input: T) -> PipeResult<T> {
        input
            .validate()
            .map_err(|errors| PipeError::Validation(describe(&errors)))?;
        Ok(input)
    }
}

/// One sorted, comma-separated line out of the per-field messages.
fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{}: {}", field, error.code),
            })
        })
        .collect();
    messages.sort();
    messages.dedup();
    messages.join(", ")
}
