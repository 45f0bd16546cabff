use async_trait::async_trait;

use crate::error::UserhubError;

pub mod builtins;
mod json;
mod query;

pub use json::ValidatedJson;
pub use query::QueryPairs;

pub type PipeResult<T> = Result<T, PipeError>;

#[derive(Debug, thiserror::Error)]
pub enum PipeError {
    #[error("Missing value: {0}")]
    Missing(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Transformation failed: {0}")]
    Transformation(String),
}

impl From<PipeError> for UserhubError {
    fn from(err: PipeError) -> Self {
        match err {
            PipeError::Missing(_) => UserhubError::MissingId,
            PipeError::Transformation(_) => UserhubError::InvalidId,
            PipeError::Validation(message) => UserhubError::Validation(message),
        }
    }
}

/// The Pipe trait for transformation and validation of handler input
#[async_trait]
pub trait Pipe: Send + Sync + 'static {
    type Input: Send + 'static;
    type Output: Send + 'static;

    async fn transform(&self, input: Self::Input) -> PipeResult<Self::Output>;
}
