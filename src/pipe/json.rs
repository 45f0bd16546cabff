use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::UserhubError;
use crate::pipe::Pipe;
use crate::pipe::builtins::ValidationPipe;

/// JSON body extractor that runs [`ValidationPipe`] before the handler
///
/// Malformed JSON and rule violations are both rejected as
/// `UserhubError::Validation`, so they reach the client as a 400 envelope
/// instead of axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send + 'static,
{
    type Rejection = UserhubError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| UserhubError::Validation(rejection.body_text()))?;

        let value = ValidationPipe::<T>::new().transform(value).await?;
        Ok(ValidatedJson(value))
    }
}
