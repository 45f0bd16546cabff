use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use crate::error::UserhubError;

/// Query-string extractor that keeps every `key=value` pair in request order
///
/// Repeated keys are allowed and [`QueryPairs::first`] picks the earliest
/// one. A query string that cannot be decoded is rejected as
/// `UserhubError::Validation`, so it still reaches the client as an envelope.
#[derive(Debug, Clone, Default)]
pub struct QueryPairs(pub Vec<(String, String)>);

impl QueryPairs {
    pub fn first(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
    }
}

impl<S> FromRequestParts<S> for QueryPairs
where
    S: Send + Sync,
{
    type Rejection = UserhubError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|rejection| UserhubError::Validation(rejection.body_text()))?;
        Ok(Self(pairs))
    }
}
