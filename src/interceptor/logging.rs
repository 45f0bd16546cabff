use async_trait::async_trait;
use axum::{body::Body, http::Request};
use std::time::Instant;

use super::{Interceptor, InterceptorResult, Next};

/// Logs one line when a request arrives and one when its response leaves
///
/// Fields: `method`, `uri`, and on the way out `status` and `elapsed`.
#[derive(Clone, Default)]
pub struct LoggingInterceptor;

#[async_trait]
impl Interceptor for LoggingInterceptor {
    async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult {
        let method = request.method().clone();
        let uri = request.uri().clone();
        tracing::info!(%method, %uri, "-->");

        let started = Instant::now();
        let outcome = next.run(request).await;
        let elapsed = started.elapsed();

        match &outcome {
            Ok(response) => {
                tracing::info!(%method, %uri, status = %response.status(), ?elapsed, "<--")
            }
            Err(error) => tracing::warn!(%method, %uri, %error, ?elapsed, "<-- failed"),
        }
        outcome
    }
}
