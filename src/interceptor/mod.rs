//! Request interceptors, run as one tower layer around the router.

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response};
use std::future::Future;
use std::pin::Pin;

mod layer;
mod logging;

pub use layer::{InterceptorLayer, InterceptorMiddleware};
pub use logging::LoggingInterceptor;

pub type InterceptorError = Box<dyn std::error::Error + Send + Sync>;

pub type InterceptorResult = Result<Response, InterceptorError>;

pub(crate) type ChainFuture = Pin<Box<dyn Future<Output = InterceptorResult> + Send>>;

/// The rest of the chain: later interceptors, then the router itself
///
/// Consumed by [`Next::run`]; an interceptor that never calls it short-circuits
/// the request.
pub struct Next {
    rest: Box<dyn FnOnce(Request<Body>) -> ChainFuture + Send>,
}

impl Next {
    pub fn new<F>(rest: F) -> Self
    where
        F: FnOnce(Request<Body>) -> ChainFuture + Send + 'static,
    {
        Self {
            rest: Box::new(rest),
        }
    }

    pub async fn run(self, request: Request<Body>) -> InterceptorResult {
        (self.rest)(request).await
    }
}

/// Wraps request handling
///
/// An `Err` escaping the chain is rendered by the layer's exception filter.
///
/// ```ignore
/// #[async_trait]
/// impl Interceptor for RequireJson {
///     async fn intercept(&self, req: Request<Body>, next: Next) -> InterceptorResult {
///         if req.headers().contains_key(CONTENT_TYPE) {
///             next.run(req).await
///         } else {
///             Err(UserhubError::Validation("missing content type".into()).into())
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Interceptor: Send + Sync + 'static {
    async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult;
}
