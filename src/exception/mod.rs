use axum::response::Response;
use std::error::Error;

pub mod http;

/// Renders errors that escape the interceptor chain
pub trait ExceptionFilter: Send + Sync + 'static {
    fn catch(&self, error: Box<dyn Error + Send + Sync>) -> Response;
}
