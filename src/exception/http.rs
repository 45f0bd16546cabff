use crate::common::ApiResponse;
use crate::error::UserhubError;
use crate::exception::ExceptionFilter;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::error::Error;

/// The default exception filter
///
/// Service errors keep their own message; anything else is logged and
/// answered with a generic message. Both use the 400 envelope.
#[derive(Default)]
pub struct HttpExceptionFilter;

impl ExceptionFilter for HttpExceptionFilter {
    fn catch(&self, error: Box<dyn Error + Send + Sync>) -> Response {
        match error.downcast::<UserhubError>() {
            Ok(service_error) => (*service_error).into_response(),
            Err(other) => {
                tracing::error!("Exception intercepted: {}", other);
                ApiResponse::<()>::error(StatusCode::BAD_REQUEST, "Request could not be processed")
                    .into_response()
            }
        }
    }
}
