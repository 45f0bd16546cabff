use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use thiserror::Error;

use crate::common::ApiResponse;
use crate::config::ConfigError;
use crate::lifecycle::LifecycleError;

pub type Result<T> = std::result::Result<T, UserhubError>;

/// Every failure the service can report.
///
/// For request and storage failures the `Display` text is the message sent to
/// the client; the underlying `DbErr` is logged, not exposed.
#[derive(Debug, Error)]
pub enum UserhubError {
    #[error("Dependency not found: {type_name}")]
    DependencyNotFound { type_name: String },

    #[error("Failed to downcast type: {type_name}")]
    DowncastFailed { type_name: String },

    #[error("Module registration failed: {message}")]
    ModuleRegistrationFailed { message: String },

    #[error("{0}")]
    Validation(String),

    /// The `id` query parameter is absent or empty.
    #[error("User does not exist")]
    MissingId,

    #[error("Id is not available")]
    InvalidId,

    #[error("User does not exist")]
    UserNotFound,

    /// The record targeted by an update could not be loaded.
    #[error("Fail to get this user")]
    LookupFailed,

    #[error("Stored name cannot be split into first and last name")]
    MalformedName,

    #[error("Fail Insert user to database")]
    InsertFailed(#[source] DbErr),

    #[error("Fail to update user")]
    UpdateFailed(#[source] DbErr),

    #[error("Fail to delete user")]
    DeleteFailed(#[source] DbErr),

    #[error("Database connection failed: {0}")]
    Connection(#[source] DbErr),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

impl UserhubError {
    /// HTTP status for this error. Clients only ever see 400.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for UserhubError {
    fn into_response(self) -> Response {
        match &self {
            UserhubError::InsertFailed(e)
            | UserhubError::UpdateFailed(e)
            | UserhubError::DeleteFailed(e) => {
                tracing::error!(error = %e, "{}", self);
            }
            UserhubError::DependencyNotFound { .. }
            | UserhubError::DowncastFailed { .. }
            | UserhubError::ModuleRegistrationFailed { .. }
            | UserhubError::Connection(_)
            | UserhubError::Config(_)
            | UserhubError::Lifecycle(_) => {
                tracing::error!("{}", self);
            }
            _ => {
                tracing::debug!("request rejected: {}", self);
            }
        }

        ApiResponse::<()>::error(self.status_code(), self.to_string()).into_response()
    }
}
