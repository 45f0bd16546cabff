use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Standard API response wrapper
///
/// Every endpoint answers with `{"message": string, "data"?: T}`. `data` is
/// omitted when there is nothing to return.
///
/// # Example
/// ```
/// use userhub::common::ApiResponse;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct User {
///     id: i32,
///     name: String,
/// }
///
/// fn found(user: User) -> ApiResponse<User> {
///     ApiResponse::success("Fetching user success", user)
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip)]
    pub http_status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response with data
    ///
    /// Defaults to HTTP 200 OK.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            http_status: StatusCode::OK,
        }
    }

    /// Create a successful response that only carries a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            http_status: StatusCode::OK,
        }
    }

    /// Create an error response
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            http_status: status,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.http_status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Record {
        id: i32,
        name: String,
    }

    #[test]
    fn success_carries_data() {
        let response = ApiResponse::success(
            "Create Success",
            Record {
                id: 7,
                name: "Ada Lovelace".to_string(),
            },
        );
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"message": "Create Success", "data": {"id": 7, "name": "Ada Lovelace"}})
        );
    }

    #[test]
    fn message_only_omits_data() {
        let response: ApiResponse<Record> = ApiResponse::message("Delete user success");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"message": "Delete user success"})
        );
    }

    #[test]
    fn error_uses_given_status() {
        let response: ApiResponse<()> =
            ApiResponse::error(StatusCode::BAD_REQUEST, "Id is not available");
        let response = response.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }
}
