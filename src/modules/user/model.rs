use serde::{Deserialize, Serialize};
use validator::Validate;

use super::user_entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
}

impl From<user_entity::Model> for User {
    fn from(model: user_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// Body of `POST /user/register`
///
/// Absent fields deserialize as empty strings so that the validator, not the
/// JSON decoder, reports them.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "firstName is required"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "lastName is required"))]
    pub last_name: String,
}

impl RegisterUserRequest {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body of `PUT /user/update`
///
/// `id` is read as 64 bits; values the `users.id` column cannot hold are
/// reported by the service as an unknown user.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i64,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,
}
