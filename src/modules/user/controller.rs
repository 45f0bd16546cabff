use std::sync::Arc;

use super::model::{RegisterUserRequest, UpdateUserRequest, User};
use super::service::UserService;
use crate::common::ApiResponse;
use crate::error::Result;
use crate::pipe::builtins::ParseIdPipe;
use crate::pipe::{Pipe, QueryPairs, ValidatedJson};
use crate::{controller, routes};

#[controller(path = "/user")]
pub struct UserController {
    service: Arc<UserService>,
}

#[routes(UserController)]
impl UserController {
    #[post("/register")]
    pub async fn register(
        &self,
        ValidatedJson(req): ValidatedJson<RegisterUserRequest>,
    ) -> Result<ApiResponse<User>> {
        let user = self.service.register(req).await?;
        Ok(ApiResponse::success("Create Success", user))
    }

    #[put("/update")]
    pub async fn update(
        &self,
        ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
    ) -> Result<ApiResponse<User>> {
        let user = self.service.update(req).await?;
        Ok(ApiResponse::success("Update Success", user))
    }

    #[delete("/delete")]
    pub async fn delete(&self, query: QueryPairs) -> Result<ApiResponse<()>> {
        let id = ParseIdPipe.transform(query.first("id")).await?;
        self.service.delete(id).await?;
        Ok(ApiResponse::message("Delete user success"))
    }

    #[get("/find")]
    pub async fn find(&self, query: QueryPairs) -> Result<ApiResponse<User>> {
        let id = ParseIdPipe.transform(query.first("id")).await?;
        let user = self.service.find(id).await?;
        Ok(ApiResponse::success("Fetching user success", user))
    }
}
