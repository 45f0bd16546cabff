use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ActiveValue::Unchanged, DbErr, EntityTrait};
use std::sync::Arc;

use super::model::User;
use super::user_entity;
use crate::DeriveInjectable as Injectable;
use crate::infrastructure::Database;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr>;
    async fn insert(&self, name: String) -> Result<User, DbErr>;
    async fn update(&self, user: &User) -> Result<User, DbErr>;
    /// Returns the number of rows removed.
    async fn delete(&self, id: i32) -> Result<u64, DbErr>;
}

#[derive(Injectable)]
pub struct SeaOrmUserRepository {
    db: Arc<Database>,
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let model = user_entity::Entity::find_by_id(id)
            .one(self.db.connection())
            .await?;
        Ok(model.map(User::from))
    }

    async fn insert(&self, name: String) -> Result<User, DbErr> {
        let record = user_entity::ActiveModel {
            name: Set(name),
            ..Default::default()
        };
        let model = record.insert(self.db.connection()).await?;
        Ok(model.into())
    }

    async fn update(&self, user: &User) -> Result<User, DbErr> {
        let record = user_entity::ActiveModel {
            id: Unchanged(user.id),
            name: Set(user.name.clone()),
        };
        let model = record.update(self.db.connection()).await?;
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = user_entity::Entity::delete_by_id(id)
            .exec(self.db.connection())
            .await?;
        Ok(result.rows_affected)
    }
}
