use sea_orm::{ConnectOptions, ConnectionTrait, DatabaseConnection, DbErr, Schema};

use crate::config::DatabaseConfig;
use crate::lifecycle::{LifecycleError, OnModuleDestroy, OnModuleInit};
use crate::modules::user::user_entity;
use async_trait::async_trait;

/// Shared SeaORM connection pool
///
/// Registered in the container as a plain provider and, separately, with the
/// application lifecycle: init creates the schema, destroy closes the pool.
/// Clones share the same pool.
#[derive(Clone)]
pub struct Database {
    conn: DatabaseConnection,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .sqlx_logging(false);

        tracing::info!("Database: connecting (max {} connections)", config.max_connections);
        let conn = sea_orm::Database::connect(options).await?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Create every table this service owns, skipping those that exist.
    pub async fn create_schema(&self) -> Result<(), DbErr> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut users = schema.create_table_from_entity(user_entity::Entity);
        users.if_not_exists();
        self.conn.execute(backend.build(&users)).await?;
        Ok(())
    }
}

#[async_trait]
impl OnModuleInit for Database {
    async fn on_module_init(&mut self) -> Result<(), LifecycleError> {
        tracing::info!("Database: checking connection and schema...");
        self.conn
            .ping()
            .await
            .map_err(LifecycleError::resource)?;
        self.create_schema()
            .await
            .map_err(LifecycleError::resource)?;
        tracing::info!("Database: ready");
        Ok(())
    }
}

#[async_trait]
impl OnModuleDestroy for Database {
    async fn on_module_destroy(&mut self) -> Result<(), LifecycleError> {
        tracing::info!("Database: closing connection pool...");
        self.conn
            .clone()
            .close()
            .await
            .map_err(LifecycleError::resource)?;
        tracing::info!("Database: connection pool closed");
        Ok(())
    }
}
