use async_trait::async_trait;

use super::LifecycleError;

/// Runs once the container is filled, before the server accepts requests
///
/// The database provider uses it to check the connection and create its
/// tables.
///
/// ```rust,ignore
/// #[async_trait]
/// impl OnModuleInit for Database {
///     async fn on_module_init(&mut self) -> Result<(), LifecycleError> {
///         self.create_schema().await.map_err(LifecycleError::resource)
///     }
/// }
/// ```
#[async_trait]
pub trait OnModuleInit: Send + Sync {
    async fn on_module_init(&mut self) -> Result<(), LifecycleError>;
}

/// Runs after the server has drained; release pools and handles here.
#[async_trait]
pub trait OnModuleDestroy: Send + Sync {
    async fn on_module_destroy(&mut self) -> Result<(), LifecycleError>;
}
