//! Application assembly: database, container, lifecycle and router.

use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::app_module::AppModule;
use crate::config::AppConfig;
use crate::di::{Container, ContainerBuilder, HasContainer, Injectable};
use crate::error::{Result, UserhubError};
use crate::infrastructure::Database;
use crate::interceptor::{InterceptorLayer, LoggingInterceptor};
use crate::lifecycle::Application;
use crate::module::Module;
use crate::modules::user::UserController;

/// Upper bound on start-up hooks (connection check and schema creation).
pub const INIT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct AppState {
    container: Arc<Container>,
}

impl HasContainer for AppState {
    fn get_container(&self) -> &Container {
        &self.container
    }
}

/// Connect to the database, fill the container, run the start-up hooks and
/// build the router.
///
/// The returned [`Application`] must be shut down once the server stops so
/// the connection pool is closed.
pub async fn bootstrap(config: &AppConfig) -> Result<(Application, Router)> {
    let database = Database::connect(&config.database)
        .await
        .map_err(UserhubError::Connection)?;

    let mut container = ContainerBuilder::new()
        .register(database.clone())
        .build();
    AppModule::register(&mut container)?;
    tracing::info!("Container ready ({} providers)", container.len());

    let application = Application::builder()
        .container(container)
        .register_lifecycle(Arc::new(RwLock::new(database)), "Database")
        .init_timeout(INIT_TIMEOUT)
        .build()
        .await?;

    let router = router(Arc::clone(application.container()))?;
    Ok((application, router))
}

/// Mount every controller on a router backed by `container`.
pub fn router(container: Arc<Container>) -> Result<Router> {
    let user_controller = Arc::new(UserController::inject(&container)?);
    let state = AppState { container };

    Ok(Router::new()
        .nest(
            UserController::base_path(),
            UserController::router(user_controller),
        )
        .layer(InterceptorLayer::new(vec![Box::new(LoggingInterceptor)]))
        .with_state(state))
}
