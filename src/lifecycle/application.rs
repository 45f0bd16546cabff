use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use super::{LifecycleError, LifecycleManager, OnModuleDestroy, OnModuleInit, Result};
use crate::di::Container;

/// A started service: the filled container plus the providers to release on
/// shutdown
///
/// ```rust,ignore
/// let app = Application::builder()
///     .container(container)
///     .register_lifecycle(Arc::new(RwLock::new(database)), "Database")
///     .init_timeout(Duration::from_secs(30))
///     .build()
///     .await?;
/// // serve...
/// app.shutdown().await?;
/// ```
pub struct Application {
    container: Arc<Container>,
    lifecycle: LifecycleManager,
}

impl Application {
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::default()
    }

    pub fn container(&self) -> &Arc<Container> {
        &self.container
    }

    /// Release every managed provider, newest first.
    pub async fn shutdown(&self) -> Result<()> {
        tracing::info!("Shutting down application...");
        self.lifecycle.destroy().await?;
        tracing::info!("Application shutdown complete");
        Ok(())
    }
}

#[derive(Default)]
pub struct ApplicationBuilder {
    container: Option<Container>,
    lifecycle: LifecycleManager,
    init_timeout: Option<Duration>,
}

impl ApplicationBuilder {
    pub fn container(mut self, container: Container) -> Self {
        self.container = Some(container);
        self
    }

    /// Bound the whole init phase.
    pub fn init_timeout(mut self, timeout: Duration) -> Self {
        self.init_timeout = Some(timeout);
        self
    }

    /// Call `provider`'s init hook on `build` and its destroy hook on
    /// `Application::shutdown`.
    pub fn register_lifecycle<T>(mut self, provider: Arc<RwLock<T>>, name: impl Into<String>) -> Self
    where
        T: OnModuleInit + OnModuleDestroy + 'static,
    {
        self.lifecycle.manage(name, provider);
        self
    }

    /// Run the init hooks and hand back the started application.
    pub async fn build(self) -> Result<Application> {
        let container = self.container.ok_or(LifecycleError::MissingContainer)?;

        tracing::info!(
            "Initialising {} managed provider(s)...",
            self.lifecycle.len()
        );
        self.lifecycle.init(self.init_timeout).await?;

        Ok(Application {
            container: Arc::new(container),
            lifecycle: self.lifecycle,
        })
    }
}
