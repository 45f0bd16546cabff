use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use super::{LifecycleError, OnModuleDestroy, OnModuleInit, Phase, Result};

struct Registered<H: ?Sized> {
    provider: String,
    hook: Arc<RwLock<H>>,
}

/// Ordered init and destroy hooks of every resource-owning provider
#[derive(Default)]
pub struct LifecycleManager {
    init: Vec<Registered<dyn OnModuleInit>>,
    destroy: Vec<Registered<dyn OnModuleDestroy>>,
}

impl LifecycleManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `hook` for both phases under the name `provider`.
    pub fn manage<T>(&mut self, provider: impl Into<String>, hook: Arc<RwLock<T>>)
    where
        T: OnModuleInit + OnModuleDestroy + 'static,
    {
        let provider = provider.into();
        self.init.push(Registered {
            provider: provider.clone(),
            hook: Arc::clone(&hook) as Arc<RwLock<dyn OnModuleInit>>,
        });
        self.destroy.push(Registered {
            provider,
            hook: hook as Arc<RwLock<dyn OnModuleDestroy>>,
        });
    }

    pub fn len(&self) -> usize {
        self.init.len()
    }

    pub fn is_empty(&self) -> bool {
        self.init.is_empty()
    }

    /// Run every init hook in registration order, stopping at the first
    /// failure. With a `limit`, the whole phase must finish in time.
    pub async fn init(&self, limit: Option<Duration>) -> Result<()> {
        let run = async {
            for registered in &self.init {
                tracing::debug!(provider = %registered.provider, "init");
                registered
                    .hook
                    .write()
                    .await
                    .on_module_init()
                    .await
                    .map_err(|e| LifecycleError::Hook {
                        provider: registered.provider.clone(),
                        phase: Phase::Init,
                        message: e.to_string(),
                    })?;
            }
            Ok::<(), LifecycleError>(())
        };

        match limit {
            Some(after) => tokio::time::timeout(after, run)
                .await
                .map_err(|_| LifecycleError::TimedOut {
                    phase: Phase::Init,
                    after,
                })?,
            None => run.await,
        }?;
        tracing::info!("{} provider(s) initialised", self.init.len());
        Ok(())
    }

    /// Run every destroy hook, newest registration first. A failing hook is
    /// logged and does not stop the others; all failures are reported
    /// together at the end.
    pub async fn destroy(&self) -> Result<()> {
        let mut failed = Vec::new();
        for registered in self.destroy.iter().rev() {
            tracing::debug!(provider = %registered.provider, "destroy");
            if let Err(e) = registered.hook.write().await.on_module_destroy().await {
                tracing::error!(provider = %registered.provider, error = %e, "destroy hook failed");
                failed.push(registered.provider.clone());
            }
        }

        if failed.is_empty() {
            tracing::info!("{} provider(s) released", self.destroy.len());
            Ok(())
        } else {
            Err(LifecycleError::Teardown { providers: failed })
        }
    }
}
