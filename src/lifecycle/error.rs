use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// The two points at which providers are called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Destroy,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Init => "init",
            Phase::Destroy => "destroy",
        })
    }
}

#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Raised by a hook implementation; wrapped in `Hook` by the manager.
    #[error("{0}")]
    Resource(String),

    #[error("{provider} failed during {phase}: {message}")]
    Hook {
        provider: String,
        phase: Phase,
        message: String,
    },

    #[error("{phase} did not finish within {after:?}")]
    TimedOut { phase: Phase, after: Duration },

    #[error("providers failed to shut down: {}", .providers.join(", "))]
    Teardown { providers: Vec<String> },

    #[error("no container was given to the application builder")]
    MissingContainer,
}

impl LifecycleError {
    /// Wrap a driver or I/O error raised inside a hook.
    pub fn resource(err: impl fmt::Display) -> Self {
        Self::Resource(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LifecycleError>;
