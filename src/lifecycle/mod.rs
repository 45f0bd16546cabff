//! Start-up and shutdown of providers that own an external resource.
//!
//! ```text
//! connect database ─► fill container ─► OnModuleInit (registration order)
//!                                              │
//!                                         serve requests
//!                                              │
//! SIGINT / SIGTERM ─► drain connections ─► OnModuleDestroy (reverse order)
//! ```
//!
//! Init hooks can be bounded by a timeout and stop at the first failure.
//! Destroy hooks always all run; failures are collected and reported once.

mod application;
mod error;
mod hooks;
mod manager;
mod signal;

pub use application::{Application, ApplicationBuilder};
pub use error::{LifecycleError, Phase, Result};
pub use hooks::{OnModuleDestroy, OnModuleInit};
pub use manager::LifecycleManager;
pub use signal::shutdown_signal;
