//! # userhub
//!
//! A small user registry served over HTTP: register, update, delete and find
//! users stored in a relational database through SeaORM.
//!
//! The service is assembled from a handful of framework pieces:
//!
//! - **Dependency Injection**: a type-indexed [`Container`] filled by `#[module]` declarations
//! - **Controller-based Routing**: `#[controller]` / `#[routes]` turn methods into axum routes
//! - **Pipes**: input validation and id parsing before a handler runs
//! - **Interceptors**: tower middleware for request logging
//! - **Lifecycle**: init / destroy hooks for the database provider
//!
//! Every endpoint answers with the same JSON envelope, see [`ApiResponse`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use userhub::app;
//! use userhub::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let (application, router) = app::bootstrap(&config).await?;
//!
//!     let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//!     axum::serve(listener, router).await?;
//!
//!     application.shutdown().await?;
//!     Ok(())
//! }
//! ```

// Lets the derive/attribute macros refer to `::userhub` from inside this crate.
extern crate self as userhub;

pub mod app;
pub mod app_module;
pub mod common;
pub mod config;
pub mod di;
pub mod error;
pub mod exception;
pub mod infrastructure;
pub mod interceptor;
pub mod lifecycle;
pub mod module;
pub mod modules;
pub mod observability;
pub mod pipe;

// Re-export core types
pub use common::ApiResponse;
pub use di::{Container, ContainerBuilder, HasContainer, Injectable};
pub use error::{Result, UserhubError};
pub use module::Module;

// Re-export macros
pub use userhub_macro::{Injectable as DeriveInjectable, controller, module, routes};

// Re-export commonly used types from dependencies
pub use async_trait::async_trait;
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use userhub::prelude::*;
/// ```
pub mod prelude {
    pub use crate::common::ApiResponse;
    pub use crate::di::{Container, ContainerBuilder, HasContainer, Injectable};
    pub use crate::error::{Result, UserhubError};
    pub use crate::exception::ExceptionFilter;
    pub use crate::interceptor::{Interceptor, InterceptorResult, Next};
    pub use crate::lifecycle::{
        Application, ApplicationBuilder, LifecycleError, OnModuleDestroy, OnModuleInit,
        shutdown_signal,
    };
    pub use crate::module::Module;
    pub use crate::pipe::builtins::*;
    pub use crate::pipe::{Pipe, PipeError, PipeResult};
    pub use crate::{DeriveInjectable as Injectable, controller, module, routes};
    pub use async_trait::async_trait;
    pub use axum::{
        Json, Router,
        extract::{Query, State},
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    pub use std::sync::Arc;
}
