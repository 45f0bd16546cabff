use crate::module;
use crate::modules::user::{SeaOrmUserRepository, UserModule, UserRepository};

/// Root application module
///
/// Declares the trait bindings and pulls in every feature module. The
/// database provider is registered ahead of it by [`crate::app::bootstrap`].
#[module(
    imports = [UserModule],
    bindings = [
        (dyn UserRepository => SeaOrmUserRepository),
    ],
)]
pub struct AppModule;
