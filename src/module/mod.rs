use crate::di::Container;
use crate::error::Result;

/// Trait for application modules
///
/// Modules are defined with the `#[module]` macro, which implements this
/// trait and generates the registration logic: trait bindings first, then
/// imported modules, then providers, then controllers.
///
/// # Example
/// ```ignore
/// use userhub::prelude::*;
///
/// #[module(
///     controllers = [UserController],
///     providers = [SeaOrmUserRepository, UserService],
/// )]
/// pub struct UserModule;
/// ```
pub trait Module {
    /// Register all providers and controllers in this module
    fn register(container: &mut Container) -> Result<()>;
}
