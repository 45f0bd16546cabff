use proc_macro::TokenStream;

mod controller;
mod injectable;
mod module;

/// `#[derive(Injectable)]`: build a provider from what the container holds
///
/// Fields must be `Arc<T>` (resolved with `Container::resolve`) or
/// `Arc<dyn Trait>` (resolved through a trait binding).
///
/// # Example
/// ```ignore
/// use userhub::prelude::*;
///
/// #[derive(Injectable)]
/// pub struct UserService {
///     repository: Arc<dyn UserRepository>,
/// }
/// ```
#[proc_macro_derive(Injectable)]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    injectable::derive_injectable(input)
}

/// `#[controller(path = "...")]`: inject the controller's fields and expose
/// its mount point as `base_path()`
///
/// # Example
/// ```ignore
/// #[controller(path = "/user")]
/// pub struct UserController {
///     service: Arc<UserService>,
/// }
/// ```
#[proc_macro_attribute]
pub fn controller(attr: TokenStream, item: TokenStream) -> TokenStream {
    controller::controller_attribute(attr, item)
}

/// `#[routes(Controller)]`: generate `Controller::router` from tagged methods
///
/// Methods tagged `#[get]`, `#[post]`, `#[put]`, `#[delete]` or `#[patch]`
/// become axum routes. Every parameter after `&self` must be an axum
/// extractor; its rejection type decides what a bad request looks like.
///
/// # Example
/// ```ignore
/// #[routes(UserController)]
/// impl UserController {
///     #[get("/find")]
///     async fn find(&self, query: QueryPairs) -> Result<ApiResponse<User>> {
///         // ...
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn routes(attr: TokenStream, item: TokenStream) -> TokenStream {
    controller::routes_attribute(attr, item)
}

/// `#[module(...)]`: implement `Module::register`
///
/// Bindings are registered first, then imports, providers and controllers.
///
/// # Example
/// ```ignore
/// #[module(
///     bindings = [(dyn UserRepository => SeaOrmUserRepository)],
///     imports = [UserModule],
/// )]
/// pub struct AppModule;
/// ```
#[proc_macro_attribute]
pub fn module(attr: TokenStream, item: TokenStream) -> TokenStream {
    module::module_attribute(attr, item)
}
