use crate::di::Container;

/// Trait that the router state must implement to expose the DI container
///
/// Controller routers generated by `#[routes]` require it of their state type.
pub trait HasContainer {
    fn get_container(&self) -> &Container;
}
