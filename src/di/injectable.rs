use crate::di::Container;
use crate::error::Result;

/// Built from providers already in the container
///
/// Usually derived: `#[derive(Injectable)]` resolves `Arc<T>` fields with
/// [`Container::resolve`] and `Arc<dyn Trait>` fields through a binding.
/// `#[controller]` implements it for controllers.
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Fails with `DependencyNotFound` when a field's provider is missing.
    fn inject(container: &Container) -> Result<Self>;
}
