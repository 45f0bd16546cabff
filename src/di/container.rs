use dashmap::DashMap;
use std::any::{Any, TypeId, type_name};
use std::sync::Arc;

use crate::error::{Result, UserhubError};

type Instance = Arc<dyn Any + Send + Sync>;

/// Turns the bound implementation's instance into a boxed `Arc<dyn Trait>`.
/// `None` means the stored instance is not of the bound type.
type Cast = Arc<dyn Fn(Instance) -> Option<Instance> + Send + Sync>;

#[derive(Clone)]
struct Binding {
    implementation: TypeId,
    cast: Cast,
}

/// Shared providers, keyed by concrete type
///
/// Every provider is stored once behind an `Arc`; resolving hands out
/// clones of that `Arc`. A binding lets `dyn Trait` resolve to whichever
/// provider implements it, registered before or after the binding.
#[derive(Clone, Default)]
pub struct Container {
    instances: DashMap<TypeId, Instance>,
    bindings: DashMap<TypeId, Binding>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `instance`, replacing any provider of the same type.
    pub fn register<T: Send + Sync + 'static>(&mut self, instance: T) -> &mut Self {
        self.instances.insert(TypeId::of::<T>(), Arc::new(instance));
        self
    }

    /// Resolve `Trait` through the provider of type `Impl`.
    pub fn register_trait<Trait, Impl, F>(&mut self, upcast: F) -> &mut Self
    where
        Trait: ?Sized + Send + Sync + 'static,
        Impl: Send + Sync + 'static,
        F: Fn(Arc<Impl>) -> Arc<Trait> + Send + Sync + 'static,
    {
        let cast: Cast = Arc::new(move |instance: Instance| {
            let concrete = instance.downcast::<Impl>().ok()?;
            Some(Arc::new(upcast(concrete)) as Instance)
        });
        self.bindings.insert(
            TypeId::of::<Trait>(),
            Binding {
                implementation: TypeId::of::<Impl>(),
                cast,
            },
        );
        self
    }

    pub fn resolve<T: Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        let instance = self
            .instances
            .get(&TypeId::of::<T>())
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| UserhubError::DependencyNotFound {
                type_name: type_name::<T>().to_string(),
            })?;
        instance
            .downcast::<T>()
            .map_err(|_| UserhubError::DowncastFailed {
                type_name: type_name::<T>().to_string(),
            })
    }

    pub fn resolve_trait<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        let name = type_name::<T>();
        let binding = self
            .bindings
            .get(&TypeId::of::<T>())
            .map(|entry| entry.value().clone())
            .ok_or_else(|| UserhubError::DependencyNotFound {
                type_name: format!("no binding for {}", name),
            })?;
        let instance = self
            .instances
            .get(&binding.implementation)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| UserhubError::DependencyNotFound {
                type_name: format!("{} is bound but its implementation is not registered", name),
            })?;

        // The cast yields an `Arc<dyn Any>` wrapping the `Arc<T>`.
        let boxed = (binding.cast)(instance)
            .and_then(|upcast| upcast.downcast::<Arc<T>>().ok())
            .ok_or_else(|| UserhubError::DowncastFailed {
                type_name: name.to_string(),
            })?;
        Ok(Arc::clone(&boxed))
    }

    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        let id = TypeId::of::<T>();
        self.instances.contains_key(&id) || self.bindings.contains_key(&id)
    }

    /// Number of registered providers; bindings are not counted.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
