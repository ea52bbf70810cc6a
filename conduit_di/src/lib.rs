//! Compile time dependency injection.
//!
//! Services declare their dependencies as struct fields and derive
//! [`Build`]. A provider, declared with [`provider!`], supplies the leaf
//! values (database handles, configuration) and caches everything built
//! from them, so each type is constructed at most once per provider.

extern crate self as conduit_di;

use std::{
    any::{Any, TypeId},
    collections::HashMap,
};

pub use conduit_di_derive::Build;

mod macros;

pub trait Provider: Sized {
    fn cache(&mut self) -> &mut BuildCache;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provide: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provide for P {}

/// Values already built by a provider, at most one per type.
#[derive(Debug, Default)]
pub struct BuildCache {
    values: HashMap<TypeId, Box<dyn Any>>,
}

impl BuildCache {
    pub fn lookup<T: Clone + 'static>(&self) -> Option<T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
            .cloned()
    }

    pub fn store<T: 'static>(&mut self, value: T) {
        self.values.insert(TypeId::of::<T>(), Box::new(value));
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Returns the cached `T` or builds and caches a new one.
#[doc(hidden)]
pub fn cached<T, P>(provider: &mut P, build: impl FnOnce(&mut P) -> T) -> T
where
    T: Clone + 'static,
    P: Provider,
{
    if let Some(value) = provider.cache().lookup::<T>() {
        return value;
    }

    let value = build(provider);
    provider.cache().store(value.clone());
    value
}
