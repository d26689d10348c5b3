//! Per-node extension slots
//!
//! Nodes carry optional typed extensions (currently the alias). The store
//! holds at most one instance of each extension type and is not persisted
//! directly; persistent extensions round-trip through the attribute registry.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

/// Type-keyed extension storage attached to a node.
///
/// At most one instance of each extension type can be attached. Attaching a
/// second instance replaces the first.
#[derive(Default)]
pub struct ExtensionStore {
    slots: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ExtensionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the attached extension of type `T`, if any.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.slots
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.downcast_ref())
    }

    /// Attach an extension, returning the previously attached instance.
    pub fn put<T: Any + Send + Sync>(&mut self, value: T) -> Option<T> {
        self.slots
            .insert(TypeId::of::<T>(), Box::new(value))
            .and_then(|slot| slot.downcast().ok())
            .map(|boxed| *boxed)
    }

    /// Detach and return the extension of type `T`, if any.
    pub fn remove<T: Any + Send + Sync>(&mut self) -> Option<T> {
        self.slots
            .remove(&TypeId::of::<T>())
            .and_then(|slot| slot.downcast().ok())
            .map(|boxed| *boxed)
    }

    /// Whether an extension of type `T` is attached.
    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.slots.contains_key(&TypeId::of::<T>())
    }

    /// Number of attached extensions.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no extensions are attached.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for ExtensionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionStore")
            .field("slots", &self.slots.len())
            .finish()
    }
}
