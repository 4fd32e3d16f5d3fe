//! Per-type component storage.
//!
//! Each registered component type gets one [`ComponentStorage<T>`], an
//! associative map from [`Entity`] to `T`. The registry keeps storages of
//! different types in a single collection by holding them as
//! `Box<dyn ErasedStorage>`; typed access goes back through
//! [`ErasedStorage::as_any`] and a checked downcast.

use std::any::Any;
use std::collections::HashMap;

use crate::component::Component;
use crate::entity::Entity;

/// Type-erased view of a component storage.
///
/// Only operations that need no knowledge of `T` live here.
pub trait ErasedStorage: Any {
    /// Drops the entry for `entity`, if any. Returns `true` if one existed.
    fn clear(&mut self, entity: Entity) -> bool;

    /// Returns `true` if a value is stored for `entity`.
    fn contains(&self, entity: Entity) -> bool;

    /// Number of stored values.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the stored component type.
    fn component_name(&self) -> &'static str;

    /// Immutable type-erased reference for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Mutable type-erased reference for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Storage for every value of one component type.
#[derive(Debug)]
pub struct ComponentStorage<T> {
    data: HashMap<Entity, T>,
}

impl<T: Component> ComponentStorage<T> {
    /// Create an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Insert or overwrite the value for `entity`, returning the old one.
    pub fn insert(&mut self, entity: Entity, value: T) -> Option<T> {
        self.data.insert(entity, value)
    }

    /// Remove and return the value for `entity`.
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        self.data.remove(&entity)
    }

    /// Borrow the value for `entity`.
    #[must_use]
    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.data.get(&entity)
    }

    /// Mutably borrow the value for `entity`.
    #[must_use]
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.data.get_mut(&entity)
    }

    /// Iterate over every stored `(entity, value)` pair in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.data.iter().map(|(&e, v)| (e, v))
    }
}

impl<T: Component> Default for ComponentStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Component> ErasedStorage for ComponentStorage<T> {
    fn clear(&mut self, entity: Entity) -> bool {
        self.data.remove(&entity).is_some()
    }

    fn contains(&self, entity: Entity) -> bool {
        self.data.contains_key(&entity)
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn component_name(&self) -> &'static str {
        T::type_name()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
