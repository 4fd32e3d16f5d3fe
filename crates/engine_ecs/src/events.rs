//! Lifecycle events broadcast by the world.
//!
//! Subscribe to these on [`World::events`](crate::World::events). Each
//! event is a value snapshot; handlers receive it by reference for the
//! duration of one broadcast.

use engine_component::Entity;

/// A new entity was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityCreated {
    /// The new entity.
    pub entity: Entity,
}

/// A component of type `T` was added to (or overwritten on) an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentAdded<T> {
    /// The entity that received the component.
    pub entity: Entity,
    /// The value that was stored.
    pub component: T,
}

/// A component of type `T` was removed from an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRemoved<T> {
    /// The entity that lost the component.
    pub entity: Entity,
    /// The last value the entity held.
    pub component: T,
}
