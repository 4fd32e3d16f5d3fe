//! Entity type and allocation utilities.
//!
//! An [`Entity`] is a lightweight `u32` identifier with no inherent data.
//! The membership mask that says which components an entity owns lives in
//! the store's entity table, not in the identifier itself.

/// A unique entity identifier.
///
/// Entities are pure identifiers; they carry no data of their own. Components
/// are attached to entities to give them meaning.
///
/// Identifiers are assigned sequentially starting at zero and are never
/// reused, so an `Entity` stays meaningful for the lifetime of its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity(pub u32);

impl Entity {
    /// Create an entity from a raw `u32` identifier.
    #[must_use]
    pub const fn from_raw(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw `u32` identifier.
    #[must_use]
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Returns the identifier as a table index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// The number of distinct entity IDs an allocator can hand out.
pub const MAX_ENTITIES: u32 = u32::MAX;

/// Allocates monotonically increasing entity IDs.
///
/// There is no free-list: destroyed identifiers would never be handed out
/// again even if entity deletion existed.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    next_id: u32,
}

impl EntityAllocator {
    /// Creates a new allocator. IDs start at 0.
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Allocates a fresh entity ID.
    ///
    /// # Panics
    ///
    /// Panics once [`MAX_ENTITIES`] IDs have been handed out; an ID is never
    /// reused.
    pub fn allocate(&mut self) -> Entity {
        let id = self.next_id;
        assert!(id < MAX_ENTITIES, "entity ID space exhausted ({MAX_ENTITIES} allocated)");
        self.next_id = id + 1;
        Entity(id)
    }

    /// Returns the number of entities allocated so far.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_accessors() {
        let e = Entity::from_raw(42);
        assert_eq!(e.id(), 42);
        assert_eq!(e.index(), 42);
        assert_eq!(e.to_string(), "Entity(42)");
    }

    #[test]
    fn test_allocator_starts_at_zero_and_is_sequential() {
        let mut alloc = EntityAllocator::new();
        let e0 = alloc.allocate();
        let e1 = alloc.allocate();
        let e2 = alloc.allocate();
        assert_eq!(e0.id(), 0);
        assert_eq!(e1.id(), 1);
        assert_eq!(e2.id(), 2);
        assert_eq!(alloc.count(), 3);
    }

    #[test]
    fn test_allocator_hands_out_last_id() {
        let mut alloc = EntityAllocator {
            next_id: MAX_ENTITIES - 1,
        };
        assert_eq!(alloc.allocate().id(), MAX_ENTITIES - 1);
        assert_eq!(alloc.count(), MAX_ENTITIES);
    }

    #[test]
    #[should_panic(expected = "entity ID space exhausted")]
    fn test_allocator_panics_when_exhausted() {
        let mut alloc = EntityAllocator {
            next_id: MAX_ENTITIES,
        };
        alloc.allocate();
    }
}
