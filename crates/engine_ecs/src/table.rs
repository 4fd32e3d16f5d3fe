//! The entity table.
//!
//! Holds every live entity together with its membership mask. Entities are
//! allocated sequentially from zero and never destroyed, so an entity's ID
//! is also its row in the table.

use engine_component::{ComponentMask, Entity, EntityAllocator};

/// One row of the entity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRecord {
    /// The entity.
    pub entity: Entity,
    /// Component types the entity currently owns.
    pub mask: ComponentMask,
}

/// Authoritative list of live entities.
#[derive(Debug, Default)]
pub struct EntityTable {
    allocator: EntityAllocator,
    records: Vec<EntityRecord>,
}

impl EntityTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with room for `capacity` entities.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            allocator: EntityAllocator::new(),
            records: Vec::with_capacity(capacity),
        }
    }

    /// Append a new entity with an empty mask.
    pub fn create(&mut self) -> Entity {
        let entity = self.allocator.allocate();
        self.records.push(EntityRecord {
            entity,
            mask: ComponentMask::EMPTY,
        });
        entity
    }

    /// Returns `true` if `entity` is live.
    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        entity.index() < self.records.len()
    }

    /// The membership mask of `entity`, if it is live.
    #[must_use]
    pub fn mask(&self, entity: Entity) -> Option<ComponentMask> {
        self.records.get(entity.index()).map(|r| r.mask)
    }

    /// Mutable membership mask of `entity`, if it is live.
    pub fn mask_mut(&mut self, entity: Entity) -> Option<&mut ComponentMask> {
        self.records.get_mut(entity.index()).map(|r| &mut r.mask)
    }

    /// Iterate over every row in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &EntityRecord> {
        self.records.iter()
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no entity has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
