//! Per-type membership indexes.
//!
//! For every registered component type the index keeps the list of entities
//! that currently own it. An entity is listed under a type exactly when its
//! mask has that type's bit set. Lists grow by appending and shrink by
//! swap-removal, so their order is not stable across removals.

use engine_component::{ComponentTypeId, Entity};

/// Entity lists keyed by [`ComponentTypeId`].
#[derive(Debug, Default)]
pub struct MembershipIndex {
    lists: Vec<Vec<Entity>>,
}

impl MembershipIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure a (possibly empty) list exists for `id`.
    pub fn ensure(&mut self, id: ComponentTypeId) {
        if self.lists.len() <= id.index() {
            self.lists.resize_with(id.index() + 1, Vec::new);
        }
    }

    /// Append `entity` under `id`.
    ///
    /// The caller checks the entity's mask first; an entity whose bit is
    /// already set must not be appended again.
    pub fn insert(&mut self, id: ComponentTypeId, entity: Entity) {
        self.ensure(id);
        let list = &mut self.lists[id.index()];
        debug_assert!(!list.contains(&entity), "{entity} listed twice");
        list.push(entity);
    }

    /// Remove `entity` from the list of `id`. Returns `true` if it was listed.
    pub fn remove(&mut self, id: ComponentTypeId, entity: Entity) -> bool {
        let Some(list) = self.lists.get_mut(id.index()) else {
            return false;
        };
        match list.iter().position(|&e| e == entity) {
            Some(pos) => {
                list.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    /// Entities currently listed under `id`.
    #[must_use]
    pub fn members(&self, id: ComponentTypeId) -> &[Entity] {
        self.lists.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of entities listed under `id`.
    #[must_use]
    pub fn len(&self, id: ComponentTypeId) -> usize {
        self.members(id).len()
    }
}
