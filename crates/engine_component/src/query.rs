//! Query descriptors.
//!
//! A [`QueryDescriptor`] names the component types an entity must own
//! (`with`) and must not own (`without`). Descriptors are plain data built
//! from [`ComponentTypeId`]s; statically known combinations can be written as
//! tuples through [`ComponentSet`] instead.

use crate::component::{Component, ComponentTypeId};
use crate::error::RegistryError;
use crate::registry::ComponentRegistry;

/// Describes which entities a query selects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryDescriptor {
    /// Component types an entity must own.
    pub with: Vec<ComponentTypeId>,
    /// Component types an entity must not own.
    pub without: Vec<ComponentTypeId>,
}

impl QueryDescriptor {
    /// Create a descriptor that matches every entity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            with: Vec::new(),
            without: Vec::new(),
        }
    }

    /// Require a component type.
    #[must_use]
    pub fn with(mut self, type_id: ComponentTypeId) -> Self {
        if !self.with.contains(&type_id) {
            self.with.push(type_id);
        }
        self
    }

    /// Exclude a component type.
    #[must_use]
    pub fn without(mut self, type_id: ComponentTypeId) -> Self {
        if !self.without.contains(&type_id) {
            self.without.push(type_id);
        }
        self
    }

    /// Returns `true` if no entity can ever match, i.e. a type is both
    /// required and excluded.
    #[must_use]
    pub fn is_contradictory(&self) -> bool {
        self.with.iter().any(|ty| self.without.contains(ty))
    }
}

/// A statically known set of component types.
///
/// Implemented for `()` (the empty set) and tuples of up to eight
/// [`Component`] types.
pub trait ComponentSet {
    /// Resolve every member of the set against `registry`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotRegistered`] for the first member that was
    /// never registered.
    fn type_ids(registry: &ComponentRegistry) -> Result<Vec<ComponentTypeId>, RegistryError>;

    /// Build a `with` descriptor from the set.
    ///
    /// # Errors
    ///
    /// See [`ComponentSet::type_ids`].
    fn descriptor(registry: &ComponentRegistry) -> Result<QueryDescriptor, RegistryError> {
        Ok(Self::type_ids(registry)?
            .into_iter()
            .fold(QueryDescriptor::new(), QueryDescriptor::with))
    }
}

impl ComponentSet for () {
    fn type_ids(_: &ComponentRegistry) -> Result<Vec<ComponentTypeId>, RegistryError> {
        Ok(Vec::new())
    }
}

macro_rules! impl_component_set {
    ($($t:ident),+) => {
        impl<$($t: Component),+> ComponentSet for ($($t,)+) {
            fn type_ids(registry: &ComponentRegistry) -> Result<Vec<ComponentTypeId>, RegistryError> {
                Ok(vec![$(registry.id_of::<$t>()?),+])
            }
        }
    };
}

impl_component_set!(A);
impl_component_set!(A, B);
impl_component_set!(A, B, C);
impl_component_set!(A, B, C, D);
impl_component_set!(A, B, C, D, E);
impl_component_set!(A, B, C, D, E, F);
impl_component_set!(A, B, C, D, E, F, G);
impl_component_set!(A, B, C, D, E, F, G, H);
