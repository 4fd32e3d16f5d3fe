//! Component type registry.
//!
//! The registry maps a Rust component type to its [`ComponentTypeId`], its
//! membership flag and its storage. Registration is the only way a storage is
//! created, so a successful lookup through the registry is also the proof that
//! the erased storage holds the type being asked for.
//!
//! ## Invariants
//!
//! - `records[id]` exists for every `id` in `by_type`.
//! - Flags are distinct powers of two; `records[id].flag == 1 << id`.
//! - At most [`MASK_BITS`](crate::MASK_BITS) types are ever registered.

use std::any::TypeId;
use std::collections::HashMap;

use tracing::debug;

use crate::component::{Component, ComponentTypeId};
use crate::error::RegistryError;
use crate::mask::{BitAllocator, ComponentMask, MASK_BITS};
use crate::storage::{ComponentStorage, ErasedStorage};

/// Everything the registry knows about one component type.
pub struct ComponentRecord {
    id: ComponentTypeId,
    name: &'static str,
    flag: ComponentMask,
    storage: Box<dyn ErasedStorage>,
}

impl ComponentRecord {
    /// The registration-time ID.
    #[must_use]
    pub fn id(&self) -> ComponentTypeId {
        self.id
    }

    /// Human-readable type name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The single-bit flag assigned to this type.
    #[must_use]
    pub fn flag(&self) -> ComponentMask {
        self.flag
    }

    /// The type-erased storage.
    #[must_use]
    pub fn erased(&self) -> &dyn ErasedStorage {
        self.storage.as_ref()
    }

    /// Typed view of the storage, `None` if `T` is not the stored type.
    #[must_use]
    pub fn storage<T: Component>(&self) -> Option<&ComponentStorage<T>> {
        self.storage.as_any().downcast_ref()
    }

    /// Mutable typed view of the storage, `None` if `T` is not the stored type.
    pub fn storage_mut<T: Component>(&mut self) -> Option<&mut ComponentStorage<T>> {
        self.storage.as_any_mut().downcast_mut()
    }
}

impl std::fmt::Debug for ComponentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("flag", &self.flag)
            .field("stored", &self.storage.len())
            .finish()
    }
}

/// Registry of all component types known to one world.
///
/// The registry is an ordinary value: independent worlds own independent
/// registries and never share IDs or flags.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    bits: BitAllocator,
    by_type: HashMap<TypeId, ComponentTypeId>,
    records: Vec<ComponentRecord>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bits: BitAllocator::new(),
            by_type: HashMap::new(),
            records: Vec::new(),
        }
    }

    /// Register component type `T` and return its ID.
    ///
    /// Registering a type twice is a no-op that returns the existing ID; the
    /// flag and storage assigned on first registration are kept.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::CapacityExceeded`] when every flag is taken.
    /// Nothing is modified in that case.
    pub fn register<T: Component>(&mut self) -> Result<ComponentTypeId, RegistryError> {
        let type_id = TypeId::of::<T>();
        if let Some(&existing) = self.by_type.get(&type_id) {
            return Ok(existing);
        }

        let flag = self.bits.allocate()?;
        let id = ComponentTypeId(self.records.len() as u32);
        self.records.push(ComponentRecord {
            id,
            name: T::type_name(),
            flag,
            storage: Box::new(ComponentStorage::<T>::new()),
        });
        self.by_type.insert(type_id, id);

        debug!(
            component = T::type_name(),
            id = id.0,
            flag = flag.0,
            remaining = self.bits.remaining(),
            "registered component type"
        );
        Ok(id)
    }

    /// Returns `true` if `T` has been registered.
    #[must_use]
    pub fn is_registered<T: Component>(&self) -> bool {
        self.by_type.contains_key(&TypeId::of::<T>())
    }

    /// Returns the ID assigned to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotRegistered`] if `T` is unknown.
    pub fn id_of<T: Component>(&self) -> Result<ComponentTypeId, RegistryError> {
        self.by_type
            .get(&TypeId::of::<T>())
            .copied()
            .ok_or(RegistryError::NotRegistered(T::type_name()))
    }

    /// Returns the flag assigned to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotRegistered`] if `T` is unknown.
    pub fn flag_of<T: Component>(&self) -> Result<ComponentMask, RegistryError> {
        Ok(self.lookup::<T>()?.flag)
    }

    /// Returns the full record for `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotRegistered`] if `T` is unknown.
    pub fn lookup<T: Component>(&self) -> Result<&ComponentRecord, RegistryError> {
        let id = self.id_of::<T>()?;
        self.record(id)
            .ok_or(RegistryError::NotRegistered(T::type_name()))
    }

    /// Mutable variant of [`lookup`](Self::lookup).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotRegistered`] if `T` is unknown.
    pub fn lookup_mut<T: Component>(&mut self) -> Result<&mut ComponentRecord, RegistryError> {
        let id = self.id_of::<T>()?;
        self.records
            .get_mut(id.index())
            .ok_or(RegistryError::NotRegistered(T::type_name()))
    }

    /// Returns the record for a previously issued ID.
    #[must_use]
    pub fn record(&self, id: ComponentTypeId) -> Option<&ComponentRecord> {
        self.records.get(id.index())
    }

    /// Typed storage for `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotRegistered`] if `T` is unknown.
    pub fn storage<T: Component>(&self) -> Result<&ComponentStorage<T>, RegistryError> {
        self.lookup::<T>()?
            .storage::<T>()
            .ok_or(RegistryError::NotRegistered(T::type_name()))
    }

    /// Mutable typed storage for `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotRegistered`] if `T` is unknown.
    pub fn storage_mut<T: Component>(&mut self) -> Result<&mut ComponentStorage<T>, RegistryError> {
        self.lookup_mut::<T>()?
            .storage_mut::<T>()
            .ok_or(RegistryError::NotRegistered(T::type_name()))
    }

    /// Combined mask of the given IDs. Unknown IDs contribute nothing.
    #[must_use]
    pub fn mask_of(&self, ids: &[ComponentTypeId]) -> ComponentMask {
        ids.iter()
            .filter_map(|&id| self.record(id))
            .fold(ComponentMask::EMPTY, |mask, record| mask | record.flag)
    }

    /// Iterate over every record in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentRecord> {
        self.records.iter()
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of types this registry can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        MASK_BITS
    }
}
