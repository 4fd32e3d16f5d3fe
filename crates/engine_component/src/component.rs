//! Core [`Component`] trait and component type identity.
//!
//! Every piece of data stored in the ECS must implement [`Component`]. The
//! trait only requires `'static` so storages can be held behind `dyn Any`;
//! the store is single-threaded, so `Send + Sync` are not demanded.
//!
//! ## Type Identity
//!
//! [`ComponentTypeId`] is **not** derived from the type's name. Names from
//! `std::any::type_name` are not guaranteed to be unique or stable, so the
//! registry hands out a dense token at registration time instead. The token
//! doubles as the bit position of the type's flag in a
//! [`ComponentMask`](crate::ComponentMask).

/// A registration-time identifier for a component type.
///
/// IDs are dense and assigned in registration order by a
/// [`ComponentRegistry`](crate::ComponentRegistry). An ID is only meaningful
/// for the registry (and therefore the world) that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentTypeId(pub u32);

impl ComponentTypeId {
    /// Returns the ID as an index into per-type tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ComponentTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ComponentTypeId({})", self.0)
    }
}

/// The core component trait.
///
/// Components are opaque payloads: the store never inspects them, it only
/// moves them in and out of per-type storage.
///
/// # Examples
///
/// ```rust
/// use engine_component::Component;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Health {
///     current: f32,
///     max: f32,
/// }
///
/// impl Component for Health {}
///
/// assert!(Health::type_name().ends_with("Health"));
/// ```
pub trait Component: 'static {
    /// A human-readable name for this component type, used in diagnostics.
    ///
    /// Defaults to [`std::any::type_name`]. Identity never depends on it.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}
