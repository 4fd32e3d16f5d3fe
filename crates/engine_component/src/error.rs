//! Registry error types.

/// Errors raised by the component type registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The component type was never registered.
    #[error("component type '{0}' is not registered")]
    NotRegistered(&'static str),

    /// Every flag of the membership mask is already assigned.
    #[error("cannot register more than {capacity} component types")]
    CapacityExceeded {
        /// Maximum number of component types.
        capacity: usize,
    },
}
