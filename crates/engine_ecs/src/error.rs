//! World error types.

use engine_component::{Entity, RegistryError};

/// Errors surfaced by [`World`](crate::World) operations.
///
/// Every mutating operation validates before it changes anything, so an
/// error always means the world is exactly as it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The operation named a component type that was never registered.
    #[error("component type '{0}' is not registered")]
    ComponentNotRegistered(String),

    /// The operation named an entity that does not exist in this world.
    #[error("{0} not found")]
    EntityNotFound(Entity),

    /// The entity does not currently own the component.
    #[error("component '{component}' not present on {entity}")]
    ComponentNotPresent {
        /// Name of the component type.
        component: &'static str,
        /// The entity that lacks it.
        entity: Entity,
    },

    /// More component types were registered than the membership mask holds.
    #[error("cannot register more than {capacity} component types")]
    CapacityExceeded {
        /// Maximum number of component types.
        capacity: usize,
    },

    /// A world configuration could not be parsed.
    #[error("invalid world config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<RegistryError> for WorldError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotRegistered(name) => Self::ComponentNotRegistered(name.to_string()),
            RegistryError::CapacityExceeded { capacity } => Self::CapacityExceeded { capacity },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_errors_keep_their_kind() {
        let err: WorldError = RegistryError::NotRegistered("Position").into();
        assert!(matches!(err, WorldError::ComponentNotRegistered(ref name) if name == "Position"));

        let err: WorldError = RegistryError::CapacityExceeded { capacity: 32 }.into();
        assert!(matches!(err, WorldError::CapacityExceeded { capacity: 32 }));
    }

    #[test]
    fn test_messages_name_entity_and_component() {
        let err = WorldError::ComponentNotPresent {
            component: "Velocity",
            entity: Entity(4),
        };
        assert_eq!(err.to_string(), "component 'Velocity' not present on Entity(4)");
        assert_eq!(
            WorldError::EntityNotFound(Entity(9)).to_string(),
            "Entity(9) not found"
        );
    }
}
