//! World configuration.

use serde::Deserialize;

use crate::error::WorldError;

/// Configuration for a [`World`](crate::World).
///
/// Every field has a default, so a config file only needs to name what it
/// changes:
///
/// ```json
/// { "entity_capacity": 4096, "emit_events": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldConfig {
    /// Number of entities to reserve room for up front.
    pub entity_capacity: usize,
    /// Whether the world broadcasts its own lifecycle events.
    pub emit_events: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            entity_capacity: 0,
            emit_events: true,
        }
    }
}

impl WorldConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Config`] if the JSON is malformed or names an
    /// unknown field.
    pub fn from_json_str(json: &str) -> Result<Self, WorldError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Override the reserved entity capacity.
    #[must_use]
    pub fn with_entity_capacity(mut self, capacity: usize) -> Self {
        self.entity_capacity = capacity;
        self
    }

    /// Enable or disable lifecycle event broadcasts.
    #[must_use]
    pub fn with_events(mut self, emit: bool) -> Self {
        self.emit_events = emit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WorldConfig::default();
        assert_eq!(config.entity_capacity, 0);
        assert!(config.emit_events);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = WorldConfig::from_json_str(r#"{ "entity_capacity": 128 }"#).unwrap();
        assert_eq!(config, WorldConfig::new().with_entity_capacity(128));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = WorldConfig::from_json_str(r#"{ "entity_capacty": 1 }"#).unwrap_err();
        assert!(matches!(err, WorldError::Config(_)));
    }

    #[test]
    fn test_builder() {
        let config = WorldConfig::new().with_events(false).with_entity_capacity(8);
        assert!(!config.emit_events);
        assert_eq!(config.entity_capacity, 8);
    }
}
