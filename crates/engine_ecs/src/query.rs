//! The query engine.
//!
//! A query is answered fresh on every call:
//!
//! 1. Every type in the descriptor must be registered.
//!    A descriptor that both requires and excludes a type matches nothing.
//! 2. The `with` types are folded into one required mask, the `without`
//!    types into one excluded mask.
//! 3. With no required types every live entity is a candidate. Otherwise the
//!    candidates are the shortest membership list among the required types;
//!    any entity owning all of them is necessarily in that list.
//! 4. Candidates are kept when their mask contains the required mask and
//!    shares no bit with the excluded mask.

use engine_component::{ComponentMask, ComponentRegistry, Entity, QueryDescriptor};
use tracing::trace;

use crate::error::WorldError;
use crate::index::MembershipIndex;
use crate::table::EntityTable;

/// Evaluate `descriptor` against the world's tables.
///
/// # Errors
///
/// Returns [`WorldError::ComponentNotRegistered`] if the descriptor names an
/// ID this registry never issued.
pub fn run(
    descriptor: &QueryDescriptor,
    registry: &ComponentRegistry,
    entities: &EntityTable,
    index: &MembershipIndex,
) -> Result<Vec<Entity>, WorldError> {
    if let Some(unknown) = descriptor
        .with
        .iter()
        .chain(&descriptor.without)
        .find(|&&id| registry.record(id).is_none())
    {
        return Err(WorldError::ComponentNotRegistered(unknown.to_string()));
    }
    if descriptor.is_contradictory() {
        trace!("query requires and excludes the same type");
        return Ok(Vec::new());
    }

    let required = registry.mask_of(&descriptor.with);
    let excluded = registry.mask_of(&descriptor.without);
    let matches = |mask: ComponentMask| mask.contains(required) && !mask.intersects(excluded);

    // Ties go to the first type listed.
    let Some(candidates) = descriptor
        .with
        .iter()
        .map(|&id| index.members(id))
        .min_by_key(|members| members.len())
    else {
        trace!(scanned = entities.len(), "query over all entities");
        return Ok(entities
            .iter()
            .filter(|record| matches(record.mask))
            .map(|record| record.entity)
            .collect());
    };

    trace!(
        candidates = candidates.len(),
        required = required.0,
        excluded = excluded.0,
        "query over smallest membership list"
    );
    Ok(candidates
        .iter()
        .copied()
        .filter(|&entity| entities.mask(entity).is_some_and(matches))
        .collect())
}
