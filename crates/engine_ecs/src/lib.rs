//! # engine_ecs
//!
//! An in-memory entity-component store.
//!
//! This crate provides:
//!
//! - [`World`]: owns entities, component storage and the event bus.
//! - [`EntityTable`]: live entities and their membership masks.
//! - [`MembershipIndex`]: per-type entity lists used as query candidates.
//! - [`query::run`]: the query engine behind [`World::entities_with`].
//! - [`EntityCreated`], [`ComponentAdded`], [`ComponentRemoved`]: lifecycle
//!   events.
//! - [`WorldConfig`] and [`WorldError`].
//!
//! ## Usage
//!
//! ```rust
//! use engine_component::Component;
//! use engine_ecs::{ComponentAdded, World};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Health(u32);
//! impl Component for Health {}
//!
//! let mut world = World::new();
//! world.register_component::<Health>().unwrap();
//! world.subscribe(|e: &ComponentAdded<Health>| println!("{} healed to {}", e.entity, e.component.0));
//!
//! let e = world.create_entity();
//! world.add_component(e, Health(10)).unwrap();
//! assert_eq!(world.get_component::<Health>(e).unwrap(), Some(&Health(10)));
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod index;
pub mod query;
pub mod table;
pub mod world;

pub use config::WorldConfig;
pub use error::WorldError;
pub use events::{ComponentAdded, ComponentRemoved, EntityCreated};
pub use index::MembershipIndex;
pub use table::{EntityRecord, EntityTable};
pub use world::World;
