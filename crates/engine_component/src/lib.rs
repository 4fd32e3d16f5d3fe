//! # engine_component
//!
//! The "C" in ECS. Defines what a component is, how its type is identified,
//! and where its values live.
//!
//! This crate provides:
//!
//! - [`Component`] trait: the contract all ECS data must satisfy.
//! - [`Entity`]: lightweight `u32` entity identifiers.
//! - [`EntityAllocator`]: monotonically increasing ID allocator.
//! - [`ComponentMask`] and [`BitAllocator`]: one flag bit per component type.
//! - [`ComponentStorage`]: per-type values, held erased as [`ErasedStorage`].
//! - [`ComponentRegistry`]: type → (ID, flag, storage).
//! - [`QueryDescriptor`] and [`ComponentSet`]: what a query asks for.

pub mod component;
pub mod entity;
pub mod error;
pub mod mask;
pub mod query;
pub mod registry;
pub mod storage;

pub use component::{Component, ComponentTypeId};
pub use entity::{Entity, EntityAllocator, MAX_ENTITIES};
pub use error::RegistryError;
pub use mask::{BitAllocator, ComponentMask, MASK_BITS, MaskBits};
pub use query::{ComponentSet, QueryDescriptor};
pub use registry::{ComponentRecord, ComponentRegistry};
pub use storage::{ComponentStorage, ErasedStorage};
