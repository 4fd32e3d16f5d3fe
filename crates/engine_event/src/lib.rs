//! # engine_event
//!
//! Synchronous publish/subscribe keyed by event type.
//!
//! The ECS world uses an [`EventBus`] to announce entity and component
//! lifecycle changes, but the bus knows nothing about entities and works
//! for any `'static` event type.
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use engine_event::EventBus;
//!
//! struct Damaged(u32);
//!
//! let bus = EventBus::new();
//! let total = Rc::new(Cell::new(0));
//! let sink = Rc::clone(&total);
//! bus.subscribe(move |e: &Damaged| sink.set(sink.get() + e.0));
//!
//! bus.broadcast(&Damaged(5));
//! bus.broadcast(&Damaged(7));
//! assert_eq!(total.get(), 12);
//! ```

pub mod bus;

pub use bus::{EventBus, SubscriptionId};
