//! The event bus.
//!
//! Subscribers are grouped by event type. Broadcasting copies the current
//! subscriber list for that type (cheap `Rc` clones) and releases every
//! internal borrow before the first handler runs. Handlers may therefore
//! subscribe, unsubscribe or broadcast on the same bus; such changes apply
//! to the next broadcast, never to the one in progress.

use std::any::{Any, TypeId, type_name};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use tracing::trace;

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Returns the raw identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

type Handler<E> = Rc<dyn Fn(&E)>;

/// Ordered subscribers of one event type.
struct Channel<E> {
    handlers: Vec<(SubscriptionId, Handler<E>)>,
}

impl<E: 'static> Channel<E> {
    fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    fn snapshot(&self) -> Vec<Handler<E>> {
        self.handlers.iter().map(|(_, h)| Rc::clone(h)).collect()
    }
}

/// Removal hook stored per channel so unsubscription works without knowing `E`.
trait ErasedChannel {
    fn remove(&mut self, id: SubscriptionId) -> bool;
    fn len(&self) -> usize;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<E: 'static> ErasedChannel for Channel<E> {
    fn remove(&mut self, id: SubscriptionId) -> bool {
        match self.handlers.iter().position(|(sid, _)| *sid == id) {
            Some(pos) => {
                // Order of the remaining subscribers must be preserved.
                self.handlers.remove(pos);
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.handlers.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Synchronous publish/subscribe keyed by event type.
///
/// The bus is single-threaded and uses interior mutability, so every
/// operation takes `&self`. Share it with `Rc<EventBus>` when handlers need
/// to reach back into it.
#[derive(Default)]
pub struct EventBus {
    next_id: Cell<u64>,
    channels: RefCell<HashMap<TypeId, Box<dyn ErasedChannel>>>,
    owners: RefCell<HashMap<SubscriptionId, TypeId>>,
}

impl EventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for events of type `E`.
    ///
    /// Handlers run in subscription order.
    pub fn subscribe<E, F>(&self, handler: F) -> SubscriptionId
    where
        E: 'static,
        F: Fn(&E) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let type_id = TypeId::of::<E>();
        let mut channels = self.channels.borrow_mut();
        let channel = channels
            .entry(type_id)
            .or_insert_with(|| Box::new(Channel::<E>::new()));
        if let Some(channel) = channel.as_any_mut().downcast_mut::<Channel<E>>() {
            channel.handlers.push((id, Rc::new(handler)));
        }
        self.owners.borrow_mut().insert(id, type_id);

        trace!(event = type_name::<E>(), subscription = id.0, "subscribed");
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let Some(type_id) = self.owners.borrow_mut().remove(&id) else {
            return false;
        };
        self.channels
            .borrow_mut()
            .get_mut(&type_id)
            .is_some_and(|channel| channel.remove(id))
    }

    /// Deliver `event` to every current subscriber of `E`, in order.
    ///
    /// Returns the number of handlers invoked. Broadcasting with no
    /// subscribers does nothing.
    pub fn broadcast<E: 'static>(&self, event: &E) -> usize {
        let handlers = {
            let channels = self.channels.borrow();
            match channels
                .get(&TypeId::of::<E>())
                .and_then(|channel| channel.as_any().downcast_ref::<Channel<E>>())
            {
                Some(channel) => channel.snapshot(),
                None => return 0,
            }
        };

        trace!(event = type_name::<E>(), handlers = handlers.len(), "broadcast");
        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }

    /// Number of subscribers currently registered for `E`.
    #[must_use]
    pub fn subscriber_count<E: 'static>(&self) -> usize {
        self.channels
            .borrow()
            .get(&TypeId::of::<E>())
            .map_or(0, |channel| channel.len())
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("event_types", &self.channels.borrow().len())
            .field("subscriptions", &self.owners.borrow().len())
            .finish()
    }
}
