//! The ECS world: a single, explicitly owned entity-component store.
//!
//! A [`World`] ties together the component registry, the entity table, the
//! per-type membership indexes and an event bus. Three structures must agree
//! at all times: an entity's mask has type `T`'s bit set, the entity is
//! listed in `T`'s membership index, and `T`'s storage holds a value for it.
//! Every mutating method validates all of its preconditions first and only
//! then touches any of them.
//!
//! Removing a component drops its storage entry; the removed value is handed
//! to [`ComponentRemoved`] subscribers and then returned to the caller.

use engine_component::{
    Component, ComponentMask, ComponentRegistry, ComponentSet, ComponentTypeId, Entity,
    QueryDescriptor,
};
use engine_event::{EventBus, SubscriptionId};
use tracing::debug;

use crate::config::WorldConfig;
use crate::error::WorldError;
use crate::events::{ComponentAdded, ComponentRemoved, EntityCreated};
use crate::index::MembershipIndex;
use crate::query;
use crate::table::EntityTable;

/// The entity-component store.
///
/// Worlds share no global state; any number can coexist.
#[derive(Debug)]
pub struct World {
    config: WorldConfig,
    registry: ComponentRegistry,
    entities: EntityTable,
    index: MembershipIndex,
    events: EventBus,
}

impl World {
    /// Create an empty world with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    /// Create an empty world with the given configuration.
    #[must_use]
    pub fn with_config(config: WorldConfig) -> Self {
        Self {
            entities: EntityTable::with_capacity(config.entity_capacity),
            config,
            registry: ComponentRegistry::new(),
            index: MembershipIndex::new(),
            events: EventBus::new(),
        }
    }

    /// The configuration this world was built with.
    #[must_use]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    // -- Schema --

    /// Register component type `T`. Registering twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::CapacityExceeded`] when the membership mask has
    /// no free bit left.
    pub fn register_component<T: Component>(&mut self) -> Result<ComponentTypeId, WorldError> {
        let id = self.registry.register::<T>()?;
        self.index.ensure(id);
        Ok(id)
    }

    /// Returns `true` if `T` has been registered.
    #[must_use]
    pub fn is_registered<T: Component>(&self) -> bool {
        self.registry.is_registered::<T>()
    }

    /// The ID assigned to `T`, for building [`QueryDescriptor`]s.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ComponentNotRegistered`] if `T` is unknown.
    pub fn component_id<T: Component>(&self) -> Result<ComponentTypeId, WorldError> {
        Ok(self.registry.id_of::<T>()?)
    }

    /// The component registry.
    #[must_use]
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    // -- Entity lifecycle --

    /// Create a new entity with no components and broadcast [`EntityCreated`].
    ///
    /// # Panics
    ///
    /// Panics if the world has already created
    /// [`MAX_ENTITIES`](engine_component::MAX_ENTITIES) entities.
    pub fn create_entity(&mut self) -> Entity {
        let entity = self.entities.create();
        debug!(entity = entity.id(), "created entity");
        if self.config.emit_events {
            self.events.broadcast(&EntityCreated { entity });
        }
        entity
    }

    /// Returns `true` if `entity` exists in this world.
    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(entity)
    }

    /// Number of entities created so far.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Every entity, in creation order.
    #[must_use]
    pub fn entities(&self) -> Vec<Entity> {
        self.entities.iter().map(|record| record.entity).collect()
    }

    /// The membership mask of `entity`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::EntityNotFound`] if `entity` does not exist.
    pub fn component_mask(&self, entity: Entity) -> Result<ComponentMask, WorldError> {
        self.entities
            .mask(entity)
            .ok_or(WorldError::EntityNotFound(entity))
    }

    // -- Component operations --

    /// Attach `value` to `entity`, replacing any existing `T`.
    ///
    /// Broadcasts [`ComponentAdded<T>`] on every call, including overwrites.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ComponentNotRegistered`] or
    /// [`WorldError::EntityNotFound`]; nothing is changed in either case.
    pub fn add_component<T: Component>(
        &mut self,
        entity: Entity,
        value: T,
    ) -> Result<(), WorldError> {
        let record = self.registry.lookup::<T>()?;
        let (id, flag) = (record.id(), record.flag());
        let storage = self.registry.storage_mut::<T>()?;
        let mask = self
            .entities
            .mask_mut(entity)
            .ok_or(WorldError::EntityNotFound(entity))?;

        let replaced = mask.contains(flag);
        if !replaced {
            *mask |= flag;
            self.index.insert(id, entity);
        }

        // Subscribers cannot reach the world while it is mutably borrowed, so
        // the value can travel in the event first and be stored afterwards.
        let event = ComponentAdded {
            entity,
            component: value,
        };
        if self.config.emit_events {
            self.events.broadcast(&event);
        }
        storage.insert(entity, event.component);

        debug!(
            entity = entity.id(),
            component = T::type_name(),
            replaced,
            "added component"
        );
        Ok(())
    }

    /// Detach `T` from `entity` and return its last value.
    ///
    /// Broadcasts [`ComponentRemoved<T>`] carrying that value.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ComponentNotRegistered`],
    /// [`WorldError::EntityNotFound`] or [`WorldError::ComponentNotPresent`];
    /// nothing is changed in any of these cases.
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Result<T, WorldError> {
        let record = self.registry.lookup::<T>()?;
        let (id, flag) = (record.id(), record.flag());
        let storage = self.registry.storage_mut::<T>()?;
        let mask = self
            .entities
            .mask_mut(entity)
            .ok_or(WorldError::EntityNotFound(entity))?;
        let not_present = WorldError::ComponentNotPresent {
            component: T::type_name(),
            entity,
        };
        if !mask.contains(flag) {
            return Err(not_present);
        }
        let value = storage.remove(entity).ok_or(not_present)?;

        *mask = mask.without(flag);
        self.index.remove(id, entity);

        let event = ComponentRemoved {
            entity,
            component: value,
        };
        if self.config.emit_events {
            self.events.broadcast(&event);
        }

        debug!(entity = entity.id(), component = T::type_name(), "removed component");
        Ok(event.component)
    }

    /// Borrow `entity`'s `T`, or `None` if it does not own one.
    ///
    /// An entity this world never created owns nothing, so it also yields
    /// `None`. The borrow ends before the next mutation of the world.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ComponentNotRegistered`] if `T` is unknown.
    pub fn get_component<T: Component>(&self, entity: Entity) -> Result<Option<&T>, WorldError> {
        let flag = self.registry.flag_of::<T>()?;
        if !self.owns(entity, flag) {
            return Ok(None);
        }
        Ok(self.registry.storage::<T>()?.get(entity))
    }

    /// Mutably borrow `entity`'s `T`, or `None` if it does not own one.
    ///
    /// Editing in place does not broadcast any event.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ComponentNotRegistered`] if `T` is unknown.
    pub fn get_component_mut<T: Component>(
        &mut self,
        entity: Entity,
    ) -> Result<Option<&mut T>, WorldError> {
        let flag = self.registry.flag_of::<T>()?;
        if !self.owns(entity, flag) {
            return Ok(None);
        }
        Ok(self.registry.storage_mut::<T>()?.get_mut(entity))
    }

    /// Returns `true` if `entity` owns a `T`.
    ///
    /// # Errors
    ///
    /// Same as [`get_component`](Self::get_component).
    pub fn has_component<T: Component>(&self, entity: Entity) -> Result<bool, WorldError> {
        let flag = self.registry.flag_of::<T>()?;
        Ok(self.owns(entity, flag))
    }

    fn owns(&self, entity: Entity, flag: ComponentMask) -> bool {
        self.entities
            .mask(entity)
            .is_some_and(|mask| mask.contains(flag))
    }

    /// Entities currently owning `T`, in membership-index order.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ComponentNotRegistered`] if `T` is unknown.
    pub fn membership<T: Component>(&self) -> Result<&[Entity], WorldError> {
        Ok(self.index.members(self.registry.id_of::<T>()?))
    }

    // -- Query --

    /// Entities owning every type in `S`.
    ///
    /// `S` is a tuple of component types; `()` selects every entity.
    ///
    /// ```rust
    /// use engine_component::Component;
    /// use engine_ecs::World;
    ///
    /// struct Position;
    /// impl Component for Position {}
    /// struct Velocity;
    /// impl Component for Velocity {}
    ///
    /// let mut world = World::new();
    /// world.register_component::<Position>().unwrap();
    /// world.register_component::<Velocity>().unwrap();
    /// let e = world.create_entity();
    /// world.add_component(e, Position).unwrap();
    /// world.add_component(e, Velocity).unwrap();
    ///
    /// assert_eq!(world.entities_with::<(Position, Velocity)>().unwrap(), vec![e]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ComponentNotRegistered`] if any member of `S`
    /// is unknown.
    pub fn entities_with<S: ComponentSet>(&self) -> Result<Vec<Entity>, WorldError> {
        let descriptor = S::descriptor(&self.registry)?;
        self.query(&descriptor)
    }

    /// Entities matching a dynamic descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ComponentNotRegistered`] if the descriptor names
    /// an ID this world never issued.
    pub fn query(&self, descriptor: &QueryDescriptor) -> Result<Vec<Entity>, WorldError> {
        query::run(descriptor, &self.registry, &self.entities, &self.index)
    }

    // -- Events --

    /// The world's event bus.
    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Subscribe to events of type `E` on the world's bus.
    pub fn subscribe<E, F>(&self, handler: F) -> SubscriptionId
    where
        E: 'static,
        F: Fn(&E) + 'static,
    {
        self.events.subscribe(handler)
    }

    /// Remove a subscription from the world's bus.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Broadcast an arbitrary event on the world's bus.
    pub fn broadcast<E: 'static>(&self, event: &E) -> usize {
        self.events.broadcast(event)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use engine_component::MASK_BITS;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Position {
        x: f32,
        y: f32,
    }
    impl Component for Position {}

    #[derive(Debug, Clone, PartialEq)]
    struct Velocity {
        dx: f32,
        dy: f32,
    }
    impl Component for Velocity {}

    #[derive(Debug, Clone, PartialEq)]
    struct Unregistered;
    impl Component for Unregistered {}

    struct Marker<const N: usize>;
    impl<const N: usize> Component for Marker<N> {}

    fn pos(x: f32, y: f32) -> Position {
        Position { x, y }
    }

    fn vel(dx: f32, dy: f32) -> Velocity {
        Velocity { dx, dy }
    }

    fn world() -> World {
        let mut world = World::new();
        world.register_component::<Position>().unwrap();
        world.register_component::<Velocity>().unwrap();
        world
    }

    fn sorted(mut entities: Vec<Entity>) -> Vec<Entity> {
        entities.sort();
        entities
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut world = world();
        let e = world.create_entity();
        world.add_component(e, pos(1.0, 2.0)).unwrap();
        let id = world.component_id::<Position>().unwrap();
        let flag = world.registry().flag_of::<Position>().unwrap();

        assert_eq!(world.register_component::<Position>().unwrap(), id);
        assert_eq!(world.registry().flag_of::<Position>().unwrap(), flag);
        assert_eq!(world.get_component::<Position>(e).unwrap(), Some(&pos(1.0, 2.0)));
    }

    #[test]
    fn test_create_entity_is_sequential() {
        let mut world = world();
        assert_eq!(world.create_entity(), Entity(0));
        assert_eq!(world.create_entity(), Entity(1));
        assert_eq!(world.entity_count(), 2);
        assert_eq!(world.component_mask(Entity(1)).unwrap(), ComponentMask::EMPTY);
        assert!(!world.contains(Entity(2)));
    }

    #[test]
    fn test_add_then_get() {
        let mut world = world();
        let e = world.create_entity();
        world.add_component(e, pos(3.0, 4.0)).unwrap();
        assert!(world.has_component::<Position>(e).unwrap());
        assert!(!world.has_component::<Velocity>(e).unwrap());
        assert_eq!(world.get_component::<Position>(e).unwrap(), Some(&pos(3.0, 4.0)));
        assert_eq!(world.get_component::<Velocity>(e).unwrap(), None);
    }

    #[test]
    fn test_add_twice_replaces_without_duplicating_index() {
        let mut world = world();
        let e = world.create_entity();
        world.add_component(e, pos(1.0, 1.0)).unwrap();
        world.add_component(e, pos(2.0, 2.0)).unwrap();
        assert_eq!(world.get_component::<Position>(e).unwrap(), Some(&pos(2.0, 2.0)));
        assert_eq!(world.membership::<Position>().unwrap(), &[e]);
        assert_eq!(world.entities_with::<(Position,)>().unwrap(), vec![e]);
    }

    #[test]
    fn test_readding_to_many_entities_keeps_one_entry_each() {
        let mut world = world();
        let spawned: Vec<Entity> = (0..200).map(|_| world.create_entity()).collect();
        for round in 0..3 {
            for &e in &spawned {
                world.add_component(e, pos(round as f32, 0.0)).unwrap();
            }
        }
        assert_eq!(world.membership::<Position>().unwrap(), spawned.as_slice());
        assert_eq!(world.entities_with::<(Position,)>().unwrap(), spawned);
        assert_eq!(world.get_component::<Position>(spawned[7]).unwrap(), Some(&pos(2.0, 0.0)));
    }

    #[test]
    fn test_remove_clears_membership() {
        let mut world = world();
        let e = world.create_entity();
        world.add_component(e, pos(5.0, 6.0)).unwrap();

        let removed = world.remove_component::<Position>(e).unwrap();
        assert_eq!(removed, pos(5.0, 6.0));
        assert!(!world.has_component::<Position>(e).unwrap());
        assert!(world.membership::<Position>().unwrap().is_empty());
        assert!(world.entities_with::<(Position,)>().unwrap().is_empty());
        assert_eq!(world.registry().lookup::<Position>().unwrap().erased().len(), 0);
    }

    #[test]
    fn test_remove_missing_component_fails_without_effect() {
        let mut world = world();
        let e = world.create_entity();
        world.add_component(e, vel(1.0, 0.0)).unwrap();
        let before = world.component_mask(e).unwrap();

        let err = world.remove_component::<Position>(e).unwrap_err();
        assert!(matches!(err, WorldError::ComponentNotPresent { entity, .. } if entity == e));
        assert_eq!(world.component_mask(e).unwrap(), before);
        assert!(world.has_component::<Velocity>(e).unwrap());
    }

    #[test]
    fn test_unregistered_component_rejected() {
        let mut world = world();
        let e = world.create_entity();
        assert!(matches!(
            world.add_component(e, Unregistered),
            Err(WorldError::ComponentNotRegistered(_))
        ));
        assert!(matches!(
            world.remove_component::<Unregistered>(e),
            Err(WorldError::ComponentNotRegistered(_))
        ));
        assert!(matches!(
            world.get_component::<Unregistered>(e),
            Err(WorldError::ComponentNotRegistered(_))
        ));
        assert!(matches!(
            world.entities_with::<(Position, Unregistered)>(),
            Err(WorldError::ComponentNotRegistered(_))
        ));
        assert_eq!(world.component_mask(e).unwrap(), ComponentMask::EMPTY);
    }

    #[test]
    fn test_unknown_entity_rejected() {
        let mut world = world();
        let ghost = Entity(42);
        assert!(matches!(
            world.add_component(ghost, pos(0.0, 0.0)),
            Err(WorldError::EntityNotFound(e)) if e == ghost
        ));
        assert!(matches!(
            world.remove_component::<Position>(ghost),
            Err(WorldError::EntityNotFound(_))
        ));
        assert!(world.membership::<Position>().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_entity_owns_nothing() {
        let mut world = world();
        let e = world.create_entity();
        world.add_component(e, pos(1.0, 2.0)).unwrap();

        let ghost = Entity(99);
        assert!(!world.has_component::<Position>(ghost).unwrap());
        assert_eq!(world.get_component::<Position>(ghost).unwrap(), None);
        assert!(world.get_component_mut::<Position>(ghost).unwrap().is_none());
        assert!(matches!(
            world.has_component::<Unregistered>(ghost),
            Err(WorldError::ComponentNotRegistered(_))
        ));
    }

    #[test]
    fn test_get_component_mut_edits_in_place() {
        let mut world = world();
        let e = world.create_entity();
        world.add_component(e, pos(0.0, 0.0)).unwrap();
        if let Some(p) = world.get_component_mut::<Position>(e).unwrap() {
            p.x = 10.0;
        }
        assert_eq!(world.get_component::<Position>(e).unwrap(), Some(&pos(10.0, 0.0)));
        assert!(world.get_component_mut::<Velocity>(e).unwrap().is_none());
    }

    #[test]
    fn test_position_velocity_scenario() {
        let mut world = world();
        let e0 = world.create_entity();
        let e1 = world.create_entity();
        let e2 = world.create_entity();
        world.add_component(e0, pos(0.0, 0.0)).unwrap();
        world.add_component(e1, pos(1.0, 1.0)).unwrap();
        world.add_component(e1, vel(1.0, 0.0)).unwrap();
        world.add_component(e2, vel(0.0, 1.0)).unwrap();

        assert_eq!(world.entities_with::<(Position, Velocity)>().unwrap(), vec![e1]);
        assert_eq!(sorted(world.entities_with::<(Position,)>().unwrap()), vec![e0, e1]);
        assert_eq!(sorted(world.entities_with::<()>().unwrap()), vec![e0, e1, e2]);
    }

    #[test]
    fn test_entities_with_every_combination() {
        let mut world = world();
        let none = world.create_entity();
        let only_p = world.create_entity();
        let only_v = world.create_entity();
        let both = world.create_entity();
        world.add_component(only_p, pos(0.0, 0.0)).unwrap();
        world.add_component(only_v, vel(0.0, 0.0)).unwrap();
        world.add_component(both, pos(0.0, 0.0)).unwrap();
        world.add_component(both, vel(0.0, 0.0)).unwrap();

        let result = world.entities_with::<(Position, Velocity)>().unwrap();
        for e in [none, only_p, only_v, both] {
            let expected = world.has_component::<Position>(e).unwrap()
                && world.has_component::<Velocity>(e).unwrap();
            assert_eq!(result.contains(&e), expected, "{e}");
        }
        assert_eq!(result, vec![both]);

        world.remove_component::<Velocity>(both).unwrap();
        assert!(world.entities_with::<(Position, Velocity)>().unwrap().is_empty());
    }

    #[test]
    fn test_entities_with_empty_set_returns_all() {
        let mut world = World::new();
        assert!(world.entities_with::<()>().unwrap().is_empty());
        let created: Vec<Entity> = (0..5).map(|_| world.create_entity()).collect();
        assert_eq!(sorted(world.entities_with::<()>().unwrap()), created);
        assert_eq!(world.entities(), created);
    }

    #[test]
    fn test_query_descriptor_with_without() {
        let mut world = world();
        let moving = world.create_entity();
        let still = world.create_entity();
        world.add_component(moving, pos(0.0, 0.0)).unwrap();
        world.add_component(moving, vel(1.0, 1.0)).unwrap();
        world.add_component(still, pos(0.0, 0.0)).unwrap();

        let p = world.component_id::<Position>().unwrap();
        let v = world.component_id::<Velocity>().unwrap();
        let q = QueryDescriptor::new().with(p).without(v);
        assert_eq!(world.query(&q).unwrap(), vec![still]);
    }

    #[test]
    fn test_capacity_exceeded_keeps_earlier_types_usable() {
        macro_rules! register_markers {
            ($world:expr; $($n:literal)*) => {
                $( $world.register_component::<Marker<$n>>().unwrap(); )*
            };
        }

        let mut world = World::new();
        register_markers!(world;
            0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15
            16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31);
        assert!(matches!(
            world.register_component::<Marker<32>>(),
            Err(WorldError::CapacityExceeded { capacity: MASK_BITS })
        ));

        let e = world.create_entity();
        world.add_component(e, Marker::<0>).unwrap();
        world.add_component(e, Marker::<31>).unwrap();
        assert_eq!(world.entities_with::<(Marker<0>, Marker<31>)>().unwrap(), vec![e]);
        assert!(!world.is_registered::<Marker<32>>());
    }

    #[test]
    fn test_component_added_reaches_subscribers_in_order() {
        let mut world = world();
        let log = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second"] {
            let log = Rc::clone(&log);
            world.subscribe(move |e: &ComponentAdded<Position>| {
                log.borrow_mut().push((tag, e.entity, e.component.clone()));
            });
        }

        let e = world.create_entity();
        world.add_component(e, pos(7.0, 8.0)).unwrap();
        world.add_component(e, vel(0.0, 0.0)).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![("first", e, pos(7.0, 8.0)), ("second", e, pos(7.0, 8.0))]
        );
    }

    #[test]
    fn test_lifecycle_events() {
        let mut world = world();
        let created = Rc::new(RefCell::new(Vec::new()));
        let removed = Rc::new(RefCell::new(Vec::new()));
        {
            let created = Rc::clone(&created);
            world.subscribe(move |e: &EntityCreated| created.borrow_mut().push(e.entity));
        }
        {
            let removed = Rc::clone(&removed);
            world.subscribe(move |e: &ComponentRemoved<Velocity>| {
                removed.borrow_mut().push((e.entity, e.component.clone()));
            });
        }

        let e0 = world.create_entity();
        let e1 = world.create_entity();
        world.add_component(e1, vel(2.0, 3.0)).unwrap();
        world.remove_component::<Velocity>(e1).unwrap();
        assert!(world.remove_component::<Velocity>(e1).is_err());

        assert_eq!(*created.borrow(), vec![e0, e1]);
        assert_eq!(*removed.borrow(), vec![(e1, vel(2.0, 3.0))]);
    }

    #[test]
    fn test_failed_add_broadcasts_nothing() {
        let mut world = world();
        let hits = Rc::new(RefCell::new(0));
        {
            let hits = Rc::clone(&hits);
            world.subscribe(move |_: &ComponentAdded<Position>| *hits.borrow_mut() += 1);
        }
        assert!(world.add_component(Entity(3), pos(0.0, 0.0)).is_err());
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn test_events_can_be_disabled() {
        let mut world = World::with_config(WorldConfig::new().with_events(false));
        world.register_component::<Position>().unwrap();
        let hits = Rc::new(RefCell::new(0));
        {
            let hits = Rc::clone(&hits);
            world.subscribe(move |_: &EntityCreated| *hits.borrow_mut() += 1);
        }
        world.create_entity();
        assert_eq!(*hits.borrow(), 0);

        // The bus itself still works.
        assert_eq!(world.broadcast(&EntityCreated { entity: Entity(0) }), 1);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_broadcast_without_subscribers() {
        struct Nobody;
        let world = World::new();
        assert_eq!(world.broadcast(&Nobody), 0);
    }

    #[test]
    fn test_independent_worlds() {
        let mut a = World::new();
        let mut b = World::new();
        a.register_component::<Position>().unwrap();
        let ea = a.create_entity();
        a.add_component(ea, pos(1.0, 1.0)).unwrap();

        assert!(!b.is_registered::<Position>());
        let eb = b.create_entity();
        assert_eq!(ea, eb);
        assert!(matches!(
            b.get_component::<Position>(eb),
            Err(WorldError::ComponentNotRegistered(_))
        ));
    }
}
