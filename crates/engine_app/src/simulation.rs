//! Fixed-step movement simulation over an [`engine_ecs::World`].
//!
//! Each step:
//!
//! 1. Query every entity with both `Position` and `Velocity`.
//! 2. Advance each position by its velocity.
//! 3. Strip `Velocity` from entities that have come to rest.

use std::cell::Cell;
use std::rc::Rc;

use engine_component::Entity;
use engine_ecs::{ComponentAdded, ComponentRemoved, EntityCreated, World, WorldError};
use tracing::{debug, info};

use crate::components::{Position, Velocity};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of entities to spawn.
    pub entities: u32,
    /// Number of steps to run.
    pub steps: u32,
}

/// Lifecycle event tallies gathered through world subscriptions.
#[derive(Debug, Default)]
struct Counters {
    created: Cell<usize>,
    added: Cell<usize>,
    removed: Cell<usize>,
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Steps executed.
    pub steps: u32,
    /// `EntityCreated` events observed.
    pub created: usize,
    /// `ComponentAdded<Position>` and `ComponentAdded<Velocity>` events observed.
    pub added: usize,
    /// `ComponentRemoved<Velocity>` events observed.
    pub removed: usize,
    /// Entities still moving after the last step.
    pub moving: usize,
}

/// A world plus the movement rules applied to it.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    world: World,
    counters: Rc<Counters>,
    step_id: u32,
}

impl Simulation {
    /// Build a simulation and register its component types.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if registration fails.
    pub fn new(config: SimulationConfig, mut world: World) -> Result<Self, WorldError> {
        world.register_component::<Position>()?;
        world.register_component::<Velocity>()?;

        let counters = Rc::new(Counters::default());
        {
            let c = Rc::clone(&counters);
            world.subscribe(move |_: &EntityCreated| bump(&c.created));
        }
        {
            let c = Rc::clone(&counters);
            world.subscribe(move |_: &ComponentAdded<Position>| bump(&c.added));
        }
        {
            let c = Rc::clone(&counters);
            world.subscribe(move |_: &ComponentAdded<Velocity>| bump(&c.added));
        }
        {
            let c = Rc::clone(&counters);
            world.subscribe(move |e: &ComponentRemoved<Velocity>| {
                debug!(entity = e.entity.id(), "entity came to rest");
                bump(&c.removed);
            });
        }

        Ok(Self {
            config,
            world,
            counters,
            step_id: 0,
        })
    }

    /// The underlying world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn the configured entities.
    ///
    /// Every entity gets a `Position`; odd-numbered entities also get a
    /// `Velocity` that slows by one unit per step.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if a component cannot be attached.
    pub fn spawn(&mut self) -> Result<Vec<Entity>, WorldError> {
        let mut spawned = Vec::with_capacity(self.config.entities as usize);
        for i in 0..self.config.entities {
            let entity = self.world.create_entity();
            self.world.add_component(entity, Position::default())?;
            if i % 2 == 1 {
                self.world.add_component(
                    entity,
                    Velocity {
                        dx: i as f32,
                        dy: 0.0,
                    },
                )?;
            }
            spawned.push(entity);
        }
        info!(spawned = spawned.len(), "spawned entities");
        Ok(spawned)
    }

    /// Run one step.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if the world rejects an operation.
    pub fn step(&mut self) -> Result<(), WorldError> {
        let moving = self.world.entities_with::<(Position, Velocity)>()?;
        let mut resting = Vec::new();

        for &entity in &moving {
            let Some(velocity) = self.world.get_component::<Velocity>(entity)?.copied() else {
                continue;
            };
            if let Some(position) = self.world.get_component_mut::<Position>(entity)? {
                position.x += velocity.dx;
                position.y += velocity.dy;
            }
            if let Some(v) = self.world.get_component_mut::<Velocity>(entity)? {
                v.dx = (v.dx - 1.0).max(0.0);
                if v.is_zero() {
                    resting.push(entity);
                }
            }
        }

        for entity in resting {
            self.world.remove_component::<Velocity>(entity)?;
        }

        self.step_id += 1;
        debug!(step = self.step_id, moved = moving.len(), "step complete");
        Ok(())
    }

    /// Spawn, run every configured step and report.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if the world rejects an operation.
    pub fn run(mut self) -> Result<Summary, WorldError> {
        self.spawn()?;
        for _ in 0..self.config.steps {
            self.step()?;
        }
        Ok(Summary {
            steps: self.step_id,
            created: self.counters.created.get(),
            added: self.counters.added.get(),
            removed: self.counters.removed.get(),
            moving: self.world.entities_with::<(Velocity,)>()?.len(),
        })
    }
}
