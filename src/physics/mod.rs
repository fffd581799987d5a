//! 2D rigid-body simulation with force creators and SAT collision detection.
//!
//! # Architecture
//!
//! A [`Scene`] owns every body (as a `hecs` component) plus an ordered list of
//! force entries. Each call to [`Scene::tick`] runs:
//!
//! 1. Force creators, in registration order (gravity, springs, drag, collision dispatch)
//! 2. Integration of every live body, in insertion order
//! 3. Sweep of removed bodies, cascading to the force entries bound to them
//!
//! All forces run before any body moves, so a body removed by a collision
//! handler is never integrated on the tick it was removed.

pub mod collision;
pub mod contact;
pub mod forces;
pub mod rigid_body;

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, trace};

use crate::ecs::components::physics::{Body, BodyHandle};

use self::forces::{Bodies, ForceEntry, ForceHandle, ForceKind};

/// Configuration for the simulation.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Fixed timestep used by [`Scene::step`] in seconds. Default: 1/60.
    pub fixed_timestep: f64,
    /// Maximum number of sub-steps per frame. Default: 4.
    pub max_substeps: u32,
    /// Separation below which gravity stops growing. Default: 5.0.
    pub gravity_min_distance: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fixed_timestep: 1.0 / 60.0,
            max_substeps: 4,
            gravity_min_distance: 5.0,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("body {0:?} is no longer in the scene")]
    StaleBody(BodyHandle),
    #[error("body {handle:?} has no {component} component")]
    MissingComponent {
        handle: BodyHandle,
        component: &'static str,
    },
}

/// Bodies and the force creators acting on them.
pub struct Scene {
    config: SceneConfig,
    world: hecs::World,
    bodies: Vec<BodyHandle>,
    forces: Vec<ForceEntry>,
    next_force_id: u64,
    accumulator: f64,
    elapsed: f64,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            world: hecs::World::new(),
            bodies: Vec::new(),
            forces: Vec::new(),
            next_force_id: 0,
            accumulator: 0.0,
            elapsed: 0.0,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The backing world, for queries over components attached with [`Scene::attach`].
    pub fn world(&self) -> &hecs::World {
        &self.world
    }

    // ------------------------------------------------------------------
    // Bodies
    // ------------------------------------------------------------------

    /// Append a body. It goes to the end of the index order.
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        let handle = BodyHandle(self.world.spawn((body,)));
        self.bodies.push(handle);
        handle
    }

    /// Number of bodies, including ones flagged removed but not yet swept.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Handles in insertion order.
    pub fn bodies(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        self.bodies.iter().copied()
    }

    /// Handle of the body at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.body_count()`.
    pub fn handle_at(&self, index: usize) -> BodyHandle {
        self.bodies[index]
    }

    /// Body at `index` in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.body_count()`.
    pub fn body_at(&self, index: usize) -> Result<hecs::Ref<'_, Body>, SceneError> {
        self.body(self.bodies[index])
    }

    pub fn contains_body(&self, handle: BodyHandle) -> bool {
        self.world.contains(handle.0)
    }

    pub fn body(&self, handle: BodyHandle) -> Result<hecs::Ref<'_, Body>, SceneError> {
        self.world
            .get::<&Body>(handle.0)
            .map_err(|_| SceneError::StaleBody(handle))
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut Body, SceneError> {
        self.world
            .query_one_mut::<&mut Body>(handle.0)
            .map_err(|_| SceneError::StaleBody(handle))
    }

    /// Flag the body at `index` removed. It stays in place until the next sweep.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.body_count()`.
    pub fn remove_body_at(&mut self, index: usize) {
        let handle = self.bodies[index];
        if let Ok(body) = self.body_mut(handle) {
            body.mark_removed();
        }
    }

    /// Flag `handle` removed. It stays in place until the next sweep.
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<(), SceneError> {
        self.body_mut(handle)?.mark_removed();
        Ok(())
    }

    /// Attach an extra component to a body's entity. Replaces any existing
    /// component of the same type.
    pub fn attach<C: hecs::Component>(
        &mut self,
        handle: BodyHandle,
        component: C,
    ) -> Result<(), SceneError> {
        self.world
            .insert_one(handle.0, component)
            .map_err(|_| SceneError::StaleBody(handle))
    }

    pub fn component<C: hecs::Component>(
        &self,
        handle: BodyHandle,
    ) -> Result<hecs::Ref<'_, C>, SceneError> {
        self.world.get::<&C>(handle.0).map_err(|err| match err {
            hecs::ComponentError::NoSuchEntity => SceneError::StaleBody(handle),
            hecs::ComponentError::MissingComponent(_) => SceneError::MissingComponent {
                handle,
                component: std::any::type_name::<C>(),
            },
        })
    }

    // ------------------------------------------------------------------
    // Force creators
    // ------------------------------------------------------------------

    /// Register a force creator. It is dropped when any of `dependencies`
    /// is swept, or on the next sweep if one is already gone.
    pub fn add_force_creator(
        &mut self,
        kind: ForceKind,
        dependencies: impl IntoIterator<Item = BodyHandle>,
    ) -> ForceHandle {
        let handle = ForceHandle(self.next_force_id);
        self.next_force_id += 1;
        let dependencies: Vec<BodyHandle> = dependencies.into_iter().collect();
        if let Some(stale) = dependencies.iter().find(|body| !self.world.contains(body.0)) {
            debug!("Force {:?} depends on swept body {:?}; dropped on next sweep", handle, stale);
        }
        self.forces.push(ForceEntry {
            handle,
            kind,
            dependencies,
        });
        handle
    }

    /// Remove a force creator. Returns `false` if it was already gone.
    pub fn remove_force(&mut self, handle: ForceHandle) -> bool {
        let before = self.forces.len();
        self.forces.retain(|entry| entry.handle != handle);
        self.forces.len() != before
    }

    pub fn force_count(&self) -> usize {
        self.forces.len()
    }

    pub fn contains_force(&self, handle: ForceHandle) -> bool {
        self.forces.iter().any(|entry| entry.handle == handle)
    }

    /// Registered force entries in registration order.
    pub fn forces(&self) -> impl Iterator<Item = &ForceEntry> + '_ {
        self.forces.iter()
    }

    // ------------------------------------------------------------------
    // Simulation
    // ------------------------------------------------------------------

    /// Advance the scene by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        {
            let mut bodies = Bodies::new(&mut self.world);
            for entry in &mut self.forces {
                entry.kind.apply(&mut bodies);
            }
        }

        for &handle in &self.bodies {
            if let Ok(body) = self.world.query_one_mut::<&mut Body>(handle.0) {
                if !body.is_removed() {
                    body.integrate(dt);
                }
            }
        }

        self.sweep();
        self.elapsed += dt;
        trace!("Tick dt={} bodies={} forces={}", dt, self.bodies.len(), self.forces.len());
    }

    /// Drop every body flagged removed along with the force entries bound to
    /// it. Entries bound to a body that is already gone are dropped too.
    /// Survivors keep their relative order. Returns the number of bodies
    /// dropped.
    ///
    /// [`Scene::tick`] sweeps on its own; call this directly only when moving
    /// bodies without ticking.
    pub fn sweep(&mut self) -> usize {
        let removed: HashSet<BodyHandle> = self
            .bodies
            .iter()
            .copied()
            .filter(|handle| {
                self.world
                    .get::<&Body>(handle.0)
                    .map_or(false, |body| body.is_removed())
            })
            .collect();

        if !removed.is_empty() {
            self.bodies.retain(|handle| !removed.contains(handle));
            for handle in &removed {
                // Handles in `bodies` are always live, so despawn cannot fail here.
                let _ = self.world.despawn(handle.0);
            }
        }

        let forces_before = self.forces.len();
        let world = &self.world;
        self.forces
            .retain(|entry| entry.dependencies.iter().all(|body| world.contains(body.0)));
        let forces_dropped = forces_before - self.forces.len();

        if !removed.is_empty() || forces_dropped > 0 {
            debug!(
                "Swept {} bodies and {} force entries",
                removed.len(),
                forces_dropped
            );
        }
        removed.len()
    }

    /// Step the simulation forward by `delta_time` seconds of wall-clock time.
    ///
    /// Uses a fixed timestep accumulator and calls [`Scene::tick`] once per
    /// substep. Returns the number of substeps run.
    pub fn step(&mut self, delta_time: f64) -> u32 {
        self.accumulator += delta_time;

        let mut substeps = 0u32;
        while self.accumulator >= self.config.fixed_timestep && substeps < self.config.max_substeps
        {
            self.tick(self.config.fixed_timestep);
            self.accumulator -= self.config.fixed_timestep;
            substeps += 1;
        }

        // Clamp accumulator to avoid spiral of death
        if self.accumulator > self.config.fixed_timestep * self.config.max_substeps as f64 {
            debug!("Dropping {:.4}s of accumulated time", self.accumulator);
            self.accumulator = 0.0;
        }
        substeps
    }

    /// Total simulated time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}
