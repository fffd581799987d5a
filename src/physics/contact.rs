//! Contact data and collision response handlers.

use std::cell::Cell;
use std::rc::Rc;

use crate::ecs::components::physics::{BodyHandle, INFINITE_MASS};
use crate::geometry::Vector2;

use super::forces::Bodies;

/// Result of a successful overlap test between two shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    /// Unit separating axis of minimum overlap, pointing from shape A to shape B.
    pub axis: Vector2,
    /// Projection overlap along `axis` (penetration depth).
    pub overlap: f64,
}

/// Debounces continuous overlap into single "contact began" events.
///
/// Stays latched while the shapes keep overlapping and resets once they
/// separate, so the next overlap counts as a new contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactState {
    in_contact: bool,
}

impl ContactState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this tick's overlap result. Returns `true` only when contact begins.
    pub fn update(&mut self, collided: bool) -> bool {
        let began = collided && !self.in_contact;
        self.in_contact = collided;
        began
    }

    pub fn in_contact(&self) -> bool {
        self.in_contact
    }
}

/// Response run on the tick two bodies start touching.
///
/// Handlers may push forces or impulses and flag bodies removed through
/// `bodies`; they cannot add or remove scene members.
pub trait CollisionHandler {
    fn on_contact(&mut self, bodies: &mut Bodies<'_>, a: BodyHandle, b: BodyHandle, axis: Vector2);
}

impl<F> CollisionHandler for F
where
    F: FnMut(&mut Bodies<'_>, BodyHandle, BodyHandle, Vector2),
{
    fn on_contact(&mut self, bodies: &mut Bodies<'_>, a: BodyHandle, b: BodyHandle, axis: Vector2) {
        self(bodies, a, b, axis)
    }
}

/// Reduced mass `ma * mb / (ma + mb)`.
///
/// When one body is immovable the other body's mass is used. Two immovable
/// bodies have no meaningful reduced mass and yield `None`.
pub fn reduced_mass(mass_a: f64, mass_b: f64) -> Option<f64> {
    match (mass_a == INFINITE_MASS, mass_b == INFINITE_MASS) {
        (true, true) => None,
        (true, false) => Some(mass_b),
        (false, true) => Some(mass_a),
        (false, false) => Some(mass_a * mass_b / (mass_a + mass_b)),
    }
}

/// Elastic impulse along the contact axis.
///
/// With normal speeds `ua`, `ub`, the impulse `m* (1 + e) (ub - ua)` is added
/// to A along the axis and subtracted from B. `elasticity` 1.0 is perfectly
/// elastic, 0.0 perfectly inelastic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElasticImpulse {
    pub elasticity: f64,
}

impl CollisionHandler for ElasticImpulse {
    fn on_contact(&mut self, bodies: &mut Bodies<'_>, a: BodyHandle, b: BodyHandle, axis: Vector2) {
        let (Some((vel_a, mass_a)), Some((vel_b, mass_b))) = (
            bodies.get(a).map(|body| (body.velocity(), body.mass())),
            bodies.get(b).map(|body| (body.velocity(), body.mass())),
        ) else {
            return;
        };
        let Some(reduced) = reduced_mass(mass_a, mass_b) else {
            return;
        };

        let ua = vel_a.dot(axis);
        let ub = vel_b.dot(axis);
        let impulse = axis * (reduced * (1.0 + self.elasticity) * (ub - ua));

        bodies.add_impulse(a, impulse);
        bodies.add_impulse(b, -impulse);
    }
}

/// Removes both bodies on contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Destroy;

impl CollisionHandler for Destroy {
    fn on_contact(&mut self, bodies: &mut Bodies<'_>, a: BodyHandle, b: BodyHandle, _axis: Vector2) {
        bodies.mark_removed(a);
        bodies.mark_removed(b);
    }
}

/// Removes only the second body on contact; the first one absorbs it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absorb;

impl CollisionHandler for Absorb {
    fn on_contact(&mut self, bodies: &mut Bodies<'_>, _a: BodyHandle, b: BodyHandle, _axis: Vector2) {
        bodies.mark_removed(b);
    }
}

/// Removes the second body on contact and reports the hit to `on_hit(target, projectile)`.
pub struct Hit<F> {
    pub on_hit: F,
}

impl<F> CollisionHandler for Hit<F>
where
    F: FnMut(BodyHandle, BodyHandle),
{
    fn on_contact(&mut self, bodies: &mut Bodies<'_>, a: BodyHandle, b: BodyHandle, _axis: Vector2) {
        (self.on_hit)(a, b);
        bodies.mark_removed(b);
    }
}

/// Bounces the first body (a projectile) off the second and removes the
/// projectile once it has bounced more than `max_bounces` times.
///
/// `bounces` counts every contact of the projectile. Share one counter
/// between all of a projectile's ricochet entries so hits on different
/// walls add up.
#[derive(Debug, Clone)]
pub struct Ricochet {
    pub bounce: ElasticImpulse,
    pub max_bounces: u32,
    pub bounces: Rc<Cell<u32>>,
}

impl Ricochet {
    pub const DEFAULT_MAX_BOUNCES: u32 = 3;
}

impl CollisionHandler for Ricochet {
    fn on_contact(&mut self, bodies: &mut Bodies<'_>, a: BodyHandle, b: BodyHandle, axis: Vector2) {
        let bounces = self.bounces.get() + 1;
        self.bounces.set(bounces);
        if bounces > self.max_bounces {
            bodies.mark_removed(a);
        }
        self.bounce.on_contact(bodies, a, b, axis);
    }
}
