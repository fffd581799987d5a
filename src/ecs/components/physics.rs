//! Physics components for ECS entities.

use crate::geometry::{Polygon, Vector2};
use crate::physics::contact::CollisionInfo;

/// Mass sentinel for immovable bodies (walls, anchors).
///
/// Forces and impulses are divided by the mass during integration, and any
/// finite vector divided by infinity is exactly zero.
pub const INFINITE_MASS: f64 = f64::INFINITY;

/// Generation-checked reference to a body owned by a [`Scene`](crate::physics::Scene).
///
/// Once the scene sweeps the body, every lookup through the handle fails
/// instead of reaching another body that reused the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) hecs::Entity);

impl BodyHandle {
    /// The underlying hecs entity, for attaching extra components.
    pub fn entity(self) -> hecs::Entity {
        self.0
    }
}

/// Image drawn in place of the polygon. Stored for the presentation layer only.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub name: String,
    pub scale: f64,
    pub rotation: f64,
    pub offset: Vector2,
}

impl Sprite {
    pub fn new(name: impl Into<String>, scale: f64) -> Self {
        Self {
            name: name.into(),
            scale,
            rotation: 0.0,
            offset: Vector2::ZERO,
        }
    }
}

/// Display attributes. The kernel stores these but never reads them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Visual {
    /// Color (RGB).
    pub color: [f32; 3],
    pub sprite: Option<Sprite>,
}

impl From<[f32; 3]> for Visual {
    fn from(color: [f32; 3]) -> Self {
        Self {
            color,
            sprite: None,
        }
    }
}

/// A rigid polygonal body.
///
/// `shape` always reflects the current pose: translation and rotation are
/// applied to the stored vertices as the body moves.
#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) shape: Polygon,
    pub(crate) mass: f64,
    pub(crate) centroid: Vector2,
    pub(crate) velocity: Vector2,
    pub(crate) angle: f64,
    /// Constant unless set directly; torque is not modeled.
    pub(crate) angular_velocity: f64,
    pub(crate) force_accumulator: Vector2,
    pub(crate) impulse_accumulator: Vector2,
    pub(crate) removed: bool,
    tag: Option<String>,
    visual: Visual,
}

impl Body {
    /// Create a body at rest whose centroid is the polygon centroid of `shape`.
    ///
    /// `mass` must be positive, or [`INFINITE_MASS`].
    pub fn new(shape: Polygon, mass: f64, visual: impl Into<Visual>) -> Self {
        debug_assert!(mass > 0.0, "body mass must be positive");
        let centroid = shape.centroid();
        Self {
            shape,
            mass,
            centroid,
            velocity: Vector2::ZERO,
            angle: 0.0,
            angular_velocity: 0.0,
            force_accumulator: Vector2::ZERO,
            impulse_accumulator: Vector2::ZERO,
            removed: false,
            tag: None,
            visual: visual.into(),
        }
    }

    /// Attach a caller-defined kind tag. The kernel ignores it.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn shape(&self) -> &Polygon {
        &self.shape
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn has_infinite_mass(&self) -> bool {
        self.mass == INFINITE_MASS
    }

    pub fn centroid(&self) -> Vector2 {
        self.centroid
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn rotation(&self) -> f64 {
        self.angle
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    pub fn net_force(&self) -> Vector2 {
        self.force_accumulator
    }

    pub fn net_impulse(&self) -> Vector2 {
        self.impulse_accumulator
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn visual(&self) -> &Visual {
        &self.visual
    }

    pub fn visual_mut(&mut self) -> &mut Visual {
        &mut self.visual
    }

    /// Move the body so its centroid lands on `position`, dragging the shape along.
    pub fn set_centroid(&mut self, position: Vector2) {
        self.shape.translate(position - self.centroid);
        self.centroid = position;
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Set the absolute rotation angle, rotating the shape about the centroid
    /// by the difference from the current angle.
    pub fn set_rotation(&mut self, angle: f64) {
        self.shape.rotate_about(angle - self.angle, self.centroid);
        self.angle = angle;
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: f64) {
        self.angular_velocity = angular_velocity;
    }

    /// Accumulate a force for the next integration step.
    pub fn add_force(&mut self, force: Vector2) {
        self.force_accumulator += force;
    }

    /// Accumulate an instantaneous impulse for the next integration step.
    pub fn add_impulse(&mut self, impulse: Vector2) {
        self.impulse_accumulator += impulse;
    }

    /// Flag the body for removal. The scene drops it on its next sweep.
    pub fn mark_removed(&mut self) {
        self.removed = true;
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Run the separating-axis test between this body's shape and `other`'s.
    pub fn collides_with(&self, other: &Body) -> Option<CollisionInfo> {
        crate::physics::collision::find_collision(
            self.shape.vertices(),
            other.shape.vertices(),
        )
    }
}
