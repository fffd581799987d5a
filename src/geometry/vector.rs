//! 2D vector math.
//!
//! [`Vector2`] is glam's `DVec2`; arithmetic, `dot`, `perp`, `length` and
//! `normalize` come from glam. The helpers here cover the operations that
//! glam spells differently.

use glam::DVec2;

/// Double-precision 2D vector used for every position, velocity and force.
pub type Vector2 = DVec2;

/// Rotate `v` counter-clockwise by `angle` radians.
#[inline]
pub fn rotate(v: Vector2, angle: f64) -> Vector2 {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Scalar 2D cross product (the determinant of `[a b]`).
#[inline]
pub fn cross(a: Vector2, b: Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Divide each component of `v` by `scalar`.
///
/// Dividing a finite vector by [`INFINITE_MASS`](crate::ecs::components::physics::INFINITE_MASS)
/// yields exactly zero, which is what keeps immovable bodies still.
#[inline]
pub fn divide(scalar: f64, v: Vector2) -> Vector2 {
    Vector2::new(v.x / scalar, v.y / scalar)
}

/// Perpendicular vector `(-y, x)`.
#[inline]
pub fn perpendicular(v: Vector2) -> Vector2 {
    v.perp()
}
