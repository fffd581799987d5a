//! Rigid body integration.

use crate::ecs::components::physics::Body;
use crate::geometry::vector::divide;
use crate::geometry::Vector2;

impl Body {
    /// Advance the body by `dt` seconds and clear both accumulators.
    ///
    /// Velocity takes the accumulated force and impulse:
    /// `v' = v + dt * F/m + J/m`. The displacement uses the average of the old
    /// and new velocity, `dx = dt * (v + v') / 2`, rather than `dt * v'`.
    /// Demo tuning depends on this exact step.
    ///
    /// Angular velocity is constant; the shape turns by `dt * omega` about the
    /// updated centroid.
    pub fn integrate(&mut self, dt: f64) {
        let acceleration = divide(self.mass, self.force_accumulator);
        let new_velocity =
            self.velocity + acceleration * dt + divide(self.mass, self.impulse_accumulator);
        let displacement = (new_velocity + self.velocity) * (0.5 * dt);

        self.shape.translate(displacement);
        self.centroid += displacement;
        self.velocity = new_velocity;
        self.force_accumulator = Vector2::ZERO;
        self.impulse_accumulator = Vector2::ZERO;

        let d_theta = dt * self.angular_velocity;
        self.angle += d_theta;
        self.shape.rotate_about(d_theta, self.centroid);
    }

    /// Integrate, then bounce off the walls of the box `[0, bounds.x] x [0, bounds.y]`.
    ///
    /// When any vertex ends up outside the box, the matching velocity
    /// component is reflected and scaled by `restitution`, and the body is
    /// moved by `dt` times the reflected velocity so it leaves the wall.
    /// Returns `true` if a wall was hit.
    pub fn integrate_with_bounds(&mut self, dt: f64, bounds: Vector2, restitution: f64) -> bool {
        self.integrate(dt);

        let mut horizontal_hit = false;
        let mut vertical_hit = false;
        for vertex in self.shape.vertices() {
            if vertex.x < 0.0 || vertex.x > bounds.x {
                horizontal_hit = true;
            }
            if vertex.y < 0.0 || vertex.y > bounds.y {
                vertical_hit = true;
            }
        }

        if vertical_hit {
            self.velocity.y *= -restitution;
        }
        if horizontal_hit {
            self.velocity.x *= -restitution;
        }
        if !(horizontal_hit || vertical_hit) {
            return false;
        }

        let correction = self.velocity * dt;
        self.centroid += correction;
        self.shape.translate(correction);
        true
    }
}
