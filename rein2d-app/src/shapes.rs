//! Polygon builders for the demo scenes. All shapes are centred on the origin.

use std::f64::consts::TAU;

use rein2d::{Polygon, Vector2};

const CIRCLE_SIDES: usize = 50;
const PACMAN_MOUTH: f64 = 1.0;

/// Axis-aligned rectangle of the given full size.
pub fn rectangle(size: Vector2) -> Polygon {
    let half = size * 0.5;
    Polygon::new(vec![
        Vector2::new(-half.x, -half.y),
        Vector2::new(half.x, -half.y),
        Vector2::new(half.x, half.y),
        Vector2::new(-half.x, half.y),
    ])
}

pub fn circle(radius: f64) -> Polygon {
    Polygon::new(
        (0..CIRCLE_SIDES)
            .map(|i| Vector2::from_angle(i as f64 / CIRCLE_SIDES as f64 * TAU) * radius)
            .collect(),
    )
}

/// Star with `points` tips alternating between the two radii. Not convex.
pub fn star(points: usize, outer_radius: f64, inner_radius: f64) -> Polygon {
    let count = points * 2;
    Polygon::new(
        (0..count)
            .map(|i| {
                let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
                Vector2::from_angle(i as f64 / count as f64 * TAU) * radius
            })
            .collect(),
    )
}

/// Circle with a wedge cut out, mouth facing +X.
pub fn pacman(radius: f64) -> Polygon {
    let arc = CIRCLE_SIDES - 1;
    let mut vertices: Vec<Vector2> = (0..arc)
        .map(|i| {
            let angle = i as f64 / arc as f64 * (TAU - PACMAN_MOUTH) + PACMAN_MOUTH / 2.0;
            Vector2::from_angle(angle) * radius
        })
        .collect();
    vertices.push(Vector2::ZERO);
    Polygon::new(vertices)
}
