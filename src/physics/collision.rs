//! Separating-axis collision detection for convex polygons.

use crate::geometry::vector::perpendicular;
use crate::geometry::Vector2;

use super::contact::CollisionInfo;

/// Project `vertices` onto `axis`, returning `(min, max)`.
fn project(vertices: &[Vector2], axis: Vector2) -> (f64, f64) {
    vertices
        .iter()
        .map(|v| v.dot(axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), p| {
            (min.min(p), max.max(p))
        })
}

/// Candidate axes: the unit edge normals of `a`, then those of `b` negated so
/// every axis points from `a` toward `b`.
fn candidate_axes<'a>(
    a: &'a [Vector2],
    b: &'a [Vector2],
) -> impl Iterator<Item = Vector2> + 'a {
    let normals = |shape: &'a [Vector2]| {
        let n = shape.len();
        (0..n).map(move |i| perpendicular(shape[(i + 1) % n] - shape[i]).normalize())
    };
    normals(a).chain(normals(b).map(|axis| -axis))
}

/// Test two convex polygons for overlap with the separating axis theorem.
///
/// Returns `None` as soon as any edge normal separates the projections.
/// Otherwise returns the axis of minimum projection overlap, which is the
/// minimum translation direction, oriented from `a` toward `b`. Touching
/// shapes (zero overlap) count as colliding. Both inputs must be convex; concave input
/// gives a meaningless but harmless answer.
pub fn find_collision(a: &[Vector2], b: &[Vector2]) -> Option<CollisionInfo> {
    let mut best: Option<CollisionInfo> = None;

    for axis in candidate_axes(a, b) {
        let (min_a, max_a) = project(a, axis);
        let (min_b, max_b) = project(b, axis);
        let overlap = max_a.min(max_b) - min_a.max(min_b);

        if overlap < 0.0 {
            return None;
        }
        if best.map_or(true, |info| overlap < info.overlap) {
            best = Some(CollisionInfo { axis, overlap });
        }
    }

    // Edge normals only point outward for one winding; make the axis point from a to b.
    best.map(|mut info| {
        if info.axis.dot(vertex_mean(b) - vertex_mean(a)) < 0.0 {
            info.axis = -info.axis;
        }
        info
    })
}

fn vertex_mean(vertices: &[Vector2]) -> Vector2 {
    vertices.iter().copied().sum::<Vector2>() / vertices.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn tri(points: [(f64, f64); 3]) -> Vec<Vector2> {
        points.iter().map(|&(x, y)| Vector2::new(x, y)).collect()
    }

    fn triangle1() -> Vec<Vector2> {
        tri([(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)])
    }

    fn square(half: f64, center: Vector2) -> Vec<Vector2> {
        [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]
            .iter()
            .map(|&(x, y)| center + Vector2::new(x, y) * half)
            .collect()
    }

    #[test]
    fn test_disjoint_triangles() {
        let triangle2 = tri([(1.0, 1.0), (0.1, 1.0), (1.0, 0.1)]);
        assert!(find_collision(&triangle1(), &triangle2).is_none());
    }

    #[test]
    fn test_overlapping_triangles_axis() {
        let triangle3 = tri([(0.4, 0.4), (0.4, 1.4), (1.4, 0.4)]);
        let info = find_collision(&triangle1(), &triangle3).expect("triangles overlap");

        let expected = Vector2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2);
        assert!(
            info.axis.abs_diff_eq(expected, 1e-9),
            "unexpected axis {:?}",
            info.axis
        );
        assert!(info.overlap > 0.0);
    }

    #[test]
    fn test_axis_points_from_a_to_b() {
        let a = square(1.0, Vector2::ZERO);
        let b = square(1.0, Vector2::new(1.5, 0.0));

        let info = find_collision(&a, &b).expect("squares overlap");
        assert!(info.axis.abs_diff_eq(Vector2::X, 1e-12));
        assert!((info.overlap - 0.5).abs() < 1e-12);

        let info = find_collision(&b, &a).expect("squares overlap");
        assert!(info.axis.abs_diff_eq(-Vector2::X, 1e-12));
    }

    #[test]
    fn test_minimum_overlap_axis() {
        let a = square(1.0, Vector2::ZERO);
        let b = square(1.0, Vector2::new(0.5, 1.8));

        let info = find_collision(&a, &b).expect("squares overlap");
        assert!(info.axis.abs_diff_eq(Vector2::Y, 1e-12));
        assert!((info.overlap - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_touching_edges_count_as_contact() {
        let a = square(1.0, Vector2::ZERO);
        let b = square(1.0, Vector2::new(2.0, 0.0));
        let info = find_collision(&a, &b).expect("shared edge is zero overlap");
        assert!(info.overlap.abs() < 1e-12);
    }

    #[test]
    fn test_separated_squares() {
        let a = square(1.0, Vector2::ZERO);
        let b = square(1.0, Vector2::new(0.0, 2.5));
        assert!(find_collision(&a, &b).is_none());
    }
}
