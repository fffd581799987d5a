//! Convex polygon vertex lists stored in world space.

use thiserror::Error;

use super::vector::{cross, rotate, Vector2};

/// Errors from the checked polygon constructor.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("a polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("polygon has zero signed area")]
    ZeroArea,
}

/// An ordered vertex list describing a convex polygon boundary.
///
/// Vertices are world-space coordinates. Pose changes are applied to the
/// stored vertices directly; there is no separate model-space copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vector2>,
}

impl Polygon {
    /// Wrap a vertex list without validating it.
    ///
    /// The caller guarantees at least 3 vertices, nonzero area and convexity.
    /// Degenerate input makes [`centroid`](Self::centroid) meaningless.
    pub fn new(vertices: Vec<Vector2>) -> Self {
        debug_assert!(vertices.len() >= 3, "polygon needs at least 3 vertices");
        Self { vertices }
    }

    /// Wrap a vertex list, rejecting too-short or zero-area input.
    pub fn try_new(vertices: Vec<Vector2>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }
        let polygon = Self { vertices };
        if polygon.area() == 0.0 {
            return Err(GeometryError::ZeroArea);
        }
        Ok(polygon)
    }

    pub fn vertices(&self) -> &[Vector2] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over edges as `(start, end)` pairs, wrapping back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Signed area via the shoelace formula. Positive for counter-clockwise winding.
    pub fn area(&self) -> f64 {
        self.edges().map(|(a, b)| cross(a, b)).sum::<f64>() / 2.0
    }

    /// Area-weighted centroid. Undefined for zero-area polygons.
    pub fn centroid(&self) -> Vector2 {
        let sum = self
            .edges()
            .fold(Vector2::ZERO, |acc, (a, b)| acc + (a + b) * cross(a, b));
        sum / (6.0 * self.area())
    }

    /// Add `offset` to every vertex.
    pub fn translate(&mut self, offset: Vector2) {
        for vertex in &mut self.vertices {
            *vertex += offset;
        }
    }

    /// Rotate every vertex by `angle` radians about `point`.
    pub fn rotate_about(&mut self, angle: f64, point: Vector2) {
        for vertex in &mut self.vertices {
            *vertex = rotate(*vertex - point, angle) + point;
        }
    }

    /// Project every vertex onto `axis`, returning `(min, max)`.
    pub fn project(&self, axis: Vector2) -> (f64, f64) {
        self.vertices
            .iter()
            .map(|v| v.dot(axis))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), p| {
                (min.min(p), max.max(p))
            })
    }
}

impl From<Vec<Vector2>> for Polygon {
    fn from(vertices: Vec<Vector2>) -> Self {
        Self::new(vertices)
    }
}
