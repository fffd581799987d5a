//! Vector and polygon math shared by bodies and collision detection.

pub mod polygon;
pub mod vector;

pub use polygon::{GeometryError, Polygon};
pub use vector::Vector2;
