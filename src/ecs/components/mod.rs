//! ECS components (physics bodies).

pub mod physics;

pub use physics::*;
