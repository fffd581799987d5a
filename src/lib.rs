//! Rein 2D
//!
//! A 2D rigid-body simulation kernel: convex polygon bodies, force creators,
//! and separating-axis collision detection, built on hecs and glam.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **geometry** - `Vector2` helpers and convex polygons
//! 2. **ecs** - hecs components (`Body`, `BodyHandle`, display attributes)
//! 3. **physics** - Integration, SAT collision, force creators, and the `Scene`
//!
//! # Example
//!
//! ```
//! use rein2d::physics::forces::create_drag;
//! use rein2d::{Body, Polygon, Scene, Vector2};
//!
//! let square = Polygon::new(vec![
//!     Vector2::new(0.0, 0.0),
//!     Vector2::new(1.0, 0.0),
//!     Vector2::new(1.0, 1.0),
//!     Vector2::new(0.0, 1.0),
//! ]);
//! let mut body = Body::new(square, 1.0, [1.0, 0.0, 0.0]);
//! body.set_velocity(Vector2::new(2.0, 0.0));
//!
//! let mut scene = Scene::default();
//! let handle = scene.add_body(body);
//! create_drag(&mut scene, 0.5, handle);
//!
//! scene.tick(1.0 / 60.0);
//! assert!(scene.body(handle).unwrap().velocity().x < 2.0);
//! ```

pub mod ecs;
pub mod geometry;
pub mod physics;

// Re-export commonly used types
pub use ecs::prelude::*;

pub use geometry::{GeometryError, Polygon, Vector2};

pub use physics::contact::{CollisionHandler, CollisionInfo};
pub use physics::forces::{Bodies, ForceHandle, ForceKind};
pub use physics::{Scene, SceneConfig, SceneError};

pub use glam;
pub use hecs;
