//! Entity Component System integration with hecs.
//!
//! Bodies live as [`Body`](components::Body) components inside the scene's
//! `hecs::World`. The entity generation is what makes a
//! [`BodyHandle`](components::BodyHandle) fail cleanly after its body is swept.

pub mod components;

pub mod prelude {
    pub use super::components::*;
}
