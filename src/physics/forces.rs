//! Force creators: per-tick interactions registered with a [`Scene`].
//!
//! Every entry is bound to the bodies it reads or writes. When any of those
//! bodies is swept, the scene drops the entry along with its state.
//!
//! Built-in kinds:
//!
//! - **Newtonian gravity**: `G ma mb / d^2` along the separation, with `d`
//!   clamped to a minimum distance
//! - **Spring**: `k (cb - ca)`, equilibrium where the centroids coincide
//! - **Drag**: `-gamma v`
//! - **Collision**: SAT test each tick, handler fired once per contact

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::ecs::components::physics::{Body, BodyHandle};
use crate::geometry::Vector2;

use super::collision::find_collision;
use super::contact::{
    Absorb, CollisionHandler, ContactState, Destroy, ElasticImpulse, Hit, Ricochet,
};
use super::Scene;

/// Identifies a registered force entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ForceHandle(pub(crate) u64);

/// Mutable view of the scene's bodies handed to force callbacks.
///
/// Lookups through a swept handle return `None`, and the mutating helpers
/// silently skip it.
pub struct Bodies<'w> {
    world: &'w mut hecs::World,
}

impl<'w> Bodies<'w> {
    pub(crate) fn new(world: &'w mut hecs::World) -> Self {
        Self { world }
    }

    pub fn get(&self, handle: BodyHandle) -> Option<hecs::Ref<'_, Body>> {
        self.world.get::<&Body>(handle.0).ok()
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.world.query_one_mut::<&mut Body>(handle.0).ok()
    }

    pub fn add_force(&mut self, handle: BodyHandle, force: Vector2) {
        if let Some(body) = self.get_mut(handle) {
            body.add_force(force);
        }
    }

    pub fn add_impulse(&mut self, handle: BodyHandle, impulse: Vector2) {
        if let Some(body) = self.get_mut(handle) {
            body.add_impulse(impulse);
        }
    }

    pub fn mark_removed(&mut self, handle: BodyHandle) {
        if let Some(body) = self.get_mut(handle) {
            body.mark_removed();
        }
    }

    fn centroid_and_mass(&self, handle: BodyHandle) -> Option<(Vector2, f64)> {
        self.get(handle).map(|body| (body.centroid(), body.mass()))
    }
}

/// Debounced collision dispatch between two bodies.
pub struct CollisionForce {
    pub a: BodyHandle,
    pub b: BodyHandle,
    contact: ContactState,
    handler: Box<dyn CollisionHandler>,
}

impl CollisionForce {
    pub fn new(a: BodyHandle, b: BodyHandle, handler: impl CollisionHandler + 'static) -> Self {
        Self {
            a,
            b,
            contact: ContactState::new(),
            handler: Box::new(handler),
        }
    }

    pub fn in_contact(&self) -> bool {
        self.contact.in_contact()
    }

    fn apply(&mut self, bodies: &mut Bodies<'_>) {
        let collision = {
            let (Some(a), Some(b)) = (bodies.get(self.a), bodies.get(self.b)) else {
                return;
            };
            find_collision(a.shape().vertices(), b.shape().vertices())
        };

        if self.contact.update(collision.is_some()) {
            if let Some(info) = collision {
                trace!("Contact began between {:?} and {:?}", self.a, self.b);
                self.handler.on_contact(bodies, self.a, self.b, info.axis);
            }
        }
    }
}

/// The closed set of force creator kinds, each owning its state.
pub enum ForceKind {
    NewtonianGravity {
        g: f64,
        min_distance: f64,
        a: BodyHandle,
        b: BodyHandle,
    },
    Spring {
        k: f64,
        a: BodyHandle,
        b: BodyHandle,
    },
    Drag {
        gamma: f64,
        body: BodyHandle,
    },
    Collision(CollisionForce),
    Custom(Box<dyn FnMut(&mut Bodies<'_>)>),
}

impl ForceKind {
    /// Bodies this kind reads or writes, for removal cascading.
    pub fn bodies(&self) -> Vec<BodyHandle> {
        match self {
            ForceKind::NewtonianGravity { a, b, .. } | ForceKind::Spring { a, b, .. } => {
                vec![*a, *b]
            }
            ForceKind::Drag { body, .. } => vec![*body],
            ForceKind::Collision(collision) => vec![collision.a, collision.b],
            ForceKind::Custom(_) => Vec::new(),
        }
    }

    pub(crate) fn apply(&mut self, bodies: &mut Bodies<'_>) {
        match self {
            ForceKind::NewtonianGravity {
                g,
                min_distance,
                a,
                b,
            } => {
                let (Some((pos_a, mass_a)), Some((pos_b, mass_b))) =
                    (bodies.centroid_and_mass(*a), bodies.centroid_and_mass(*b))
                else {
                    return;
                };
                let r = pos_b - pos_a;
                let distance = r.length().max(*min_distance);
                let magnitude = *g * mass_a * mass_b / (distance * distance);
                let force = r.normalize_or_zero() * magnitude;
                bodies.add_force(*a, force);
                bodies.add_force(*b, -force);
            }
            ForceKind::Spring { k, a, b } => {
                let (Some((pos_a, _)), Some((pos_b, _))) =
                    (bodies.centroid_and_mass(*a), bodies.centroid_and_mass(*b))
                else {
                    return;
                };
                let force = (pos_b - pos_a) * *k;
                bodies.add_force(*a, force);
                bodies.add_force(*b, -force);
            }
            ForceKind::Drag { gamma, body } => {
                let Some(velocity) = bodies.get(*body).map(|b| b.velocity()) else {
                    return;
                };
                bodies.add_force(*body, velocity * -*gamma);
            }
            ForceKind::Collision(collision) => collision.apply(bodies),
            ForceKind::Custom(callback) => callback(bodies),
        }
    }
}

impl fmt::Debug for ForceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForceKind::NewtonianGravity {
                g,
                min_distance,
                a,
                b,
            } => f
                .debug_struct("NewtonianGravity")
                .field("g", g)
                .field("min_distance", min_distance)
                .field("a", a)
                .field("b", b)
                .finish(),
            ForceKind::Spring { k, a, b } => f
                .debug_struct("Spring")
                .field("k", k)
                .field("a", a)
                .field("b", b)
                .finish(),
            ForceKind::Drag { gamma, body } => f
                .debug_struct("Drag")
                .field("gamma", gamma)
                .field("body", body)
                .finish(),
            ForceKind::Collision(collision) => f
                .debug_struct("Collision")
                .field("a", &collision.a)
                .field("b", &collision.b)
                .field("in_contact", &collision.in_contact())
                .finish(),
            ForceKind::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// A registered force creator and the bodies it depends on.
#[derive(Debug)]
pub struct ForceEntry {
    pub(crate) handle: ForceHandle,
    pub(crate) kind: ForceKind,
    pub(crate) dependencies: Vec<BodyHandle>,
}

impl ForceEntry {
    pub fn handle(&self) -> ForceHandle {
        self.handle
    }

    pub fn kind(&self) -> &ForceKind {
        &self.kind
    }

    pub fn dependencies(&self) -> &[BodyHandle] {
        &self.dependencies
    }

    pub fn depends_on(&self, body: BodyHandle) -> bool {
        self.dependencies.contains(&body)
    }
}

/// Newtonian gravity between `a` and `b` with constant `g`.
///
/// Separation below the scene's `gravity_min_distance` is clamped to it.
pub fn create_newtonian_gravity(
    scene: &mut Scene,
    g: f64,
    a: BodyHandle,
    b: BodyHandle,
) -> ForceHandle {
    let min_distance = scene.config().gravity_min_distance;
    scene.add_force_creator(
        ForceKind::NewtonianGravity {
            g,
            min_distance,
            a,
            b,
        },
        [a, b],
    )
}

/// Hooke spring with constant `k` pulling `a` and `b` toward each other.
pub fn create_spring(scene: &mut Scene, k: f64, a: BodyHandle, b: BodyHandle) -> ForceHandle {
    scene.add_force_creator(ForceKind::Spring { k, a, b }, [a, b])
}

/// Linear drag `-gamma v` on `body`.
pub fn create_drag(scene: &mut Scene, gamma: f64, body: BodyHandle) -> ForceHandle {
    scene.add_force_creator(ForceKind::Drag { gamma, body }, [body])
}

/// Call `handler` once each time `a` and `b` begin to overlap.
pub fn create_collision<F>(scene: &mut Scene, a: BodyHandle, b: BodyHandle, handler: F) -> ForceHandle
where
    F: FnMut(&mut Bodies<'_>, BodyHandle, BodyHandle, Vector2) + 'static,
{
    create_collision_handler(scene, a, b, handler)
}

/// Like [`create_collision`], for handlers implemented as types.
pub fn create_collision_handler(
    scene: &mut Scene,
    a: BodyHandle,
    b: BodyHandle,
    handler: impl CollisionHandler + 'static,
) -> ForceHandle {
    scene.add_force_creator(
        ForceKind::Collision(CollisionForce::new(a, b, handler)),
        [a, b],
    )
}

/// Bounce `a` and `b` off each other with the given elasticity.
pub fn create_physics_collision(
    scene: &mut Scene,
    elasticity: f64,
    a: BodyHandle,
    b: BodyHandle,
) -> ForceHandle {
    create_collision_handler(scene, a, b, ElasticImpulse { elasticity })
}

/// Remove both bodies when they touch.
pub fn create_destructive_collision(scene: &mut Scene, a: BodyHandle, b: BodyHandle) -> ForceHandle {
    create_collision_handler(scene, a, b, Destroy)
}

/// Remove `projectile` when it touches `target`; `target` is untouched.
pub fn create_absorbing_collision(
    scene: &mut Scene,
    target: BodyHandle,
    projectile: BodyHandle,
) -> ForceHandle {
    create_collision_handler(scene, target, projectile, Absorb)
}

/// Remove `projectile` when it touches `target` and call `on_hit(target, projectile)`.
pub fn create_hit_collision<F>(
    scene: &mut Scene,
    target: BodyHandle,
    projectile: BodyHandle,
    on_hit: F,
) -> ForceHandle
where
    F: FnMut(BodyHandle, BodyHandle) + 'static,
{
    create_collision_handler(scene, target, projectile, Hit { on_hit })
}

/// Bounce `projectile` off `wall`, removing it after more than `max_bounces`
/// contacts counted in `bounces`.
pub fn create_ricochet_collision(
    scene: &mut Scene,
    elasticity: f64,
    max_bounces: u32,
    bounces: Rc<Cell<u32>>,
    projectile: BodyHandle,
    wall: BodyHandle,
) -> ForceHandle {
    create_collision_handler(
        scene,
        projectile,
        wall,
        Ricochet {
            bounce: ElasticImpulse { elasticity },
            max_bounces,
            bounces,
        },
    )
}

/// Register an arbitrary per-tick callback bound to `dependencies`.
pub fn create_custom_force<F>(
    scene: &mut Scene,
    dependencies: impl IntoIterator<Item = BodyHandle>,
    callback: F,
) -> ForceHandle
where
    F: FnMut(&mut Bodies<'_>) + 'static,
{
    scene.add_force_creator(ForceKind::Custom(Box::new(callback)), dependencies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::physics::{Visual, INFINITE_MASS};
    use crate::geometry::Polygon;
    use crate::physics::SceneConfig;
    use std::cell::Cell;
    use std::rc::Rc;

    fn square(half: f64) -> Polygon {
        Polygon::new(vec![
            Vector2::new(-half, -half),
            Vector2::new(half, -half),
            Vector2::new(half, half),
            Vector2::new(-half, half),
        ])
    }

    fn body_at(mass: f64, position: Vector2) -> Body {
        let mut body = Body::new(square(1.0), mass, Visual::default());
        body.set_centroid(position);
        body
    }

    #[test]
    fn test_drag_decay() {
        let mut scene = Scene::default();
        let mut body = body_at(10.0, Vector2::ZERO);
        body.set_velocity(Vector2::new(5.0, 0.0));
        let handle = scene.add_body(body);
        create_drag(&mut scene, 2.0, handle);

        let mut last_speed = 5.0;
        for _ in 0..10_000 {
            scene.tick(1e-3);
            let speed = scene.body(handle).unwrap().velocity().length();
            assert!(speed < last_speed, "speed must decrease monotonically");
            last_speed = speed;
        }
        assert!(last_speed < 2.5, "speed should halve, got {}", last_speed);
    }

    #[test]
    fn test_spring_equilibrium() {
        let mut scene = Scene::default();
        let mass = scene.add_body(body_at(10.0, Vector2::ZERO));
        let anchor = scene.add_body(body_at(INFINITE_MASS, Vector2::ZERO));
        create_spring(&mut scene, 2.0, mass, anchor);

        for _ in 0..10_000 {
            assert!(scene.body(mass).unwrap().centroid().abs_diff_eq(Vector2::ZERO, 1e-7));
            assert!(scene.body(anchor).unwrap().centroid().abs_diff_eq(Vector2::ZERO, 1e-7));
            scene.tick(1e-5);
        }
    }

    #[test]
    fn test_spring_pulls_toward_anchor() {
        let mut scene = Scene::default();
        let mass = scene.add_body(body_at(1.0, Vector2::new(10.0, 0.0)));
        let anchor = scene.add_body(body_at(INFINITE_MASS, Vector2::ZERO));
        create_spring(&mut scene, 1.0, mass, anchor);

        scene.tick(0.01);
        let velocity = scene.body(mass).unwrap().velocity();
        assert!(velocity.x < 0.0);
        assert_eq!(scene.body(anchor).unwrap().velocity(), Vector2::ZERO);
    }

    #[test]
    fn test_newtonian_gravity_orbit() {
        const M1: f64 = 1e8;
        const M2: f64 = 1e-6;
        const G: f64 = 1e3;
        const RADIUS: f64 = 50.0;

        let mut scene = Scene::default();
        let sun = scene.add_body(body_at(M1, Vector2::ZERO));
        let mut planet = body_at(M2, Vector2::new(RADIUS, 0.0));
        planet.set_velocity(Vector2::new(0.0, (G * M1 / RADIUS).sqrt()));
        let planet = scene.add_body(planet);
        create_newtonian_gravity(&mut scene, G, sun, planet);

        for _ in 0..10_000 {
            scene.tick(1e-6);
        }

        let distance = (scene.body(planet).unwrap().centroid()
            - scene.body(sun).unwrap().centroid())
        .length();
        assert!(
            (distance - RADIUS).abs() < 1.0,
            "orbit drifted to distance {}",
            distance
        );
    }

    #[test]
    fn test_gravity_clamps_min_distance() {
        let config = SceneConfig {
            gravity_min_distance: 5.0,
            ..SceneConfig::default()
        };
        let mut scene = Scene::new(config);
        let a = scene.add_body(body_at(1.0, Vector2::ZERO));
        let b = scene.add_body(body_at(1.0, Vector2::new(1.0, 0.0)));
        create_newtonian_gravity(&mut scene, 25.0, a, b);

        // F = 25 * 1 * 1 / 5^2 = 1, so a picks up v = dt * F / m.
        scene.tick(1.0);
        let velocity = scene.body(a).unwrap().velocity();
        assert!(velocity.abs_diff_eq(Vector2::new(1.0, 0.0), 1e-12));
        let velocity = scene.body(b).unwrap().velocity();
        assert!(velocity.abs_diff_eq(Vector2::new(-1.0, 0.0), 1e-12));
    }

    #[test]
    fn test_gravity_coincident_bodies_no_force() {
        let mut scene = Scene::default();
        let a = scene.add_body(body_at(1.0, Vector2::ZERO));
        let b = scene.add_body(body_at(1.0, Vector2::ZERO));
        create_newtonian_gravity(&mut scene, 1.0, a, b);

        scene.tick(0.1);
        assert_eq!(scene.body(a).unwrap().velocity(), Vector2::ZERO);
    }

    #[test]
    fn test_collision_debounce() {
        let mut scene = Scene::default();
        let a = scene.add_body(body_at(1.0, Vector2::ZERO));
        let b = scene.add_body(body_at(1.0, Vector2::new(1.5, 0.0)));

        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        create_collision(
            &mut scene,
            a,
            b,
            move |_: &mut Bodies<'_>, _: BodyHandle, _: BodyHandle, _: Vector2| {
                counter.set(counter.get() + 1);
            },
        );

        for _ in 0..10 {
            scene.tick(0.01);
        }
        assert_eq!(hits.get(), 1, "held contact fires once");

        scene.body_mut(b).unwrap().set_centroid(Vector2::new(10.0, 0.0));
        scene.tick(0.01);
        assert_eq!(hits.get(), 1);

        scene.body_mut(b).unwrap().set_centroid(Vector2::new(1.5, 0.0));
        for _ in 0..5 {
            scene.tick(0.01);
        }
        assert_eq!(hits.get(), 2, "new contact episode fires again");
    }

    #[test]
    fn test_elastic_equal_mass_swap() {
        let mut scene = Scene::default();
        let mut left = body_at(3.0, Vector2::new(-0.9, 0.0));
        left.set_velocity(Vector2::new(2.0, 0.5));
        let mut right = body_at(3.0, Vector2::new(0.9, 0.0));
        right.set_velocity(Vector2::new(-1.0, 0.0));
        let left = scene.add_body(left);
        let right = scene.add_body(right);
        create_physics_collision(&mut scene, 1.0, left, right);

        scene.tick(1e-3);

        let v_left = scene.body(left).unwrap().velocity();
        let v_right = scene.body(right).unwrap().velocity();
        assert!((v_left.x + 1.0).abs() < 1e-9, "left vx = {}", v_left.x);
        assert!((v_right.x - 2.0).abs() < 1e-9, "right vx = {}", v_right.x);
        // Tangential components are untouched.
        assert!((v_left.y - 0.5).abs() < 1e-12);
        assert!(v_right.y.abs() < 1e-12);
    }

    #[test]
    fn test_elastic_against_wall() {
        let mut scene = Scene::default();
        let wall = scene.add_body(body_at(INFINITE_MASS, Vector2::new(1.9, 0.0)));
        let mut ball = body_at(2.0, Vector2::ZERO);
        ball.set_velocity(Vector2::new(4.0, 0.0));
        let ball = scene.add_body(ball);
        create_physics_collision(&mut scene, 0.5, ball, wall);

        scene.tick(1e-3);

        let v_ball = scene.body(ball).unwrap().velocity();
        assert!((v_ball.x + 2.0).abs() < 1e-9, "ball vx = {}", v_ball.x);
        assert_eq!(scene.body(wall).unwrap().velocity(), Vector2::ZERO);
    }

    #[test]
    fn test_elastic_two_walls_no_impulse() {
        let mut scene = Scene::default();
        let a = scene.add_body(body_at(INFINITE_MASS, Vector2::ZERO));
        let b = scene.add_body(body_at(INFINITE_MASS, Vector2::new(1.0, 0.0)));
        create_physics_collision(&mut scene, 1.0, a, b);

        scene.tick(0.1);
        let velocity = scene.body(a).unwrap().velocity();
        assert!(velocity.x.is_finite() && velocity.y.is_finite());
        assert_eq!(velocity, Vector2::ZERO);
    }

    #[test]
    fn test_destructive_collision_removes_both() {
        let mut scene = Scene::default();
        let a = scene.add_body(body_at(1.0, Vector2::ZERO));
        let b = scene.add_body(body_at(1.0, Vector2::new(1.0, 0.0)));
        let c = scene.add_body(body_at(1.0, Vector2::new(50.0, 0.0)));
        create_destructive_collision(&mut scene, a, b);

        scene.tick(0.01);

        assert!(scene.body(a).is_err());
        assert!(scene.body(b).is_err());
        assert!(scene.body(c).is_ok());
        assert_eq!(scene.body_count(), 1);
        assert_eq!(scene.force_count(), 0);
    }

    #[test]
    fn test_absorbing_collision_keeps_target() {
        let mut scene = Scene::default();
        let target = scene.add_body(body_at(INFINITE_MASS, Vector2::ZERO));
        let bullet = scene.add_body(body_at(1.0, Vector2::new(1.0, 0.0)));
        create_absorbing_collision(&mut scene, target, bullet);

        scene.tick(0.01);

        assert!(scene.body(target).is_ok());
        assert!(scene.body(bullet).is_err());
        assert_eq!(scene.force_count(), 0);
    }

    #[test]
    fn test_hit_collision_reports_and_removes_projectile() {
        let mut scene = Scene::default();
        let tank = scene.add_body(body_at(INFINITE_MASS, Vector2::ZERO));
        let shell = scene.add_body(body_at(1.0, Vector2::new(1.5, 0.0)));

        let health = Rc::new(Cell::new(3u32));
        let hits = Rc::clone(&health);
        create_hit_collision(&mut scene, tank, shell, move |target: BodyHandle, _: BodyHandle| {
            assert_eq!(target, tank);
            hits.set(hits.get() - 1);
        });

        scene.tick(0.01);
        assert_eq!(health.get(), 2);
        assert!(scene.body(tank).is_ok());
        assert!(scene.body(shell).is_err());
        assert_eq!(scene.force_count(), 0);
    }

    #[test]
    fn test_ricochet_removes_after_max_bounces() {
        let mut scene = Scene::default();
        let wall = scene.add_body(body_at(INFINITE_MASS, Vector2::new(1.9, 0.0)));
        let mut bullet = body_at(1.0, Vector2::ZERO);
        bullet.set_velocity(Vector2::new(1.0, 0.0));
        let bullet = scene.add_body(bullet);

        let bounces = Rc::new(Cell::new(0));
        create_ricochet_collision(&mut scene, 1.0, 2, Rc::clone(&bounces), bullet, wall);

        for episode in 1..=2 {
            scene.tick(1e-3);
            assert_eq!(bounces.get(), episode);
            let velocity = scene.body(bullet).unwrap().velocity();
            assert!(velocity.x < 0.0, "bullet bounced back, vx = {}", velocity.x);

            // Separate, then send it back into the wall for a new contact.
            let body = scene.body_mut(bullet).unwrap();
            body.set_centroid(Vector2::new(-10.0, 0.0));
            body.set_velocity(Vector2::ZERO);
            scene.tick(1e-3);
            let body = scene.body_mut(bullet).unwrap();
            body.set_centroid(Vector2::ZERO);
            body.set_velocity(Vector2::new(1.0, 0.0));
        }

        scene.tick(1e-3);
        assert_eq!(bounces.get(), 3);
        assert!(scene.body(bullet).is_err());
        assert!(scene.body(wall).is_ok());
    }

    #[test]
    fn test_ricochet_counter_shared_between_walls() {
        let mut scene = Scene::default();
        let left = scene.add_body(body_at(INFINITE_MASS, Vector2::new(-1.9, 0.0)));
        let right = scene.add_body(body_at(INFINITE_MASS, Vector2::new(1.9, 0.0)));
        let bullet = scene.add_body(body_at(1.0, Vector2::ZERO));

        let bounces = Rc::new(Cell::new(0));
        create_ricochet_collision(&mut scene, 1.0, 1, Rc::clone(&bounces), bullet, left);
        create_ricochet_collision(&mut scene, 1.0, 1, Rc::clone(&bounces), bullet, right);

        // Touches both walls at once: two bounces against a limit of one.
        scene.tick(1e-3);
        assert_eq!(bounces.get(), 2);
        assert!(scene.body(bullet).is_err());
        assert_eq!(scene.force_count(), 0);
    }

    #[test]
    fn test_custom_force() {
        let mut scene = Scene::default();
        let body = scene.add_body(body_at(2.0, Vector2::ZERO));
        create_custom_force(&mut scene, [body], move |bodies: &mut Bodies<'_>| {
            bodies.add_force(body, Vector2::new(0.0, -20.0));
        });

        scene.tick(0.1);
        let velocity = scene.body(body).unwrap().velocity();
        assert!(velocity.abs_diff_eq(Vector2::new(0.0, -1.0), 1e-12));
    }

    #[test]
    fn test_force_kind_bodies() {
        let mut scene = Scene::default();
        let a = scene.add_body(body_at(1.0, Vector2::ZERO));
        let b = scene.add_body(body_at(1.0, Vector2::new(5.0, 0.0)));

        let kind = ForceKind::Spring { k: 1.0, a, b };
        assert_eq!(kind.bodies(), vec![a, b]);
        assert!(format!("{:?}", ForceKind::Drag { gamma: 1.0, body: a }).starts_with("Drag"));
        assert!(ForceKind::Custom(Box::new(|_: &mut Bodies<'_>| {})).bodies().is_empty());
    }
}
