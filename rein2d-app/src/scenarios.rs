//! Headless versions of the bounce, damping and n-bodies demos.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::Rng;
use rein2d::physics::forces::{create_drag, create_newtonian_gravity, create_spring};
use rein2d::{Body, BodyHandle, Scene, Vector2, INFINITE_MASS};

use crate::shapes;

pub const SCREEN_SIZE: Vector2 = Vector2::new(1000.0, 500.0);

/// A scene driven one frame at a time.
pub trait Demo {
    fn update(&mut self, dt: f64, rng: &mut StdRng) -> Result<()>;

    fn scene(&self) -> &Scene;

    /// Extra status for the periodic report.
    fn status(&self) -> String {
        String::new()
    }
}

pub fn random_color(rng: &mut StdRng) -> [f32; 3] {
    [rng.random(), rng.random(), rng.random()]
}

/// Total kinetic energy of the movable bodies.
pub fn kinetic_energy(scene: &Scene) -> f64 {
    scene
        .bodies()
        .filter_map(|handle| scene.body(handle).ok())
        .filter(|body| !body.has_infinite_mass())
        .map(|body| 0.5 * body.mass() * body.velocity().length_squared())
        .sum()
}

// ---------------------------------------------------------------------------
// Bounce
// ---------------------------------------------------------------------------

const STAR_POINTS: usize = 5;
const STAR_OUTER_RADIUS: f64 = 50.0;
const STAR_INNER_RADIUS: f64 = 20.0;
const STAR_VELOCITY: Vector2 = Vector2::new(200.0, 150.0);
const STAR_ANGULAR_VELOCITY: f64 = 1.5;
const STAR_BOUNCINESS: f64 = 1.0;

/// One spinning star bouncing off the screen edges. Moves the body directly
/// with the bounded integrator instead of ticking the scene.
pub struct Bounce {
    scene: Scene,
    star: BodyHandle,
    wall_hits: usize,
}

impl Bounce {
    pub fn new(rng: &mut StdRng) -> Self {
        let mut scene = Scene::default();
        let mut star = Body::new(
            shapes::star(STAR_POINTS, STAR_OUTER_RADIUS, STAR_INNER_RADIUS),
            1.0,
            random_color(rng),
        );
        star.set_velocity(STAR_VELOCITY);
        star.set_angular_velocity(STAR_ANGULAR_VELOCITY);
        star.set_centroid(SCREEN_SIZE * 0.5);
        let star = scene.add_body(star);

        Self {
            scene,
            star,
            wall_hits: 0,
        }
    }
}

impl Demo for Bounce {
    fn update(&mut self, dt: f64, rng: &mut StdRng) -> Result<()> {
        let star = self.scene.body_mut(self.star)?;
        if star.integrate_with_bounds(dt, SCREEN_SIZE, STAR_BOUNCINESS) {
            star.visual_mut().color = random_color(rng);
            self.wall_hits += 1;
        }
        Ok(())
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn status(&self) -> String {
        let star = self.scene.body(self.star).map(|body| body.centroid());
        match star {
            Ok(position) => format!("star at {:.1?}, {} wall hits", position, self.wall_hits),
            Err(err) => err.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Damping
// ---------------------------------------------------------------------------

const NUM_BALLS: usize = 200;
const BALL_IMPULSE: Vector2 = Vector2::new(0.0, 100.0);
const SPRING_CONST_MAX: f64 = 5.0;
const DRAG_MAX: f64 = 0.1;

/// A row of balls on springs, stiffer on the left and more damped on the right.
pub struct Damping {
    scene: Scene,
}

impl Damping {
    pub fn new(rng: &mut StdRng) -> Self {
        let mut scene = Scene::default();
        let radius = SCREEN_SIZE.x / NUM_BALLS as f64 / 2.0;

        for i in 0..NUM_BALLS {
            let position = Vector2::new(radius * 2.0 * (i as f64 + 0.5), SCREEN_SIZE.y / 2.0);

            let mut ball = Body::new(shapes::circle(radius), 1.0, random_color(rng));
            ball.set_centroid(position);
            ball.add_impulse(BALL_IMPULSE);
            let ball = scene.add_body(ball);

            let mut anchor = Body::new(shapes::circle(radius), INFINITE_MASS, [1.0, 1.0, 1.0])
                .with_tag("anchor");
            anchor.set_centroid(position);
            let anchor = scene.add_body(anchor);

            let fraction = i as f64 / NUM_BALLS as f64;
            create_spring(&mut scene, SPRING_CONST_MAX * (1.0 - fraction), ball, anchor);
            create_drag(&mut scene, DRAG_MAX * fraction, ball);
        }

        Self { scene }
    }
}

impl Demo for Damping {
    fn update(&mut self, dt: f64, _rng: &mut StdRng) -> Result<()> {
        self.scene.tick(dt);
        Ok(())
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn status(&self) -> String {
        format!("kinetic energy {:.2}", kinetic_energy(&self.scene))
    }
}

// ---------------------------------------------------------------------------
// N-bodies
// ---------------------------------------------------------------------------

const NUM_STARS: usize = 100;
const NBODY_STAR_POINTS: usize = 4;
const STAR_RADIUS_MIN: f64 = 10.0;
const STAR_RADIUS_MAX: f64 = 40.0;
const STAR_INNER_FRACTION: f64 = 0.4;
const GRAVITY: f64 = 20.0;
const STAR_INITIAL_SPEED: f64 = 50.0;

/// Stars attracting each other pairwise, started spinning about the screen centre.
pub struct NBodies {
    scene: Scene,
}

impl NBodies {
    pub fn new(rng: &mut StdRng) -> Self {
        let mut scene = Scene::default();
        let center = SCREEN_SIZE * 0.5;

        for i in 0..NUM_STARS {
            let outer = rng.random_range(STAR_RADIUS_MIN..STAR_RADIUS_MAX);
            let mass = outer * outer;
            let mut star = Body::new(
                shapes::star(NBODY_STAR_POINTS, outer, STAR_INNER_FRACTION * outer),
                mass,
                random_color(rng),
            );
            let position = Vector2::new(
                rng.random_range(SCREEN_SIZE.x * 0.25..SCREEN_SIZE.x * 0.75),
                rng.random_range(SCREEN_SIZE.y * 0.25..SCREEN_SIZE.y * 0.75),
            );
            star.set_centroid(position);
            star.add_impulse((position - center).perp().normalize_or_zero() * (STAR_INITIAL_SPEED * mass));
            let star = scene.add_body(star);

            for j in 0..i {
                let other = scene.handle_at(j);
                create_newtonian_gravity(&mut scene, GRAVITY, star, other);
            }
        }

        Self { scene }
    }
}

impl Demo for NBodies {
    fn update(&mut self, dt: f64, _rng: &mut StdRng) -> Result<()> {
        self.scene.tick(dt);
        Ok(())
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn status(&self) -> String {
        format!("kinetic energy {:.1}", kinetic_energy(&self.scene))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_bounce_stays_near_screen() {
        let mut rng = StdRng::seed_from_u64(42069);
        let mut demo = Bounce::new(&mut rng);
        for _ in 0..600 {
            demo.update(1.0 / 60.0, &mut rng).unwrap();
        }
        let position = demo.scene().body(demo.star).unwrap().centroid();
        assert!(position.x > -STAR_OUTER_RADIUS && position.x < SCREEN_SIZE.x + STAR_OUTER_RADIUS);
        assert!(position.y > -STAR_OUTER_RADIUS && position.y < SCREEN_SIZE.y + STAR_OUTER_RADIUS);
        assert!(demo.wall_hits > 0);
    }

    #[test]
    fn test_damping_setup() {
        let mut rng = StdRng::seed_from_u64(69);
        let demo = Damping::new(&mut rng);
        assert_eq!(demo.scene().body_count(), NUM_BALLS * 2);
        assert_eq!(demo.scene().force_count(), NUM_BALLS * 2);
    }

    #[test]
    fn test_nbodies_pairwise_gravity() {
        let mut rng = StdRng::seed_from_u64(69);
        let demo = NBodies::new(&mut rng);
        assert_eq!(demo.scene().body_count(), NUM_STARS);
        assert_eq!(demo.scene().force_count(), NUM_STARS * (NUM_STARS - 1) / 2);
    }
}
