//! Headless breakout: the paddle follows the ball, and a pacman bullet is
//! fired whenever enough points are banked.

use std::cell::Cell;
use std::f64::consts::FRAC_PI_2;
use std::rc::Rc;

use anyhow::Result;
use log::info;
use rand::rngs::StdRng;
use rein2d::physics::contact::ElasticImpulse;
use rein2d::physics::forces::{create_collision_handler, create_physics_collision};
use rein2d::{Bodies, Body, BodyHandle, CollisionHandler, Scene, Vector2, INFINITE_MASS};

use crate::scenarios::{random_color, Demo, SCREEN_SIZE};
use crate::shapes;

const WALL_THICKNESS: f64 = 100.0;

const BRICK_SIZE: Vector2 = Vector2::new(89.0, 30.0);
const BRICK_TOP_LEFT: Vector2 = Vector2::new(55.0, 475.0);
const BRICK_SPACING: Vector2 = Vector2::new(99.0, 40.0);
const BRICK_COLS: usize = 10;
const BRICK_ROWS: usize = 3;

const BALL_RADIUS: f64 = 10.0;
const BALL_MASS: f64 = 10.0;
const BALL_Y: f64 = 67.0;
const BALL_VELOCITY: Vector2 = Vector2::new(250.0, -400.0);

const PLAYER_SIZE: Vector2 = Vector2::new(100.0, 30.0);
const PLAYER_Y: f64 = 30.0;
const PLAYER_SPEED: f64 = 500.0;

const BULLET_Y: f64 = 80.0;
const BULLET_RADIUS: f64 = 20.0;
const BULLET_MASS: f64 = 5.0;
const BULLET_VELOCITY: Vector2 = Vector2::new(0.0, 200.0);
const BULLET_COLOR: [f32; 3] = [1.0, 1.0, 0.0];

const ELASTICITY: f64 = 1.0;
const POINTS_PER_BULLET: usize = 3;

const BRICK_TAG: &str = "brick";
const BULLET_TAG: &str = "bullet";

/// Grid cell of a brick, attached to its entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brick {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Default)]
struct Score {
    bricks_killed: Cell<usize>,
    points: Cell<usize>,
}

/// Bounces the ball (or bullet) off a brick and knocks the brick out.
struct BrickHit {
    bounce: ElasticImpulse,
    score: Rc<Score>,
}

impl CollisionHandler for BrickHit {
    fn on_contact(&mut self, bodies: &mut Bodies<'_>, brick: BodyHandle, hitter: BodyHandle, axis: Vector2) {
        self.bounce.on_contact(bodies, brick, hitter, axis);
        bodies.mark_removed(brick);
        self.score.bricks_killed.set(self.score.bricks_killed.get() + 1);
        self.score.points.set(self.score.points.get() + 1);
    }
}

pub struct Breakout {
    scene: Scene,
    player: BodyHandle,
    ball: BodyHandle,
    score: Rc<Score>,
    rounds: usize,
    bullets_fired: usize,
}

impl Breakout {
    pub fn new(rng: &mut StdRng) -> Result<Self> {
        let mut scene = Scene::default();

        let player = scene.add_body(Body::new(
            shapes::rectangle(PLAYER_SIZE),
            INFINITE_MASS,
            random_color(rng),
        ));
        let ball = scene.add_body(Body::new(
            shapes::circle(BALL_RADIUS),
            BALL_MASS,
            random_color(rng),
        ));

        let walls = [
            (
                Vector2::new(SCREEN_SIZE.x, WALL_THICKNESS),
                Vector2::new(SCREEN_SIZE.x / 2.0, SCREEN_SIZE.y + WALL_THICKNESS / 2.0),
            ),
            (
                Vector2::new(WALL_THICKNESS, SCREEN_SIZE.y),
                Vector2::new(-WALL_THICKNESS / 2.0, SCREEN_SIZE.y / 2.0),
            ),
            (
                Vector2::new(WALL_THICKNESS, SCREEN_SIZE.y),
                Vector2::new(SCREEN_SIZE.x + WALL_THICKNESS / 2.0, SCREEN_SIZE.y / 2.0),
            ),
        ];
        for (size, center) in walls {
            let mut wall = Body::new(shapes::rectangle(size), INFINITE_MASS, [1.0, 1.0, 1.0])
                .with_tag("wall");
            wall.set_centroid(center);
            let wall = scene.add_body(wall);
            create_physics_collision(&mut scene, ELASTICITY, ball, wall);
        }
        create_physics_collision(&mut scene, ELASTICITY, ball, player);

        let mut breakout = Self {
            scene,
            player,
            ball,
            score: Rc::new(Score::default()),
            rounds: 0,
            bullets_fired: 0,
        };
        breakout.reset(rng)?;
        Ok(breakout)
    }

    fn brick_hit(&self) -> BrickHit {
        BrickHit {
            bounce: ElasticImpulse {
                elasticity: ELASTICITY,
            },
            score: Rc::clone(&self.score),
        }
    }

    /// Re-centre paddle and ball and lay out a fresh wall of bricks.
    fn reset(&mut self, rng: &mut StdRng) -> Result<()> {
        self.scene
            .body_mut(self.player)?
            .set_centroid(Vector2::new(SCREEN_SIZE.x / 2.0, PLAYER_Y));
        let ball = self.scene.body_mut(self.ball)?;
        ball.set_centroid(Vector2::new(SCREEN_SIZE.x / 2.0, BALL_Y));
        ball.set_velocity(BALL_VELOCITY);

        let stale: Vec<_> = self
            .scene
            .bodies()
            .filter(|&handle| {
                self.scene
                    .body(handle)
                    .map_or(false, |body| matches!(body.tag(), Some(BRICK_TAG | BULLET_TAG)))
            })
            .collect();
        for handle in stale {
            self.scene.remove_body(handle)?;
        }

        for col in 0..BRICK_COLS {
            for row in 0..BRICK_ROWS {
                let mut brick = Body::new(shapes::rectangle(BRICK_SIZE), INFINITE_MASS, random_color(rng))
                    .with_tag(BRICK_TAG);
                let offset = Vector2::new(BRICK_SPACING.x * col as f64, -BRICK_SPACING.y * row as f64);
                brick.set_centroid(BRICK_TOP_LEFT + offset);
                let brick = self.scene.add_body(brick);
                self.scene.attach(brick, Brick { row, col })?;
                let handler = self.brick_hit();
                create_collision_handler(&mut self.scene, brick, self.ball, handler);
            }
        }

        self.score.bricks_killed.set(0);
        self.rounds += 1;
        info!("Breakout round {} started", self.rounds);
        Ok(())
    }

    fn shoot_bullet(&mut self) -> Result<()> {
        let player_x = self.scene.body(self.player)?.centroid().x;

        let mut bullet = Body::new(shapes::pacman(BULLET_RADIUS), BULLET_MASS, BULLET_COLOR)
            .with_tag(BULLET_TAG);
        bullet.set_rotation(FRAC_PI_2);
        bullet.set_centroid(Vector2::new(player_x, BULLET_Y));
        bullet.set_velocity(BULLET_VELOCITY);

        let bricks: Vec<_> = self
            .scene
            .bodies()
            .filter(|&handle| self.scene.component::<Brick>(handle).is_ok())
            .collect();
        let bullet = self.scene.add_body(bullet);
        for brick in bricks {
            let handler = self.brick_hit();
            create_collision_handler(&mut self.scene, brick, bullet, handler);
        }
        create_physics_collision(&mut self.scene, ELASTICITY, self.ball, bullet);
        create_physics_collision(&mut self.scene, ELASTICITY, self.player, bullet);

        self.bullets_fired += 1;
        Ok(())
    }

    /// Bricks still standing.
    pub fn bricks_left(&self) -> usize {
        self.scene.world().query::<&Brick>().iter().count()
    }
}

impl Demo for Breakout {
    fn update(&mut self, dt: f64, rng: &mut StdRng) -> Result<()> {
        let ball_position = self.scene.body(self.ball)?.centroid();

        // Autopilot in place of the arrow keys.
        let player = self.scene.body_mut(self.player)?;
        let dx = ball_position.x - player.centroid().x;
        let velocity = if dx.abs() < PLAYER_SIZE.x / 4.0 {
            Vector2::ZERO
        } else {
            Vector2::new(PLAYER_SPEED.copysign(dx), 0.0)
        };
        player.set_velocity(velocity);

        if self.score.points.get() >= POINTS_PER_BULLET {
            self.score.points.set(self.score.points.get() - POINTS_PER_BULLET);
            self.shoot_bullet()?;
        }

        if ball_position.y < 0.0 || self.score.bricks_killed.get() == BRICK_COLS * BRICK_ROWS {
            self.reset(rng)?;
        }

        self.scene.tick(dt);
        Ok(())
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn status(&self) -> String {
        format!(
            "round {}, {} bricks left, {} points banked, {} bullets fired",
            self.rounds,
            self.bricks_left(),
            self.score.points.get(),
            self.bullets_fired
        )
    }
}
