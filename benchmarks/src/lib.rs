//! Shared setup helpers for rein2d benchmarks.
//!
//! ## Running
//!
//! Kernel (criterion):
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics -- sat
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics -- scene

use glam::DVec2;
use rein2d::physics::forces::{
    create_drag, create_newtonian_gravity, create_physics_collision, create_spring,
};
use rein2d::{Body, BodyHandle, Polygon, Scene, INFINITE_MASS};

// ---------------------------------------------------------------------------
// Shapes
// ---------------------------------------------------------------------------

/// Regular `sides`-gon of circumradius `radius` centred on `center`.
pub fn regular_polygon(sides: usize, radius: f64, center: DVec2) -> Polygon {
    let step = std::f64::consts::TAU / sides as f64;
    Polygon::new(
        (0..sides)
            .map(|i| center + DVec2::from_angle(i as f64 * step) * radius)
            .collect(),
    )
}

/// Axis-aligned square with half-size `half` centred on `center`.
pub fn square(half: f64, center: DVec2) -> Polygon {
    Polygon::new(vec![
        center + DVec2::new(-half, -half),
        center + DVec2::new(half, -half),
        center + DVec2::new(half, half),
        center + DVec2::new(-half, half),
    ])
}

/// A pair of `sides`-gons whose centres are `distance` apart along X.
pub fn polygon_pair(sides: usize, distance: f64) -> (Polygon, Polygon) {
    (
        regular_polygon(sides, 1.0, DVec2::ZERO),
        regular_polygon(sides, 1.0, DVec2::new(distance, 0.0)),
    )
}

// ---------------------------------------------------------------------------
// Scenes
// ---------------------------------------------------------------------------

/// `n` bodies in a grid, each with drag, chained by springs.
pub fn setup_spring_scene(n: usize) -> Scene {
    let mut scene = Scene::default();
    let cols = (n as f64).sqrt().ceil() as usize;

    let mut previous: Option<BodyHandle> = None;
    for i in 0..n {
        let x = (i % cols) as f64 * 4.0;
        let y = (i / cols) as f64 * 4.0;
        let handle = scene.add_body(Body::new(
            square(1.0, DVec2::new(x, y)),
            1.0,
            [0.2, 0.6, 1.0],
        ));
        create_drag(&mut scene, 0.1, handle);
        if let Some(prev) = previous {
            create_spring(&mut scene, 2.0, prev, handle);
        }
        previous = Some(handle);
    }
    scene
}

/// `n` bodies with pairwise gravity, the n-bodies demo layout.
pub fn setup_gravity_scene(n: usize) -> Scene {
    let mut scene = Scene::default();
    let handles: Vec<_> = (0..n)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / n as f64;
            let center = DVec2::from_angle(angle) * 200.0;
            scene.add_body(Body::new(regular_polygon(5, 10.0, center), 10.0, [1.0, 1.0, 0.0]))
        })
        .collect();

    for (i, &a) in handles.iter().enumerate() {
        for &b in &handles[i + 1..] {
            create_newtonian_gravity(&mut scene, 100.0, a, b);
        }
    }
    scene
}

/// `n` balls dropped between two walls with pairwise elastic collisions.
pub fn setup_collision_scene(n: usize) -> Scene {
    let mut scene = Scene::default();
    let floor = scene.add_body(Body::new(
        Polygon::new(vec![
            DVec2::new(-10.0, -10.0),
            DVec2::new(10.0 * n as f64 + 10.0, -10.0),
            DVec2::new(10.0 * n as f64 + 10.0, 0.0),
            DVec2::new(-10.0, 0.0),
        ]),
        INFINITE_MASS,
        [0.5, 0.5, 0.5],
    ));

    let balls: Vec<_> = (0..n)
        .map(|i| {
            let mut body = Body::new(
                regular_polygon(8, 2.0, DVec2::new(i as f64 * 3.5, 2.5 + (i % 3) as f64)),
                1.0,
                [1.0, 0.0, 0.0],
            );
            body.set_velocity(DVec2::new(if i % 2 == 0 { 5.0 } else { -5.0 }, -10.0));
            scene.add_body(body)
        })
        .collect();

    for (i, &a) in balls.iter().enumerate() {
        create_physics_collision(&mut scene, 0.9, a, floor);
        for &b in &balls[i + 1..] {
            create_physics_collision(&mut scene, 0.9, a, b);
        }
    }
    scene
}

/// Tick `scene` `steps` times at 60 Hz.
pub fn run_ticks(scene: &mut Scene, steps: usize) {
    for _ in 0..steps {
        scene.tick(1.0 / 60.0);
    }
}
