mod breakout;
mod scenarios;
mod shapes;

use anyhow::ensure;
use clap::{Parser, ValueEnum};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use breakout::Breakout;
use scenarios::{Bounce, Damping, Demo, NBodies};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scenario {
    Bounce,
    Damping,
    Nbodies,
    Breakout,
}

impl Scenario {
    /// Seed the scenario was tuned with.
    fn default_seed(self) -> u64 {
        match self {
            Scenario::Bounce => 42069,
            Scenario::Damping | Scenario::Nbodies => 69,
            Scenario::Breakout => 12346,
        }
    }
}

/// Run a rein2d demo scene headlessly and log its progress.
#[derive(Debug, Parser)]
#[command(name = "rein2d-app", version)]
struct Args {
    #[arg(long, value_enum, default_value_t = Scenario::Bounce)]
    scenario: Scenario,
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    ticks: usize,
    /// Frame length in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,
    /// RNG seed for colors and placement.
    #[arg(long)]
    seed: Option<u64>,
    /// Log a status line every N frames.
    #[arg(long, default_value_t = 60)]
    report_every: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    ensure!(args.dt > 0.0, "--dt must be positive, got {}", args.dt);
    ensure!(args.report_every > 0, "--report-every must be at least 1");

    let seed = args.seed.unwrap_or_else(|| args.scenario.default_seed());
    let mut rng = StdRng::seed_from_u64(seed);
    info!("Running {:?} for {} ticks (dt={}, seed={})", args.scenario, args.ticks, args.dt, seed);

    let mut demo: Box<dyn Demo> = match args.scenario {
        Scenario::Bounce => Box::new(Bounce::new(&mut rng)),
        Scenario::Damping => Box::new(Damping::new(&mut rng)),
        Scenario::Nbodies => Box::new(NBodies::new(&mut rng)),
        Scenario::Breakout => Box::new(Breakout::new(&mut rng)?),
    };

    for frame in 1..=args.ticks {
        demo.update(args.dt, &mut rng)?;
        if frame % args.report_every == 0 || frame == args.ticks {
            let scene = demo.scene();
            info!(
                "frame {} t={:.2}s bodies={} forces={} {}",
                frame,
                frame as f64 * args.dt,
                scene.body_count(),
                scene.force_count(),
                demo.status()
            );
        }
    }
    Ok(())
}
