// main.rs - Interactive viewer for the incremental Game of Life engine

use clap::Parser;
use conway::life::DEFAULT_FILL;
use conway::{Life, LifeError, patterns};
use eframe::egui;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod ui;

use app::{GridDisplay, MAX_DELAY_MS, Playback};

#[derive(Parser, Debug)]
#[command(name = "grid_display")]
#[command(version)]
#[command(about = "Conway's Game of Life with incremental neighbour counts")]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 160)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 120)]
    height: usize,

    /// Pixels per cell
    #[arg(long, default_value_t = 5.0)]
    scale: f32,

    /// Delay between generations in continuous mode
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u64).range(0..=MAX_DELAY_MS))]
    delay_ms: u64,

    /// Probability that a cell starts alive when randomizing
    #[arg(long, default_value_t = DEFAULT_FILL)]
    fill: f64,

    /// Seed for reproducible random soups
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a named pattern instead of a random soup
    #[arg(long, value_parser = parse_pattern)]
    pattern: Option<usize>,

    /// Start in single-step mode
    #[arg(long)]
    paused: bool,
}

fn parse_pattern(name: &str) -> Result<usize, String> {
    patterns::PATTERNS
        .iter()
        .position(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            let known: Vec<_> = patterns::PATTERNS.iter().map(|p| p.name).collect();
            format!("unknown pattern '{name}', expected one of: {}", known.join(", "))
        })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();
    if !(args.scale.is_finite() && args.scale >= 1.0) {
        return Err(format!("scale must be at least 1, got {}", args.scale).into());
    }
    if !(0.0..=1.0).contains(&args.fill) {
        return Err(LifeError::InvalidProbability(args.fill).into());
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut life = Life::new(args.width, args.height)?;
    let selected_pattern = match args.pattern {
        Some(index) => {
            patterns::apply_pattern(&mut life, &patterns::PATTERNS[index]);
            index
        }
        None => {
            life.randomize_with(&mut rng, args.fill)?;
            0
        }
    };
    info!(
        width = args.width,
        height = args.height,
        population = life.population(),
        seed = ?args.seed,
        "starting grid display"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Conway's Game of Life")
            .with_inner_size(ui::window_size(args.width, args.height, args.scale)),
        ..Default::default()
    };

    let playback = Playback::new(!args.paused, args.delay_ms);
    let mut display = GridDisplay::new(life, playback, args.scale, args.fill, rng);
    display.selected_pattern = selected_pattern;

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(display)),
    )?;
    Ok(())
}
