use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use terrawalk_common::WalkerConfig;
use terrawalk_locomotion::InputState;
use terrawalk_sim::Simulation;
use terrawalk_terrain::{Heightfield, ShadedTexture};

#[derive(Parser)]
#[command(name = "terrawalk-cli", about = "Headless terrain generation and walk simulation")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Optional YAML config file; CLI flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the effective configuration
    Info,
    /// Generate a heightfield and export its shaded texture
    Generate {
        /// Grid width in samples
        #[arg(long)]
        width: Option<usize>,
        /// Grid depth in samples
        #[arg(long)]
        depth: Option<usize>,
        /// Generation seed
        #[arg(short, long)]
        seed: Option<u64>,
        /// Output PNG path for the shaded texture
        #[arg(short, long, default_value = "terrain.png")]
        out: PathBuf,
    },
    /// Run a headless walk over generated terrain
    Walk {
        /// Number of fixed-delta simulation ticks
        #[arg(short, long, default_value = "600")]
        ticks: u32,
        /// Generation seed
        #[arg(short, long)]
        seed: Option<u64>,
        /// Hold the sprint key while walking forward
        #[arg(long)]
        sprint: bool,
        /// Request a jump every N ticks (0 = never)
        #[arg(long, default_value = "0")]
        jump_every: u32,
        /// Fixed time step in seconds
        #[arg(long, default_value = "0.016")]
        delta: f32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Info => {
            println!("terrawalk-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("--- effective config ---");
            print!("{}", serde_yaml::to_string(&config)?);
        }
        Commands::Generate {
            width,
            depth,
            seed,
            out,
        } => {
            if let Some(width) = width {
                config.terrain.width = width;
            }
            if let Some(depth) = depth {
                config.terrain.depth = depth;
            }
            if let Some(seed) = seed {
                config.terrain.seed = seed;
            }

            let heightfield = Heightfield::generate(&config.terrain)?;
            print_height_stats(&heightfield);

            let texture = ShadedTexture::shade(&heightfield, config.terrain.seed);
            let img = image::RgbImage::from_raw(
                texture.width() as u32,
                texture.height() as u32,
                texture.pixels().to_vec(),
            )
            .context("texture buffer does not match its dimensions")?;
            img.save(&out)
                .with_context(|| format!("writing texture to {}", out.display()))?;
            println!(
                "wrote {}x{} texture to {}",
                texture.width(),
                texture.height(),
                out.display()
            );
        }
        Commands::Walk {
            ticks,
            seed,
            sprint,
            jump_every,
            delta,
        } => {
            if let Some(seed) = seed {
                config.terrain.seed = seed;
            }
            run_walk(config, ticks, sprint, jump_every, delta)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<WalkerConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config file");
            serde_yaml::from_str(&text)
                .with_context(|| format!("parsing config file {}", path.display()))
        }
        None => Ok(WalkerConfig::default()),
    }
}

fn print_height_stats(heightfield: &Heightfield) {
    let samples = heightfield.samples();
    let min = samples.iter().copied().fold(f32::INFINITY, f32::min);
    let max = samples.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let mean = samples.iter().sum::<f32>() / samples.len() as f32;
    println!(
        "heightfield {}x{}: min={min:.2} max={max:.2} mean={mean:.2}",
        heightfield.width(),
        heightfield.depth()
    );
}

fn run_walk(
    config: WalkerConfig,
    ticks: u32,
    sprint: bool,
    jump_every: u32,
    delta: f32,
) -> anyhow::Result<()> {
    let mut sim = Simulation::new(config)?;
    let report_every = 60;

    for tick in 1..=ticks {
        let input = InputState {
            forward: true,
            sprint,
            jump: jump_every > 0 && tick % jump_every == 0,
            ..InputState::idle()
        };
        sim.step(&input, delta);

        if tick % report_every == 0 || tick == ticks {
            let state = sim.state();
            println!(
                "tick {tick:>5}  pos=({:8.2}, {:8.2}, {:8.2})  speed={:6.2}  {}",
                state.position.x,
                state.position.y,
                state.position.z,
                state.horizontal_speed(),
                if state.grounded { "grounded" } else { "airborne" },
            );
        }
    }

    Ok(())
}
