//! Fiends and Fortune
//!
//! Command line entry point: generates a dungeon and prints a summary of
//! every level.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fnf_core::GeneratorConfig;
use fnf_core::dungeon::Dungeon;
use fnf_rng::GameRng;

/// Content generators for tabletop role-playing games
#[derive(Parser, Debug)]
#[command(name = "fnf")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log every generation round
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a dungeon
    Dungeon {
        #[arg(value_enum, default_value_t = Layout::Random)]
        layout: Layout,

        /// Seed for a repeatable dungeon; random when omitted
        #[arg(short = 's', long = "seed")]
        seed: Option<u64>,

        /// JSON file with generator settings
        #[arg(short = 'c', long = "config")]
        config: Option<PathBuf>,

        /// Override the number of generation rounds
        #[arg(long = "max-iterations")]
        max_iterations: Option<u32>,

        /// Override the clearance kept around new areas
        #[arg(long = "padding")]
        padding: Option<i32>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Layout {
    /// Dig with the random generator
    Random,
    /// The fixed sample layout
    Small,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Dungeon {
            layout,
            seed,
            config,
            max_iterations,
            padding,
        } => {
            let dungeon = match layout {
                Layout::Small => Dungeon::generate_small().context("digging sample layout")?,
                Layout::Random => {
                    let config = load_config(config, max_iterations, padding)?;
                    let mut rng = match seed {
                        Some(seed) => GameRng::new(seed),
                        None => GameRng::from_entropy(),
                    };
                    info!(seed = rng.seed(), "generating dungeon");
                    println!("Seed {}", rng.seed());
                    Dungeon::generate(&mut rng, &config)
                }
            };
            print!("{}", describe(&dungeon));
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(
    path: Option<PathBuf>,
    max_iterations: Option<u32>,
    padding: Option<i32>,
) -> Result<GeneratorConfig> {
    let mut config = match path {
        Some(path) => GeneratorConfig::load_from_file(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(max_iterations) = max_iterations {
        config.max_iterations = max_iterations;
    }
    if let Some(padding) = padding {
        config.padding = padding;
    }
    config.validate().context("checking generator settings")?;
    Ok(config)
}

/// Per-level tile statistics followed by the level's areas.
fn describe(dungeon: &Dungeon) -> String {
    let mut out = String::new();
    for level in dungeon.levels() {
        let stats = dungeon.tiles.statistics_on_level(level);
        out.push_str(&format!("Level {level}\n"));
        out.push_str(&format!(
            "    {} tiles, x {}..{}, y {}..{}\n",
            stats.count, stats.min_x, stats.max_x, stats.min_y, stats.max_y
        ));
        out.push_str(&format!("Level {level} Areas of Interest:\n"));
        for area in dungeon.areas.on_level(level) {
            out.push_str(&format!("    {}\n", area.description()));
        }
    }
    out
}
