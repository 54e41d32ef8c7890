mod config;
mod error;
mod geometry;
mod glyphs;
mod leaf;
mod log_reader;
mod pipeline;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{Config, DEFAULT_OUTPUT_DIR, DEFAULT_SAMPLE_RATE};

/// Render a plant model's leaf log as one PNG frame per simulated hour.
#[derive(Debug, Parser)]
#[command(name = "plantvis", version, about, long_about = None)]
struct Args {
    /// Plant log, one line of leaf entries per timestep.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Directory that receives the plantvis###.png frames.
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Log lines per simulated hour; the first line of each hour is drawn.
    #[arg(
        long,
        value_name = "LINES",
        default_value_t = DEFAULT_SAMPLE_RATE,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    sample_rate: usize,

    /// Step counter value for the first log line.
    #[arg(long, value_name = "STEP", default_value_t = 0)]
    start_step: usize,

    /// Create the output directory if it does not exist.
    #[arg(long)]
    create_output_dir: bool,

    /// TrueType font for the hour label instead of the built-in digits.
    #[arg(long, value_name = "TTF")]
    font: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Config {
        let mut config = Config::new(self.input, self.output_dir);
        config.sample_rate = self.sample_rate;
        config.start_step = self.start_step;
        config.create_output_dir = self.create_output_dir;
        config.render.font = self.font;
        config
    }
}

fn main() -> Result<()> {
    // Logs go to stderr, default to INFO when RUST_LOG is not set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Args::parse().into_config();
    let summary = pipeline::run(&config)
        .with_context(|| format!("rendering {}", config.input.display()))?;

    info!(lines = summary.lines, frames = summary.frames, "finished");
    println!("Analysis complete!");
    Ok(())
}
