use anyhow::{Context, Result};
use clap::Parser;
use megrez_sample::{LogFormat, OutputCompression, SampleConfig};
use std::path::PathBuf;

/// Generate a reproducible synthetic Parquet fixture
#[derive(Parser)]
#[command(name = "megrez-sample")]
#[command(version)]
#[command(about = "Generate a reproducible synthetic Parquet fixture", long_about = None)]
struct Cli {
    /// Destination Parquet file [default: <temp dir>/megrez-sample-<rows>.parquet]
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of rows to generate
    #[arg(long, value_name = "N")]
    rows: Option<usize>,

    /// Seed for the random columns
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Parquet compression: snappy, uncompressed
    #[arg(long, value_name = "CODEC")]
    compression: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short = 'v', long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log format: text, json
    #[arg(long, value_name = "FORMAT")]
    log_format: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Step 1: defaults, config file, MEGREZ_SAMPLE_* environment
    let mut config =
        SampleConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Step 2: command-line flags win
    apply_cli_overrides(&mut config, &cli)?;

    megrez_sample::init_tracing(&config.logging);
    if let Some(file) = &cli.config {
        tracing::debug!("Loaded config file {}", file.display());
    }
    tracing::debug!(?config, "Resolved configuration");

    let path = megrez_sample::run(&config)?;
    println!("{}", path.display());
    Ok(())
}

fn apply_cli_overrides(config: &mut SampleConfig, cli: &Cli) -> Result<()> {
    if let Some(output) = &cli.output {
        config.output.path = Some(output.clone());
    }
    if let Some(rows) = cli.rows {
        config.generator.rows = rows;
    }
    if let Some(seed) = cli.seed {
        config.generator.seed = seed;
    }
    if let Some(compression) = &cli.compression {
        config.output.compression = compression
            .parse::<OutputCompression>()
            .context("Invalid --compression value")?;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.logging.format = format
            .parse::<LogFormat>()
            .context("Invalid --log-format value")?;
    }
    Ok(())
}
