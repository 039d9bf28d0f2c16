// Configuration validation
//
// Validates that values are sensible before any data is generated

use super::*;
use anyhow::{bail, Result};
use tracing::warn;

/// Upper bound on rows; keeps the `ts` column well inside the i64 microsecond range.
const MAX_ROWS: u64 = 1_000_000_000_000;

pub fn validate_config(config: &SampleConfig) -> Result<()> {
    validate_generator_config(&config.generator)?;
    validate_output_config(&config.output)?;
    Ok(())
}

fn validate_generator_config(config: &GeneratorConfig) -> Result<()> {
    if config.rows == 0 {
        bail!(
            "generator.rows must be greater than 0\n\n\
            How to fix:\n\
              • Environment: export {}ROWS=10000\n\
              • TOML: [generator]\n              rows = 10000",
            ENV_PREFIX
        );
    }

    if config.rows as u64 > MAX_ROWS {
        bail!(
            "generator.rows must be at most {} (got {})",
            MAX_ROWS,
            config.rows
        );
    }

    // Everything is built in memory before writing
    if config.rows > 10_000_000 {
        warn!(
            rows = config.rows,
            "generator.rows is very large; may cause memory issues"
        );
    }

    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<()> {
    if config.row_group_size == 0 {
        bail!("output.row_group_size must be greater than 0");
    }

    if let Some(path) = &config.path {
        if path.as_os_str().is_empty() {
            bail!(
                "output.path must not be empty\n\n\
                How to fix:\n\
                  • Pass a destination: megrez-sample out.parquet\n\
                  • Or remove output.path to use the temp-dir default"
            );
        }
    }

    Ok(())
}
