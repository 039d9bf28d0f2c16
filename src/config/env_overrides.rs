use super::{LogFormat, OutputCompression, SampleConfig};
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "MEGREZ_SAMPLE_";

/// Abstraction over environment-variable lookups so tests can supply
/// their own overrides without touching the process environment.
pub trait EnvSource {
    /// Look up `key` with the `MEGREZ_SAMPLE_` prefix applied.
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads from the process environment.
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}{}", ENV_PREFIX, key)).ok()
    }
}

/// Apply environment-variable overrides on top of the loaded config.
pub fn apply_env_overrides<E: EnvSource>(config: &mut SampleConfig, env: &E) -> Result<()> {
    // Generator
    if let Some(rows) = get_env_usize(env, "ROWS")? {
        config.generator.rows = rows;
    }
    if let Some(seed) = get_env_u64(env, "SEED")? {
        config.generator.seed = seed;
    }

    // Output
    if let Some(path) = get_env_string(env, "OUTPUT") {
        config.output.path = Some(PathBuf::from(path));
    }
    if let Some(compression) = get_env_string(env, "COMPRESSION") {
        config.output.compression = compression
            .parse::<OutputCompression>()
            .context("Invalid MEGREZ_SAMPLE_COMPRESSION value")?;
    }
    if let Some(size) = get_env_usize(env, "ROW_GROUP_SIZE")? {
        config.output.row_group_size = size;
    }

    // Logging
    if let Some(level) = get_env_string(env, "LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(format) = get_env_string(env, "LOG_FORMAT") {
        config.logging.format = format
            .parse::<LogFormat>()
            .context("Invalid MEGREZ_SAMPLE_LOG_FORMAT value")?;
    }

    Ok(())
}

fn get_env_string<E: EnvSource>(env: &E, key: &str) -> Option<String> {
    env.get(key).filter(|val| !val.is_empty())
}

fn get_env_usize<E: EnvSource>(env: &E, key: &str) -> Result<Option<usize>> {
    match get_env_string(env, key) {
        Some(val) => {
            let parsed = val
                .parse::<usize>()
                .map_err(|e| anyhow!("Failed to parse {}{}: {}", ENV_PREFIX, key, e))?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

fn get_env_u64<E: EnvSource>(env: &E, key: &str) -> Result<Option<u64>> {
    match get_env_string(env, key) {
        Some(val) => {
            let parsed = val
                .parse::<u64>()
                .map_err(|e| anyhow!("Failed to parse {}{}: {}", ENV_PREFIX, key, e))?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}
