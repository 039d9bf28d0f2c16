// Configuration for the sample generator
//
// Sources, lowest to highest priority:
// 1. Built-in defaults
// 2. Config file from --config or MEGREZ_SAMPLE_CONFIG
// 3. Environment variables (MEGREZ_SAMPLE_* prefix)
// 4. Command-line flags (applied by the binary)

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

mod env_overrides;
mod sources;
mod validation;

pub use env_overrides::{EnvSource, StdEnvSource, ENV_PREFIX};

/// Rows written when nothing overrides the generator.
pub const DEFAULT_ROWS: usize = 10_000;
/// Seed used when nothing overrides the generator.
pub const DEFAULT_SEED: u64 = 0;
pub const DEFAULT_ROW_GROUP_SIZE: usize = 32 * 1024;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SampleConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Shape and seed of the generated table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            seed: DEFAULT_SEED,
        }
    }
}

/// Destination and Parquet writer settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Destination file; falls back to a file under the system temp dir
    pub path: Option<PathBuf>,
    pub compression: OutputCompression,
    pub row_group_size: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            compression: OutputCompression::Snappy,
            row_group_size: DEFAULT_ROW_GROUP_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputCompression {
    Snappy,
    Uncompressed,
}

impl std::fmt::Display for OutputCompression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputCompression::Snappy => write!(f, "snappy"),
            OutputCompression::Uncompressed => write!(f, "uncompressed"),
        }
    }
}

impl std::str::FromStr for OutputCompression {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "snappy" => Ok(OutputCompression::Snappy),
            "uncompressed" | "none" => Ok(OutputCompression::Uncompressed),
            _ => anyhow::bail!(
                "Unsupported compression: {}. Supported: snappy, uncompressed",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => anyhow::bail!("Unsupported log format: {}. Supported: text, json", s),
        }
    }
}

impl SampleConfig {
    /// Load defaults, an optional config file and `MEGREZ_SAMPLE_*` overrides.
    ///
    /// An explicit `path` wins over `MEGREZ_SAMPLE_CONFIG`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        sources::load_config(path, &StdEnvSource)
    }

    /// Same as [`SampleConfig::load`] with a caller-supplied environment.
    pub fn load_with_env<E: EnvSource>(path: Option<&Path>, env: &E) -> Result<Self> {
        sources::load_config(path, env)
    }

    /// Parse a TOML document on top of the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment overrides from a custom source.
    pub fn apply_env_overrides_from<E: EnvSource>(&mut self, env: &E) -> Result<()> {
        env_overrides::apply_env_overrides(self, env)
    }

    /// Destination path, falling back to the temp-dir default.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .path
            .clone()
            .unwrap_or_else(|| default_output_path(self.generator.rows))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }
}

/// Default destination: `<temp dir>/megrez-sample-<rows>.parquet`.
pub fn default_output_path(rows: usize) -> PathBuf {
    std::env::temp_dir().join(format!("megrez-sample-{}.parquet", rows))
}
