// Configuration source loading
//
// Priority order:
// 1. Environment variables (MEGREZ_SAMPLE_* prefix)
// 2. Config file from an explicit path, else MEGREZ_SAMPLE_CONFIG
// 3. Built-in defaults

use super::env_overrides::{self, EnvSource};
use super::SampleConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn load_config<E: EnvSource>(path: Option<&Path>, env: &E) -> Result<SampleConfig> {
    let file_path = path
        .map(Path::to_path_buf)
        .or_else(|| env.get("CONFIG").filter(|p| !p.is_empty()).map(PathBuf::from));

    let mut config = match file_path {
        Some(path) => load_from_file(&path)?,
        None => SampleConfig::default(),
    };

    env_overrides::apply_env_overrides(&mut config, env)?;
    Ok(config)
}

fn load_from_file(path: &Path) -> Result<SampleConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    SampleConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
