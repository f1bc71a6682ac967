use std::path::Path;

use anyhow::{Context, Result};

use super::types::BoxoverConfig;

/// Load a config file from the given path.
pub fn load_config(path: &Path) -> Result<BoxoverConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config: BoxoverConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;

    Ok(config)
}
