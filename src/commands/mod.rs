pub mod check;
pub mod compile;

use std::path::Path;

use anyhow::{Context, Result};
use dddc::config::{with_env_overrides, CompilerConfig};

/// Explicit `--config` file, else the project/user hierarchy.
pub fn load_config(explicit: Option<&Path>) -> Result<CompilerConfig> {
    match explicit {
        Some(path) => {
            let (config, warnings) = CompilerConfig::load_with_warnings(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            for warning in &warnings {
                eprintln!("warning: {}", warning);
            }
            Ok(with_env_overrides(config))
        }
        None => {
            let project_root = std::env::current_dir()?;
            Ok(CompilerConfig::load_or_default(Some(&project_root)))
        }
    }
}
