//! Configuration module for dddc
//!
//! Configuration hierarchy:
//! 1. CLI `--config` path (highest priority)
//! 2. Environment variables (DDDC_*)
//! 3. Project config (./dddc.toml)
//! 4. User config (<config_dir>/dddc/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Configuration only chooses naming conventions; it never changes how a
//! model is resolved.

mod loader;
mod types;

pub use loader::{user_config_path, with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{CompilerConfig, EntityConfig, ImportsConfig, NamingConfig};
