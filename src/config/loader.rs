//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CompileError, CompileResult};

use super::types::CompilerConfig;

/// File name of the project-level configuration
pub const PROJECT_CONFIG_FILE: &str = "dddc.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key
    pub key: String,
    /// The file where the warning occurred
    pub file: PathBuf,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// A suggested correction if available
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CompileResult<(CompilerConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| CompileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: CompilerConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CompileError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .iter()
        .map(|dotted| unknown_key_warning(path, &content, dotted))
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> CompilerConfig {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            match CompilerConfig::load(&project_config) {
                Ok(config) => return with_env_overrides(config),
                Err(e) => tracing::warn!("ignoring project config: {}", e),
            }
        }
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            match CompilerConfig::load(&user_config) {
                Ok(config) => return with_env_overrides(config),
                Err(e) => tracing::warn!("ignoring user config: {}", e),
            }
        }
    }

    with_env_overrides(CompilerConfig::default())
}

/// `<config_dir>/dddc/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dddc").join("config.toml"))
}

/// Apply environment variable overrides (DDDC_* prefix)
pub fn with_env_overrides(mut config: CompilerConfig) -> CompilerConfig {
    if let Some(suffix) = non_empty_env("DDDC_EMBEDDABLE_SUFFIX") {
        config.naming.embeddable_suffix = suffix;
    }

    if let Some(package) = non_empty_env("DDDC_ENUM_PACKAGE") {
        config.naming.enum_package = package;
    }

    if let Some(id_type) = non_empty_env("DDDC_ID_TYPE") {
        config.entity.default_id_type = id_type;
    }

    config
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `dotted` is a serde_ignored path such as `naming.enum_pakage`.
fn unknown_key_warning(file: &Path, content: &str, dotted: &str) -> ConfigWarning {
    let key = dotted.rsplit('.').next().unwrap_or(dotted).to_string();
    ConfigWarning {
        line: key_line(content, &key),
        suggestion: suggest_key(&key).map(str::to_string),
        file: file.to_path_buf(),
        key,
    }
}

/// 1-indexed line on which `key` is assigned or opened as a table.
fn key_line(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim_start().trim_start_matches('[');
            line.strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with(['=', ']']))
        })
        .map(|i| i + 1)
}

const KNOWN_KEYS: &[&str] = &[
    "naming",
    "embeddable_suffix",
    "enum_package",
    "imports",
    "validation",
    "collections",
    "entity",
    "default_id_type",
];

fn suggest_key(unknown: &str) -> Option<&'static str> {
    KNOWN_KEYS
        .iter()
        .map(|known| (*known, edit_distance(unknown, known)))
        .min_by_key(|&(_, distance)| distance)
        .filter(|&(_, distance)| distance <= 2)
        .map(|(known, _)| known)
}

/// Levenshtein distance over chars, single row.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
