//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CompileResult;

use super::loader::{self, ConfigWarning};

/// Naming conventions of generated types and packages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Suffix of the embeddable companion of a value object
    #[serde(default = "default_embeddable_suffix")]
    pub embeddable_suffix: String,

    /// Package segment appended to `<package>.<module>` for enum imports
    #[serde(default = "default_enum_package")]
    pub enum_package: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            embeddable_suffix: default_embeddable_suffix(),
            enum_package: default_enum_package(),
        }
    }
}

fn default_embeddable_suffix() -> String {
    "Embeddable".to_string()
}

fn default_enum_package() -> String {
    "domain.enums".to_string()
}

/// Imports triggered by validation annotations and collections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportsConfig {
    #[serde(default = "default_validation_import")]
    pub validation: String,

    /// Mutable sequence + unmodifiable view pair
    #[serde(default = "default_collection_imports")]
    pub collections: Vec<String>,
}

impl Default for ImportsConfig {
    fn default() -> Self {
        Self {
            validation: default_validation_import(),
            collections: default_collection_imports(),
        }
    }
}

fn default_validation_import() -> String {
    "jakarta.validation.constraints.*".to_string()
}

fn default_collection_imports() -> Vec<String> {
    vec![
        "java.util.ArrayList".to_string(),
        "java.util.Collections".to_string(),
    ]
}

/// Entity defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityConfig {
    /// Identifier type used when an entity declares no `id` field
    #[serde(default = "default_id_type")]
    pub default_id_type: String,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            default_id_type: default_id_type(),
        }
    }
}

fn default_id_type() -> String {
    "Long".to_string()
}

/// Compiler conventions
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompilerConfig {
    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub imports: ImportsConfig,

    #[serde(default)]
    pub entity: EntityConfig,
}

impl CompilerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CompileResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> CompileResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Project config, user config or defaults, with environment overrides
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }
}
