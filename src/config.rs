//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/claimtree/claimtree.toml`
//! 3. Environment variables: `CLAIMTREE_*` prefix (e.g.
//!    `CLAIMTREE_BUILD__STRICT=true`)

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Forest build defaults, overridable per invocation via CLI flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BuildConfig {
    /// Fail on references to missing claims instead of recording them
    pub strict: bool,
    /// Collapse duplicate references within one claim into one edge
    pub dedup_references: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub build: BuildConfig,
}

impl Settings {
    /// Load settings from the global config file (if any) and environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(dirs) = ProjectDirs::from("", "", "claimtree") {
            let global = dirs.config_dir().join("claimtree.toml");
            builder = builder.add_source(File::from(global).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("CLAIMTREE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Load settings from an explicit config file, plus environment.
    /// Used by tests and the `--config` escape hatch.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(true))
            .add_source(
                Environment::with_prefix("CLAIMTREE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
