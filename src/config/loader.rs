//! Configuration loading: defaults, optional file, environment overlay.

use super::CanopyConfig;
use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a working directory.
    /// Precedence: defaults (lowest) -> `canopy.toml` -> environment (highest).
    pub fn load(workdir: &Path) -> Result<CanopyConfig, ConfigError> {
        let file = workdir.join("canopy.toml");
        let mut builder = Config::builder();
        if file.is_file() {
            builder = builder.add_source(File::from(file));
        }
        let builder = builder.add_source(environment_source());
        builder.build()?.try_deserialize()
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<CanopyConfig, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .add_source(environment_source());
        builder.build()?.try_deserialize()
    }

    /// Create default configuration.
    pub fn default() -> CanopyConfig {
        CanopyConfig::default()
    }
}

fn environment_source() -> Environment {
    Environment::with_prefix("CANOPY")
        .separator("__")
        .try_parsing(true)
}
