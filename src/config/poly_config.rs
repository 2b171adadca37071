// src/config/poly_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

use crate::core::coefficient::BackendType;

/// Main polyarith configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolyConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Coefficient backend (i64, i128, bigint, rational)
    pub backend: String,

    /// Output formatting
    pub output: OutputConfig,
}

/// How command results are printed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// "text" renders polynomials, "json" serializes them
    pub format: String,

    /// Append the stored length of each result
    pub show_degree: bool,
}

impl Default for PolyConfig {
    fn default() -> Self {
        PolyConfig {
            log_level: "info".to_string(),
            backend: "bigint".to_string(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: "text".to_string(),
            show_degree: false,
        }
    }
}

impl PolyConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("polyarith.toml").exists() {
            builder = builder.add_source(File::with_name("polyarith.toml"));
        } else if Path::new("polyarith.yaml").exists() {
            builder = builder.add_source(File::with_name("polyarith.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    /// The configured backend, if the name is recognised
    pub fn backend_type(&self) -> Option<BackendType> {
        BackendType::from_name(&self.backend)
    }

    pub fn json_output(&self) -> bool {
        self.output.format.eq_ignore_ascii_case("json")
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("backend", "bigint")?
            .set_default("output.format", "text")?
            .set_default("output.show_degree", false)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables (prefix: POLYARITH_, nested keys use __)
        let config = builder
            .add_source(
                Environment::with_prefix("POLYARITH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}
