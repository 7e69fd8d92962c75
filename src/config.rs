//! Layered configuration.
//!
//! Settings resolve in three layers, later layers winning:
//! - built-in defaults
//! - a TOML file (`secondmax.toml` in the working directory, or the path
//!   given with `--config`)
//! - environment variables prefixed with `SECONDMAX_`, with double
//!   underscores separating nested levels:
//!   `SECONDMAX_OUTPUT__JSON=true` sets `output.json`,
//!   `SECONDMAX_LOGGING__DEFAULT=debug` sets `logging.default`.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Default settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "secondmax.toml";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OutputConfig {
    /// Emit the JSON envelope instead of plain text
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Default log level filter
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module level overrides, e.g. `secondmax::parse = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Settings {
    /// Load configuration from all sources, layering file and environment
    /// over defaults. A missing file is not an error.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        Self::load_from(SETTINGS_FILE)
    }

    /// Load configuration with an explicit settings file path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            // Double underscore becomes a dot so env vars can reach
            // nested fields; single underscores stay inside field names.
            .merge(Env::prefixed("SECONDMAX_").map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
            .extract()
            .map_err(Box::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_quiet_text_output() {
        let settings = Settings::default();
        assert!(!settings.output.json);
        assert_eq!(settings.logging.default, "warn");
        assert!(settings.logging.modules.is_empty());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::load_from("/nonexistent/secondmax.toml").unwrap();
        assert!(!settings.output.json);
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(
            &path,
            r#"
[output]
json = true

[logging]
default = "info"

[logging.modules]
"secondmax::parse" = "debug"
"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert!(settings.output.json);
        assert_eq!(settings.logging.default, "info");
        assert_eq!(
            settings.logging.modules.get("secondmax::parse").unwrap(),
            "debug"
        );
    }
}
