use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration. Loaded from environment variables with the
/// prefix `ENGAGE_DESK__` and an optional `engage-desk.toml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Path of the persisted state document.
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    /// Default tracing filter when RUST_LOG is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and optional config file.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("engage-desk").required(false))
            .add_source(
                config::Environment::with_prefix("ENGAGE_DESK")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/state.json")
}

fn default_log_filter() -> String {
    "engage_desk=info,engage_automation=info,engage_store=info".to_string()
}
