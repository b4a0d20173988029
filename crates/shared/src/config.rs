//! Configuration management.

use serde::Deserialize;

use crate::kind::RequestKind;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, config::ConfigError>;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Dispatch filter configuration.
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

/// Dispatch filter configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DispatchConfig {
    /// Request kinds the filter classifies. Empty means all standard kinds.
    ///
    /// Names may be short (`current_exchange_rate`), struct names or full
    /// type names. Unknown names are kept but never match a request.
    #[serde(default)]
    pub allowed_requests: Vec<RequestKind>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}` and `FXROUTE_*` variables
    /// (`FXROUTE_DISPATCH__ALLOWED_REQUESTS=current_exchange_rate,historical_conversion`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> ConfigResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("FXROUTE")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("dispatch.allowed_requests")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from an inline TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or does not match
    /// the expected shape.
    pub fn from_toml_str(toml: &str) -> ConfigResult<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
