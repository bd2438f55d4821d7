use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment prefix for overrides (`SETORIAL__FORM__SUBMIT_DELAY_MS=500`).
pub const ENV_PREFIX: &str = "SETORIAL";
/// Config file looked up when no path is given (any supported extension).
pub const DEFAULT_CONFIG_FILE: &str = "setorial";

/// Custom error type for config loading.
#[setorial_derive::setorial_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration by layering environment overrides on an optional file.
///
/// 1. **Base File**: `path`, or [`DEFAULT_CONFIG_FILE`] in the working directory.
///    The file is optional; a missing file leaves every field at its serde default.
/// 2. **Environment Overrides**: variables prefixed with `SETORIAL__`, nested with
///    double underscores (`SETORIAL__LOGGING__LEVEL` maps to `logging.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is malformed or a value does not
/// match the structure of `T`.
///
/// # Example
/// ```rust,no_run
/// use setorial_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
