use crate::constants::{DEFAULT_SUBMIT_DELAY_MS, DEFAULT_SUCCESS_TTL_MS};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Top-level application configuration shared by the front-ends.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub form: FormConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Timings of the simulated submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Delay between an accepted submit and its completion.
    pub submit_delay_ms: u64,
    /// How long the success message stays visible.
    pub success_ttl_ms: u64,
}

impl FormConfig {
    #[must_use]
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    #[must_use]
    pub const fn success_ttl(&self) -> Duration {
        Duration::from_millis(self.success_ttl_ms)
    }
}

/// Logger settings consumed by the binaries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`trace`..`error`), overridden by `RUST_LOG`.
    pub level: String,
    pub console: bool,
    /// Enables rolling file output into this directory.
    pub directory: Option<PathBuf>,
    /// Writes file output as JSON lines.
    pub json: bool,
}

// --- Default ---

impl Default for FormConfig {
    fn default() -> Self {
        Self { submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS, success_ttl_ms: DEFAULT_SUCCESS_TTL_MS }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), console: true, directory: None, json: false }
    }
}
