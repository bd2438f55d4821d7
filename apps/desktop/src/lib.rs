mod form;

pub use crate::form::{App, RegistrationForm};

use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use setorial::domain::config::LoggingConfig;
use setorial::domain::constants::FORM_TITLE;
use setorial::features::registration::Registration;
use setorial_logger::{Logger, LoggerError};

const STYLESHEET: &str = include_str!("../assets/form.css");

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self { title: FORM_TITLE.to_owned(), width: 480.0, height: 640.0 }
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// The entry point for launching the app. `registration` is provided as
    /// context to every component.
    pub fn launch(self, registration: Registration, root: fn() -> Element) {
        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(custom_head());

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(registration.clone()))
            .launch(root);
    }
}

fn custom_head() -> String {
    format!(
        r#"<meta name="viewport" content="width=device-width, initial-scale=1.0"><style>{STYLESHEET}</style>"#
    )
}

/// Installs the desktop logger described by `config`.
///
/// # Errors
/// See [`Logger::from_settings`].
pub fn init_logger(config: &LoggingConfig) -> Result<Logger, LoggerError> {
    Logger::from_settings(
        env!("CARGO_PKG_NAME"),
        &config.level,
        config.console,
        config.directory.as_deref(),
        config.json,
    )
}
