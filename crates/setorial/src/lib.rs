//! Facade crate for the Setorial front-ends.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `setorial` with the desired feature flags (`registration` is on by default).
//! - Call [`init`] once at startup and fetch slices from the returned [`Platform`].

use setorial_domain::config::AppConfig;
use setorial_domain::registry::{FeatureSlice, InitializedSlice};
use std::borrow::Cow;
use tracing::info;

pub use setorial_domain as domain;
pub use setorial_kernel as kernel;

/// Feature registry for runtime introspection.
pub mod features {
    #[cfg(feature = "registration")]
    pub use setorial_registration as registration;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "registration")]
        "registration",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[setorial_derive::setorial_error]
pub enum PlatformError {
    #[cfg(feature = "registration")]
    #[error("Registration slice failed to start{}: {source}", format_context(.context))]
    Registration { source: setorial_registration::RegistrationError, context: Option<Cow<'static, str>> },

    #[error("Internal platform error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Initialized feature slices together with the config they were built from.
#[derive(Debug)]
pub struct Platform {
    config: AppConfig,
    slices: Vec<InitializedSlice>,
}

impl Platform {
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Looks up an initialized slice by its concrete type.
    #[must_use]
    pub fn slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.slices.iter().find_map(InitializedSlice::downcast_ref::<T>)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// The registration slice.
    ///
    /// # Errors
    /// [`PlatformError::Internal`] if the slice was not registered by [`init`].
    #[cfg(feature = "registration")]
    pub fn registration(&self) -> Result<&features::registration::Registration, PlatformError> {
        self.slice().ok_or(PlatformError::Internal {
            message: "registration slice is not initialized".into(),
            context: None,
        })
    }
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &AppConfig) -> Result<Platform, PlatformError> {
    #[allow(unused_mut)]
    let mut slices = Vec::new();

    // Registration
    #[cfg(feature = "registration")]
    slices.push(features::registration::init(&config.form).context("form")?);

    info!(slices = slices.len(), features = ?features::ENABLED, "Platform initialized");

    Ok(Platform { config: config.clone(), slices })
}
