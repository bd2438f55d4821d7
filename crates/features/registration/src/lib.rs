//! # Registration
//!
//! The sectoral manager registration form: field validators, a synchronous
//! form reducer ([`FormController`]) and a Tokio driven [`FormSession`] that
//! simulates the network round trip and expires the success message.
//!
//! ```rust
//! use setorial_registration::{Field, validators::validate};
//!
//! assert!(validate(Field::Email, "gestor@dcomp.ufs.br").is_ok());
//! assert!(validate(Field::Phone, "79 8888-7777").is_err());
//! ```

mod controller;
mod draft;
mod error;
mod field;
mod session;
pub mod validators;

pub use crate::controller::{Effect, FormController, FormEvent, FormSnapshot, FormTimings, Phase, SubmitOutcome};
pub use crate::draft::{FieldErrors, RegistrationDraft};
pub use crate::error::{RegistrationError, RegistrationErrorExt};
pub use crate::field::{Field, Sector};
pub use crate::session::FormSession;
pub use crate::validators::{ErrorKind, FieldError};

use setorial_kernel::domain::config::FormConfig;
use setorial_kernel::domain::registry::InitializedSlice;
use tracing::info;

/// Registration feature state shared by every form opened by a front-end.
#[setorial_derive::setorial_slice]
pub struct Registration {
    pub timings: FormTimings,
}

impl Registration {
    /// Opens a fresh form with the configured timings.
    #[must_use]
    pub fn session(&self) -> FormSession {
        FormSession::new(self.timings)
    }
}

/// Validates the form timings and builds the [`Registration`] slice.
///
/// # Errors
/// [`RegistrationError::Config`] when `success_ttl_ms` is zero, which would
/// hide the success message before it can be seen.
pub fn init(config: &FormConfig) -> Result<InitializedSlice, RegistrationError> {
    if config.success_ttl_ms == 0 {
        return Err(RegistrationError::Config {
            message: "success_ttl_ms must be greater than zero".into(),
            context: Some("form".into()),
        });
    }

    let timings = FormTimings::from(config);
    info!(
        submit_delay_ms = config.submit_delay_ms,
        success_ttl_ms = config.success_ttl_ms,
        "Registration slice initialized"
    );

    Ok(InitializedSlice::new(Registration::new(RegistrationInner { timings })))
}
