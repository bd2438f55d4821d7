use std::borrow::Cow;

/// A specialized [`RegistrationError`] enum of this crate.
///
/// Field validation failures are not errors of this kind; they live in
/// [`crate::FieldErrors`] and are shown next to the offending input.
#[setorial_derive::setorial_error]
pub enum RegistrationError {
    /// Invalid form timings.
    #[error("Registration config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A session operation needs something the caller did not provide (e.g., a runtime).
    #[error("Form session error{}: {message}", format_context(.context))]
    Session { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The snapshot channel closed while waiting for a state change.
    #[error("Form session closed{}: {source}", format_context(.context))]
    Closed { source: tokio::sync::watch::error::RecvError, context: Option<Cow<'static, str>> },
}
