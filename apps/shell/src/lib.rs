//! Command line front-end: fills the registration form from flags and submits it.

use anyhow::bail;
use clap::Parser;
use setorial::domain::config::LoggingConfig;
use setorial::domain::constants::FORM_TITLE;
use setorial::features::registration::{
    Field, FieldErrors, Phase, Registration, RegistrationDraft, SubmitOutcome,
};
use setorial_logger::{Logger, LoggerError};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "setorial", version, about = FORM_TITLE)]
pub struct Cli {
    /// Full name (letters and spaces only).
    #[arg(long, default_value_t)]
    pub name: String,

    /// Sector slug, e.g. `limpeza` or `tecnologia_informacao`.
    #[arg(long, default_value_t)]
    pub sector: String,

    /// Institutional address ending with ufs.br.
    #[arg(long, default_value_t)]
    pub email: String,

    /// Mobile number, e.g. "(79) 99999-8888".
    #[arg(long, default_value_t)]
    pub phone: String,

    /// Config file; defaults to `setorial.*` in the working directory.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn draft(&self) -> RegistrationDraft {
        RegistrationDraft {
            name: self.name.clone(),
            sector: self.sector.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Report {
    Registered(RegistrationDraft),
    Invalid(FieldErrors),
}

/// Types `draft` into a new form, submits it and waits for completion.
///
/// # Errors
/// Fails when no Tokio runtime is running or the session closes mid-flight.
/// Validation failures are not errors; they come back as [`Report::Invalid`].
pub async fn register(registration: &Registration, draft: RegistrationDraft) -> anyhow::Result<Report> {
    let session = registration.session();
    for field in Field::ALL {
        session.change(field, draft.value(field));
    }

    match session.submit()? {
        SubmitOutcome::Rejected(errors) => {
            for (field, error) in errors.iter() {
                warn!(field = field.label(), "{error}");
            }
            Ok(Report::Invalid(errors))
        },
        SubmitOutcome::AlreadySubmitting => bail!("a submission is already in flight"),
        SubmitOutcome::Accepted { after } => {
            info!(delay_ms = after.as_millis(), "Waiting for submission");
            let snapshot = session.wait_for(|s| s.phase == Phase::Succeeded).await?;
            let record = serde_json::to_string(&draft)?;
            info!(%record, "{}", snapshot.success_message.unwrap_or_default());
            Ok(Report::Registered(draft))
        },
    }
}

/// Installs the shell logger described by `config`.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_fill_the_draft() {
        let cli = Cli::try_parse_from([
            "setorial",
            "--name",
            "Ana Souza",
            "--sector",
            "limpeza",
            "--email",
            "ana@ufs.br",
            "--phone",
            "79 99999-8888",
        ])
        .unwrap();

        let draft = cli.draft();
        assert_eq!(draft.name, "Ana Souza");
        assert_eq!(draft.value(Field::Phone), "79 99999-8888");
        assert!(cli.config.is_none());
    }

    #[test]
    fn missing_flags_stay_blank() {
        let cli = Cli::try_parse_from(["setorial", "-c", "local.toml"]).unwrap();
        assert!(cli.draft().is_empty());
        assert_eq!(cli.config, Some(PathBuf::from("local.toml")));
    }
}
