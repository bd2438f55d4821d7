//! Field validators.
//!
//! Each validator is a pure function of the raw input. Blank checks look at the
//! trimmed value; pattern checks look at the value exactly as typed, so
//! surrounding whitespace in an email or phone is a format error.

use crate::draft::{FieldErrors, RegistrationDraft};
use crate::field::Field;
use regex::Regex;
use setorial_kernel::domain::constants::INSTITUTIONAL_DOMAIN;
use std::sync::LazyLock;

/// Letters (ASCII and Latin-1 accented), plus whitespace. `×` and `÷` are excluded.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ\s]+$").expect("name pattern must compile"));

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"^[^\s@]+@(?:[^\s@]+\.)*{}$", regex::escape(INSTITUTIONAL_DOMAIN));
    Regex::new(&pattern).expect("email pattern must compile")
});

/// Two-digit area code, optionally parenthesized, then a mobile number starting with 9.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\([0-9]{2}\)|[0-9]{2}) ?9[0-9]{3,4}-?[0-9]{4}$").expect("phone pattern must compile")
});

/// Coarse classification of a [`FieldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Empty,
    InvalidChars,
    InvalidFormat,
}

/// A validation failure. The display text is the message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum FieldError {
    #[error("Nome é obrigatório")]
    NameEmpty,
    #[error("Nome deve conter apenas letras")]
    NameInvalidChars,
    #[error("Setor de atuação é obrigatório")]
    SectorEmpty,
    #[error("E-mail é obrigatório")]
    EmailEmpty,
    #[error("O e-mail deve terminar com ufs.br")]
    EmailInvalidFormat,
    #[error("Telefone é obrigatório")]
    PhoneEmpty,
    #[error("Formato de telefone inválido. Use (DDD) 9 + 8 dígitos ou DDD 9 + 8 dígitos")]
    PhoneInvalidFormat,
}

impl FieldError {
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::NameEmpty | Self::NameInvalidChars => Field::Name,
            Self::SectorEmpty => Field::Sector,
            Self::EmailEmpty | Self::EmailInvalidFormat => Field::Email,
            Self::PhoneEmpty | Self::PhoneInvalidFormat => Field::Phone,
        }
    }

    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::NameEmpty | Self::SectorEmpty | Self::EmailEmpty | Self::PhoneEmpty => ErrorKind::Empty,
            Self::NameInvalidChars => ErrorKind::InvalidChars,
            Self::EmailInvalidFormat | Self::PhoneInvalidFormat => ErrorKind::InvalidFormat,
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Rejects blank names and anything other than letters and spaces.
///
/// # Errors
/// [`FieldError::NameEmpty`] or [`FieldError::NameInvalidChars`].
pub fn validate_name(value: &str) -> Result<(), FieldError> {
    if is_blank(value) {
        Err(FieldError::NameEmpty)
    } else if !NAME_PATTERN.is_match(value) {
        Err(FieldError::NameInvalidChars)
    } else {
        Ok(())
    }
}

/// Only presence is checked; a sector value outside the option list still passes.
///
/// # Errors
/// [`FieldError::SectorEmpty`].
pub fn validate_sector(value: &str) -> Result<(), FieldError> {
    if is_blank(value) { Err(FieldError::SectorEmpty) } else { Ok(()) }
}

/// Accepts `local@ufs.br` and `local@<subdomains>.ufs.br`.
///
/// # Errors
/// [`FieldError::EmailEmpty`] or [`FieldError::EmailInvalidFormat`].
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if is_blank(value) {
        Err(FieldError::EmailEmpty)
    } else if !EMAIL_PATTERN.is_match(value) {
        Err(FieldError::EmailInvalidFormat)
    } else {
        Ok(())
    }
}

/// Accepts `(79) 99999-8888`, `79 99999-8888`, `79999998888` and the
/// eight-digit variants (`7999998888`).
///
/// # Errors
/// [`FieldError::PhoneEmpty`] or [`FieldError::PhoneInvalidFormat`].
pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    if is_blank(value) {
        Err(FieldError::PhoneEmpty)
    } else if !PHONE_PATTERN.is_match(value) {
        Err(FieldError::PhoneInvalidFormat)
    } else {
        Ok(())
    }
}

/// Dispatches to the validator of `field`.
///
/// # Errors
/// The [`FieldError`] of that field's validator.
pub fn validate(field: Field, value: &str) -> Result<(), FieldError> {
    match field {
        Field::Name => validate_name(value),
        Field::Sector => validate_sector(value),
        Field::Email => validate_email(value),
        Field::Phone => validate_phone(value),
    }
}

/// Runs every validator and collects the failures.
#[must_use]
pub fn validate_draft(draft: &RegistrationDraft) -> FieldErrors {
    Field::ALL.into_iter().filter_map(|field| validate(field, draft.value(field)).err()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_letters_and_spaces() {
        assert_eq!(validate_name("João da Silva"), Ok(()));
        assert_eq!(validate_name("Ângela Müller"), Ok(()));
        assert_eq!(validate_name("Ana"), Ok(()));
    }

    #[test]
    fn name_rejects_blank_and_symbols() {
        assert_eq!(validate_name(""), Err(FieldError::NameEmpty));
        assert_eq!(validate_name("   "), Err(FieldError::NameEmpty));
        assert_eq!(validate_name("João123"), Err(FieldError::NameInvalidChars));
        assert_eq!(validate_name("Ana-Maria"), Err(FieldError::NameInvalidChars));
        assert_eq!(validate_name("a×b"), Err(FieldError::NameInvalidChars));
    }

    #[test]
    fn sector_only_checks_presence() {
        assert_eq!(validate_sector(""), Err(FieldError::SectorEmpty));
        assert_eq!(validate_sector(" \t"), Err(FieldError::SectorEmpty));
        assert_eq!(validate_sector("limpeza"), Ok(()));
        assert_eq!(validate_sector("qualquer"), Ok(()));
    }

    #[test]
    fn email_requires_institutional_domain() {
        assert_eq!(validate_email("ana@ufs.br"), Ok(()));
        assert_eq!(validate_email("ana@dcomp.ufs.br"), Ok(()));
        assert_eq!(validate_email("ana@a.b.ufs.br"), Ok(()));
        assert_eq!(validate_email("a.b@sub.ufs.br"), Ok(()));

        assert_eq!(validate_email(""), Err(FieldError::EmailEmpty));
        assert_eq!(validate_email("ana@gmail.com"), Err(FieldError::EmailInvalidFormat));
        assert_eq!(validate_email("ana@ufs.br.com"), Err(FieldError::EmailInvalidFormat));
        assert_eq!(validate_email("ana@xufs.br"), Err(FieldError::EmailInvalidFormat));
        assert_eq!(validate_email("a@ufsbr"), Err(FieldError::EmailInvalidFormat));
        assert_eq!(validate_email("ana@@ufs.br"), Err(FieldError::EmailInvalidFormat));
        assert_eq!(validate_email("a na@ufs.br"), Err(FieldError::EmailInvalidFormat));
        assert_eq!(validate_email(" ana@ufs.br"), Err(FieldError::EmailInvalidFormat));
    }

    #[test]
    fn phone_accepts_known_layouts() {
        for phone in ["(79) 99999-8888", "79 99999-8888", "79999998888", "7999998888", "(79)999998888", "79 9999-8888"] {
            assert_eq!(validate_phone(phone), Ok(()), "{phone}");
        }
    }

    #[test]
    fn phone_rejects_other_layouts() {
        assert_eq!(validate_phone(""), Err(FieldError::PhoneEmpty));
        for phone in ["79 8888-7777", "(79 99999-8888", "79) 99999-8888", "799999988889", "99999-8888", "(79) 99999 8888"] {
            assert_eq!(validate_phone(phone), Err(FieldError::PhoneInvalidFormat), "{phone}");
        }
    }

    #[test]
    fn errors_know_their_field_and_kind() {
        assert_eq!(FieldError::PhoneInvalidFormat.field(), Field::Phone);
        assert_eq!(FieldError::SectorEmpty.kind(), ErrorKind::Empty);
        assert_eq!(FieldError::NameInvalidChars.kind(), ErrorKind::InvalidChars);
        assert_eq!(FieldError::EmailInvalidFormat.to_string(), "O e-mail deve terminar com ufs.br");
    }

    #[test]
    fn empty_draft_fails_every_field() {
        let errors = validate_draft(&RegistrationDraft::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::Name), Some(FieldError::NameEmpty));
        assert_eq!(errors.get(Field::Phone), Some(FieldError::PhoneEmpty));
    }
}
