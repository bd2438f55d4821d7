use crate::field::{Field, Sector};
use crate::validators::FieldError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The values currently typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationDraft {
    pub name: String,
    /// Sector slug as selected, empty when nothing is chosen.
    pub sector: String,
    pub email: String,
    pub phone: String,
}

impl RegistrationDraft {
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Sector => &self.sector,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// The selected sector, when the value is one of the known options.
    #[must_use]
    pub fn sector(&self) -> Option<Sector> {
        self.sector.parse().ok()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.value(field).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Sector => &mut self.sector,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        }
    }
}

/// Current validation failures, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Records the outcome of validating `field`: a failure replaces the
    /// previous one, a success removes it.
    pub fn record(&mut self, field: Field, outcome: Result<(), FieldError>) {
        match outcome {
            Ok(()) => {
                self.0.remove(&field);
            },
            Err(error) => {
                self.0.insert(field, error);
            },
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Failures in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self(iter.into_iter().map(|error| (error.field(), error)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_read_by_field() {
        let mut draft = RegistrationDraft::default();
        assert!(draft.is_empty());

        draft.set(Field::Sector, "manutencao");
        draft.set(Field::Phone, String::from("79 99999-8888"));

        assert_eq!(draft.value(Field::Sector), "manutencao");
        assert_eq!(draft.sector(), Some(Sector::Maintenance));
        assert_eq!(draft.phone, "79 99999-8888");
        assert!(!draft.is_empty());

        draft.clear();
        assert_eq!(draft, RegistrationDraft::default());
    }

    #[test]
    fn unknown_sector_is_not_parsed() {
        let draft = RegistrationDraft { sector: "cozinha".to_owned(), ..RegistrationDraft::default() };
        assert_eq!(draft.sector(), None);
    }

    #[test]
    fn record_replaces_and_removes() {
        let mut errors = FieldErrors::default();
        errors.record(Field::Name, Err(FieldError::NameEmpty));
        errors.record(Field::Name, Err(FieldError::NameInvalidChars));
        assert_eq!(errors.get(Field::Name), Some(FieldError::NameInvalidChars));
        assert_eq!(errors.len(), 1);

        errors.record(Field::Name, Ok(()));
        assert!(errors.is_empty());
    }

    #[test]
    fn iteration_follows_field_order() {
        let errors: FieldErrors =
            [FieldError::PhoneEmpty, FieldError::NameEmpty, FieldError::EmailInvalidFormat].into_iter().collect();
        let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, [Field::Name, Field::Email, Field::Phone]);
    }
}
