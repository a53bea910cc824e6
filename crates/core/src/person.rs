//! Person draft and input payload.
//!
//! A [`PersonDraft`] is the record handed to the enrichment orchestrator
//! before it is persisted. Name and surname are always present; the three
//! inferred fields are each independently present or absent.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::CoreError;

/// Client-supplied payload for creating or updating a person.
///
/// Missing `name`/`surname` deserialize to empty strings so that they are
/// rejected by validation rather than by the JSON extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct PersonInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Dmitriy")]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "surname is required"))]
    #[schema(example = "Ushakov")]
    pub surname: String,
    /// On update, omitting this keeps the stored value.
    #[schema(example = "Vasilevich")]
    pub patronymic: Option<String>,
}

impl PersonInput {
    /// Check required fields, mapping failures to [`CoreError::Validation`].
    pub fn validated(self) -> Result<Self, CoreError> {
        self.validate()?;
        Ok(self)
    }

    /// Build a fresh draft with no enrichment values.
    pub fn into_draft(self) -> PersonDraft {
        PersonDraft::new(self.name, self.surname, self.patronymic)
    }

    /// Build a fresh draft that replaces a stored person.
    ///
    /// An absent `patronymic` keeps the stored one. Enrichment values are
    /// never carried over: whatever the next enrichment run produces is what
    /// gets saved.
    pub fn into_draft_over(self, stored_patronymic: Option<String>) -> PersonDraft {
        let patronymic = self.patronymic.or(stored_patronymic);
        PersonDraft::new(self.name, self.surname, patronymic)
    }
}

/// A person record prior to persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonDraft {
    pub name: String,
    pub surname: String,
    pub patronymic: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
}

impl PersonDraft {
    pub fn new(name: String, surname: String, patronymic: Option<String>) -> Self {
        Self {
            name,
            surname,
            patronymic,
            age: None,
            gender: None,
            nationality: None,
        }
    }

    /// Whether any of the inferred fields is populated.
    pub fn has_enrichment(&self) -> bool {
        self.age.is_some() || self.gender.is_some() || self.nationality.is_some()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn input(name: &str, surname: &str) -> PersonInput {
        PersonInput {
            name: name.to_string(),
            surname: surname.to_string(),
            patronymic: None,
        }
    }

    #[test]
    fn valid_input_passes() {
        let checked = input("Dmitriy", "Ushakov").validated().unwrap();
        assert_eq!(checked.name, "Dmitriy");
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = input("", "Ushakov").validated().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "name is required");
    }

    #[test]
    fn both_missing_fields_are_reported() {
        let err = input("", "").validated().unwrap_err();
        assert_matches!(
            err,
            CoreError::Validation(msg) if msg == "name is required; surname is required"
        );
    }

    #[test]
    fn whitespace_name_is_kept_verbatim() {
        let checked = input(" Anna ", "Ivanova").validated().unwrap();
        assert_eq!(checked.into_draft().name, " Anna ");
    }

    #[test]
    fn missing_json_fields_become_empty_strings() {
        let parsed: PersonInput = serde_json::from_str(r#"{"surname":"Ivanov"}"#).unwrap();
        assert_eq!(parsed.name, "");
        assert!(parsed.validated().is_err());
    }

    #[test]
    fn new_draft_has_no_enrichment() {
        let draft = input("Olga", "Petrova").into_draft();
        assert!(!draft.has_enrichment());
        assert_eq!(draft.patronymic, None);
    }

    #[test]
    fn draft_over_keeps_stored_patronymic_when_absent() {
        let draft = input("Ivan", "Ivanov").into_draft_over(Some("Ivanovich".into()));
        assert_eq!(draft.patronymic.as_deref(), Some("Ivanovich"));
    }

    #[test]
    fn draft_over_replaces_patronymic_when_present() {
        let mut payload = input("Ivan", "Ivanov");
        payload.patronymic = Some("Petrovich".into());
        let draft = payload.into_draft_over(Some("Ivanovich".into()));
        assert_eq!(draft.patronymic.as_deref(), Some("Petrovich"));
    }

    #[test]
    fn draft_over_starts_without_enrichment() {
        let draft = input("Ivan", "Ivanov").into_draft_over(None);
        assert_eq!(draft.age, None);
        assert_eq!(draft.gender, None);
        assert_eq!(draft.nationality, None);
    }
}
