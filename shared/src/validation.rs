use crate::form::{ApplicationForm, Experience, Field, FormDraft};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

/// Minimum length of the name field, in UTF-16 code units like the
/// browser's `minlength`
pub const NAME_MIN_LENGTH: usize = 2;

// ASCII letters only
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern is valid")
});

static GITHUB_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://.+").expect("url pattern is valid"));

/// Per-field validation failures; the Display text is what the user sees
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter your name")]
    NameRequired,
    #[error("Name must be at least {min} characters")]
    NameTooShort { min: usize },
    #[error("Please enter your email")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Please select your experience")]
    ExperienceRequired,
    #[error("Unknown experience option: {0}")]
    ExperienceUnknown(String),
    #[error("Please enter a valid URL (starting with http:// or https://)")]
    GithubInvalid,
}

impl FieldError {
    /// The control this error belongs to
    pub fn field(&self) -> Field {
        match self {
            FieldError::NameRequired | FieldError::NameTooShort { .. } => Field::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => Field::Email,
            FieldError::ExperienceRequired | FieldError::ExperienceUnknown(_) => Field::Experience,
            FieldError::GithubInvalid => Field::Github,
        }
    }
}

/// At most one error per field, kept in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first error reported for a field wins
    pub fn push(&mut self, error: FieldError) {
        self.errors.entry(error.field()).or_insert(error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn validate_name(name: &str) -> Result<(), FieldError> {
    if name.is_empty() {
        return Err(FieldError::NameRequired);
    }
    if name.encode_utf16().count() < NAME_MIN_LENGTH {
        return Err(FieldError::NameTooShort { min: NAME_MIN_LENGTH });
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if email.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

pub fn validate_experience(experience: &str) -> Result<Experience, FieldError> {
    if experience.is_empty() {
        return Err(FieldError::ExperienceRequired);
    }
    experience
        .parse()
        .map_err(|_| FieldError::ExperienceUnknown(experience.to_string()))
}

/// The GitHub link is optional, so an empty value passes
pub fn validate_github(github: &str) -> Result<(), FieldError> {
    if github.is_empty() || GITHUB_PATTERN.is_match(github) {
        Ok(())
    } else {
        Err(FieldError::GithubInvalid)
    }
}

/// Check a single field of the draft
pub fn validate_field(draft: &FormDraft, field: Field) -> Result<(), FieldError> {
    let value = draft.value(field);
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Experience => validate_experience(value).map(|_| ()),
        Field::Github => validate_github(value),
    }
}

impl FormDraft {
    /// Validate every field, collecting one error per invalid field
    pub fn validate(&self) -> Result<ApplicationForm, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for field in [Field::Name, Field::Email, Field::Github] {
            if let Err(e) = validate_field(self, field) {
                errors.push(e);
            }
        }

        let experience = match validate_experience(&self.experience) {
            Ok(experience) => Some(experience),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        match experience {
            Some(experience) if errors.is_empty() => Ok(ApplicationForm {
                name: self.name.clone(),
                email: self.email.clone(),
                experience,
                github: self.github.clone(),
            }),
            _ => Err(errors),
        }
    }
}
