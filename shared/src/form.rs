use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Front-end experience bracket offered by the form's select control
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Experience {
    #[serde(rename = "0-3 years")]
    ZeroToThree,
    #[serde(rename = "4-7 years")]
    FourToSeven,
    #[serde(rename = "8+ years")]
    EightPlus,
}

impl Experience {
    /// All brackets in the order they are offered
    pub const ALL: [Experience; 3] = [
        Experience::ZeroToThree,
        Experience::FourToSeven,
        Experience::EightPlus,
    ];

    /// Label shown to the user and used as the option value
    pub fn label(&self) -> &'static str {
        match self {
            Experience::ZeroToThree => "0-3 years",
            Experience::FourToSeven => "4-7 years",
            Experience::EightPlus => "8+ years",
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Experience {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Experience::ALL
            .into_iter()
            .find(|experience| experience.label() == s)
            .ok_or(())
    }
}

/// A validated application, handed back to whoever opened the modal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub experience: Experience,
    pub github: String, // Empty when the optional link was left blank
}

/// Raw control values exactly as typed, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub experience: String, // Empty until an option is selected
    pub github: String,
}

impl FormDraft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Experience => &self.experience,
            Field::Github => &self.github,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Experience => self.experience = value,
            Field::Github => self.github = value,
        }
    }
}

/// The four form controls, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Experience,
    Github,
}

impl Field {
    /// Control name and DOM id
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Experience => "experience",
            Field::Github => "github",
        }
    }

    /// Id of the element carrying this field's error message
    pub fn error_id(&self) -> String {
        format!("{}-error", self.id())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name / nickname *",
            Field::Email => "Email *",
            Field::Experience => "Front-end experience *",
            Field::Github => "GitHub link (optional)",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Github)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_labels_round_trip_through_from_str() {
        for experience in Experience::ALL {
            assert_eq!(experience.label().parse::<Experience>(), Ok(experience));
        }
        assert!("".parse::<Experience>().is_err());
        assert!("10 years".parse::<Experience>().is_err());
    }

    #[test]
    fn test_application_form_serializes_experience_as_label() {
        let form = ApplicationForm {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            experience: Experience::EightPlus,
            github: String::new(),
        };

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["experience"], "8+ years");
        assert_eq!(json["github"], "");
    }

    #[test]
    fn test_field_ids_and_error_ids() {
        assert_eq!(Field::Email.id(), "email");
        assert_eq!(Field::Github.error_id(), "github-error");
        assert!(Field::Experience.is_required());
        assert!(!Field::Github.is_required());
    }

    #[test]
    fn test_draft_set_and_value() {
        let mut draft = FormDraft::default();
        draft.set(Field::Experience, "4-7 years".to_string());
        assert_eq!(draft.value(Field::Experience), "4-7 years");
        assert_eq!(draft.value(Field::Name), "");
    }
}
