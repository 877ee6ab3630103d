//! Field addressing and values for draft edits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{ValidationError, YesNo};

/// A value written into a draft field.
///
/// Edits arrive as whatever the editing surface produced; conversion to
/// the field's type happens on write. Text is stored as-is, counts are
/// parsed from text, and flags accept `Oui`/`Non` style text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Count(u32),
    Flag(bool),
}

impl FieldValue {
    /// Converts to text for free-text fields.
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Count(n) => n.to_string(),
            FieldValue::Flag(flag) => YesNo::from(flag).label().to_string(),
        }
    }

    /// Converts to a non-negative integer for CPU/RAM style fields.
    pub fn as_count(&self) -> Option<u32> {
        match self {
            FieldValue::Count(n) => Some(*n),
            FieldValue::Text(text) => text.trim().parse().ok(),
            FieldValue::Flag(_) => None,
        }
    }

    /// Converts to a yes/no answer.
    pub fn as_yes_no(&self) -> Option<YesNo> {
        match self {
            FieldValue::Flag(flag) => Some(YesNo::from(*flag)),
            FieldValue::Text(text) => text.parse().ok(),
            FieldValue::Count(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Count(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// The scalar (non-list) fields of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarField {
    ProjectTitle,
    ProjectLead,
    TechnicalContact,
    DocumentDate,
    DocumentDescription,
    DocumentPurpose,
    HasFunctionalDiagram,
    DiagramDescription,
    ArchitectureDescription,
    AuthenticationDescription,
    TechnicalAdministration,
    FunctionalAdministration,
    InterApplicationAdministration,
    SensitiveData,
    Deployment,
    Migration,
    Monitoring,
    BackupRestore,
    Constraints,
    ServiceLevel,
}

impl ScalarField {
    /// All scalar fields, in document order.
    pub const ALL: [ScalarField; 20] = [
        ScalarField::ProjectTitle,
        ScalarField::ProjectLead,
        ScalarField::TechnicalContact,
        ScalarField::DocumentDate,
        ScalarField::DocumentDescription,
        ScalarField::DocumentPurpose,
        ScalarField::HasFunctionalDiagram,
        ScalarField::DiagramDescription,
        ScalarField::ArchitectureDescription,
        ScalarField::AuthenticationDescription,
        ScalarField::TechnicalAdministration,
        ScalarField::FunctionalAdministration,
        ScalarField::InterApplicationAdministration,
        ScalarField::SensitiveData,
        ScalarField::Deployment,
        ScalarField::Migration,
        ScalarField::Monitoring,
        ScalarField::BackupRestore,
        ScalarField::Constraints,
        ScalarField::ServiceLevel,
    ];

    /// Key of the field in the generation payload.
    pub fn wire_name(&self) -> &'static str {
        match self {
            ScalarField::ProjectTitle => "titre_projet",
            ScalarField::ProjectLead => "chef_projet",
            ScalarField::TechnicalContact => "contact_tech",
            ScalarField::DocumentDate => "date",
            ScalarField::DocumentDescription => "description_doc",
            ScalarField::DocumentPurpose => "objet_document",
            ScalarField::HasFunctionalDiagram => "has_schema",
            ScalarField::DiagramDescription => "schema_description",
            ScalarField::ArchitectureDescription => "description_architecture",
            ScalarField::AuthenticationDescription => "description_authentification",
            ScalarField::TechnicalAdministration => "description_administrationtechnique",
            ScalarField::FunctionalAdministration => "description_adminfonctionnelle",
            ScalarField::InterApplicationAdministration => "description_interapplicative",
            ScalarField::SensitiveData => "segmentation_dr",
            ScalarField::Deployment => "deploiement",
            ScalarField::Migration => "migration_reprise",
            ScalarField::Monitoring => "supervision",
            ScalarField::BackupRestore => "sauvegarde_restauration",
            ScalarField::Constraints => "contraintes",
            ScalarField::ServiceLevel => "niveau_services",
        }
    }

    /// Narrative fields are edited through the rich-text control and hold
    /// marked-up text.
    pub fn is_narrative(&self) -> bool {
        matches!(
            self,
            ScalarField::DocumentPurpose
                | ScalarField::DiagramDescription
                | ScalarField::ArchitectureDescription
                | ScalarField::AuthenticationDescription
                | ScalarField::TechnicalAdministration
                | ScalarField::FunctionalAdministration
                | ScalarField::InterApplicationAdministration
                | ScalarField::Deployment
                | ScalarField::Migration
                | ScalarField::Monitoring
                | ScalarField::BackupRestore
                | ScalarField::Constraints
                | ScalarField::ServiceLevel
        )
    }
}

impl fmt::Display for ScalarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for ScalarField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScalarField::ALL
            .into_iter()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("field", format!("unknown field '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_parse_from_trimmed_text() {
        assert_eq!(FieldValue::from(" 8 ").as_count(), Some(8));
        assert_eq!(FieldValue::from(16u32).as_count(), Some(16));
    }

    #[test]
    fn counts_reject_negative_and_garbage() {
        assert_eq!(FieldValue::from("-2").as_count(), None);
        assert_eq!(FieldValue::from("four").as_count(), None);
        assert_eq!(FieldValue::from("").as_count(), None);
        assert_eq!(FieldValue::from(true).as_count(), None);
    }

    #[test]
    fn flags_convert_to_template_text() {
        assert_eq!(FieldValue::from(true).into_text(), "Oui");
        assert_eq!(FieldValue::from(false).into_text(), "Non");
    }

    #[test]
    fn yes_no_accepts_text_and_flags() {
        assert_eq!(FieldValue::from("Oui").as_yes_no(), Some(YesNo::Yes));
        assert_eq!(FieldValue::from(false).as_yes_no(), Some(YesNo::No));
        assert_eq!(FieldValue::from(3u32).as_yes_no(), None);
    }

    #[test]
    fn scalar_fields_roundtrip_through_wire_names() {
        for field in ScalarField::ALL {
            assert_eq!(field.wire_name().parse::<ScalarField>().unwrap(), field);
        }
    }

    #[test]
    fn identity_fields_are_not_narrative() {
        assert!(!ScalarField::ProjectTitle.is_narrative());
        assert!(!ScalarField::SensitiveData.is_narrative());
        assert!(ScalarField::Deployment.is_narrative());
    }
}
