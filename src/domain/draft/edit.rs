//! Draft edits and their outcomes.
//!
//! Edits never fail: an edit that cannot apply is reported as
//! [`EditOutcome::Ignored`] and leaves the draft as it was.

use crate::domain::foundation::RowId;
use crate::domain::tech_stack::{TechCategory, ToggleOutcome};

use super::{CollectionKind, DocumentDraft, FieldValue, ScalarField};

/// A single user edit of the draft.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEdit {
    AppendRow(CollectionKind),
    RemoveRow {
        collection: CollectionKind,
        index: usize,
    },
    UpdateField {
        collection: CollectionKind,
        index: usize,
        field: String,
        value: FieldValue,
    },
    UpdateScalar {
        field: ScalarField,
        value: FieldValue,
    },
    ToggleTechnology {
        category: TechCategory,
        product: String,
        version: String,
    },
    RemoveTechnology {
        category: TechCategory,
        product: String,
    },
}

/// What an edit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    RowAppended {
        collection: CollectionKind,
        index: usize,
        id: RowId,
    },
    RowRemoved {
        collection: CollectionKind,
        index: usize,
        id: RowId,
    },
    FieldUpdated {
        collection: CollectionKind,
        index: usize,
    },
    ScalarUpdated(ScalarField),
    TechnologyToggled {
        outcome: ToggleOutcome,
        /// VM rows whose OS was rewritten by the selection.
        vms_rewritten: usize,
    },
    TechnologyRemoved {
        removed: usize,
    },
    Ignored(IgnoreReason),
}

impl EditOutcome {
    /// True unless the edit was ignored.
    pub fn is_applied(&self) -> bool {
        !matches!(self, EditOutcome::Ignored(_))
    }
}

/// Why an edit left the draft unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    IndexOutOfRange {
        collection: CollectionKind,
        index: usize,
        len: usize,
    },
    /// Removing would take a mandatory collection below its floor.
    AtFloor {
        collection: CollectionKind,
        min: usize,
    },
    UnknownField {
        collection: CollectionKind,
        field: String,
    },
    UnparsableValue {
        field: String,
    },
}

/// A replacement snapshot produced by [`DocumentDraft::apply`].
#[derive(Debug, Clone)]
pub struct EditResult {
    pub draft: DocumentDraft,
    pub outcome: EditOutcome,
}
