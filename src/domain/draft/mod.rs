//! Document draft - the in-memory aggregate being authored.
//!
//! - `collection` - Ordered row collections and their type-erased view
//! - `field` - Field values and scalar field addressing
//! - `rows` - Row records of every collection
//! - `aggregate` - The `DocumentDraft` aggregate and its edits
//! - `edit` - Edit commands and outcomes

mod aggregate;
mod collection;
mod edit;
mod field;
mod macros;
mod rows;

pub use aggregate::DocumentDraft;
pub use collection::{CollectionKind, FieldWrite, Row, RowCollection, RowRecord, Rows};
pub use edit::{DraftEdit, EditOutcome, EditResult, IgnoreReason};
pub use field::{FieldValue, ScalarField};
pub use rows::{
    Actor, BuildingBlock, Container, DataExchange, Database, DnsName, FunctionalDiagram,
    GlossaryTerm, InboundDependency, NetworkFlow, NfsShare, ObjectStorage, OutboundDependency,
    PhysicalComponent, ReferenceDocument, TechnologyChoice, VirtualMachine,
};
