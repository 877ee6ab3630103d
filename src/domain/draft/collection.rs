//! Ordered row collections with stable row identity.
//!
//! Every list section of a draft is a [`Rows<T>`]: an insertion-ordered
//! sequence of records, each tagged with a [`RowId`]. On the wire a
//! collection is just the list of records; ids are local to the editing
//! session and are reassigned when a draft is deserialized.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{RowId, ValidationError};

use super::FieldValue;

/// The list sections of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    ReferenceDocuments,
    Glossary,
    Actors,
    FunctionalDiagrams,
    BuildingBlocks,
    DataExchanges,
    PhysicalComponents,
    NetworkFlows,
    Technologies,
    DnsNames,
    InboundDependencies,
    OutboundDependencies,
    VirtualMachines,
    Containers,
    Databases,
    ObjectStorage,
    NfsShares,
}

impl CollectionKind {
    /// All collections, in document order.
    pub const ALL: [CollectionKind; 17] = [
        CollectionKind::ReferenceDocuments,
        CollectionKind::Glossary,
        CollectionKind::Actors,
        CollectionKind::FunctionalDiagrams,
        CollectionKind::BuildingBlocks,
        CollectionKind::DataExchanges,
        CollectionKind::PhysicalComponents,
        CollectionKind::NetworkFlows,
        CollectionKind::Technologies,
        CollectionKind::DnsNames,
        CollectionKind::InboundDependencies,
        CollectionKind::OutboundDependencies,
        CollectionKind::VirtualMachines,
        CollectionKind::Containers,
        CollectionKind::Databases,
        CollectionKind::ObjectStorage,
        CollectionKind::NfsShares,
    ];

    /// Key of the collection in the generation payload.
    pub fn wire_name(&self) -> &'static str {
        match self {
            CollectionKind::ReferenceDocuments => "documents_reference",
            CollectionKind::Glossary => "glossaire",
            CollectionKind::Actors => "acteurs",
            CollectionKind::FunctionalDiagrams => "schemas",
            CollectionKind::BuildingBlocks => "briques_fonctionnelles",
            CollectionKind::DataExchanges => "echanges_donnees",
            CollectionKind::PhysicalComponents => "composants_physiques",
            CollectionKind::NetworkFlows => "flux_reseau",
            CollectionKind::Technologies => "choix_technologiques",
            CollectionKind::DnsNames => "dns_nom",
            CollectionKind::InboundDependencies => "dependances_externes",
            CollectionKind::OutboundDependencies => "dependance_app_externes",
            CollectionKind::VirtualMachines => "vms",
            CollectionKind::Containers => "conteneurs",
            CollectionKind::Databases => "bases_donnees",
            CollectionKind::ObjectStorage => "stockage",
            CollectionKind::NfsShares => "partages_nfs",
        }
    }

    /// Minimum number of rows `remove_row` leaves in place.
    ///
    /// Actors and virtual machines are the two mandatory sections of the
    /// document; removing their last row is a no-op.
    pub fn min_rows(&self) -> usize {
        match self {
            CollectionKind::Actors | CollectionKind::VirtualMachines => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for CollectionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CollectionKind::ALL
            .into_iter()
            .find(|kind| kind.wire_name() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("collection", format!("unknown collection '{}'", s))
            })
    }
}

/// A record type stored in one of the draft collections.
///
/// `Default` is the collection's row template: `append_row` inserts
/// `T::default()`.
pub trait RowRecord:
    Clone + Default + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync
{
    /// Writes `value` into the field named `field` (payload key).
    fn set_field(&mut self, field: &str, value: FieldValue) -> FieldWrite;
}

/// Result of writing a single field of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWrite {
    /// The value was stored.
    Written,
    /// The record has no field with that name.
    UnknownField,
    /// The value could not be converted to the field's type.
    Rejected,
}

/// One row of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<T> {
    id: RowId,
    value: T,
}

impl<T> Row<T> {
    /// Returns the row's stable identity.
    pub fn id(&self) -> RowId {
        self.id
    }

    /// Returns the record.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the record mutably.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

/// An insertion-ordered list of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Rows<T> {
    rows: Vec<Row<T>>,
}

impl<T> Rows<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Appends a record at the end and returns its id.
    pub fn push(&mut self, value: T) -> RowId {
        let id = RowId::new();
        self.rows.push(Row { id, value });
        id
    }

    /// Removes the row at `index`, keeping the order of the remaining rows.
    pub fn remove(&mut self, index: usize) -> Option<Row<T>> {
        if index < self.rows.len() {
            Some(self.rows.remove(index))
        } else {
            None
        }
    }

    /// Keeps only the rows matching the predicate, in order.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.rows.retain(|row| keep(&row.value));
    }

    /// Returns the row at `index`.
    pub fn get(&self, index: usize) -> Option<&Row<T>> {
        self.rows.get(index)
    }

    /// Returns the row at `index` mutably.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Row<T>> {
        self.rows.get_mut(index)
    }

    /// Returns the index of the row with the given id.
    pub fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    /// Returns the index of the first record matching the predicate.
    pub fn position_where(&self, predicate: impl Fn(&T) -> bool) -> Option<usize> {
        self.rows.iter().position(|row| predicate(&row.value))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the rows in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Row<T>> {
        self.rows.iter()
    }

    /// Iterates over the records in display order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().map(|row| &row.value)
    }

    /// Iterates over the records mutably in display order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.rows.iter_mut().map(|row| &mut row.value)
    }
}

impl<T: Clone> Rows<T> {
    /// Clones the records, dropping row identities.
    pub fn to_values(&self) -> Vec<T> {
        self.values().cloned().collect()
    }
}

impl<T> Default for Rows<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Rows<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut rows = Rows::new();
        for value in iter {
            rows.push(value);
        }
        rows
    }
}

impl<T: Serialize> Serialize for Rows<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Rows<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}

/// Type-erased view of a collection, used to dispatch edits by
/// [`CollectionKind`].
pub trait RowCollection {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends the collection's row template and returns the new row's id.
    fn append_template(&mut self) -> RowId;

    /// Removes the row at `index`, returning its id.
    fn remove_at(&mut self, index: usize) -> Option<RowId>;

    /// Writes a field of the row at `index`. `None` when the index is out of range.
    fn set_field(&mut self, index: usize, field: &str, value: FieldValue) -> Option<FieldWrite>;
}

impl<T: RowRecord> RowCollection for Rows<T> {
    fn len(&self) -> usize {
        Rows::len(self)
    }

    fn append_template(&mut self) -> RowId {
        self.push(T::default())
    }

    fn remove_at(&mut self, index: usize) -> Option<RowId> {
        self.remove(index).map(|row| row.id)
    }

    fn set_field(&mut self, index: usize, field: &str, value: FieldValue) -> Option<FieldWrite> {
        self.get_mut(index)
            .map(|row| row.value.set_field(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_preserve_insertion_order() {
        let rows: Rows<&str> = ["a", "b", "c"].into_iter().collect();
        assert_eq!(rows.values().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn removing_keeps_remaining_order_and_ids() {
        let mut rows: Rows<&str> = ["a", "b", "c", "d"].into_iter().collect();
        let id_c = rows.get(2).unwrap().id();
        let removed = rows.remove(1).unwrap();
        assert_eq!(*removed.value(), "b");
        assert_eq!(rows.values().copied().collect::<Vec<_>>(), vec!["a", "c", "d"]);
        assert_eq!(rows.position(id_c), Some(1));
    }

    #[test]
    fn removing_out_of_range_returns_none() {
        let mut rows: Rows<&str> = ["a"].into_iter().collect();
        assert!(rows.remove(1).is_none());
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn rows_serialize_as_plain_list() {
        let rows: Rows<u32> = [1, 2, 3].into_iter().collect();
        assert_eq!(serde_json::to_string(&rows).unwrap(), "[1,2,3]");
    }

    #[test]
    fn rows_deserialize_with_fresh_ids() {
        let rows: Rows<u32> = serde_json::from_str("[7,8]").unwrap();
        assert_eq!(rows.to_values(), vec![7, 8]);
        assert_ne!(rows.get(0).unwrap().id(), rows.get(1).unwrap().id());
    }

    #[test]
    fn collection_kind_parses_from_wire_name() {
        for kind in CollectionKind::ALL {
            assert_eq!(kind.wire_name().parse::<CollectionKind>().unwrap(), kind);
        }
        assert!("nope".parse::<CollectionKind>().is_err());
    }

    #[test]
    fn only_actors_and_vms_have_a_floor() {
        for kind in CollectionKind::ALL {
            let expected = matches!(kind, CollectionKind::Actors | CollectionKind::VirtualMachines);
            assert_eq!(kind.min_rows() == 1, expected, "{}", kind);
        }
    }
}
