//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identity of one row inside a draft collection.
///
/// Row ids exist for the editing surface only: they let a UI keep track of
/// a row across insertions and removals. They are never sent to the
/// generation backend and carry no cross-collection meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(Uuid);

impl RowId {
    /// Creates a new random RowId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a RowId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RowId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_ids_are_unique() {
        assert_ne!(RowId::new(), RowId::new());
    }

    #[test]
    fn row_id_roundtrips_through_display() {
        let id = RowId::new();
        let parsed: RowId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn row_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<RowId>().is_err());
    }
}
