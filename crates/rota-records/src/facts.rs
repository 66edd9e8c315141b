//! Qualification and equipment facts, loaded from `facts.json`.
//!
//! Two predicates over record identifiers: which operations a surgeon can
//! perform, and which equipment an operation requires. Lookup only — there is
//! no inference here; whatever the file asserts is the whole truth.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Subject-keyed assertion maps.
///
/// On disk:
///
/// ```json
/// {
///   "can_perform": { "S001": ["OP001", "OP002"] },
///   "requires_equipment": { "OP001": ["Arthroscope"] }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactBase {
    #[serde(default)]
    can_perform: BTreeMap<String, BTreeSet<String>>,
    #[serde(default)]
    requires_equipment: BTreeMap<String, BTreeSet<String>>,
}

impl FactBase {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `facts.json` from a data directory, or an empty fact base when
    /// the file does not exist.
    pub fn load_optional(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join("facts.json");
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_path(&path)
    }

    pub fn surgeon_can_perform(&self, surgeon_id: &str, operation_id: &str) -> bool {
        self.can_perform
            .get(surgeon_id)
            .is_some_and(|ops| ops.contains(operation_id))
    }

    /// Equipment the operation requires, sorted.
    pub fn required_equipment(&self, operation_id: &str) -> Vec<String> {
        self.requires_equipment
            .get(operation_id)
            .map(|items| items.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn assert_can_perform(&mut self, surgeon_id: impl Into<String>, operation_id: impl Into<String>) {
        self.can_perform
            .entry(surgeon_id.into())
            .or_default()
            .insert(operation_id.into());
    }

    pub fn assert_requires_equipment(
        &mut self,
        operation_id: impl Into<String>,
        equipment: impl Into<String>,
    ) {
        self.requires_equipment
            .entry(operation_id.into())
            .or_default()
            .insert(equipment.into());
    }
}
