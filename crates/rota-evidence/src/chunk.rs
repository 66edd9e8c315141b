//! The unit of indexed text: one chunk per record or policy blob.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A free-text evidence chunk with an identifier and display tags.
///
/// Tags carry provenance (`type`, record ids) for the front end to filter or
/// label hits; they play no part in ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceChunk {
    pub chunk_id: String,
    pub text: String,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl EvidenceChunk {
    pub fn new(chunk_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chunk_id: chunk_id.into(),
            text: text.into(),
            tags: BTreeMap::new(),
        }
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }
}
