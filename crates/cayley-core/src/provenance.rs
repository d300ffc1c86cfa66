//! Provenance and schema descriptors attached to serialized tables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semantic version describing the schema of serialized payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes and documentation updates.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Records what a table was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BuildProvenance {
    /// Presentation text, when the group was built from one.
    pub presentation: Option<String>,
    /// Canonical hash of the normalised rule set.
    pub rules_hash: String,
    /// Word length bound used by the enumeration.
    pub word_length_limit: usize,
    /// Whether commutation relations were synthesised.
    pub abelian: bool,
    /// Version map for all tools involved in the build.
    pub tool_versions: BTreeMap<String, String>,
}
