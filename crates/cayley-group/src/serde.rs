use std::collections::BTreeMap;
use std::path::Path;

use cayley_core::{BuildProvenance, CayleyError, ErrorInfo, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::group::Group;
use crate::hash::table_hash;

/// Serialisable snapshot of a computed multiplication table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableReport {
    /// Schema version of this payload.
    pub schema_version: SchemaVersion,
    /// What the table was computed from.
    pub provenance: BuildProvenance,
    /// Generator characters in alphabet order.
    pub generators: Vec<char>,
    /// Identity character.
    pub identity: char,
    /// Number of elements.
    pub order: usize,
    /// Elements spelled letter by letter, identity first.
    pub elements: Vec<String>,
    /// Elements in power notation.
    pub rendered: Vec<String>,
    /// Products spelled letter by letter.
    pub cells: Vec<Vec<String>>,
    /// Products as element indices, present when the table is closed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indices: Option<Vec<Vec<usize>>>,
    /// Canonical hash of the elements and products.
    pub table_hash: String,
    /// Whether canonical words beyond the length limit were found.
    pub saturated: bool,
}

impl TableReport {
    /// Captures a group's table.
    pub fn from_group(group: &Group) -> Self {
        let alphabet = group.alphabet();
        let mut tool_versions = BTreeMap::new();
        tool_versions.insert(
            "cayley-group".to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        );
        Self {
            schema_version: SchemaVersion::default(),
            provenance: BuildProvenance {
                presentation: group.presentation().map(str::to_string),
                rules_hash: cayley_rewrite::rules_hash(group.rules()),
                word_length_limit: group.config().word_length_limit,
                abelian: group.config().abelian,
                tool_versions,
            },
            generators: alphabet.generators().to_vec(),
            identity: alphabet.identity(),
            order: group.order(),
            elements: group.elements().iter().map(|w| alphabet.spell(w)).collect(),
            rendered: group.elements().iter().map(|w| group.render(w)).collect(),
            cells: group
                .table()
                .iter()
                .map(|row| row.iter().map(|w| alphabet.spell(w)).collect())
                .collect(),
            indices: group.index_table().ok(),
            table_hash: table_hash(group),
            saturated: group.saturated(),
        }
    }
}

/// Serialises a table report into indented JSON.
pub fn report_to_json(report: &TableReport) -> Result<String, CayleyError> {
    serde_json::to_string_pretty(report)
        .map_err(|err| CayleyError::Serde(ErrorInfo::new("report-serialize", err.to_string())))
}

/// Deserialises a table report from JSON text.
pub fn report_from_json(json: &str) -> Result<TableReport, CayleyError> {
    serde_json::from_str(json)
        .map_err(|err| CayleyError::Serde(ErrorInfo::new("report-deserialize", err.to_string())))
}

/// Writes a JSON payload to disk.
pub fn write_json(path: &Path, json: &str) -> Result<(), CayleyError> {
    std::fs::write(path, json).map_err(|err| {
        CayleyError::Serde(
            ErrorInfo::new("json-write", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}

/// Reads a JSON payload from disk.
pub fn read_json(path: &Path) -> Result<String, CayleyError> {
    std::fs::read_to_string(path).map_err(|err| {
        CayleyError::Serde(
            ErrorInfo::new("json-read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}
