#![deny(missing_docs)]
#![doc = "Element enumeration and Cayley table construction for finitely presented groups."]

/// Construction parameters and their YAML form.
pub mod config;
/// Text rendering of words and tables.
pub mod display;
/// Bounded search for canonical words.
pub mod enumerate;
/// The immutable group object.
pub mod group;
/// Canonical hashing of computed tables.
pub mod hash;
/// Presentation string parser.
pub mod presentation;
/// JSON snapshots of computed tables.
#[path = "serde.rs"]
pub mod serde_io;
/// Multiplication table construction.
pub mod table;
/// Group-law checks over a computed table.
pub mod verify;

pub use config::{GroupConfig, SaturationPolicy};
pub use display::{render_grid, render_word};
pub use enumerate::{enumerate, Enumeration, SearchLimits};
pub use group::Group;
pub use hash::table_hash;
pub use presentation::{parse_presentation, Presentation};
pub use serde_io::TableReport;
pub use table::{build_table, index_table};
pub use verify::{verify, VerificationReport, VerifyOptions};
