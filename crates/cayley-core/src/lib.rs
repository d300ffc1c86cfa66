#![deny(missing_docs)]
#![doc = "Core symbols, words and error types for the Cayley table engine."]

pub mod errors;
pub mod provenance;
pub mod rng;
mod alphabet;
mod word;

pub use alphabet::Alphabet;
pub use errors::{CayleyError, ErrorInfo};
pub use provenance::{BuildProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, SampleRng};
pub use word::{Symbol, Word};

/// Identity character used when the caller does not configure one.
pub const DEFAULT_IDENTITY: char = 'e';

/// Characters with a syntactic role in presentations and relations.
pub const RESERVED_CHARS: &[char] = &['^', '=', ',', '|', '<', '>'];
