#![deny(missing_docs)]
#![doc = "Relation normalisation, word reduction and fixpoint rewriting for group presentations."]

/// Canonical hashing helpers for rule sets.
pub mod hash;
/// Fixpoint rewriting of words under a rule set.
pub mod multiply;
/// Orientation of relations into rewrite rules.
pub mod normalize;
/// Canonical-form predicates used by enumeration.
pub mod reduce;
/// Relation tokenizer with power-notation expansion.
pub mod relation;
/// Rewrite rule and rule set containers.
pub mod rules;
/// JSON serialisation helpers for rule sets.
#[path = "serde.rs"]
pub mod serde_io;

pub use hash::rules_hash;
pub use multiply::{rewrite_all, Multiplier, DEFAULT_MAX_SWEEPS};
pub use normalize::normalize;
pub use reduce::{ends_in_redex, is_canonical, is_reducible};
pub use relation::{expand_powers, Relation};
pub use rules::{RewriteRule, RuleSet};
