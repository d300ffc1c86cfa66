use cayley_core::{CayleyError, ErrorInfo, DEFAULT_IDENTITY};
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters governing group construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Character standing for the neutral element.
    #[serde(default = "default_identity")]
    pub identity: char,
    /// Synthesise commutation relations for every pair of generators.
    #[serde(default)]
    pub abelian: bool,
    /// Longest word the enumeration keeps.
    #[serde(default = "default_word_length_limit")]
    pub word_length_limit: usize,
    /// Maximum number of search nodes visited during enumeration.
    #[serde(default = "default_max_search_nodes")]
    pub max_search_nodes: usize,
    /// Maximum number of changing sweeps per rewrite.
    #[serde(default = "default_max_rewrite_sweeps")]
    pub max_rewrite_sweeps: usize,
    /// Reaction to canonical words beyond the length limit.
    #[serde(default)]
    pub saturation: SaturationPolicy,
}

fn default_identity() -> char {
    DEFAULT_IDENTITY
}

fn default_word_length_limit() -> usize {
    10
}

fn default_max_search_nodes() -> usize {
    1_000_000
}

fn default_max_rewrite_sweeps() -> usize {
    cayley_rewrite::DEFAULT_MAX_SWEEPS
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            identity: default_identity(),
            abelian: false,
            word_length_limit: default_word_length_limit(),
            max_search_nodes: default_max_search_nodes(),
            max_rewrite_sweeps: default_max_rewrite_sweeps(),
            saturation: SaturationPolicy::default(),
        }
    }
}

impl GroupConfig {
    /// Parses a configuration from YAML; missing fields take their defaults.
    pub fn from_yaml(text: &str) -> Result<Self, CayleyError> {
        serde_yaml::from_str(text)
            .map_err(|err| CayleyError::Serde(ErrorInfo::new("config-yaml", err.to_string())))
    }

    /// Rejects limits that would make construction meaningless.
    pub fn validate(&self) -> Result<(), CayleyError> {
        let limits = [
            ("word_length_limit", self.word_length_limit),
            ("max_search_nodes", self.max_search_nodes),
            ("max_rewrite_sweeps", self.max_rewrite_sweeps),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(CayleyError::Config(
                    ErrorInfo::new("invalid-limit", "limit must be positive")
                        .with_context("field", name),
                ));
            }
        }
        Ok(())
    }
}

/// What to do when the enumeration finds canonical words longer than the
/// length limit, i.e. when the element list may be truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SaturationPolicy {
    /// Keep the truncated result silently.
    Ignore,
    /// Keep the truncated result and emit a warning.
    #[default]
    Warn,
    /// Fail construction.
    Fail,
}
