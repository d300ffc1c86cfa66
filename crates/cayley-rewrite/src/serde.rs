use cayley_core::{CayleyError, ErrorInfo};

use crate::rules::{RuleSet, RuleSetPayload};

/// Serialises a rule set into indented JSON.
pub fn rules_to_json(rules: &RuleSet) -> Result<String, CayleyError> {
    serde_json::to_string_pretty(rules)
        .map_err(|err| CayleyError::Serde(ErrorInfo::new("rules-serialize", err.to_string())))
}

/// Deserialises a rule set from JSON text.
///
/// Malformed JSON is a `Serde` error; a well-formed payload describing an
/// invalid alphabet or rule is a `Config` error.
pub fn rules_from_json(json: &str) -> Result<RuleSet, CayleyError> {
    let payload: RuleSetPayload = serde_json::from_str(json)
        .map_err(|err| CayleyError::Serde(ErrorInfo::new("rules-deserialize", err.to_string())))?;
    payload.into_rules()
}
