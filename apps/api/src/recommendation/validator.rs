//! Request validation — checks the payload shape before any model call is made.

use serde_json::Value;
use thiserror::Error;

use crate::recommendation::models::SkillSet;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing 'skills' in request body")]
    MissingField,

    #[error("'skills' must be a non-empty list")]
    InvalidType,
}

/// Validates an untyped request body and extracts the skill list.
///
/// A body that is absent or not a JSON object counts as missing the field.
/// Elements are not deep-validated: strings are kept verbatim, anything else is
/// carried as its compact JSON text.
pub fn validate_request(body: Option<&Value>) -> Result<SkillSet, ValidationError> {
    let skills = body
        .and_then(Value::as_object)
        .and_then(|obj| obj.get("skills"))
        .ok_or(ValidationError::MissingField)?;

    let items = skills.as_array().ok_or(ValidationError::InvalidType)?;

    let skills = items
        .iter()
        .map(|item| match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();

    SkillSet::new(skills).ok_or(ValidationError::InvalidType)
}
