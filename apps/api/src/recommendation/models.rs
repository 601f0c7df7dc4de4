use serde::{Deserialize, Serialize};

pub const INVALID_JSON_MESSAGE: &str = "Model response not valid JSON";
pub const SCHEMA_MISMATCH_MESSAGE: &str = "Model response did not match recommendation schema";

/// Ordered, non-empty list of skills supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillSet(Vec<String>);

impl SkillSet {
    /// Returns `None` for an empty list.
    pub fn new(skills: Vec<String>) -> Option<Self> {
        if skills.is_empty() {
            None
        } else {
            Some(Self(skills))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Single descriptive line used in the prompt.
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

/// One suggested job role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub job_title: String,
    pub reason: String,
    /// 0 – 100
    pub match_percentage: u8,
}

/// Error-shaped body returned with HTTP 200 when the model call or its output fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

/// Either the recommendation list or an error payload, serialized untagged so the
/// success body is a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecommendationResult {
    Recommendations(Vec<Recommendation>),
    Failed(ErrorPayload),
}

impl RecommendationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, RecommendationResult::Recommendations(_))
    }
}
