//! Recommendation Generator — turns a validated skill set into a recommendation list.
//!
//! Flow: build prompt → one model call → strip code fences → parse JSON →
//!       validate each element against the `Recommendation` shape.
//!
//! Every failure after validation is folded into an `ErrorPayload`; nothing here
//! surfaces as an HTTP error status.

use std::sync::Arc;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::llm_client::{strip_json_fences, LlmError, TextModel};
use crate::recommendation::models::{
    ErrorPayload, Recommendation, RecommendationResult, SkillSet, INVALID_JSON_MESSAGE,
    SCHEMA_MISMATCH_MESSAGE,
};
use crate::recommendation::prompts::{EXPECTED_RECOMMENDATIONS, RECOMMENDATION_PROMPT_TEMPLATE};

#[derive(Debug, Error)]
pub enum GenerationError {
    /// The model call itself failed. Carries the provider's message unchanged.
    #[error("{0}")]
    Provider(#[from] LlmError),

    #[error("Model response not valid JSON")]
    InvalidJson { raw: String },

    #[error("Model response did not match recommendation schema: {detail}")]
    SchemaMismatch { raw: String, detail: String },
}

impl From<GenerationError> for ErrorPayload {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::Provider(e) => ErrorPayload {
                error: e.to_string(),
                raw: None,
            },
            GenerationError::InvalidJson { raw } => ErrorPayload {
                error: INVALID_JSON_MESSAGE.to_string(),
                raw: Some(raw),
            },
            GenerationError::SchemaMismatch { raw, .. } => ErrorPayload {
                error: SCHEMA_MISMATCH_MESSAGE.to_string(),
                raw: Some(raw),
            },
        }
    }
}

/// Stateless generator over an injected model capability.
#[derive(Clone)]
pub struct RecommendationGenerator {
    model: Arc<dyn TextModel>,
}

impl RecommendationGenerator {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Runs the pipeline once. Makes exactly one model call.
    pub async fn recommend(&self, skills: &SkillSet) -> RecommendationResult {
        info!("Generating recommendations for {} skills", skills.len());

        match self.try_recommend(skills).await {
            Ok(recommendations) => {
                info!("Model returned {} recommendations", recommendations.len());
                RecommendationResult::Recommendations(recommendations)
            }
            Err(err) => {
                match &err {
                    GenerationError::Provider(e) => error!("Model call failed: {e}"),
                    GenerationError::InvalidJson { raw } => warn!(
                        "Model response is not JSON: {:?}",
                        raw.chars().take(120).collect::<String>()
                    ),
                    GenerationError::SchemaMismatch { detail, .. } => {
                        warn!("Model response rejected: {detail}")
                    }
                }
                RecommendationResult::Failed(err.into())
            }
        }
    }

    async fn try_recommend(
        &self,
        skills: &SkillSet,
    ) -> Result<Vec<Recommendation>, GenerationError> {
        let prompt = build_prompt(skills);
        let text = self.model.generate(&prompt).await?;
        parse_recommendations(&text)
    }
}

pub fn build_prompt(skills: &SkillSet) -> String {
    RECOMMENDATION_PROMPT_TEMPLATE.replace("{skills}", &skills.joined())
}

/// Cleans raw model text and decodes it into recommendations.
///
/// Percentages outside 0–100 are clamped; a missing key, a non-integral percentage
/// or a non-array payload rejects the whole response.
pub fn parse_recommendations(text: &str) -> Result<Vec<Recommendation>, GenerationError> {
    let cleaned = strip_json_fences(text);

    let value: Value = match serde_json::from_str(&cleaned) {
        Ok(v) => v,
        Err(_) => return Err(GenerationError::InvalidJson { raw: cleaned }),
    };

    let items = match value.as_array() {
        Some(items) => items,
        None => {
            return Err(GenerationError::SchemaMismatch {
                raw: cleaned,
                detail: "expected a JSON array".to_string(),
            })
        }
    };

    let mut recommendations = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match to_recommendation(item) {
            Ok(r) => recommendations.push(r),
            Err(detail) => {
                return Err(GenerationError::SchemaMismatch {
                    raw: cleaned,
                    detail: format!("element {index}: {detail}"),
                })
            }
        }
    }

    if recommendations.len() != EXPECTED_RECOMMENDATIONS {
        warn!(
            "Model returned {} recommendations (asked for {})",
            recommendations.len(),
            EXPECTED_RECOMMENDATIONS
        );
    }

    Ok(recommendations)
}

fn to_recommendation(item: &Value) -> Result<Recommendation, String> {
    let obj = item
        .as_object()
        .ok_or_else(|| "expected an object".to_string())?;

    Ok(Recommendation {
        job_title: required_str(obj, "job_title")?,
        reason: required_str(obj, "reason")?,
        match_percentage: clamp_percentage(
            obj.get("match_percentage")
                .ok_or_else(|| "missing 'match_percentage'".to_string())?,
        )?,
    })
}

fn required_str(obj: &Map<String, Value>, key: &str) -> Result<String, String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| format!("missing string '{key}'"))
}

fn clamp_percentage(value: &Value) -> Result<u8, String> {
    if let Some(n) = value.as_i64() {
        return Ok(n.clamp(0, 100) as u8);
    }
    if value.as_u64().is_some() {
        return Ok(100);
    }
    match value.as_f64() {
        // 85.0 is accepted, 85.5 is not
        Some(f) if f.is_finite() && f.fract() == 0.0 => Ok(f.clamp(0.0, 100.0) as u8),
        _ => Err("'match_percentage' must be an integer".to_string()),
    }
}
