// Skill-based job recommendation: request validation, prompt building,
// model invocation and output normalization.
// All model calls go through llm_client::TextModel.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod validator;
