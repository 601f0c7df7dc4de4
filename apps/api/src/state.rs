use crate::recommendation::generator::RecommendationGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; the model handle inside the generator is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub generator: RecommendationGenerator,
}
