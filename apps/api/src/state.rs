use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::GenerativeModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The generative model backend. Trait object so handler tests can swap
    /// in a mock instead of the real Gemini client.
    pub model: Arc<dyn GenerativeModel>,
    #[allow(dead_code)]
    pub config: Config,
}
