//! Axum route handlers for the formatting API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppJson};
use crate::formatting::prompts::build_formatting_prompt;
use crate::formatting::ReferenceFormat;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct FormatRequest {
    pub reference_text: String,
    /// Defaults to auto-detection when the field is omitted.
    #[serde(default)]
    pub format: ReferenceFormat,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct FormatInfo {
    pub key: &'static str,
    pub display_name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FormatListResponse {
    pub formats: Vec<FormatInfo>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/generate
///
/// The relay endpoint: forwards a prompt to the generative model and returns
/// the model's text verbatim. One round trip, no retries.
pub async fn handle_generate(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerateRequest>,
) -> Result<Json<TextResponse>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let text = state.model.generate(&request.prompt).await?;

    Ok(Json(TextResponse { text }))
}

/// POST /api/v1/format
///
/// Builds the formatting prompt from the raw reference text and the selected
/// style, then calls the model. The model does all extraction and formatting.
pub async fn handle_format(
    State(state): State<AppState>,
    AppJson(request): AppJson<FormatRequest>,
) -> Result<Json<TextResponse>, AppError> {
    if request.reference_text.trim().is_empty() {
        return Err(AppError::Validation(
            "reference_text cannot be empty".to_string(),
        ));
    }

    let prompt = build_formatting_prompt(&request.reference_text, request.format);

    let text = state.model.generate(&prompt).await?;

    Ok(Json(TextResponse { text }))
}

/// GET /api/v1/formats
///
/// Lists the supported citation styles with their display names, in the
/// order the UI selector shows them.
pub async fn handle_list_formats() -> Json<FormatListResponse> {
    Json(FormatListResponse {
        formats: ReferenceFormat::ALL
            .iter()
            .map(|f| FormatInfo {
                key: f.key(),
                display_name: f.display_name(),
            })
            .collect(),
    })
}
