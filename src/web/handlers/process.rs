// POST /process — entities, key phrases and tags for one text.
//
// Body: {"text": "..."}
// 200 → {"entities": [...], "key_phrases": [...], "tags": [...]}
// 400 → {"error": "No text provided"}
// 500 → {"error": "<analysis failure>"}

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde_json::Value;
use tracing::debug;

use super::{run_analysis, text_field};
use crate::analysis;
use crate::web::{api_error, AppState};

pub const NO_TEXT: &str = "No text provided";

/// POST /process — analyze a single text.
pub async fn process_text(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Some(text) = body.ok().and_then(|Json(v)| text_field(&v, "text")) else {
        return api_error(StatusCode::BAD_REQUEST, NO_TEXT);
    };

    debug!(chars = text.chars().count(), "Processing text");
    run_analysis(&state, move |model| analysis::analyze(model, &text)).await
}
