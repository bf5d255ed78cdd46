// POST /relationship — similarity, classification and shared entities for
// two texts.
//
// Body: {"text1": "...", "text2": "..."}
// 200 → {"similarity": f, "relationship_type": "...", "shared_entities": [...]}
// 400 → {"error": "Both text samples are required"}
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

pub const MISSING_TEXTS: &str = "Both text samples are required";

/// POST /relationship — compare two texts.
pub async fn analyze_relationship(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let texts = body
        .ok()
        .and_then(|Json(v)| Some((text_field(&v, "text1")?, text_field(&v, "text2")?)));
    let Some((text1, text2)) = texts else {
        return api_error(StatusCode::BAD_REQUEST, MISSING_TEXTS);
    };

    debug!(
        chars1 = text1.chars().count(),
        chars2 = text2.chars().count(),
        "Comparing texts"
    );
    run_analysis(&state, move |model| analysis::compare(model, &text1, &text2)).await
}
