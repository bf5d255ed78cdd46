// Request handlers for the analysis API.

pub mod process;
pub mod relationship;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::analysis::AnalysisError;
use crate::model::LinguisticModel;
use crate::web::{api_error, AppState};

/// A non-empty string field from a JSON body. Missing, null, non-string and
/// empty values all count as absent.
pub(crate) fn text_field(body: &Value, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Run an analysis on a blocking thread and turn the outcome into a response.
///
/// Inference is CPU-bound, so it stays off the async workers. Any failure,
/// including a panic inside the task, becomes a 500 with the error message.
pub(crate) async fn run_analysis<T, F>(state: &AppState, job: F) -> Response
where
    T: Serialize + Send + 'static,
    F: FnOnce(&dyn LinguisticModel) -> Result<T, AnalysisError> + Send + 'static,
{
    let model = Arc::clone(&state.model);
    match tokio::task::spawn_blocking(move || job(model.as_ref())).await {
        Ok(Ok(result)) => (StatusCode::OK, Json(result)).into_response(),
        Ok(Err(e)) => {
            error!(error = %e, "Analysis failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
        Err(e) => {
            error!(error = %e, "Analysis task panicked");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_field_accepts_non_empty_strings() {
        let body = json!({ "text": "hello" });
        assert_eq!(text_field(&body, "text").as_deref(), Some("hello"));
    }

    #[test]
    fn test_text_field_rejects_everything_else() {
        assert_eq!(text_field(&json!({}), "text"), None);
        assert_eq!(text_field(&json!({ "text": null }), "text"), None);
        assert_eq!(text_field(&json!({ "text": "" }), "text"), None);
        assert_eq!(text_field(&json!({ "text": 42 }), "text"), None);
        assert_eq!(text_field(&json!(["text"]), "text"), None);
    }
}
