use std::sync::Arc;

use axum::{
    extract::{Json, State, rejection::JsonRejection},
    http::HeaderMap,
};
use playground_core::GenerationConfig;
use tracing::{Span, field, info, instrument};

use crate::{
    core::app_state::AppState,
    error_handler::AppResult,
    routes::generate::generate_response::GenerateResponse,
};

/// HTTP endpoint for a single generation.
///
/// Accepts a full `GenerationConfig` (camelCase JSON). Out-of-range values are
/// rejected with 400 before anything is sent upstream. A caller-supplied
/// `X-Request-Id` is recorded on the span so upstream failures can be traced back.
#[instrument(name = "generate_route", skip_all, fields(request_id = field::Empty))]
pub async fn generate_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<GenerationConfig>, JsonRejection>,
) -> AppResult<Json<GenerateResponse>> {
    if let Some(id) = request_id(&headers) {
        Span::current().record("request_id", id);
    }

    let Json(cfg) = payload?;
    cfg.validate()?;

    info!(
        model = %cfg.model,
        temperature = cfg.temperature,
        max_tokens = cfg.max_tokens,
        "generation requested"
    );

    let response = state.llm.generate(&cfg).await?;
    Ok(Json(GenerateResponse { response }))
}

fn request_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("X-Request-Id")
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{HeaderValue, Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{core::app_state::test_support::offline_state, router};

    #[test]
    fn request_id_is_read_from_the_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(request_id(&headers), None);

        headers.insert("x-request-id", HeaderValue::from_static(" abc-123 "));
        assert_eq!(request_id(&headers), Some("abc-123"));

        headers.insert("x-request-id", HeaderValue::from_static("  "));
        assert_eq!(request_id(&headers), None);
    }

    #[tokio::test]
    async fn tagged_requests_are_still_validated() {
        let resp = router(offline_state())
            .oneshot(
                Request::post("/api/generate")
                    .header("content-type", "application/json")
                    .header("X-Request-Id", "abc-123")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let app = router(offline_state());
        let resp = app
            .oneshot(
                Request::post("/api/generate")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn out_of_range_config_is_rejected() {
        let app = router(offline_state());
        let body = serde_json::json!({
            "model": "gpt-4",
            "temperature": 0.7,
            "maxTokens": 5000,
            "presencePenalty": 0.0,
            "frequencyPenalty": 0.0,
            "systemPrompt": "sys",
            "userPrompt": "hi",
        });
        let resp = app
            .oneshot(
                Request::post("/api/generate")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "INVALID_CONFIG");
        assert!(json["error"].as_str().unwrap().contains("maxTokens"));
    }
}
