use axum::extract::{Json, rejection::JsonRejection};
use playground_core::AnalysisReport;
use tracing::debug;

use crate::{error_handler::AppResult, routes::analyze::analyze_request::AnalyzeRequest};

/// Explains what a parameter set is expected to do. Pure, no upstream call.
pub async fn analyze_route(
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> AppResult<Json<AnalysisReport>> {
    let Json(req) = payload?;
    debug!(?req, "analysis requested");

    Ok(Json(AnalysisReport::new(
        req.temperature,
        req.max_tokens,
        req.presence_penalty,
        req.frequency_penalty,
    )))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use playground_core::Dimension;
    use tower::ServiceExt;

    use super::*;
    use crate::{core::app_state::test_support::offline_state, router};

    #[tokio::test]
    async fn report_covers_all_dimensions() {
        let req = AnalyzeRequest {
            temperature: 0.0,
            max_tokens: 300.0,
            presence_penalty: 1.5,
            frequency_penalty: 0.0,
        };
        let Json(report) = analyze_route(Ok(Json(req))).await.unwrap();

        assert_eq!(report.sections().len(), 4);
        assert!(
            report
                .get(Dimension::Temperature)
                .unwrap()
                .starts_with("At temperature 0.0,")
        );
        assert_eq!(
            report.get(Dimension::Temperature),
            Some(playground_core::analyze_temperature(0.0).as_str())
        );
        assert_eq!(
            report.get(Dimension::Tokens),
            Some(playground_core::analyze_tokens(300.0).as_str())
        );
    }

    #[tokio::test]
    async fn out_of_domain_values_still_analyze() {
        let req = AnalyzeRequest {
            temperature: 7.5,
            max_tokens: 0.0,
            presence_penalty: -1.0,
            frequency_penalty: 2.0,
        };
        let Json(report) = analyze_route(Ok(Json(req))).await.unwrap();
        assert_eq!(report.sections().len(), 4);
    }

    async fn post_analyze(max_tokens: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let body = serde_json::json!({
            "temperature": 0.7,
            "maxTokens": max_tokens,
            "presencePenalty": 0.0,
            "frequencyPenalty": 0.0,
        });
        let resp = router(offline_state())
            .oneshot(
                Request::post("/api/analyze")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn free_form_token_counts_are_classified() {
        let (status, json) = post_analyze(serde_json::json!(-5)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["sections"][1]["text"],
            "With only -5 tokens, the response will be very concise, possibly incomplete \
             for complex descriptions."
        );

        let (status, json) = post_analyze(serde_json::json!(150.5)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["sections"][1]["text"],
            "150.5 tokens allows for a balanced description with moderate detail."
        );
    }
}
