use std::sync::Arc;

use axum::extract::{Json, State, rejection::JsonRejection};
use playground_core::{
    CancelFlag, GenerationConfig, SweepPlan, TracingProgress, reference_axes, run_sweep,
};
use tracing::{info, instrument, warn};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::sweep::{sweep_request::SweepRequest, sweep_response::SweepResponse},
};

/// Sets the flag when the handler future is dropped (client went away).
struct CancelOnDrop(CancelFlag);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

/// HTTP endpoint for a parameter sweep.
///
/// Validates the grid, claims the single sweep slot, then runs every point
/// sequentially on a background task. Dropping this future (client
/// disconnect) cancels the sweep at the next point boundary; the request in
/// flight is allowed to finish. Once the sweep completes normally the guard
/// still fires, which is harmless.
#[instrument(name = "sweep_route", skip_all)]
pub async fn sweep_route(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SweepRequest>, JsonRejection>,
) -> AppResult<Json<SweepResponse>> {
    let Json(req) = payload?;

    let base = req.base.unwrap_or_default();
    let axes = req.axes.unwrap_or_else(reference_axes);
    let plan = SweepPlan::new(base, axes)?;

    let permit = state.try_begin_sweep()?;
    let label = state.next_sweep_label();
    info!(sweep = %label, total = plan.total(), params = ?plan.params(), "sweep accepted");

    let cancel = CancelFlag::new();
    let _guard = CancelOnDrop(cancel.clone());
    let llm = Arc::clone(&state.llm);

    let task = tokio::spawn(async move {
        let _permit = permit;
        let mut progress = TracingProgress::new(label);
        run_sweep(
            &plan,
            |cfg: GenerationConfig| {
                let llm = Arc::clone(&llm);
                async move { llm.generate(&cfg).await }
            },
            &mut progress,
            &cancel,
        )
        .await
    });

    let outcome = task.await.map_err(|e| {
        warn!(error = %e, "sweep task did not complete");
        AppError::Internal(e.to_string())
    })?;

    Ok(Json(SweepResponse::from(outcome)))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{core::app_state::test_support::offline_state, router};

    fn post_sweep(body: serde_json::Value) -> Request<Body> {
        Request::post("/api/sweep")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(resp: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn duplicate_axes_are_rejected() {
        let resp = router(offline_state())
            .oneshot(post_sweep(serde_json::json!({
                "axes": [
                    {"param": "temperature", "values": [0.0]},
                    {"param": "temperature", "values": [1.0]},
                ]
            })))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["code"], "INVALID_SWEEP");
    }

    #[tokio::test]
    async fn second_sweep_gets_conflict() {
        let state = offline_state();
        let _running = state.try_begin_sweep().unwrap();

        let resp = router(Arc::clone(&state))
            .oneshot(post_sweep(serde_json::json!({})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(json_body(resp).await["code"], "SWEEP_IN_PROGRESS");
    }

    #[tokio::test]
    async fn empty_axis_runs_nothing() {
        let resp = router(offline_state())
            .oneshot(post_sweep(serde_json::json!({
                "axes": [{"param": "temperature", "values": []}]
            })))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = json_body(resp).await;
        assert_eq!(json["total"], 0);
        assert_eq!(json["completed"], 0);
        assert_eq!(json["results"], serde_json::json!([]));
        assert_eq!(json["failures"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn out_of_range_points_become_failures() {
        // Rejected by the client before any network call.
        let resp = router(offline_state())
            .oneshot(post_sweep(serde_json::json!({
                "axes": [{"param": "temperature", "values": [5.0, 9.0]}]
            })))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = json_body(resp).await;
        assert_eq!(json["total"], 2);
        assert_eq!(json["completed"], 2);
        assert_eq!(json["cancelled"], false);
        assert_eq!(json["results"].as_array().unwrap().len(), 0);

        let failures = json["failures"].as_array().unwrap();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0]["index"], 0);
        assert_eq!(failures[1]["config"]["temperature"], 9.0);
        assert!(failures[0]["error"].as_str().unwrap().contains("temperature"));
    }

    #[test]
    fn guard_cancels_on_drop() {
        let flag = CancelFlag::new();
        drop(CancelOnDrop(flag.clone()));
        assert!(flag.is_cancelled());
    }
}
