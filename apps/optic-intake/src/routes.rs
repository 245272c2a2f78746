use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tracing::{info, warn};

use optic_common::RequestForm;
use optic_storage::RequestStorage;

#[derive(Clone)]
struct ApiState {
    storage: RequestStorage,
}

pub(crate) fn api_router(storage: RequestStorage) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/requests", post(create_request))
        .with_state(ApiState { storage })
}

async fn health(State(state): State<ApiState>) -> Response {
    match state.storage.health().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "ok": true }))).into_response(),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "ok": false, "error": err.to_string() })),
        )
            .into_response(),
    }
}

async fn create_request(
    State(state): State<ApiState>,
    Json(form): Json<RequestForm>,
) -> Response {
    let request = match form.validate() {
        Ok(request) => request,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response();
        }
    };

    match state.storage.insert_request(request).await {
        Ok(request_id) => {
            info!(request_id = %request_id, "request accepted");
            (
                StatusCode::OK,
                Json(json!({ "request_id": request_id.to_string() })),
            )
                .into_response()
        }
        Err(err) => {
            warn!(error = %err, "request insert failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("failed to submit request: {err}") })),
            )
                .into_response()
        }
    }
}
