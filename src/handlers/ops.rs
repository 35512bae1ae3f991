use axum::{Json, extract::State, http::StatusCode};

use crate::BlogError;
use crate::router::BlogState;
use crate::service::health::{self, HealthReport};
use crate::service::metrics::{self, MetricsSnapshot};

/// GET /healthz
pub async fn healthz(State(state): State<BlogState>) -> (StatusCode, Json<HealthReport>) {
    let status = health::probe(state.posts.db()).await;
    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (code, Json(status.report()))
}

/// GET /metrics
pub async fn metrics(State(state): State<BlogState>) -> Result<Json<MetricsSnapshot>, BlogError> {
    Ok(Json(metrics::snapshot(&state.posts).await?))
}
