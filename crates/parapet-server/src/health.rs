use axum::response::IntoResponse;

/// Liveness probe; sits outside the admission gate
pub async fn health_handler() -> impl IntoResponse {
    "ok"
}
