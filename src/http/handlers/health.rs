use axum::response::IntoResponse;

pub async fn health() -> impl IntoResponse {
    "server is up and running"
}
