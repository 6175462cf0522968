use crate::service::intent_service::method_not_allowed;
use crate::AppState;
use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub async fn create_payment_intent(State(state): State<AppState>, request: Request<Body>) -> Response {
    if request.method() != Method::POST {
        return method_not_allowed().into_response();
    }

    let body = match to_bytes(request.into_body(), MAX_BODY_BYTES).await {
        Ok(body) => body,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    let resp = match state.intent_service.create(&body).await {
        Ok(resp) => resp,
        Err((status, message)) => return (status, message).into_response(),
    };

    match serde_json::to_vec(&resp) {
        Ok(bytes) => (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(e) => {
            tracing::error!("failed to encode payment intent response: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
