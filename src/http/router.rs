use crate::http::handlers::{health, payment_intents};
use crate::AppState;
use axum::routing::any;
use axum::Router;

pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/create-payment-intent", any(payment_intents::create_payment_intent))
        .route("/health", any(health::health))
        .with_state(state)
}
