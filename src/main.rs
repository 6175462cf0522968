use forever_checkout::config::AppConfig;
use forever_checkout::domain::catalog;
use forever_checkout::http::router;
use forever_checkout::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = dotenv::dotenv() {
        tracing::warn!("could not load .env file: {}", e);
    }

    let cfg = AppConfig::from_env();
    if cfg.stripe_secret_key.is_empty() {
        tracing::warn!("STRIPE_SECRET_KEY is not set; payment intents will be rejected upstream");
    }

    let state = AppState::from_config(&cfg);
    tracing::info!(
        gateway = state.intent_service.gateway.name(),
        products = catalog::products().len(),
        "payment gateway configured"
    );

    let app = router::build(state);
    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
