use crate::gateways::stripe::DEFAULT_BASE_URL;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GatewayKind {
    Stripe,
    Mock,
}

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub gateway: GatewayKind,
    pub stripe_secret_key: String,
    pub stripe_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "localhost:4242".to_string()),
            gateway: match lookup("PAYMENT_GATEWAY").as_deref() {
                Some("mock") => GatewayKind::Mock,
                _ => GatewayKind::Stripe,
            },
            stripe_secret_key: lookup("STRIPE_SECRET_KEY").unwrap_or_default(),
            stripe_base_url: lookup("STRIPE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("gateway", &self.gateway)
            .field("stripe_secret_key", &"<redacted>")
            .field("stripe_base_url", &self.stripe_base_url)
            .finish()
    }
}
