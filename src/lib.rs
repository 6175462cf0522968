pub mod config;
pub mod domain {
    pub mod catalog;
    pub mod order;
}
pub mod gateways;
pub mod http {
    pub mod handlers {
        pub mod health;
        pub mod payment_intents;
    }
    pub mod router;
}
pub mod service {
    pub mod intent_service;
}

use crate::config::{AppConfig, GatewayKind};
use crate::gateways::mock::{MockBehavior, MockGateway};
use crate::gateways::stripe::StripeGateway;
use crate::gateways::PaymentGateway;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub intent_service: service::intent_service::OrderIntentService,
}

impl AppState {
    pub fn from_config(cfg: &AppConfig) -> Self {
        let gateway: Arc<dyn PaymentGateway> = match cfg.gateway {
            GatewayKind::Stripe => Arc::new(StripeGateway::new(
                cfg.stripe_base_url.clone(),
                cfg.stripe_secret_key.clone(),
            )),
            GatewayKind::Mock => Arc::new(MockGateway::new(MockBehavior::Succeed)),
        };
        Self::with_gateway(gateway)
    }

    pub fn with_gateway(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            intent_service: service::intent_service::OrderIntentService::new(gateway),
        }
    }
}
