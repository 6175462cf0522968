use crate::gateways::{PaymentGateway, PaymentIntent, PaymentIntentRequest};
use anyhow::{anyhow, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum MockBehavior {
    Succeed,
    SucceedWith(String),
    Fail(String),
}

pub struct MockGateway {
    pub behavior: MockBehavior,
    calls: AtomicUsize,
    last_request: Mutex<Option<PaymentIntentRequest>>,
}

impl MockGateway {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<PaymentIntentRequest> {
        self.last_request.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait::async_trait]
impl PaymentGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn create_payment_intent(&self, request: PaymentIntentRequest) -> Result<PaymentIntent> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(request);
        }

        match &self.behavior {
            MockBehavior::Fail(message) => Err(anyhow!("{message}")),
            MockBehavior::SucceedWith(secret) => Ok(PaymentIntent {
                id: format!("pi_mock_{}", uuid::Uuid::new_v4().simple()),
                client_secret: secret.clone(),
            }),
            MockBehavior::Succeed => {
                let id = format!("pi_mock_{}", uuid::Uuid::new_v4().simple());
                let client_secret = format!("{id}_secret_{}", uuid::Uuid::new_v4().simple());
                Ok(PaymentIntent { id, client_secret })
            }
        }
    }
}
