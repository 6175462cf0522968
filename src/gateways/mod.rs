use anyhow::Result;

pub mod mock;
pub mod stripe;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntentRequest {
    pub amount_minor: i64,
    pub currency: String,
    pub automatic_payment_methods: bool,
}

#[derive(Debug, Clone)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    fn name(&self) -> &'static str;

    async fn create_payment_intent(&self, request: PaymentIntentRequest) -> Result<PaymentIntent>;
}
