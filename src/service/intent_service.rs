use crate::domain::catalog::{price_for, CURRENCY};
use crate::domain::order::{decode_order, CreatePaymentIntentResponse};
use crate::gateways::{PaymentGateway, PaymentIntentRequest};
use axum::http::StatusCode;
use std::sync::Arc;

pub type ServiceError = (StatusCode, String);

#[derive(Clone)]
pub struct OrderIntentService {
    pub gateway: Arc<dyn PaymentGateway>,
}

impl OrderIntentService {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn create(&self, body: &[u8]) -> Result<CreatePaymentIntentResponse, ServiceError> {
        let req = decode_order(body).map_err(|e| bad_request(e.to_string()))?;

        let Some(amount_minor) = price_for(&req.product_id) else {
            tracing::warn!(product_id = %req.product_id, "product not found");
            return Err(bad_request("Product not found"));
        };

        let intent = self
            .gateway
            .create_payment_intent(PaymentIntentRequest {
                amount_minor,
                currency: CURRENCY.to_string(),
                automatic_payment_methods: true,
            })
            .await
            .map_err(|e| upstream(self.gateway.name(), e))?;

        Ok(CreatePaymentIntentResponse {
            client_secret: intent.client_secret,
        })
    }
}

pub fn method_not_allowed() -> ServiceError {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".to_string())
}

fn bad_request(message: impl Into<String>) -> ServiceError {
    (StatusCode::BAD_REQUEST, message.into())
}

fn upstream(gateway: &str, e: anyhow::Error) -> ServiceError {
    tracing::error!("{} create_payment_intent failed: {}", gateway, e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateways::mock::{MockBehavior, MockGateway};
    use std::sync::Mutex;

    fn service(behavior: MockBehavior) -> (OrderIntentService, Arc<MockGateway>) {
        let gateway = Arc::new(MockGateway::new(behavior));
        (OrderIntentService::new(gateway.clone()), gateway)
    }

    #[tokio::test]
    async fn prices_order_before_calling_gateway() {
        let (svc, gateway) = service(MockBehavior::SucceedWith("pi_1_secret_2".to_string()));
        let resp = svc.create(br#"{"product_id":"Forever Shorts"}"#).await.unwrap();

        assert_eq!(resp.client_secret, "pi_1_secret_2");
        let sent = gateway.last_request().unwrap();
        assert_eq!(sent.amount_minor, 30000);
        assert_eq!(sent.currency, "usd");
        assert!(sent.automatic_payment_methods);
    }

    #[tokio::test]
    async fn empty_object_is_unknown_product() {
        let (svc, gateway) = service(MockBehavior::Succeed);
        let (status, msg) = svc.create(b"{}").await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(msg, "Product not found");
        assert_eq!(gateway.calls(), 0);
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn unknown_product_is_logged() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (svc, _) = service(MockBehavior::Succeed);
        svc.create(br#"{"product_id":"Nonexistent Item"}"#).await.unwrap_err();

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("product not found"), "{output}");
        assert!(output.contains("Nonexistent Item"), "{output}");
    }

    #[tokio::test]
    async fn gateway_error_maps_to_500() {
        let (svc, _) = service(MockBehavior::Fail("api key missing".to_string()));
        let (status, msg) = svc.create(br#"{"product_id":"Forever Pants"}"#).await.unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(msg, "api key missing");
    }
}
