use crate::gateways::{PaymentGateway, PaymentIntent, PaymentIntentRequest};
use anyhow::{anyhow, bail, Result};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.stripe.com";

pub struct StripeGateway {
    pub base_url: String,
    pub secret_key: String,
    pub client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct StripePaymentIntent {
    id: String,
    client_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorEnvelope {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: Option<String>,
    code: Option<String>,
}

impl StripeGateway {
    pub fn new(base_url: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            secret_key: secret_key.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl PaymentGateway for StripeGateway {
    fn name(&self) -> &'static str {
        "stripe"
    }

    async fn create_payment_intent(&self, request: PaymentIntentRequest) -> Result<PaymentIntent> {
        let url = format!("{}/v1/payment_intents", self.base_url.trim_end_matches('/'));
        let form = [
            ("amount", request.amount_minor.to_string()),
            ("currency", request.currency),
            (
                "automatic_payment_methods[enabled]",
                request.automatic_payment_methods.to_string(),
            ),
        ];

        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_from_body(status.as_u16(), &body));
        }

        let intent: StripePaymentIntent = resp.json().await?;
        let Some(client_secret) = intent.client_secret else {
            bail!("payment intent {} returned without a client secret", intent.id);
        };

        Ok(PaymentIntent {
            id: intent.id,
            client_secret,
        })
    }
}

fn error_from_body(status: u16, body: &str) -> anyhow::Error {
    match serde_json::from_str::<StripeErrorEnvelope>(body) {
        Ok(StripeErrorEnvelope {
            error: StripeError {
                message: Some(message),
                ..
            },
        }) => anyhow!(message),
        Ok(StripeErrorEnvelope {
            error: StripeError { code: Some(code), .. },
        }) => anyhow!("HTTP_{status}: {code}"),
        _ => anyhow!("HTTP_{status}: {}", body.chars().take(200).collect::<String>()),
    }
}
