use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub product_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub address1: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub address2: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub state: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub zip: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub country: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePaymentIntentResponse {
    pub client_secret: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(d).map(Option::unwrap_or_default)
}

/// Decodes the first JSON value in `body`. Anything after it is ignored, keys
/// match case-insensitively and a top-level `null` yields an empty order.
pub fn decode_order(body: &[u8]) -> Result<OrderRequest, serde_json::Error> {
    let value = match serde_json::Deserializer::from_slice(body).into_iter::<Value>().next() {
        Some(value) => value?,
        None => return serde_json::from_slice(body),
    };

    match value {
        Value::Null => Ok(OrderRequest::default()),
        Value::Object(fields) => {
            let folded = fields
                .into_iter()
                .map(|(key, v)| (key.to_lowercase(), v))
                .collect::<serde_json::Map<_, _>>();
            OrderRequest::deserialize(Value::Object(folded))
        }
        other => OrderRequest::deserialize(other),
    }
}
