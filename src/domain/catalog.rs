pub const CURRENCY: &str = "usd";

const PRODUCTS: [(&str, i64); 3] = [
    ("Forever Pants", 26000),
    ("Forever Shirt", 15500),
    ("Forever Shorts", 30000),
];

pub fn products() -> &'static [(&'static str, i64)] {
    &PRODUCTS
}

pub fn price_for(product_id: &str) -> Option<i64> {
    PRODUCTS
        .iter()
        .find(|(name, _)| *name == product_id)
        .map(|(_, amount)| *amount)
}

/// Amount in minor units, or 0 when the product is not in the catalog.
pub fn resolve_amount(product_id: &str) -> i64 {
    price_for(product_id).unwrap_or(0)
}
