use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Customer contact details attached to a placement request.
///
/// Used only for the downstream placement notification; never validated
/// here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// An incoming request to place an order.
///
/// All downstream-relevant fields are optional at the boundary; the
/// placement service checks its preconditions explicitly and rejects with a
/// distinct reason per missing or invalid field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub sku_code: Option<String>,
    pub quantity: Option<i32>,
    /// Unit price. Arbitrary precision; never a float.
    pub price: Option<Decimal>,
    #[serde(default)]
    pub customer: CustomerDetails,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn deserializes_full_request() {
        let json = r#"{
            "sku_code": "iphone_15",
            "quantity": 1,
            "price": "999.99",
            "customer": {"email": "a@b.com", "first_name": "A", "last_name": "B"}
        }"#;

        let request: OrderRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.sku_code.as_deref(), Some("iphone_15"));
        assert_eq!(request.quantity, Some(1));
        assert_eq!(request.price, Some(dec!(999.99)));
        assert_eq!(request.customer.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn missing_customer_defaults_to_empty() {
        let request: OrderRequest =
            serde_json::from_str(r#"{"sku_code": "SKU-001", "quantity": 2}"#).unwrap();

        assert_eq!(request.customer, CustomerDetails::default());
        assert_eq!(request.price, None);
    }

    #[test]
    fn price_deserializes_without_precision_loss() {
        let request: OrderRequest =
            serde_json::from_str(r#"{"price": "0.1000000000000000000000000001"}"#).unwrap();

        assert_eq!(
            request.price.unwrap().to_string(),
            "0.1000000000000000000000000001"
        );
    }
}
