//! # Mock PayPal Orders
//!
//! Order creation and capture for the simulated PayPal flow. Nothing is
//! stored: a capture accepts any order id it is handed.

use crate::body::require;
use crate::error::MockResult;
use crate::ids::{synthetic_id, ORDER_PREFIX};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default order amount when the caller sends none
pub const DEFAULT_ORDER_AMOUNT: f64 = 10.00;

/// Default order currency
pub const DEFAULT_ORDER_CURRENCY: &str = "USD";

/// Default PayPal environment label
pub const DEFAULT_ORDER_ENVIRONMENT: &str = "sandbox";

/// Lifecycle status of a mock order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order created, awaiting capture
    Created,
    /// Order captured
    Completed,
}

/// Body of `POST /api/paypal/create-order`
///
/// Every field is echoed back untouched, whatever its JSON type.
#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub currency: Option<Value>,
    #[serde(default)]
    pub environment: Option<Value>,
}

/// Body of `POST /api/paypal/capture-order`
#[derive(Debug, Default, Deserialize)]
pub struct CaptureOrderRequest {
    /// PayPal order id (PayPal's own casing)
    #[serde(default, rename = "orderID")]
    pub order_id: Option<Value>,
}

/// A freshly created mock order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockOrder {
    pub id: String,
    pub status: OrderStatus,
    pub amount: Value,
    pub currency: Value,
    pub environment: Value,
}

impl MockOrder {
    /// Create an order, filling unset fields with the sandbox defaults
    pub fn create(request: CreateOrderRequest, now: DateTime<Utc>) -> Self {
        Self {
            id: synthetic_id(ORDER_PREFIX, now),
            status: OrderStatus::Created,
            amount: request
                .amount
                .unwrap_or_else(|| Value::from(DEFAULT_ORDER_AMOUNT)),
            currency: request
                .currency
                .unwrap_or_else(|| Value::from(DEFAULT_ORDER_CURRENCY)),
            environment: request
                .environment
                .unwrap_or_else(|| Value::from(DEFAULT_ORDER_ENVIRONMENT)),
        }
    }
}

/// Payer name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayerName {
    pub given_name: String,
    pub surname: String,
}

/// Fixed payer identity attached to every capture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockPayer {
    pub email_address: String,
    pub name: PayerName,
}

impl Default for MockPayer {
    fn default() -> Self {
        Self {
            email_address: "test@example.com".to_string(),
            name: PayerName {
                given_name: "Test".to_string(),
                surname: "User".to_string(),
            },
        }
    }
}

/// Result of capturing a mock order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturedOrder {
    /// The caller's order id, echoed with its original JSON type
    pub id: Value,
    pub status: OrderStatus,
    pub timestamp: DateTime<Utc>,
    pub payer: MockPayer,
}

/// Capture an order. Any non-empty id is accepted.
pub fn capture_order(request: CaptureOrderRequest, now: DateTime<Utc>) -> MockResult<CapturedOrder> {
    let id = require(request.order_id, "orderID")?;

    Ok(CapturedOrder {
        id,
        status: OrderStatus::Completed,
        timestamp: now,
        payer: MockPayer::default(),
    })
}

/// Lookup result for `GET /api/paypal/order/{order_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetails {
    pub id: String,
    pub status: OrderStatus,
    pub timestamp: DateTime<Utc>,
}

impl OrderDetails {
    /// Describe an order without a store behind it: every id looks freshly created
    pub fn lookup(order_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: order_id.into(),
            status: OrderStatus::Created,
            timestamp: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::parse_body;
    use crate::error::MockError;
    use serde_json::json;

    #[test]
    fn test_create_defaults() {
        let order = MockOrder::create(CreateOrderRequest::default(), Utc::now());

        assert!(order.id.starts_with("mock_order_"));
        assert_eq!(order.status, OrderStatus::Created);
        assert_eq!(order.amount, json!(10.0));
        assert_eq!(order.currency, "USD");
        assert_eq!(order.environment, "sandbox");
    }

    #[test]
    fn test_create_echoes_fields() {
        let request: CreateOrderRequest =
            parse_body(br#"{"amount": "25.50", "currency": "EUR", "environment": "live"}"#)
                .unwrap();
        let order = MockOrder::create(request, Utc::now());

        assert_eq!(order.amount, json!("25.50"));
        assert_eq!(order.currency, "EUR");
        assert_eq!(order.environment, "live");
    }

    #[test]
    fn test_create_echoes_non_string_fields() {
        let request: CreateOrderRequest = parse_body(br#"{"currency": 840}"#).unwrap();
        let order = MockOrder::create(request, Utc::now());

        assert_eq!(order.currency, json!(840));
        assert_eq!(order.environment, "sandbox");
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_value(OrderStatus::Created).unwrap(), json!("CREATED"));
        assert_eq!(serde_json::to_value(OrderStatus::Completed).unwrap(), json!("COMPLETED"));
    }

    #[test]
    fn test_capture_requires_order_id() {
        let err = capture_order(CaptureOrderRequest::default(), Utc::now()).unwrap_err();
        assert!(matches!(err, MockError::MissingField("orderID")));
    }

    #[test]
    fn test_capture_echoes_id() {
        let request: CaptureOrderRequest = parse_body(br#"{"orderID": "X"}"#).unwrap();
        let captured = capture_order(request, Utc::now()).unwrap();

        assert_eq!(captured.id, "X");
        assert_eq!(captured.status, OrderStatus::Completed);
        assert_eq!(captured.payer.email_address, "test@example.com");
        assert_eq!(captured.payer.name.surname, "User");
    }

    #[test]
    fn test_capture_accepts_numeric_id() {
        let request: CaptureOrderRequest = parse_body(br#"{"orderID": 12345}"#).unwrap();
        let captured = capture_order(request, Utc::now()).unwrap();

        assert_eq!(captured.id, json!(12345));
        assert_eq!(captured.status, OrderStatus::Completed);
    }

    #[test]
    fn test_capture_rejects_null_and_empty_id() {
        for body in [&br#"{"orderID": null}"#[..], br#"{"orderID": ""}"#] {
            let request: CaptureOrderRequest = parse_body(body).unwrap();
            let err = capture_order(request, Utc::now()).unwrap_err();
            assert!(matches!(err, MockError::MissingField("orderID")));
        }
    }

    #[test]
    fn test_lookup() {
        let details = OrderDetails::lookup("ORDER-1", Utc::now());
        assert_eq!(details.id, "ORDER-1");
        assert_eq!(details.status, OrderStatus::Created);
    }
}
