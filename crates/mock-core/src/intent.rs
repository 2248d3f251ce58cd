//! # Mock Stripe Payment Intents
//!
//! Payment intent creation and confirmation for the simulated Stripe flow.

use crate::body::require;
use crate::error::{MockError, MockResult};
use crate::ids::{synthetic_id, INTENT_PREFIX};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default intent amount in minor units
pub const DEFAULT_INTENT_AMOUNT: i64 = 1000;

/// Default intent currency (Stripe uses lower case)
pub const DEFAULT_INTENT_CURRENCY: &str = "usd";

/// Default Stripe environment label
pub const DEFAULT_INTENT_ENVIRONMENT: &str = "test";

const CREATE_OPERATION: &str = "Stripe payment intent creation";

/// Lifecycle status of a mock payment intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentStatus {
    /// Intent created, no payment method attached yet
    RequiresPaymentMethod,
    /// Payment confirmed
    Succeeded,
}

/// Body of `POST /api/stripe/create-payment-intent`
#[derive(Debug, Default, Deserialize)]
pub struct CreatePaymentIntentRequest {
    /// Minor units; integers, floats (truncated) and numeric strings accepted
    #[serde(default)]
    pub amount: Option<Value>,
    /// Must be a string; it is lower-cased
    #[serde(default)]
    pub currency: Option<Value>,
    /// Echoed back untouched
    #[serde(default)]
    pub environment: Option<Value>,
}

/// Body of `POST /api/stripe/confirm-payment`
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmPaymentRequest {
    #[serde(default)]
    pub payment_intent_id: Option<Value>,
    /// Echoed back as `amount_received`
    #[serde(default)]
    pub amount: Option<Value>,
}

/// A freshly created mock payment intent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockPaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub status: IntentStatus,
    pub amount: i64,
    pub currency: String,
    pub environment: Value,
}

impl MockPaymentIntent {
    /// Create an intent. Fails when `amount` cannot be read as an integer
    /// or `currency` is not a string.
    pub fn create(request: CreatePaymentIntentRequest, now: DateTime<Utc>) -> MockResult<Self> {
        let amount = match request.amount {
            Some(value) => integer_amount(&value)?,
            None => DEFAULT_INTENT_AMOUNT,
        };
        let currency = match request.currency {
            None | Some(Value::Null) => DEFAULT_INTENT_CURRENCY.to_string(),
            Some(Value::String(s)) => s.to_lowercase(),
            Some(other) => {
                return Err(MockError::internal(
                    CREATE_OPERATION,
                    format!("invalid currency: {}", other),
                ))
            }
        };

        let id = synthetic_id(INTENT_PREFIX, now);
        Ok(Self {
            client_secret: format!("{}_secret", id),
            id,
            status: IntentStatus::RequiresPaymentMethod,
            amount,
            currency,
            environment: request
                .environment
                .unwrap_or_else(|| Value::from(DEFAULT_INTENT_ENVIRONMENT)),
        })
    }
}

/// Truncate a JSON amount to whole minor units. Values outside `i64` are
/// rejected rather than clamped.
fn integer_amount(value: &Value) -> MockResult<i64> {
    let parsed = match value {
        Value::Number(n) if n.is_i64() => n.as_i64(),
        Value::Number(n) if n.is_u64() => None,
        Value::Number(n) => n.as_f64().and_then(truncate_in_range),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        MockError::internal(CREATE_OPERATION, format!("invalid amount: {}", value))
    })
}

fn truncate_in_range(f: f64) -> Option<i64> {
    let t = f.trunc();
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if t.is_finite() && t >= i64::MIN as f64 && t < i64::MAX as f64 {
        Some(t as i64)
    } else {
        None
    }
}

/// Result of confirming a mock payment intent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmedPayment {
    /// The caller's intent id, echoed with its original JSON type
    pub id: Value,
    pub status: IntentStatus,
    pub timestamp: DateTime<Utc>,
    pub amount_received: Value,
}

/// Confirm a payment intent. Any non-empty id is accepted.
pub fn confirm_payment(
    request: ConfirmPaymentRequest,
    now: DateTime<Utc>,
) -> MockResult<ConfirmedPayment> {
    let id = require(request.payment_intent_id, "payment_intent_id")?;

    Ok(ConfirmedPayment {
        id,
        status: IntentStatus::Succeeded,
        timestamp: now,
        amount_received: request
            .amount
            .unwrap_or_else(|| Value::from(DEFAULT_INTENT_AMOUNT)),
    })
}
