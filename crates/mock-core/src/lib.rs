//! # mock-core
//!
//! Canned PayPal and Stripe objects for local payment-flow testing.
//!
//! This crate provides:
//! - `MockOrder` and order capture for the PayPal flow
//! - `MockPaymentIntent` and confirmation for the Stripe flow
//! - `parse_body` for lenient JSON request decoding
//! - `MockError` for typed error handling
//!
//! Every operation is a pure function of the request payload and a clock
//! reading; nothing is persisted between calls.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mock_core::{parse_body, MockOrder, CreateOrderRequest};
//!
//! let request: CreateOrderRequest = parse_body(br#"{"amount": 25}"#)?;
//! let order = MockOrder::create(request, chrono::Utc::now());
//! assert_eq!(order.currency, "USD");
//! ```

pub mod body;
pub mod error;
pub mod ids;
pub mod intent;
pub mod order;

// Re-exports for convenience
pub use body::{parse_body, parse_object};
pub use error::{MockError, MockResult};
pub use intent::{
    confirm_payment, ConfirmPaymentRequest, ConfirmedPayment, CreatePaymentIntentRequest,
    IntentStatus, MockPaymentIntent,
};
pub use order::{
    capture_order, CaptureOrderRequest, CapturedOrder, CreateOrderRequest, MockOrder, MockPayer,
    OrderDetails, OrderStatus, PayerName,
};
