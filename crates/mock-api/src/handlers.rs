//! # Request Handlers
//!
//! Axum handlers for the mock payment API. Each handler decodes the raw
//! body, hands it to the matching `mock_core` operation and serializes the
//! result; none of them touch shared state beyond read-only config.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{OriginalUri, Path, State},
    http::{header, Method, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use mock_core::{
    capture_order, confirm_payment, parse_body, parse_object, CaptureOrderRequest,
    CapturedOrder, ConfirmPaymentRequest, ConfirmedPayment, CreateOrderRequest,
    CreatePaymentIntentRequest, MockError, MockOrder, MockPaymentIntent, OrderDetails,
};
use serde::Serialize;
use tracing::{error, info, instrument, warn};

/// Service name reported by `/health`
pub const SERVICE_NAME: &str = "payment-test-backend";

/// PayPal routes advertised by `/health`
pub const PAYPAL_ENDPOINTS: &[&str] = &[
    "POST /api/paypal/create-order",
    "POST /api/paypal/capture-order",
    "GET /api/paypal/order/{order_id}",
];

/// Stripe routes advertised by `/health`
pub const STRIPE_ENDPOINTS: &[&str] = &[
    "POST /api/stripe/create-payment-intent",
    "POST /api/stripe/confirm-payment",
];

// =============================================================================
// Error Responses
// =============================================================================

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

fn mock_error_to_response(err: MockError) -> ApiError {
    if err.is_client_error() {
        warn!("Rejected request: {}", err);
    } else {
        error!("Mock operation failed: {}", err);
    }

    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

// =============================================================================
// Service Endpoints
// =============================================================================

/// Health check endpoint with the route catalog
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment,
        "timestamp": Utc::now().to_rfc3339(),
        "endpoints": {
            "paypal": PAYPAL_ENDPOINTS,
            "stripe": STRIPE_ENDPOINTS,
        },
        "pages": {
            "unified": "/unified",
            "paypal": "/paypal",
            "stripe": "/stripe",
        }
    }))
}

/// Accept a configuration blob from the test pages and echo it back
pub async fn update_config(body: Bytes) -> Result<impl IntoResponse, ApiError> {
    let config = parse_object(&body).map_err(mock_error_to_response)?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Configuration updated",
        "config": config,
    })))
}

/// Catch-all for unknown paths and methods
///
/// `OriginalUri` keeps the full path when reached from inside a nested router.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "Endpoint not found",
            "code": 404,
            "method": method.as_str(),
            "path": uri.path(),
        })),
    )
}

/// Answer a bare `OPTIONS` request; CORS headers are added by the router layers
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// `/paypal` jumps to the PayPal section of the unified page
pub async fn paypal_redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/#paypal")])
}

/// `/stripe` jumps to the Stripe section of the unified page
pub async fn stripe_redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/#stripe")])
}

// =============================================================================
// PayPal
// =============================================================================

/// Create a mock PayPal order
#[instrument(skip(body), fields(bytes = body.len()))]
pub async fn paypal_create_order(body: Bytes) -> ApiResult<MockOrder> {
    let request: CreateOrderRequest = parse_body(&body).map_err(mock_error_to_response)?;
    let order = MockOrder::create(request, Utc::now());

    info!(
        "Created mock order: id={}, amount={}, currency={}, environment={}",
        order.id, order.amount, order.currency, order.environment
    );
    Ok(Json(order))
}

/// Capture a mock PayPal order
#[instrument(skip(body), fields(bytes = body.len()))]
pub async fn paypal_capture_order(body: Bytes) -> ApiResult<CapturedOrder> {
    let request: CaptureOrderRequest = parse_body(&body).map_err(mock_error_to_response)?;
    let captured = capture_order(request, Utc::now()).map_err(mock_error_to_response)?;

    info!("Captured mock order: {}", captured.id);
    Ok(Json(captured))
}

/// Look up a mock PayPal order
pub async fn paypal_get_order(Path(order_id): Path<String>) -> Json<OrderDetails> {
    Json(OrderDetails::lookup(order_id, Utc::now()))
}

// =============================================================================
// Stripe
// =============================================================================

/// Create a mock Stripe payment intent
#[instrument(skip(body), fields(bytes = body.len()))]
pub async fn stripe_create_payment_intent(body: Bytes) -> ApiResult<MockPaymentIntent> {
    let request: CreatePaymentIntentRequest =
        parse_body(&body).map_err(mock_error_to_response)?;
    let intent = MockPaymentIntent::create(request, Utc::now()).map_err(mock_error_to_response)?;

    info!(
        "Created mock payment intent: id={}, amount={}, currency={}",
        intent.id, intent.amount, intent.currency
    );
    Ok(Json(intent))
}

/// Confirm a mock Stripe payment intent
#[instrument(skip(body), fields(bytes = body.len()))]
pub async fn stripe_confirm_payment(body: Bytes) -> ApiResult<ConfirmedPayment> {
    let request: ConfirmPaymentRequest = parse_body(&body).map_err(mock_error_to_response)?;
    let confirmed = confirm_payment(request, Utc::now()).map_err(mock_error_to_response)?;

    info!("Confirmed mock payment intent: {}", confirmed.id);
    Ok(Json(confirmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new("Test error", 400);
        assert_eq!(err.error, "Test error");
        assert_eq!(err.code, 400);
    }

    #[test]
    fn test_mock_error_conversion() {
        let (status, Json(body)) = mock_error_to_response(MockError::MissingField("orderID"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "orderID is required");

        let (status, _json) =
            mock_error_to_response(MockError::internal("PayPal order creation", "boom"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_create_order_handler_defaults() {
        let Json(order) = paypal_create_order(Bytes::new()).await.unwrap();
        assert_eq!(order.currency, "USD");
        assert_eq!(order.environment, "sandbox");
    }

    #[tokio::test]
    async fn test_capture_handler_rejects_missing_id() {
        let (status, _json) = paypal_capture_order(Bytes::from_static(b"{}"))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
