//! # Routes
//!
//! Axum router configuration for the mock payment API and the static
//! test pages.

use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::Request,
    handler::HandlerWithoutStateExt,
    http::{header, HeaderValue, Method},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, get_service, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

/// Methods advertised on every response
pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Request headers advertised on every response
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Create the main application router
///
/// Routes:
/// - Service:
///   - GET  /health - Health check and route catalog
///   - POST /config - Echo a configuration blob
///
/// - PayPal:
///   - POST /api/paypal/create-order
///   - POST /api/paypal/capture-order
///   - GET  /api/paypal/order/{order_id}
///
/// - Stripe:
///   - POST /api/stripe/create-payment-intent
///   - POST /api/stripe/confirm-payment
///
/// - Static pages:
///   - GET /, /unified - unified payment page
///   - GET /paypal, /stripe - redirect into the unified page
///   - anything else - file from the static directory, or 404
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let paypal_routes = Router::new()
        .route(
            "/create-order",
            post(handlers::paypal_create_order).fallback(handlers::not_found),
        )
        .route(
            "/capture-order",
            post(handlers::paypal_capture_order).fallback(handlers::not_found),
        )
        .route(
            "/order/{order_id}",
            get(handlers::paypal_get_order).fallback(handlers::not_found),
        );

    let stripe_routes = Router::new()
        .route(
            "/create-payment-intent",
            post(handlers::stripe_create_payment_intent).fallback(handlers::not_found),
        )
        .route(
            "/confirm-payment",
            post(handlers::stripe_confirm_payment).fallback(handlers::not_found),
        );

    // Unknown paths and unsupported methods land on the JSON 404
    let unified_page = get_service(ServeFile::new(state.config.unified_page()))
        .fallback(handlers::not_found);
    let static_files = ServeDir::new(&state.config.static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(handlers::not_found.into_service());

    Router::new()
        .route("/health", get(handlers::health).fallback(handlers::not_found))
        .route("/config", post(handlers::update_config).fallback(handlers::not_found))
        .route("/", unified_page.clone())
        .route("/unified", unified_page)
        .route("/paypal", get(handlers::paypal_redirect).fallback(handlers::not_found))
        .route("/stripe", get(handlers::stripe_redirect).fallback(handlers::not_found))
        .nest("/api/paypal", paypal_routes)
        .nest("/api/stripe", stripe_routes)
        .fallback_service(static_files)
        // Middleware
        .layer(middleware::from_fn(answer_options))
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}

/// Short-circuit every `OPTIONS` request with an empty 200
async fn answer_options(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return handlers::preflight().await.into_response();
    }
    next.run(request).await
}
