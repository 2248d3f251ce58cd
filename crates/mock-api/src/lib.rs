//! # mock-api
//!
//! HTTP layer for the mock payment server.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Canned PayPal and Stripe endpoints backed by `mock-core`
//! - Static serving of the payment test pages
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check and route catalog |
//! | POST | `/api/paypal/create-order` | Create mock order |
//! | POST | `/api/paypal/capture-order` | Capture mock order |
//! | GET | `/api/paypal/order/{order_id}` | Look up mock order |
//! | POST | `/api/stripe/create-payment-intent` | Create mock payment intent |
//! | POST | `/api/stripe/confirm-payment` | Confirm mock payment intent |
//! | POST | `/config` | Echo a configuration blob |
//! | OPTIONS | `*` | Empty 200 with CORS headers |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState, ConfigError};
