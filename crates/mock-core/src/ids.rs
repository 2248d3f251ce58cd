//! # Synthetic Identifiers
//!
//! Mock ids carry the wall-clock time they were minted at, followed by a
//! short random suffix so that two ids minted in the same microsecond
//! still differ.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Prefix for mock PayPal order ids
pub const ORDER_PREFIX: &str = "mock_order";

/// Prefix for mock Stripe payment intent ids
pub const INTENT_PREFIX: &str = "pi_mock";

/// Length of the random hex suffix
const SUFFIX_LEN: usize = 8;

/// Mint an id of the form `<prefix>_<secs>.<micros>_<hex>`
pub fn synthetic_id(prefix: &str, now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}_{}.{:06}_{}",
        prefix,
        now.timestamp(),
        now.timestamp_subsec_micros(),
        &suffix[..SUFFIX_LEN]
    )
}
