//! Unix-seconds time helpers.
//!
//! Expiry arithmetic lives here so the session code can take a plain `now`
//! argument and stay deterministic under test.

use std::time::{SystemTime, UNIX_EPOCH};

/// Auth tokens live 60 days past their last successful verification.
pub const TOKEN_TTL_SECS: i64 = 3600 * 24 * 60;

/// Current unix timestamp in whole seconds.
pub fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Expiry for a token created or renewed at `now`.
pub fn new_expiry(now: i64) -> i64 {
    now + TOKEN_TTL_SECS
}
