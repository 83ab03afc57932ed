//! # Session service
//!
//! Token-based authentication with a sliding 60-day expiry window. Tokens
//! are opaque uuid-v4 strings carried in the `x-auth-token` header; a rater
//! may hold any number of valid tokens at once (one per device). Every
//! successful verification pushes the expiry forward, so active sessions
//! never lapse while inactive ones silently expire.
//!
//! ## Sub-modules
//! - `create`: credential check and token minting (login).
//! - `verify`: token lookup plus expiry renewal; also backs the
//!   [`crate::auth::RaterIdentity`] extractor.
//! - `change_password`: replaces the stored digest for the acting rater.
//! - `rater`: the signed-in rater's public record.
//! - `sweep`: periodic deletion of tokens already past their expiry.

pub mod change_password;
pub mod create;
pub mod rater;
pub mod sweep;
pub mod verify;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/auth";

/// Routes under `/api/auth`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        // Login; the only route handing out tokens.
        .route("/token", post().to(create::process))
        // Unauthenticated probe used by the client on startup.
        .route("/verify", post().to(verify::process))
        .route("/change_password", post().to(change_password::process))
        .route("/rater", get().to(rater::process))
}
