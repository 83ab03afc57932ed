//! The acting rater behind a request.
//!
//! `RaterIdentity` is an actix extractor: handlers that take one only run
//! for requests carrying a valid, unexpired token in the `x-auth-token`
//! header. Resolving the identity renews the token's expiry (sliding
//! window). The rater id is always taken from the token row, never from
//! client-supplied body or query fields.

use actix_web::error::{ErrorForbidden, ErrorInternalServerError};
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use log::error;

use crate::clock;
use crate::db::Db;
use crate::services::session::verify;

/// Header carrying the opaque auth token.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Resolved identity of the rater making the request.
#[derive(Debug, Clone)]
pub struct RaterIdentity {
    pub rater_id: i64,
}

impl FromRequest for RaterIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve(req))
    }
}

fn resolve(req: &HttpRequest) -> Result<RaterIdentity, actix_web::Error> {
    let Some(db) = req.app_data::<web::Data<Db>>() else {
        error!("database handle missing from app data");
        return Err(ErrorInternalServerError(""));
    };

    let token = req
        .headers()
        .get(AUTH_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());
    let Some(token) = token else {
        return Err(ErrorForbidden(""));
    };

    let conn = db.open().map_err(|err| {
        error!("opening database for auth check: {}", err);
        ErrorInternalServerError("")
    })?;

    // Unknown token and expired token answer identically.
    match verify::check_and_renew(&conn, token, clock::now()) {
        Ok(Some(rater_id)) => Ok(RaterIdentity { rater_id }),
        Ok(None) => Err(ErrorForbidden("")),
        Err(err) => {
            error!("auth token lookup failed: {}", err);
            Err(ErrorInternalServerError(""))
        }
    }
}
