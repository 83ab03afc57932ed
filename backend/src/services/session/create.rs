use actix_web::{web, Responder};
use common::requests::CreateAuthTokenRequest;
use log::error;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::auth::password;
use crate::clock;
use crate::db::Db;

pub async fn process(
    payload: web::Json<CreateAuthTokenRequest>,
    db: web::Data<Db>,
) -> impl Responder {
    let conn = match db.open() {
        Ok(conn) => conn,
        Err(err) => {
            error!("opening database: {}", err);
            return actix_web::HttpResponse::InternalServerError().finish();
        }
    };

    match create_auth_token(&conn, &payload.username, &payload.password, clock::now()) {
        Ok(token) => {
            actix_web::HttpResponse::Ok().json(serde_json::json!({ "auth_token": token }))
        }
        Err(err) => {
            error!("creating auth token: {}", err);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

/// Check the credentials and mint a fresh token expiring 60 days from `now`.
///
/// Fails closed: an unknown username and a wrong password both come back as
/// `None`, indistinguishable to the caller. Existing tokens for the same
/// rater are left untouched.
pub fn create_auth_token(
    conn: &Connection,
    username: &str,
    plain_password: &str,
    now: i64,
) -> Result<Option<String>, rusqlite::Error> {
    let rater_id: Option<i64> = conn
        .query_row(
            "SELECT id FROM raters WHERE username = ?1 AND password_hash = ?2",
            params![username, password::digest(plain_password)],
            |row| row.get(0),
        )
        .optional()?;

    let Some(rater_id) = rater_id else {
        return Ok(None);
    };

    let token = Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO auth_tokens (auth_token, expiry_timestamp, rater_id) VALUES (?1, ?2, ?3)",
        params![token, clock::new_expiry(now), rater_id],
    )?;

    Ok(Some(token))
}
