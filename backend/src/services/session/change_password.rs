use actix_web::{web, Responder};
use common::requests::ChangePasswordRequest;
use log::error;
use rusqlite::{params, Connection, OptionalExtension};

use crate::auth::{password, RaterIdentity};
use crate::db::Db;

pub async fn process(
    payload: web::Json<ChangePasswordRequest>,
    db: web::Data<Db>,
    identity: RaterIdentity,
) -> impl Responder {
    let conn = match db.open() {
        Ok(conn) => conn,
        Err(err) => {
            error!("opening database: {}", err);
            return actix_web::HttpResponse::InternalServerError().finish();
        }
    };

    match change_password(
        &conn,
        identity.rater_id,
        &payload.old_password,
        &payload.new_password,
    ) {
        Ok(success) => actix_web::HttpResponse::Ok().json(serde_json::json!({ "success": success })),
        Err(err) => {
            error!("changing password: {}", err);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

/// Replace the acting rater's password digest.
///
/// Refused when the new password is shorter than 7 characters or the old
/// password does not match the stored digest; nothing is mutated in either
/// case. Outstanding tokens for the rater stay valid on success — changing
/// a password is not a remote-logout mechanism.
pub fn change_password(
    conn: &Connection,
    rater_id: i64,
    old_password: &str,
    new_password: &str,
) -> Result<bool, rusqlite::Error> {
    if new_password.chars().count() < 7 {
        return Ok(false);
    }

    let matched: Option<i64> = conn
        .query_row(
            "SELECT id FROM raters WHERE id = ?1 AND password_hash = ?2",
            params![rater_id, password::digest(old_password)],
            |row| row.get(0),
        )
        .optional()?;

    if matched.is_none() {
        return Ok(false);
    }

    conn.execute(
        "UPDATE raters SET password_hash = ?1 WHERE id = ?2",
        params![password::digest(new_password), rater_id],
    )?;

    Ok(true)
}
