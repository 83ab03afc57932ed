use actix_web::{web, Responder};
use log::error;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::auth::RaterIdentity;
use crate::db::Db;

pub async fn process(
    member_id: web::Path<i64>,
    db: web::Data<Db>,
    _identity: RaterIdentity,
) -> impl Responder {
    let conn = match db.open() {
        Ok(conn) => conn,
        Err(err) => {
            error!("opening database: {}", err);
            return actix_web::HttpResponse::InternalServerError().finish();
        }
    };

    match get_or_mint_share_token(&conn, member_id.into_inner()) {
        Ok(Some(share_token)) => actix_web::HttpResponse::Ok()
            .json(serde_json::json!({ "share_token": share_token })),
        Ok(None) => actix_web::HttpResponse::NotFound().finish(),
        Err(err) => {
            error!("fetching share token: {}", err);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

/// Return the member's share token, minting one on first request.
///
/// Once set the token never changes: the mint only writes where
/// `share_token IS NULL` and the stored value is re-read afterwards, so a
/// concurrent first request simply yields whichever token won.
pub fn get_or_mint_share_token(
    conn: &Connection,
    member_id: i64,
) -> Result<Option<String>, rusqlite::Error> {
    let existing: Option<Option<String>> = conn
        .query_row(
            "SELECT share_token FROM members WHERE id = ?1",
            params![member_id],
            |row| row.get(0),
        )
        .optional()?;

    let Some(existing) = existing else {
        return Ok(None);
    };
    if existing.is_some() {
        return Ok(existing);
    }

    conn.execute(
        "UPDATE members SET share_token = ?1 WHERE id = ?2 AND share_token IS NULL",
        params![Uuid::new_v4().to_string(), member_id],
    )?;

    conn.query_row(
        "SELECT share_token FROM members WHERE id = ?1",
        params![member_id],
        |row| row.get(0),
    )
    .optional()
    .map(Option::flatten)
}
