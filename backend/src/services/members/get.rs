use actix_web::{web, Responder};
use common::model::member::Member;
use log::error;
use rusqlite::{params, Connection, OptionalExtension};

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

    match get_member(&conn, member_id.into_inner()) {
        Ok(Some(member)) => {
            actix_web::HttpResponse::Ok().json(serde_json::json!({ "member": member }))
        }
        Ok(None) => actix_web::HttpResponse::NotFound().finish(),
        Err(err) => {
            error!("fetching member: {}", err);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

/// Fetch one member. The share token column is intentionally not selected;
/// it only ever leaves the server through the share-token endpoint.
pub fn get_member(conn: &Connection, member_id: i64) -> Result<Option<Member>, rusqlite::Error> {
    conn.query_row(
        "SELECT id, name FROM members WHERE id = ?1",
        params![member_id],
        |row| {
            Ok(Member {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        },
    )
    .optional()
}
