use actix_web::{web, Responder};
use log::error;
use rusqlite::{params, Connection};

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

    match delete_member(&conn, member_id.into_inner()) {
        Ok(()) => actix_web::HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(err) => {
            error!("deleting member: {}", err);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn delete_member(conn: &Connection, member_id: i64) -> Result<(), rusqlite::Error> {
    conn.execute("DELETE FROM members WHERE id = ?1", params![member_id])?;
    Ok(())
}
