use actix_web::{web, Responder};
use log::error;
use rusqlite::{params, Connection, OptionalExtension};

use crate::auth::RaterIdentity;
use crate::db::Db;

pub async fn process(
    criterion_id: web::Path<i64>,
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

    match get_criterion(&conn, criterion_id.into_inner()) {
        Ok(Some(criterion)) => actix_web::HttpResponse::Ok()
            .json(serde_json::json!({ "criterion": { "criterion": criterion } })),
        Ok(None) => actix_web::HttpResponse::NotFound().finish(),
        Err(err) => {
            error!("fetching criterion: {}", err);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn get_criterion(
    conn: &Connection,
    criterion_id: i64,
) -> Result<Option<String>, rusqlite::Error> {
    conn.query_row(
        "SELECT criterion FROM criteria WHERE id = ?1",
        params![criterion_id],
        |row| row.get(0),
    )
    .optional()
}
