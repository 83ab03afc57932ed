use actix_web::{web, Responder};
use common::requests::MemberPayload;
use log::error;
use rusqlite::{params, Connection};

use crate::auth::RaterIdentity;
use crate::db::Db;

pub async fn process(
    member_id: web::Path<i64>,
    payload: web::Json<MemberPayload>,
    db: web::Data<Db>,
    _identity: RaterIdentity,
) -> impl Responder {
    if payload.member.name.is_empty() {
        return actix_web::HttpResponse::BadRequest().finish();
    }

    let conn = match db.open() {
        Ok(conn) => conn,
        Err(err) => {
            error!("opening database: {}", err);
            return actix_web::HttpResponse::InternalServerError().finish();
        }
    };

    match rename_member(&conn, member_id.into_inner(), &payload.member.name) {
        Ok(()) => actix_web::HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(err) => {
            error!("renaming member: {}", err);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn rename_member(conn: &Connection, member_id: i64, name: &str) -> Result<(), rusqlite::Error> {
    conn.execute(
        "UPDATE members SET name = ?1 WHERE id = ?2",
        params![name, member_id],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::members::get::get_member;
    use crate::services::testing::{insert_member, test_conn};

    #[test]
    fn renames_only_the_addressed_member() {
        let conn = test_conn();
        let member = insert_member(&conn, "Old name");
        let other = insert_member(&conn, "Untouched");

        rename_member(&conn, member, "New name").expect("rename");

        assert_eq!(
            get_member(&conn, member).expect("query").expect("member").name,
            "New name"
        );
        assert_eq!(
            get_member(&conn, other).expect("query").expect("member").name,
            "Untouched"
        );
    }
}
