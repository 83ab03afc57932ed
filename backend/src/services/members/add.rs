use actix_web::{web, Responder};
use common::model::member::Member;
use common::requests::MemberPayload;
use log::error;
use rusqlite::{params, Connection};

use crate::auth::RaterIdentity;
use crate::db::Db;

pub async fn process(
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

    match add_member(&conn, &payload.member.name) {
        Ok(member) => actix_web::HttpResponse::Ok().json(serde_json::json!({ "member": member })),
        Err(err) => {
            error!("adding member: {}", err);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

/// Insert a member and return the stored row. The share token starts out
/// unset and is only minted on first request.
pub fn add_member(conn: &Connection, name: &str) -> Result<Member, rusqlite::Error> {
    conn.execute("INSERT INTO members (name) VALUES (?1)", params![name])?;
    Ok(Member {
        id: conn.last_insert_rowid(),
        name: name.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::members::get::get_member;
    use crate::services::testing::test_conn;

    #[test]
    fn inserted_member_is_readable() {
        let conn = test_conn();
        let member = add_member(&conn, "New trainee").expect("insert");

        let fetched = get_member(&conn, member.id).expect("query").expect("member");
        assert_eq!(fetched.name, "New trainee");
    }
}
