use actix_web::{web, Responder};
use common::model::member::Member;
use common::model::report::MemberReport;
use log::error;
use rusqlite::{params, Connection, OptionalExtension};

use crate::auth::RaterIdentity;
use crate::db::Db;
use crate::services::criteria::captions::captions_with_criteria;
use crate::services::members::get::get_member;
use crate::services::ratings::latest::latest_ratings;

/// Report for an authenticated rater, keyed by member id.
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

    let member = match get_member(&conn, member_id.into_inner()) {
        Ok(Some(member)) => member,
        Ok(None) => return actix_web::HttpResponse::NotFound().finish(),
        Err(err) => {
            error!("fetching member for report: {}", err);
            return actix_web::HttpResponse::InternalServerError().finish();
        }
    };

    respond_with_report(&conn, member)
}

/// Report via the share-token capability: no rater identity, read-only
/// access to exactly the one member the token belongs to.
pub async fn process_by_share_token(
    share_token: web::Path<String>,
    db: web::Data<Db>,
) -> impl Responder {
    let conn = match db.open() {
        Ok(conn) => conn,
        Err(err) => {
            error!("opening database: {}", err);
            return actix_web::HttpResponse::InternalServerError().finish();
        }
    };

    let member = match member_by_share_token(&conn, &share_token) {
        Ok(Some(member)) => member,
        // Unknown capability gets the same answer as a missing member.
        Ok(None) => return actix_web::HttpResponse::NotFound().finish(),
        Err(err) => {
            error!("resolving share token: {}", err);
            return actix_web::HttpResponse::InternalServerError().finish();
        }
    };

    respond_with_report(&conn, member)
}

fn respond_with_report(conn: &Connection, member: Member) -> actix_web::HttpResponse {
    match build_report(conn, member) {
        Ok(report) => actix_web::HttpResponse::Ok().json(report),
        Err(err) => {
            error!("building report: {}", err);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn member_by_share_token(
    conn: &Connection,
    share_token: &str,
) -> Result<Option<Member>, rusqlite::Error> {
    conn.query_row(
        "SELECT id, name FROM members WHERE share_token = ?1",
        params![share_token],
        |row| {
            Ok(Member {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        },
    )
    .optional()
}

/// Assemble the report in full before responding: member, the criteria
/// catalogue, then the latest rating per criterion.
pub fn build_report(conn: &Connection, member: Member) -> Result<MemberReport, rusqlite::Error> {
    let criteria_captions = captions_with_criteria(conn)?;
    let latest_ratings = latest_ratings(conn, member.id)?;
    Ok(MemberReport {
        member,
        criteria_captions,
        latest_ratings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::members::share_token::get_or_mint_share_token;
    use crate::services::testing::{
        insert_caption, insert_criterion, insert_member, insert_rater, insert_rating, test_conn,
    };

    #[test]
    fn share_token_resolves_to_its_member_only() {
        let conn = test_conn();
        let member = insert_member(&conn, "Trainee");
        insert_member(&conn, "Other");
        let token = get_or_mint_share_token(&conn, member)
            .expect("query")
            .expect("token");

        let resolved = member_by_share_token(&conn, &token)
            .expect("query")
            .expect("member");
        assert_eq!(resolved.id, member);
        assert!(member_by_share_token(&conn, "not-a-token")
            .expect("query")
            .is_none());
    }

    #[test]
    fn report_combines_catalogue_and_latest_ratings() {
        let conn = test_conn();
        let member = insert_member(&conn, "Trainee");
        let rater = insert_rater(&conn, "Skipper", "skipper", "hunter2!");
        let caption = insert_caption(&conn, "Handling");
        let criterion = insert_criterion(&conn, caption, "Tacking");
        insert_rating(&conn, member, criterion, Some(rater), 2, None, 100);
        insert_rating(&conn, member, criterion, Some(rater), 4, Some("better"), 200);

        let member = get_member(&conn, member).expect("query").expect("member");
        let report = build_report(&conn, member).expect("report");

        assert_eq!(report.member.name, "Trainee");
        assert_eq!(report.criteria_captions.len(), 1);
        assert_eq!(report.criteria_captions[0].criteria.len(), 1);
        assert_eq!(report.latest_ratings.len(), 1);
        assert_eq!(report.latest_ratings[0].level, 4);
    }
}
