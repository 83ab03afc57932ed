//! API service areas. Each sub-module wires its own routes via
//! `configure_routes()` and keeps one file per operation, pairing the HTTP
//! handler with the core function it delegates to.

pub mod criteria;
pub mod members;
pub mod ratings;
pub mod session;

#[cfg(test)]
pub(crate) mod testing {
    //! Shared fixtures for the service unit tests: an in-memory database
    //! with the real schema plus row insert helpers.

    use rusqlite::{params, Connection};

    use crate::auth::password;
    use crate::db::init;

    pub fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().expect("open in-memory db");
        // The bundled SQLite is compiled with SQLITE_DEFAULT_FOREIGN_KEYS=1,
        // unlike stock SQLite where enforcement is off unless a connection
        // opts in. Production connections never opt in, and these fixtures
        // insert ratings against criterion ids with no backing criteria
        // rows, so restore the stock default here.
        conn.pragma_update(None, "foreign_keys", 0)
            .expect("disable foreign key enforcement");
        init::create_schema(&conn).expect("create schema");
        conn
    }

    pub fn insert_rater(conn: &Connection, name: &str, username: &str, plain: &str) -> i64 {
        conn.execute(
            "INSERT INTO raters (name, username, password_hash, superuser) VALUES (?1, ?2, ?3, 0)",
            params![name, username, password::digest(plain)],
        )
        .expect("insert rater");
        conn.last_insert_rowid()
    }

    pub fn insert_member(conn: &Connection, name: &str) -> i64 {
        conn.execute("INSERT INTO members (name) VALUES (?1)", params![name])
            .expect("insert member");
        conn.last_insert_rowid()
    }

    pub fn insert_caption(conn: &Connection, caption: &str) -> i64 {
        conn.execute(
            "INSERT INTO criteria_captions (caption) VALUES (?1)",
            params![caption],
        )
        .expect("insert caption");
        conn.last_insert_rowid()
    }

    pub fn insert_criterion(conn: &Connection, caption_id: i64, criterion: &str) -> i64 {
        conn.execute(
            "INSERT INTO criteria (criterion, criteria_caption_id) VALUES (?1, ?2)",
            params![criterion, caption_id],
        )
        .expect("insert criterion");
        conn.last_insert_rowid()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn insert_rating(
        conn: &Connection,
        member_id: i64,
        criterion_id: i64,
        rater_id: Option<i64>,
        level: i64,
        remark: Option<&str>,
        timestamp: i64,
    ) -> i64 {
        conn.execute(
            "INSERT INTO ratings (member_id, criterion_id, rater_id, level, remark, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![member_id, criterion_id, rater_id, level, remark, timestamp],
        )
        .expect("insert rating");
        conn.last_insert_rowid()
    }

    pub fn insert_token(conn: &Connection, rater_id: i64, token: &str, expiry: i64) -> i64 {
        conn.execute(
            "INSERT INTO auth_tokens (auth_token, expiry_timestamp, rater_id) VALUES (?1, ?2, ?3)",
            params![token, expiry, rater_id],
        )
        .expect("insert token");
        conn.last_insert_rowid()
    }
}
