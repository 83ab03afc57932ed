//! Schema creation and first-run seeding.
//!
//! The schema is applied with `IF NOT EXISTS` on every start. Seeding only
//! touches an empty database: the criteria catalogue goes in when no
//! captions exist yet, and a single bootstrap rater is created when the
//! raters table is empty.

use log::{info, warn};
use rusqlite::{params, Connection};

use crate::auth::password;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS criteria_captions (
        id INTEGER PRIMARY KEY,
        caption TEXT
    );
    CREATE TABLE IF NOT EXISTS criteria (
        id INTEGER PRIMARY KEY,
        criterion TEXT,
        criteria_caption_id INTEGER,
        FOREIGN KEY(criteria_caption_id) REFERENCES criteria_captions(id)
            ON UPDATE CASCADE ON DELETE RESTRICT
    );
    CREATE TABLE IF NOT EXISTS members (
        id INTEGER PRIMARY KEY,
        name TEXT,
        share_token TEXT
    );
    CREATE TABLE IF NOT EXISTS raters (
        id INTEGER PRIMARY KEY,
        name TEXT,
        username TEXT,
        password_hash TEXT,
        superuser INTEGER
    );
    CREATE TABLE IF NOT EXISTS ratings (
        id INTEGER PRIMARY KEY,
        member_id INTEGER,
        criterion_id INTEGER,
        rater_id INTEGER,
        level INTEGER,
        remark TEXT,
        timestamp INTEGER,
        FOREIGN KEY(member_id) REFERENCES members(id)
            ON UPDATE CASCADE ON DELETE RESTRICT,
        FOREIGN KEY(criterion_id) REFERENCES criteria(id)
            ON UPDATE CASCADE ON DELETE RESTRICT,
        FOREIGN KEY(rater_id) REFERENCES raters(id)
            ON UPDATE CASCADE ON DELETE SET NULL
    );
    CREATE TABLE IF NOT EXISTS auth_tokens (
        id INTEGER PRIMARY KEY,
        rater_id INTEGER,
        auth_token TEXT,
        expiry_timestamp INTEGER,
        FOREIGN KEY(rater_id) REFERENCES raters(id)
            ON UPDATE CASCADE ON DELETE SET NULL
    );
";

/// The fixed criteria catalogue, grouped by caption.
const CATALOGUE: &[(&str, &[&str])] = &[
    (
        "Preparing the boat for the conditions ahead",
        &[
            "Rigging the boat for sailing",
            "Stowing the boat for the night",
            "Warping the boat along the quay",
            "Hoisting the sails at rest",
            "Lowering the sails at rest",
            "Hoisting the sails under way",
            "Lowering the sails under way",
            "Mooring at the home berth",
            "Recognising the need to reef",
            "Reefing at rest",
            "Reefing under way",
            "Ropework and knots",
        ],
    ),
    (
        "Boat handling and the most frequent manoeuvres",
        &[
            "Sail trim and sail handling",
            "Steering with helm and sheet",
            "Holding a course",
            "Tacking",
            "Beating in open water",
            "Beating in a narrow channel",
            "Gybing",
            "Avoiding an unwanted gybe",
            "Running downwind",
            "Riding out a squall",
        ],
    ),
    (
        "Leaving and approaching shore or quay under control",
        &[
            "Recognising windward and leeward points",
            "Sailing the windward point",
            "Leaving from a windward shore",
            "Arriving at a windward shore",
            "Sailing the leeward point",
            "Leaving from a lee shore",
            "Arriving at a lee shore",
            "Anchoring",
        ],
    ),
];

/// Apply the schema.
pub fn create_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA)
}

/// Seed the criteria catalogue if no captions exist yet. Returns whether
/// anything was inserted.
pub fn seed_criteria(conn: &Connection) -> Result<bool, rusqlite::Error> {
    let captions: i64 = conn.query_row("SELECT COUNT(*) FROM criteria_captions", [], |row| {
        row.get(0)
    })?;
    if captions > 0 {
        return Ok(false);
    }

    for (caption, criteria) in CATALOGUE {
        conn.execute(
            "INSERT INTO criteria_captions (caption) VALUES (?1)",
            params![caption],
        )?;
        let caption_id = conn.last_insert_rowid();
        for criterion in *criteria {
            conn.execute(
                "INSERT INTO criteria (criterion, criteria_caption_id) VALUES (?1, ?2)",
                params![criterion, caption_id],
            )?;
        }
    }
    Ok(true)
}

/// Seed the bootstrap rater if no raters exist yet. Returns whether a
/// rater was created.
pub fn seed_admin(
    conn: &Connection,
    username: &str,
    plain_password: &str,
) -> Result<bool, rusqlite::Error> {
    let raters: i64 = conn.query_row("SELECT COUNT(*) FROM raters", [], |row| row.get(0))?;
    if raters > 0 {
        return Ok(false);
    }

    conn.execute(
        "INSERT INTO raters (name, username, password_hash, superuser) VALUES (?1, ?2, ?3, 1)",
        params![username, username, password::digest(plain_password)],
    )?;
    Ok(true)
}

/// Full first-run initialisation as performed at startup.
pub fn initialize(
    conn: &Connection,
    admin_username: &str,
    admin_password: &str,
) -> Result<(), rusqlite::Error> {
    create_schema(conn)?;
    if seed_criteria(conn)? {
        info!("seeded criteria catalogue");
    }
    if seed_admin(conn, admin_username, admin_password)? {
        warn!(
            "seeded bootstrap rater '{}'; change its password after first login",
            admin_username
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_and_seed_are_idempotent() {
        let conn = Connection::open_in_memory().expect("in-memory db");
        initialize(&conn, "admin", "changeme").expect("first init");
        initialize(&conn, "admin", "changeme").expect("second init");

        let captions: i64 = conn
            .query_row("SELECT COUNT(*) FROM criteria_captions", [], |row| {
                row.get(0)
            })
            .expect("count captions");
        assert_eq!(captions, CATALOGUE.len() as i64);

        let raters: i64 = conn
            .query_row("SELECT COUNT(*) FROM raters", [], |row| row.get(0))
            .expect("count raters");
        assert_eq!(raters, 1);
    }

    #[test]
    fn every_caption_gets_its_criteria() {
        let conn = Connection::open_in_memory().expect("in-memory db");
        initialize(&conn, "admin", "changeme").expect("init");

        let total: i64 = conn
            .query_row("SELECT COUNT(*) FROM criteria", [], |row| row.get(0))
            .expect("count criteria");
        let expected: usize = CATALOGUE.iter().map(|(_, c)| c.len()).sum();
        assert_eq!(total, expected as i64);
    }
}
