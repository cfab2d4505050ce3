//! v001 -- Initial schema creation.
//!
//! Creates the two tables: `channels` and `revisions`.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
-- ----------------------------------------------------------------
-- Channels
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS channels (
    channel_id INTEGER PRIMARY KEY,
    title      TEXT NOT NULL,
    enable     BOOLEAN NOT NULL
);

-- ----------------------------------------------------------------
-- Revisions
-- ----------------------------------------------------------------
-- channel_id is NOT a foreign key into channels: referential
-- integrity between the two tables is the caller's responsibility.
CREATE TABLE IF NOT EXISTS revisions (
    channel_id INTEGER NOT NULL,
    date       DATE NOT NULL,           -- ISO-8601 YYYY-MM-DD

    PRIMARY KEY (channel_id, date)
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
