//! Insert/lookup/list operations for [`Revision`] records.
//!
//! Dates are stored as ISO-8601 `YYYY-MM-DD` text and parsed back into
//! `chrono::NaiveDate` on read.

use chrono::NaiveDate;
use rusqlite::params;

use crate::database::Database;
use crate::error::Result;
use crate::models::Revision;

impl Database {
    /// Insert a new revision marker.
    ///
    /// Runs in its own transaction and commits immediately. Fails with
    /// [`crate::StoreError::DuplicateKey`] if a revision for the same
    /// (`channel_id`, `date`) pair already exists.
    pub fn add_revision(&self, revision: &Revision) -> Result<()> {
        self.conn().execute(
            "INSERT INTO revisions (channel_id, date)
             VALUES (?1, ?2)",
            params![revision.channel_id, revision.date.to_string()],
        )?;
        tracing::debug!(
            channel_id = revision.channel_id,
            date = %revision.date,
            "revision added"
        );
        Ok(())
    }

    /// Fetch the revision matching both the channel id and the date, or
    /// `Ok(None)` when the pair was never recorded.
    pub fn revision_by_id_and_date(
        &self,
        channel_id: i64,
        date: NaiveDate,
    ) -> Result<Option<Revision>> {
        let result = self.conn().query_row(
            "SELECT channel_id, date
             FROM revisions
             WHERE channel_id = ?1 AND date = ?2",
            params![channel_id, date.to_string()],
            row_to_revision,
        );

        match result {
            Ok(revision) => Ok(Some(revision)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List all revisions. No ordering is guaranteed.
    pub fn list_revisions(&self) -> Result<Vec<Revision>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT channel_id, date FROM revisions")?;

        let rows = stmt.query_map([], row_to_revision)?;

        let mut revisions = Vec::new();
        for row in rows {
            revisions.push(row?);
        }
        Ok(revisions)
    }

    /// Print every revision, one per line. Silent on an empty table; never
    /// mutates state.
    pub fn print_revisions(&self) -> Result<()> {
        for revision in self.list_revisions()? {
            println!("{revision}");
        }
        Ok(())
    }
}

/// Map a `rusqlite::Row` to a [`Revision`].
fn row_to_revision(row: &rusqlite::Row<'_>) -> rusqlite::Result<Revision> {
    let channel_id: i64 = row.get(0)?;
    let date_str: String = row.get(1)?;

    let date: NaiveDate = date_str.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Revision { channel_id, date })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    fn test_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.migrate().unwrap();
        db
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn add_then_get_round_trip() {
        let db = test_db();
        let revision = Revision {
            channel_id: 1,
            date: date("2024-01-01"),
        };

        db.add_revision(&revision).unwrap();
        let got = db.revision_by_id_and_date(1, date("2024-01-01")).unwrap();
        assert_eq!(got, Some(revision));

        // Same channel, different date: nothing recorded.
        assert_eq!(db.revision_by_id_and_date(1, date("2024-01-02")).unwrap(), None);
    }

    #[test]
    fn duplicate_pair_is_rejected() {
        let db = test_db();
        let revision = Revision {
            channel_id: 7,
            date: date("2024-03-15"),
        };

        db.add_revision(&revision).unwrap();
        let err = db.add_revision(&revision).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(_)));
    }

    #[test]
    fn same_channel_different_dates_coexist() {
        let db = test_db();
        for day in ["2024-01-01", "2024-01-02", "2024-01-03"] {
            db.add_revision(&Revision {
                channel_id: 5,
                date: date(day),
            })
            .unwrap();
        }
        assert_eq!(db.list_revisions().unwrap().len(), 3);
    }

    #[test]
    fn same_date_different_channels_coexist() {
        let db = test_db();
        for id in [1, 2] {
            db.add_revision(&Revision {
                channel_id: id,
                date: date("2024-06-01"),
            })
            .unwrap();
        }
        assert_eq!(db.list_revisions().unwrap().len(), 2);
    }

    #[test]
    fn print_on_empty_table_does_not_fail() {
        let db = test_db();
        db.print_revisions().unwrap();
        assert!(db.list_revisions().unwrap().is_empty());
    }
}
