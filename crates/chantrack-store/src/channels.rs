//! Insert/lookup/list operations for [`Channel`] records.

use rusqlite::params;

use crate::database::Database;
use crate::error::Result;
use crate::models::Channel;

impl Database {
    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Insert a new channel.
    ///
    /// The insert runs in its own transaction and commits immediately.
    /// Fails with [`crate::StoreError::DuplicateKey`] if a channel with the
    /// same `channel_id` already exists; the existing row is untouched.
    pub fn add_channel(&self, channel: &Channel) -> Result<()> {
        self.conn().execute(
            "INSERT INTO channels (channel_id, title, enable)
             VALUES (?1, ?2, ?3)",
            params![channel.channel_id, channel.title, channel.enable],
        )?;
        tracing::debug!(channel_id = channel.channel_id, "channel added");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    /// Fetch a single channel by id.
    ///
    /// Returns `Ok(None)` when no such channel exists; absence is not an
    /// error.
    pub fn channel_by_id(&self, channel_id: i64) -> Result<Option<Channel>> {
        let result = self.conn().query_row(
            "SELECT channel_id, title, enable
             FROM channels
             WHERE channel_id = ?1",
            params![channel_id],
            row_to_channel,
        );

        match result {
            Ok(channel) => Ok(Some(channel)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List all channels. No ordering is guaranteed.
    pub fn list_channels(&self) -> Result<Vec<Channel>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT channel_id, title, enable FROM channels")?;

        let rows = stmt.query_map([], row_to_channel)?;

        let mut channels = Vec::new();
        for row in rows {
            channels.push(row?);
        }
        Ok(channels)
    }

    // ------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------

    /// Print every channel, one per line. Produces no output when the table
    /// is empty; never mutates state.
    pub fn print_channels(&self) -> Result<()> {
        for channel in self.list_channels()? {
            println!("{channel}");
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Map a `rusqlite::Row` to a [`Channel`].
fn row_to_channel(row: &rusqlite::Row<'_>) -> rusqlite::Result<Channel> {
    Ok(Channel {
        channel_id: row.get(0)?,
        title: row.get(1)?,
        enable: row.get(2)?,
    })
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

    fn news_channel() -> Channel {
        Channel {
            channel_id: 1,
            title: "News".into(),
            enable: true,
        }
    }

    #[test]
    fn add_then_get_round_trip() {
        let db = test_db();
        let channel = news_channel();

        db.add_channel(&channel).unwrap();
        let got = db.channel_by_id(1).unwrap();
        assert_eq!(got, Some(channel));
    }

    #[test]
    fn duplicate_id_is_rejected_and_first_row_survives() {
        let db = test_db();
        db.add_channel(&news_channel()).unwrap();

        let dup = Channel {
            channel_id: 1,
            title: "Imposter".into(),
            enable: false,
        };
        let err = db.add_channel(&dup).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(_)));

        // The original record is retrievable unchanged.
        assert_eq!(db.channel_by_id(1).unwrap(), Some(news_channel()));
    }

    #[test]
    fn missing_id_is_none_not_error() {
        let db = test_db();
        assert_eq!(db.channel_by_id(42).unwrap(), None);
    }

    #[test]
    fn list_returns_every_inserted_channel() {
        let db = test_db();
        for id in [1, 2, 3] {
            db.add_channel(&Channel {
                channel_id: id,
                title: format!("channel {id}"),
                enable: id != 2,
            })
            .unwrap();
        }

        let mut ids: Vec<i64> = db
            .list_channels()
            .unwrap()
            .iter()
            .map(|c| c.channel_id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn print_on_empty_table_does_not_fail() {
        let db = test_db();
        db.print_channels().unwrap();
        assert!(db.list_channels().unwrap().is_empty());
    }
}
