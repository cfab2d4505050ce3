//! Record structs persisted in the tracker database.
//!
//! Plain data structs with explicit row mapping in the query modules; there
//! is no ORM layer. Both derive `Serialize`/`Deserialize` so callers can
//! hand them to other surfaces directly.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Channel
// ---------------------------------------------------------------------------

/// A tracked source to monitor, keyed by its numeric id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Channel {
    /// Unique channel identifier (primary key).
    pub channel_id: i64,
    /// Human-readable channel title.
    pub title: String,
    /// Whether the channel is currently being monitored.
    pub enable: bool,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Channel(id={}, title={:?}, enable={})",
            self.channel_id, self.title, self.enable
        )
    }
}

// ---------------------------------------------------------------------------
// Revision
// ---------------------------------------------------------------------------

/// A recorded observation of a channel on a given date.
///
/// Keyed by (`channel_id`, `date`); immutable once written. The store does
/// not enforce that a matching [`Channel`] row exists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Revision {
    /// Id of the channel this revision belongs to.
    pub channel_id: i64,
    /// Calendar date of the observation.
    pub date: NaiveDate,
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Revision(channel_id={}, date={})", self.channel_id, self.date)
    }
}
