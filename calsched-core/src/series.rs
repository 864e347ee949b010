//! Series identity.
//!
//! A series is not a container: it is the set of events in a calendar that
//! carry the same [`SeriesId`]. The calendar owns every event, and walking a
//! series means filtering the calendar's ordered store by id.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

/// Identifier shared by every event generated by one recurrence call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SeriesId(Uuid);

impl SeriesId {
    pub(crate) fn new() -> Self {
        SeriesId(Uuid::new_v4())
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
