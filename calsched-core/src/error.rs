//! Error types for the calsched engine.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors that can occur in calendar operations.
#[derive(Error, Debug)]
pub enum CalSchedError {
    #[error("Invalid interval: start {start} is after end {end}")]
    InvalidInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Recurring events must start and end on the same day (got {start} to {end})")]
    CrossDayEvent {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error(
        "Invalid weekday letter '{0}': use M, T, W, R, F, S or U (Monday through Sunday)"
    )]
    InvalidWeekday(char),

    #[error("No weekdays given for a recurring event")]
    EmptyWeekdayPattern,

    #[error("Unknown event property '{0}'")]
    UnknownProperty(String),

    #[error("Invalid {kind} '{value}'")]
    UnknownEnumValue { kind: &'static str, value: String },

    #[error("No event '{subject}' starting at {start}")]
    NotFound {
        subject: String,
        start: NaiveDateTime,
    },

    #[error("No events to pick from to edit")]
    EmptyCollection,

    #[error("Invalid time zone '{0}'")]
    InvalidTimezone(String),

    #[error("Malformed date/time '{input}'. Expected {expected}")]
    MalformedDateTime {
        input: String,
        expected: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calsched operations.
pub type CalSchedResult<T> = Result<T, CalSchedError>;
