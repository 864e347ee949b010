//! Event scheduling engine for a single calendar.
//!
//! This crate provides:
//! - `Event` with structural identity and a total order
//! - weekly `recurrence` expansion bounded by a count or an end date
//! - `Calendar`, which stores events and handles series-aware edits and
//!   interval/availability queries

pub mod calendar;
pub mod config;
pub mod error;
pub mod event;
pub mod recurrence;
pub mod series;
pub mod time;
pub mod zoned;

pub use calendar::{Availability, Calendar};
pub use config::CalendarConfig;
pub use error::{CalSchedError, CalSchedResult};
pub use event::{EditProperty, Event, Location, Status};
pub use series::SeriesId;
pub use zoned::ZonedEvent;
