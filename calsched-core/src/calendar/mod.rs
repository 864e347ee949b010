//! A single calendar: the event store plus its name and time zone.

mod edit;
mod query;

pub use query::{Availability, overlaps};

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use tracing::{debug, info};

use crate::config::CalendarConfig;
use crate::error::{CalSchedError, CalSchedResult};
use crate::event::Event;
use crate::recurrence::{self, Termination, WeekdayPattern};
use crate::series::SeriesId;
use crate::time::{parse_date, parse_date_time};

/// One calendar's events, ordered by start, end, subject and all-day flag.
///
/// Events are stored by structure. Adding an event equal to one already in the
/// calendar (same subject, span and all-day flag) leaves the stored one as is.
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    name: Option<String>,
    timezone: Option<Tz>,
    events: BTreeSet<Event>,
}

impl Calendar {
    /// An unnamed calendar without a time zone.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(name: Option<&str>, timezone: Option<&str>) -> CalSchedResult<Self> {
        Ok(Calendar {
            name: name.map(str::to_string),
            timezone: timezone.map(parse_timezone).transpose()?,
            events: BTreeSet::new(),
        })
    }

    pub fn from_config(config: &CalendarConfig) -> CalSchedResult<Self> {
        Self::with_settings(config.name.as_deref(), config.timezone.as_deref())
    }

    // METADATA:

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        info!(name = %name, "Renaming calendar");
        self.name = Some(name);
    }

    /// The IANA zone id, e.g. `America/New_York`.
    pub fn timezone(&self) -> Option<&'static str> {
        self.timezone.map(|tz| tz.name())
    }

    pub fn set_timezone(&mut self, timezone: &str) -> CalSchedResult<()> {
        let tz = parse_timezone(timezone)?;
        info!(timezone = tz.name(), "Changing calendar time zone");
        self.timezone = Some(tz);
        Ok(())
    }

    // EVENTS:

    /// All events in order.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Members of a series, in order.
    pub fn series(&self, id: SeriesId) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.series() == Some(id))
    }

    /// First event, in calendar order, with this subject and start.
    pub fn find(&self, subject: &str, start: NaiveDateTime) -> Option<&Event> {
        self.events
            .iter()
            .find(|e| e.subject() == subject && e.start() == start)
    }

    pub fn find_exact(
        &self,
        subject: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Option<&Event> {
        self.events
            .iter()
            .find(|e| e.subject() == subject && e.start() == start && e.end() == end)
    }

    /// The series id of the first event with this subject and start, if it has one.
    pub fn series_of(&self, subject: &str, start: NaiveDateTime) -> Option<SeriesId> {
        self.find(subject, start).and_then(Event::series)
    }

    /// Add an already-built event. Returns false if an equal event was already stored.
    pub fn add_event(&mut self, event: Event) -> bool {
        self.events.insert(event)
    }

    // CREATION:

    pub fn create_single_event(&mut self, subject: &str, start: &str, end: &str) -> CalSchedResult<()> {
        let event = Event::timed(subject, parse_date_time(start)?, parse_date_time(end)?)?;
        debug!(%event, "Creating event");
        self.add_event(event);
        Ok(())
    }

    pub fn create_single_all_day(&mut self, subject: &str, date: &str) -> CalSchedResult<()> {
        let event = Event::all_day(subject, parse_date(date)?);
        debug!(%event, "Creating all-day event");
        self.add_event(event);
        Ok(())
    }

    /// Create `count` occurrences on the given weekdays. A count of 0 or 1 creates one plain event.
    pub fn create_recurring_n_times(
        &mut self,
        subject: &str,
        start: &str,
        end: &str,
        weekdays: &str,
        count: u32,
    ) -> CalSchedResult<Option<SeriesId>> {
        let anchor = Event::timed(subject, parse_date_time(start)?, parse_date_time(end)?)?;
        self.create_recurring(anchor, weekdays, Termination::Count(count))
    }

    pub fn create_recurring_all_day_n_times(
        &mut self,
        subject: &str,
        date: &str,
        weekdays: &str,
        count: u32,
    ) -> CalSchedResult<Option<SeriesId>> {
        let anchor = Event::all_day(subject, parse_date(date)?);
        self.create_recurring(anchor, weekdays, Termination::Count(count))
    }

    /// Create occurrences on the given weekdays starting strictly before `until`.
    pub fn create_recurring_until(
        &mut self,
        subject: &str,
        start: &str,
        end: &str,
        weekdays: &str,
        until: &str,
    ) -> CalSchedResult<Option<SeriesId>> {
        let anchor = Event::timed(subject, parse_date_time(start)?, parse_date_time(end)?)?;
        self.create_recurring(anchor, weekdays, Termination::Until(parse_date(until)?))
    }

    pub fn create_recurring_all_day_until(
        &mut self,
        subject: &str,
        date: &str,
        weekdays: &str,
        until: &str,
    ) -> CalSchedResult<Option<SeriesId>> {
        let anchor = Event::all_day(subject, parse_date(date)?);
        self.create_recurring(anchor, weekdays, Termination::Until(parse_date(until)?))
    }

    /// Validate, expand and store a recurrence. Returns the new series, if one was created.
    fn create_recurring(
        &mut self,
        anchor: Event,
        weekdays: &str,
        termination: Termination,
    ) -> CalSchedResult<Option<SeriesId>> {
        let pattern: WeekdayPattern = weekdays.parse()?;

        if matches!(termination, Termination::Count(count) if count <= 1) {
            debug!(event = %anchor, "Recurrence count <= 1, creating a single event");
            self.add_event(anchor);
            return Ok(None);
        }

        let occurrences = recurrence::occurrences(&anchor, &pattern, termination)?;
        if occurrences.is_empty() {
            debug!(event = %anchor, "Recurrence produced no occurrences");
            return Ok(None);
        }

        let id = SeriesId::new();
        debug!(series = %id, count = occurrences.len(), "Creating recurring series");
        for occurrence in occurrences {
            // An equal stored event joins the series instead of being duplicated.
            let mut event = match self.events.take(&occurrence) {
                Some(stored) => {
                    debug!(event = %stored, "Occurrence already stored, adopting it");
                    stored
                }
                None => occurrence,
            };
            event.set_series(Some(id));
            self.events.insert(event);
        }
        Ok(Some(id))
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name.as_deref().unwrap_or("calendar"))
    }
}

fn parse_timezone(timezone: &str) -> CalSchedResult<Tz> {
    timezone
        .parse::<Tz>()
        .map_err(|_| CalSchedError::InvalidTimezone(timezone.to_string()))
}
