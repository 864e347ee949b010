//! Calendar events.
//!
//! An [`Event`] is identified purely by its structure: subject, all-day flag,
//! start and end. Description, location, status and series membership are
//! deliberately left out of equality, hashing and ordering, so two events that
//! differ only in those fields collapse into one when stored in a set.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use serde::Serialize;

use crate::error::{CalSchedError, CalSchedResult};
use crate::series::SeriesId;
use crate::time::{ALL_DAY_END, ALL_DAY_START, format_date_time, parse_date_time};

/// Shown in place of a description that was never set.
pub const MISSING_DESCRIPTION: &str = "Description not found";

/// Where an event takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Physical,
    Online,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Physical => "physical",
            Location::Online => "online",
        }
    }
}

impl FromStr for Location {
    type Err = CalSchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "physical" => Ok(Location::Physical),
            "online" => Ok(Location::Online),
            _ => Err(CalSchedError::UnknownEnumValue {
                kind: "location (expected \"physical\" or \"online\")",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility of an event. New events are private.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Public,
    #[default]
    Private,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Public => "public",
            Status::Private => "private",
        }
    }
}

impl FromStr for Status {
    type Err = CalSchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Status::Public),
            "private" => Ok(Status::Private),
            _ => Err(CalSchedError::UnknownEnumValue {
                kind: "status (expected \"public\" or \"private\")",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The editable properties of an event, as named by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditProperty {
    Subject,
    Start,
    End,
    Description,
    Location,
    Status,
}

impl EditProperty {
    /// Start and end edits change the time span, which breaks series membership.
    pub fn is_temporal(&self) -> bool {
        matches!(self, EditProperty::Start | EditProperty::End)
    }
}

impl FromStr for EditProperty {
    type Err = CalSchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subject" => Ok(EditProperty::Subject),
            "start" => Ok(EditProperty::Start),
            "end" => Ok(EditProperty::End),
            "description" => Ok(EditProperty::Description),
            "location" => Ok(EditProperty::Location),
            "status" => Ok(EditProperty::Status),
            _ => Err(CalSchedError::UnknownProperty(s.to_string())),
        }
    }
}

/// A single calendar event.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    subject: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    all_day: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    series: Option<SeriesId>,
}

impl Event {
    /// Create a timed event. Fails if `start` is after `end`.
    pub fn timed(
        subject: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> CalSchedResult<Self> {
        if start > end {
            return Err(CalSchedError::InvalidInterval { start, end });
        }

        Ok(Event {
            subject: subject.into(),
            start,
            end,
            all_day: false,
            location: None,
            description: None,
            status: Status::default(),
            series: None,
        })
    }

    /// Create an all-day event, spanning 08:00 to 17:00 on `date`.
    pub fn all_day(subject: impl Into<String>, date: NaiveDate) -> Self {
        Event {
            subject: subject.into(),
            start: date.and_time(ALL_DAY_START),
            end: date.and_time(ALL_DAY_END),
            all_day: true,
            location: None,
            description: None,
            status: Status::default(),
            series: None,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn is_all_day(&self) -> bool {
        self.all_day
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// The description, or [`MISSING_DESCRIPTION`] if none was set.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(MISSING_DESCRIPTION)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn series(&self) -> Option<SeriesId> {
        self.series
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn set_location(&mut self, location: Location) {
        self.location = Some(location);
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Turn this into an all-day event on its start date. No-op if it already is one.
    pub fn set_all_day(&mut self) {
        if self.all_day {
            return;
        }
        let date = self.start.date();
        self.all_day = true;
        self.start = date.and_time(ALL_DAY_START);
        self.end = date.and_time(ALL_DAY_END);
    }

    /// Move the start. Always detaches the event from its series on success.
    pub fn set_start(&mut self, start: NaiveDateTime) -> CalSchedResult<()> {
        if start > self.end {
            return Err(CalSchedError::InvalidInterval {
                start,
                end: self.end,
            });
        }
        self.start = start;
        self.all_day = false;
        self.series = None;
        Ok(())
    }

    /// Move the end. Always detaches the event from its series on success.
    pub fn set_end(&mut self, end: NaiveDateTime) -> CalSchedResult<()> {
        if end < self.start {
            return Err(CalSchedError::InvalidInterval {
                start: self.start,
                end,
            });
        }
        self.end = end;
        self.all_day = false;
        self.series = None;
        Ok(())
    }

    /// Apply a named property edit with a raw string value.
    pub fn apply(&mut self, property: EditProperty, value: &str) -> CalSchedResult<()> {
        match property {
            EditProperty::Subject => self.set_subject(value),
            EditProperty::Start => self.set_start(parse_date_time(value)?)?,
            EditProperty::End => self.set_end(parse_date_time(value)?)?,
            EditProperty::Description => self.set_description(value),
            EditProperty::Location => self.set_location(value.parse()?),
            EditProperty::Status => self.set_status(value.parse()?),
        }
        Ok(())
    }

    pub(crate) fn set_series(&mut self, series: Option<SeriesId>) {
        self.series = series;
    }

    /// A copy of this event moved by whole days, without series membership.
    pub(crate) fn shifted_by_days(&self, days: i64) -> Self {
        let shift = Duration::days(days);
        Event {
            start: self.start + shift,
            end: self.end + shift,
            series: None,
            ..self.clone()
        }
    }

    /// Whether the event reaches past its start date.
    pub fn spans_days(&self) -> bool {
        self.start.date() != self.end.date()
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.subject == other.subject
            && self.all_day == other.all_day
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for Event {}

impl Hash for Event {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.subject.hash(state);
        self.all_day.hash(state);
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl Ord for Event {
    /// Start, then end, then subject; all-day events sort before timed ones.
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
            .then_with(|| self.subject.cmp(&other.subject))
            .then_with(|| other.all_day.cmp(&self.all_day))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.all_day {
            write!(
                f,
                "\"{}\", on {} {}",
                self.subject,
                weekday_name(self.start.weekday()),
                self.start.date()
            )?;
        } else {
            write!(
                f,
                "\"{}\", from {} {} to {} {}",
                self.subject,
                weekday_name(self.start.weekday()),
                format_date_time(&self.start),
                weekday_name(self.end.weekday()),
                format_date_time(&self.end)
            )?;
        }

        if let Some(location) = self.location {
            write!(f, "; {}", location)?;
        }
        Ok(())
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "MONDAY",
        Weekday::Tue => "TUESDAY",
        Weekday::Wed => "WEDNESDAY",
        Weekday::Thu => "THURSDAY",
        Weekday::Fri => "FRIDAY",
        Weekday::Sat => "SATURDAY",
        Weekday::Sun => "SUNDAY",
    }
}
