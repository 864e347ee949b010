//! Interval and point-in-time queries.
//!
//! All comparisons are strict. An event that starts exactly at the range start
//! and ends exactly at the range end is not reported, and an event is not busy
//! at the very minute it starts.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::Calendar;
use crate::error::CalSchedResult;
use crate::event::Event;
use crate::time::{day_end, day_start, parse_date, parse_date_time};
use crate::zoned::ZonedEvent;

/// Whether the calendar has an event at a given time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Busy,
    Available,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Busy => "busy",
            Availability::Available => "available",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `event` ends inside, lies inside, or starts inside `(from, to)`.
pub fn overlaps(event: &Event, from: NaiveDateTime, to: NaiveDateTime) -> bool {
    let ends_inside = event.end() > from && event.end() < to;
    let within = event.start() > from && event.end() < to;
    let starts_inside = event.start() > from && event.start() < to;
    ends_inside || within || starts_inside
}

impl Calendar {
    /// Events overlapping `date` from 00:00 to 23:59, in order.
    pub fn events_on_date(&self, date: &str) -> CalSchedResult<Vec<ZonedEvent>> {
        let date = parse_date(date)?;
        Ok(self.overlapping(day_start(date), day_end(date)))
    }

    /// Events overlapping the range between two date-times, in order.
    pub fn events_between(&self, from: &str, to: &str) -> CalSchedResult<Vec<ZonedEvent>> {
        Ok(self.overlapping(parse_date_time(from)?, parse_date_time(to)?))
    }

    /// Busy if any event strictly contains `at`.
    pub fn status_at(&self, at: &str) -> CalSchedResult<Availability> {
        let at = parse_date_time(at)?;
        let busy = self.events.iter().any(|e| e.start() < at && at < e.end());
        Ok(if busy {
            Availability::Busy
        } else {
            Availability::Available
        })
    }

    fn overlapping(&self, from: NaiveDateTime, to: NaiveDateTime) -> Vec<ZonedEvent> {
        self.events
            .iter()
            .filter(|e| overlaps(e, from, to))
            .map(|e| ZonedEvent::new(e.clone(), self.timezone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        parse_date_time(s).unwrap()
    }

    fn calendar_with(events: &[(&str, &str, &str)]) -> Calendar {
        let mut calendar = Calendar::with_settings(None, Some("America/New_York")).unwrap();
        for (subject, start, end) in events {
            calendar.create_single_event(subject, start, end).unwrap();
        }
        calendar
    }

    fn subjects(events: &[ZonedEvent]) -> Vec<&str> {
        events.iter().map(|e| e.subject()).collect()
    }

    #[test]
    fn test_overlap_clauses() {
        let event = Event::timed("E", dt("2024-07-01T10:00"), dt("2024-07-01T12:00")).unwrap();
        // ends inside
        assert!(overlaps(&event, dt("2024-07-01T11:00"), dt("2024-07-01T13:00")));
        // wholly inside
        assert!(overlaps(&event, dt("2024-07-01T09:00"), dt("2024-07-01T13:00")));
        // starts inside
        assert!(overlaps(&event, dt("2024-07-01T09:00"), dt("2024-07-01T11:00")));
        // disjoint
        assert!(!overlaps(&event, dt("2024-07-01T12:00"), dt("2024-07-01T13:00")));
    }

    #[test]
    fn test_exact_range_match_is_excluded() {
        let event = Event::timed("E", dt("2024-07-01T10:00"), dt("2024-07-01T12:00")).unwrap();
        assert!(!overlaps(&event, dt("2024-07-01T10:00"), dt("2024-07-01T12:00")));
    }

    #[test]
    fn test_event_covering_whole_range_is_excluded() {
        // None of the three clauses covers an event that encloses the range.
        let event = Event::timed("E", dt("2024-07-01T08:00"), dt("2024-07-01T18:00")).unwrap();
        assert!(!overlaps(&event, dt("2024-07-01T10:00"), dt("2024-07-01T12:00")));
    }

    #[test]
    fn test_events_on_date_includes_spillover() {
        let calendar = calendar_with(&[
            ("Late show", "2024-06-30T22:00", "2024-07-01T01:00"),
            ("Lunch", "2024-07-01T12:00", "2024-07-01T13:00"),
            ("Next day", "2024-07-02T09:00", "2024-07-02T10:00"),
        ]);
        let events = calendar.events_on_date("2024-07-01").unwrap();
        assert_eq!(subjects(&events), vec!["Late show", "Lunch"]);
        assert!(events
            .iter()
            .all(|e| e.timezone() == Some("America/New_York")));
    }

    #[test]
    fn test_events_between_orders_results() {
        let calendar = calendar_with(&[
            ("B", "2024-07-01T11:00", "2024-07-01T12:00"),
            ("A", "2024-07-01T11:00", "2024-07-01T12:00"),
            ("Early", "2024-07-01T09:30", "2024-07-01T10:30"),
        ]);
        let events = calendar
            .events_between("2024-07-01T09:00", "2024-07-01T13:00")
            .unwrap();
        assert_eq!(subjects(&events), vec!["Early", "A", "B"]);
    }

    #[test]
    fn test_status_at_is_exclusive() {
        let calendar = calendar_with(&[("Meeting", "2024-07-01T09:00", "2024-07-01T10:00")]);
        assert_eq!(calendar.status_at("2024-07-01T09:30").unwrap(), Availability::Busy);
        assert_eq!(
            calendar.status_at("2024-07-01T09:00").unwrap(),
            Availability::Available
        );
        assert_eq!(
            calendar.status_at("2024-07-01T10:00").unwrap(),
            Availability::Available
        );
        assert_eq!(Availability::Busy.to_string(), "busy");
    }

    #[test]
    fn test_queries_reject_malformed_input() {
        let calendar = Calendar::new();
        assert!(calendar.events_on_date("07/01/2024").is_err());
        assert!(calendar.events_between("2024-07-01", "2024-07-02").is_err());
        assert!(calendar.status_at("noon").is_err());
    }
}
