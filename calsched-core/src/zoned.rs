//! Display-only pairing of an event with its calendar's time zone.

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use crate::event::Event;

/// An event as returned by a query, tagged with the calendar's zone id.
///
/// This is a snapshot: editing the calendar afterwards does not change it.
#[derive(Debug, Clone, Serialize)]
pub struct ZonedEvent {
    #[serde(flatten)]
    event: Event,
    #[serde(skip_serializing_if = "Option::is_none")]
    timezone: Option<String>,
}

impl ZonedEvent {
    pub fn new(event: Event, timezone: Option<&str>) -> Self {
        ZonedEvent {
            event,
            timezone: timezone.map(str::to_string),
        }
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    pub fn into_event(self) -> Event {
        self.event
    }
}

impl Deref for ZonedEvent {
    type Target = Event;

    fn deref(&self) -> &Event {
        &self.event
    }
}

impl fmt::Display for ZonedEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.timezone {
            Some(tz) => write!(f, "{} in time zone {}", self.event, tz),
            None => write!(f, "{}", self.event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::parse_date;

    #[test]
    fn test_display_appends_zone() {
        let event = Event::all_day("Holiday", parse_date("2024-07-04").unwrap());
        let zoned = ZonedEvent::new(event.clone(), Some("Europe/Berlin"));
        assert_eq!(
            zoned.to_string(),
            "\"Holiday\", on THURSDAY 2024-07-04 in time zone Europe/Berlin"
        );
        assert_eq!(ZonedEvent::new(event, None).to_string(), "\"Holiday\", on THURSDAY 2024-07-04");
    }
}
