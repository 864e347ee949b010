//! TUI rendering traits for calsched types.
//!
//! Extension traits that add colored terminal rendering to calsched-core
//! types using owo_colors.

use calsched_core::{Availability, Calendar, Event, ZonedEvent};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for ZonedEvent {
    fn render(&self) -> String {
        let marker = if self.series().is_some() { "↻" } else { "•" };
        let zone = self
            .timezone()
            .map(|tz| format!(" ({tz})"))
            .unwrap_or_default();

        // Event's own Display, without the zone suffix ZonedEvent appends
        let event: &Event = self;
        format!("{} {}{}", marker.cyan(), event, zone.dimmed())
    }
}

impl Render for Availability {
    fn render(&self) -> String {
        match self {
            Availability::Busy => self.as_str().red().to_string(),
            Availability::Available => self.as_str().green().to_string(),
        }
    }
}

impl Render for Calendar {
    fn render(&self) -> String {
        let name = self.name().unwrap_or("(unnamed)");
        let zone = self
            .timezone()
            .map(|tz| format!(" ({tz})"))
            .unwrap_or_default();
        format!("📅 {}{}", name.bold(), zone.dimmed())
    }
}
