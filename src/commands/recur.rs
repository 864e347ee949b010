use std::path::Path;

use anyhow::Result;
use calsched_core::ZonedEvent;
use owo_colors::OwoColorize;

use super::{Overrides, ScheduleArgs};
use crate::render::Render;

pub fn run(
    schedule: &ScheduleArgs,
    config_path: Option<&Path>,
    overrides: &Overrides,
    on: Option<&str>,
    json: bool,
) -> Result<()> {
    let calendar = schedule.build_calendar(config_path, overrides)?;

    let events: Vec<ZonedEvent> = match on {
        Some(date) => calendar.events_on_date(date)?,
        None => calendar
            .events()
            .map(|e| ZonedEvent::new(e.clone(), calendar.timezone()))
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("{}", "   No events".dimmed());
        return Ok(());
    }

    println!("{}", calendar.render());
    for event in &events {
        println!("   {}", event.render());
    }
    Ok(())
}
