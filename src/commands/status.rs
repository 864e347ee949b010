use std::path::Path;

use anyhow::Result;

use super::{Overrides, ScheduleArgs};
use crate::render::Render;

pub fn run(
    schedule: &ScheduleArgs,
    config_path: Option<&Path>,
    overrides: &Overrides,
    at: &str,
) -> Result<()> {
    let calendar = schedule.build_calendar(config_path, overrides)?;
    let availability = calendar.status_at(at)?;

    println!("{} at {}", availability.render(), at);
    Ok(())
}
