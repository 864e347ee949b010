pub mod config;
pub mod recur;
pub mod status;

use std::path::Path;

use anyhow::{Context, Result};
use calsched_core::{Calendar, CalendarConfig};
use clap::Args;

/// Calendar settings given on the command line, applied over the config file.
#[derive(Default)]
pub struct Overrides<'a> {
    pub name: Option<&'a str>,
    pub timezone: Option<&'a str>,
}

impl Overrides<'_> {
    pub fn apply(&self, config: &mut CalendarConfig) {
        if let Some(name) = self.name {
            config.name = Some(name.to_string());
        }
        if let Some(tz) = self.timezone {
            config.timezone = Some(tz.to_string());
        }
    }
}

/// The recurrence to build, shared by the commands that need one.
#[derive(Args)]
pub struct ScheduleArgs {
    /// Event subject
    pub subject: String,

    /// Start of the first occurrence (YYYY-MM-DDThh:mm)
    #[arg(long, requires = "end", conflicts_with = "date")]
    pub start: Option<String>,

    /// End of the first occurrence (YYYY-MM-DDThh:mm)
    #[arg(long, requires = "start")]
    pub end: Option<String>,

    /// Date of the first occurrence, for all-day events (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Weekdays to repeat on: M T W R F S U (e.g. "MWF")
    #[arg(short, long)]
    pub weekdays: String,

    /// Total number of occurrences
    #[arg(short = 'n', long, conflicts_with = "until")]
    pub count: Option<u32>,

    /// Repeat until this date, exclusive (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,
}

impl ScheduleArgs {
    /// Load the calendar defaults and create this recurrence in a fresh calendar.
    pub fn build_calendar(
        &self,
        config_path: Option<&Path>,
        overrides: &Overrides,
    ) -> Result<Calendar> {
        let mut config = match config_path {
            Some(path) => CalendarConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => CalendarConfig::load()?,
        };
        overrides.apply(&mut config);

        let mut calendar = Calendar::from_config(&config)?;
        self.create_in(&mut calendar)?;
        Ok(calendar)
    }

    fn create_in(&self, calendar: &mut Calendar) -> Result<()> {
        let subject = self.subject.as_str();
        let weekdays = self.weekdays.as_str();

        match (&self.start, &self.end, &self.date, self.count, &self.until) {
            (Some(start), Some(end), None, Some(count), None) => {
                calendar.create_recurring_n_times(subject, start, end, weekdays, count)?;
            }
            (Some(start), Some(end), None, None, Some(until)) => {
                calendar.create_recurring_until(subject, start, end, weekdays, until)?;
            }
            (None, None, Some(date), Some(count), None) => {
                calendar.create_recurring_all_day_n_times(subject, date, weekdays, count)?;
            }
            (None, None, Some(date), None, Some(until)) => {
                calendar.create_recurring_all_day_until(subject, date, weekdays, until)?;
            }
            (_, _, _, None, None) => anyhow::bail!("Pass either --count or --until"),
            _ => anyhow::bail!("Pass either --start and --end, or --date"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config_values() {
        let mut config: CalendarConfig = "name = \"Home\"\ntimezone = \"Europe/Paris\"\n"
            .parse()
            .unwrap();
        Overrides {
            name: Some("Work"),
            timezone: None,
        }
        .apply(&mut config);
        assert_eq!(config.name.as_deref(), Some("Work"));
        assert_eq!(config.timezone.as_deref(), Some("Europe/Paris"));

        Overrides::default().apply(&mut config);
        assert_eq!(config.name.as_deref(), Some("Work"));

        let calendar = Calendar::from_config(&config).unwrap();
        assert_eq!(calendar.name(), Some("Work"));
    }
}
