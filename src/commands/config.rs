use std::path::Path;

use anyhow::Result;
use calsched_core::CalendarConfig;
use owo_colors::OwoColorize;

pub fn run(config_path: Option<&Path>) -> Result<()> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => CalendarConfig::config_path()?,
    };
    let config = if path.exists() {
        CalendarConfig::from_file(&path)?
    } else {
        CalendarConfig::default()
    };

    println!("{}", "Paths".bold());
    println!("  Config:     {}", path.display());
    println!("{}", "Calendar".bold());
    println!("  Name:       {}", config.name.as_deref().unwrap_or("(unnamed)"));
    println!(
        "  Time zone:  {}",
        config.timezone.as_deref().unwrap_or("(none)")
    );

    Ok(())
}
