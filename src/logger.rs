use std::{str::FromStr, time::SystemTime};

use colored::Colorize;
use log::{Level, LevelFilter};

fn colored_level(level: Level) -> String {
    match level {
        Level::Error => level.to_string().red().to_string(),
        Level::Warn => level.to_string().yellow().to_string(),
        Level::Info => level.to_string().green().to_string(),
        Level::Debug => level.to_string().blue().to_string(),
        Level::Trace => level.to_string().dimmed().to_string(),
    }
}

/// Falls back to `info` for unknown level names.
pub fn level_from_str(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or(LevelFilter::Info)
}

pub fn setup_logger(level: LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                colored_level(record.level()),
                record.target(),
                message
            ))
        })
        .level(level)
        // tokio internals are noisy below warn
        .level_for("tokio", LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}
