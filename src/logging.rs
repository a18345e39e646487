use fern::colors::{Color, ColoredLevelConfig};
use log::{info, LevelFilter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Unknown log level encountered: '{0}'")]
    UnknownLevel(String),

    #[error("Failed to initialize logging: {0}")]
    Install(#[from] log::SetLoggerError),
}

pub fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    match level {
        "off" => Ok(LevelFilter::Off),
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        _ => Err(LoggingError::UnknownLevel(level.to_string())),
    }
}

/// Installs a coloured stdout logger. Can only succeed once per process.
pub fn setup_logging(level: &str) -> Result<(), LoggingError>
{
    let level = parse_level(level)?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()?;
    info!("logging initialized.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_levels() {
        assert_eq!(parse_level("off").unwrap(), LevelFilter::Off);
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level("error").unwrap(), LevelFilter::Error);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let error = parse_level("loud").unwrap_err();
        assert_eq!(format!("{}", error), "Unknown log level encountered: 'loud'");
    }
}
