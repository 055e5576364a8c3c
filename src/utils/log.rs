use colog::format::CologStyle;
use env_logger::Builder;
use log::{Level, LevelFilter, SetLoggerError};

struct LevelTokens;

impl CologStyle for LevelTokens {
    fn level_token(&self, level: &Level) -> &str {
        match *level {
            Level::Error => "ERR",
            Level::Warn => "WRN",
            Level::Info => "INF",
            Level::Debug => "DBG",
            Level::Trace => "TRC",
        }
    }
}

/// Terminal logger for applications embedding this crate.
pub struct Logger;

impl Logger {
    /// Installs the logger, panicking if another one is already set.
    pub fn init(level: Option<LevelFilter>) {
        Self::builder(level).init();
    }

    pub fn try_init(level: Option<LevelFilter>) -> Result<(), SetLoggerError> {
        Self::builder(level).try_init()
    }

    /// Parses a level name such as `"debug"`, falling back to `Info`.
    pub fn parse_level(level: Option<&str>) -> LevelFilter {
        level
            .and_then(|l| l.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info)
    }

    fn builder(level: Option<LevelFilter>) -> Builder {
        let mut builder = Builder::new();
        builder
            .filter(Some("chat_object"), level.unwrap_or(LevelFilter::Info))
            .target(env_logger::Target::Stdout)
            .format(colog::formatter(LevelTokens))
            .write_style(env_logger::WriteStyle::Always);
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_defaults_to_info() {
        assert_eq!(Logger::parse_level(None), LevelFilter::Info);
        assert_eq!(Logger::parse_level(Some("nonsense")), LevelFilter::Info);
        assert_eq!(Logger::parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(Logger::parse_level(Some("TRACE")), LevelFilter::Trace);
    }

    #[test]
    fn second_install_is_reported() {
        // kept at warn so library debug output stays out of test runs
        let _ = Logger::try_init(Some(LevelFilter::Warn));
        assert!(Logger::try_init(None).is_err());
    }
}
