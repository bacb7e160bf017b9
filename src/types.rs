//! Shared types: the `Verbosity` ordinal derived from the `-v` count and the
//! `LogFormat` it selects.
use tracing_subscriber::filter::LevelFilter;

/// Logging detail requested on the command line.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub enum Verbosity {
    /// No `-v`: only the most severe records get through.
    #[default]
    Quiet,
    /// `-v`
    Info,
    /// `-vv` or more.
    Debug,
}

impl Verbosity {
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Quiet,
            1 => Verbosity::Info,
            _ => Verbosity::Debug,
        }
    }

    /// tracing has no level above ERROR, so quiet keeps ERROR records only.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::ERROR,
            Verbosity::Info => LevelFilter::INFO,
            Verbosity::Debug => LevelFilter::DEBUG,
        }
    }

    pub fn format(self) -> LogFormat {
        match self {
            Verbosity::Quiet | Verbosity::Info => LogFormat::Basic,
            Verbosity::Debug => LogFormat::Detailed,
        }
    }
}

impl std::fmt::Display for Verbosity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Verbosity::Quiet => "CRITICAL",
            Verbosity::Info => "INFO",
            Verbosity::Debug => "DEBUG",
        };
        write!(f, "{}", s)
    }
}

/// Shape of a rendered log line.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum LogFormat {
    /// `timestamp | target | LEVEL | message`
    Basic,
    /// `timestamp | target | phase | LEVEL | message`
    Detailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_maps_to_ordinal() {
        assert_eq!(Verbosity::from_count(0), Verbosity::Quiet);
        assert_eq!(Verbosity::from_count(1), Verbosity::Info);
        assert_eq!(Verbosity::from_count(2), Verbosity::Debug);
        assert_eq!(Verbosity::from_count(7), Verbosity::Debug);
    }

    #[test]
    fn only_debug_switches_to_detailed_lines() {
        assert_eq!(Verbosity::Quiet.format(), LogFormat::Basic);
        assert_eq!(Verbosity::Info.format(), LogFormat::Basic);
        assert_eq!(Verbosity::Debug.format(), LogFormat::Detailed);
    }

    #[test]
    fn level_names() {
        assert_eq!(Verbosity::Quiet.level_filter(), LevelFilter::ERROR);
        assert_eq!(Verbosity::Info.to_string(), "INFO");
        assert_eq!(Verbosity::Debug.to_string(), "DEBUG");
    }
}
