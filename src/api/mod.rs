//! The bootstrap/run lifecycle as a library API.
//!
//! [`Runner`] holds what is known before the command line is looked at (the
//! version). [`Runner::bootstrap`] consumes it and yields a [`Session`], and
//! only a `Session` can [`run`](Session::run). The outcome is a
//! [`Completion`] carrying the exit code; terminating the process is left to
//! the binary.
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use tracing::{Dispatch, debug, info, info_span};

use crate::args::CliArgs;
use crate::config::RunConfiguration;
use crate::error::Result;
use crate::logging::{self, LogSettings, LogSink};
use crate::types::Verbosity;
use crate::version::{VERSION_FILE, Version};

#[derive(Debug, Clone)]
pub struct Runner {
    version: Version,
}

impl Runner {
    /// Reads `VERSION` from the working directory.
    pub fn new() -> Result<Self> {
        Self::from_path(VERSION_FILE)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_version(Version::read(path)?))
    }

    pub fn with_version(version: impl Into<Version>) -> Self {
        Self {
            version: version.into(),
        }
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Parses `argv` (program name first) and applies the requested logging
    /// to `sink`.
    ///
    /// Usage errors, `--help` and `--version` come back as `clap::Error`;
    /// call [`clap::Error::exit`] to print them and leave with clap's code.
    pub fn bootstrap<I, T>(self, argv: I, sink: LogSink) -> std::result::Result<Session, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = CliArgs::try_parse_with(&self.version, argv)?;
        let config = RunConfiguration::from_args(self.version, args);
        let dispatch = logging::dispatch(LogSettings::from(config.verbosity), sink);

        tracing::dispatcher::with_default(&dispatch, || {
            let _phase = info_span!("bootstrap").entered();
            info!("Logging set to {}", config.verbosity);
        });

        Ok(Session { config, dispatch })
    }
}

/// A bootstrapped invocation, ready to run.
pub struct Session {
    config: RunConfiguration,
    dispatch: Dispatch,
}

impl Session {
    pub fn config(&self) -> &RunConfiguration {
        &self.config
    }

    /// Reports the summary exactly once: as an INFO record when `-v` was
    /// given, otherwise (with `output` set) as a line on `out`.
    pub fn run<W: Write>(self, output: bool, out: &mut W) -> Result<Completion> {
        let Session { config, dispatch } = self;

        tracing::dispatcher::with_default(&dispatch, || -> Result<Completion> {
            let _phase = info_span!("run").entered();
            let summary = config.summary();
            info!("{summary} | Started");

            if output && config.verbosity == Verbosity::Quiet {
                writeln!(out, "{summary}")?;
                out.flush()?;
            }

            debug!("Finished");
            Ok(Completion::success(summary))
        })
    }
}

/// What a finished run reports back to the entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    summary: String,
    exit_code: i32,
}

impl Completion {
    fn success(summary: String) -> Self {
        Self {
            summary,
            exit_code: 0,
        }
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }
}
