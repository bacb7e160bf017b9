//! Line-oriented log output built on a `tracing_subscriber` layer.
//!
//! The level filter and line format come from [`LogSettings`]; where the
//! lines go is a [`LogSink`]. Nothing here installs a global subscriber:
//! [`dispatch`] hands back a `Dispatch` the caller enters explicitly, so
//! tests can capture records in a [`LogBuffer`] without touching process
//! state.
use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Dispatch, Event, Level, Subscriber};
use tracing_subscriber::Registry;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

use crate::types::{LogFormat, Verbosity};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: Level,
    pub timestamp: String,
    pub target: String,
    /// Name of the innermost span the event was recorded in.
    pub phase: Option<String>,
    pub message: String,
    /// The entry as it would be written to stderr.
    pub line: String,
}

impl LogEntry {
    pub fn new(
        format: LogFormat,
        level: Level,
        target: String,
        phase: Option<String>,
        message: String,
    ) -> Self {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let line = match format {
            LogFormat::Basic => format!("{timestamp} | {target} | {level} | {message}"),
            LogFormat::Detailed => format!(
                "{timestamp} | {target} | {} | {level} | {message}",
                phase.as_deref().unwrap_or("-")
            ),
        };
        Self {
            level,
            timestamp,
            target,
            phase,
            message,
            line,
        }
    }
}

pub type LogBuffer = Arc<Mutex<Vec<LogEntry>>>;

/// Destination for rendered log lines.
#[derive(Clone, Debug, Default)]
pub enum LogSink {
    #[default]
    Stderr,
    Buffer(LogBuffer),
}

impl LogSink {
    /// A sink collecting entries in memory, plus a handle to read them back.
    pub fn capture() -> (Self, LogBuffer) {
        let buffer = LogBuffer::default();
        (LogSink::Buffer(buffer.clone()), buffer)
    }
}

/// Logging configuration resolved from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

impl From<Verbosity> for LogSettings {
    fn from(verbosity: Verbosity) -> Self {
        Self {
            level: verbosity.level_filter(),
            format: verbosity.format(),
        }
    }
}

/// Builds the subscriber for one invocation.
pub fn dispatch(settings: LogSettings, sink: LogSink) -> Dispatch {
    let subscriber = Registry::default()
        .with(settings.level)
        .with(LineLayer::new(settings.format, sink));
    Dispatch::new(subscriber)
}

pub struct LineLayer {
    format: LogFormat,
    sink: LogSink,
}

impl LineLayer {
    pub fn new(format: LogFormat, sink: LogSink) -> Self {
        Self { format, sink }
    }

    fn emit(&self, entry: LogEntry) {
        match &self.sink {
            LogSink::Stderr => {
                let _ = writeln!(std::io::stderr().lock(), "{}", entry.line);
            }
            LogSink::Buffer(buffer) => {
                if let Ok(mut buf) = buffer.lock() {
                    buf.push(entry);
                }
            }
        }
    }
}

struct MessageVisitor {
    message: String,
}

impl MessageVisitor {
    fn new() -> Self {
        Self {
            message: String::new(),
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

impl<S> Layer<S> for LineLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = MessageVisitor::new();
        event.record(&mut visitor);

        let phase = ctx.event_span(event).map(|span| span.name().to_string());

        self.emit(LogEntry::new(
            self.format,
            *metadata.level(),
            metadata.target().to_string(),
            phase,
            visitor.message,
        ));
    }
}
