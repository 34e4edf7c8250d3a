use std::sync::Mutex;

use crate::errors::ConfigError;
use crate::models::{Event, LogRecord};

/// Sink for the status events produced while annotating.
pub trait Reporter: Send + Sync {
    fn report(&self, event: Event);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

/// Writes successes to stdout and failures to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    format: OutputFormat,
}

impl ConsoleReporter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn render(&self, event: Event) -> String {
        match self.format {
            OutputFormat::Text => event.to_string(),
            OutputFormat::Json => {
                let record = LogRecord::now(event);
                serde_json::to_string(&record).unwrap_or_else(|_| record.event.to_string())
            }
        }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, event: Event) {
        tracing::debug!(?event, "status");

        if event.is_failure() {
            eprintln!("{}", self.render(event));
        } else {
            println!("{}", self.render(event));
        }
    }
}

/// Keeps every event in memory, in the order it was reported.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<Event>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, event: Event) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
