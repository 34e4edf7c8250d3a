use {
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Appended after the original content by the first write.
pub const FIRST_FRAGMENT: &str = "\nHello Students";

/// Appended after [`FIRST_FRAGMENT`] by the second write.
pub const SECOND_FRAGMENT: &str = "\nWelcome to Class";

/// Default file the annotator works on.
pub const DEFAULT_PATH: &str = "student.txt";

/// The step of the annotation sequence an event or error belongs to.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Read,
    FirstAppend,
    SecondAppend,
}

impl Step {
    pub fn failure_context(self) -> &'static str {
        match self {
            Step::Read => "Error reading file",
            Step::FirstAppend => "Error writing first message",
            Step::SecondAppend => "Error writing second message",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Read => "read",
            Step::FirstAppend => "first append",
            Step::SecondAppend => "second append",
        };
        f.write_str(name)
    }
}

/// A single status entry emitted while annotating, in completion order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    ContentRead { content: String },
    FirstAppended,
    SecondAppended,
    Completed,
    Failed { step: Step, message: String },
}

impl Event {
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::Failed { .. })
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::ContentRead { content } => write!(f, "File content: {}", content),
            Event::FirstAppended => f.write_str("First message written successfully"),
            Event::SecondAppended => f.write_str("Second message written successfully"),
            Event::Completed => f.write_str("All operations completed!"),
            Event::Failed { step, message } => {
                write!(f, "{}: {}", step.failure_context(), message)
            }
        }
    }
}

/// An [`Event`] stamped with the moment it was reported.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogRecord {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub event: Event,
}

impl LogRecord {
    pub fn now(event: Event) -> Self {
        Self {
            at: Utc::now(),
            event,
        }
    }
}
