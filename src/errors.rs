use std::{io, path::PathBuf};
use thiserror::Error;

use crate::models::Step;

#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to append to {}: {source}", path.display())]
    Append {
        step: Step,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("annotation task ended without reporting an outcome")]
    Abandoned,
}

impl AnnotateError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AnnotateError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn append(step: Step, path: impl Into<PathBuf>, source: io::Error) -> Self {
        AnnotateError::Append {
            step,
            path: path.into(),
            source,
        }
    }

    /// The step that failed, if the failure came from file I/O.
    pub fn step(&self) -> Option<Step> {
        match self {
            AnnotateError::Read { .. } => Some(Step::Read),
            AnnotateError::Append { step, .. } => Some(*step),
            AnnotateError::Abandoned => None,
        }
    }

    /// The underlying reason, without the path prefix.
    pub fn reason(&self) -> String {
        match self {
            AnnotateError::Read { source, .. } | AnnotateError::Append { source, .. } => {
                source.to_string()
            }
            AnnotateError::Abandoned => self.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("Invalid connection string: {0}")]
    InvalidUri(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown annotation style '{0}'")]
    UnknownStyle(String),
    #[error("unknown output format '{0}'")]
    UnknownFormat(String),
}
