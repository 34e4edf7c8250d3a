//! # Sequential file annotator
//!
//! Reads a text file, reports its content, then appends [`FIRST_FRAGMENT`]
//! and [`SECOND_FRAGMENT`] in that order. Every step waits for the previous
//! one to finish and any failure ends the run. Earlier appends are kept when
//! a later step fails.
//!
//! Two realizations are provided and behave identically:
//!
//! - [`chained`]: callback-style, each completion handler starts the next step
//! - [`sequenced`]: a linear `async fn` awaiting each step in turn
//!
//! [`FIRST_FRAGMENT`]: crate::models::FIRST_FRAGMENT
//! [`SECOND_FRAGMENT`]: crate::models::SECOND_FRAGMENT

use std::{fmt, path::PathBuf, str::FromStr, sync::Arc};

use crate::{
    errors::{AnnotateError, ConfigError},
    models::Event,
    report::Reporter,
    store::TextStore,
};

pub mod chained;
pub mod sequenced;

/// Which control-flow realization drives the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Chained,
    Sequenced,
}

impl FromStr for Style {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chained" | "callback" => Ok(Style::Chained),
            "sequenced" | "async" => Ok(Style::Sequenced),
            other => Err(ConfigError::UnknownStyle(other.to_string())),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Chained => f.write_str("chained"),
            Style::Sequenced => f.write_str("sequenced"),
        }
    }
}

/// Runs the annotation sequence on `path` using the requested style.
pub async fn run<S, R>(
    style: Style,
    store: Arc<S>,
    path: PathBuf,
    reporter: Arc<R>,
) -> Result<(), AnnotateError>
where
    S: TextStore,
    R: Reporter + ?Sized + 'static,
{
    tracing::info!(%style, path = %path.display(), "annotating");

    match style {
        Style::Chained => chained::annotate(store, path, reporter).await,
        Style::Sequenced => sequenced::annotate(&*store, &path, &*reporter).await,
    }
}

/// The status event describing `err`, if it came from a step.
pub(crate) fn failure_event(err: &AnnotateError) -> Option<Event> {
    err.step().map(|step| Event::Failed {
        step,
        message: err.reason(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_names_round_trip_through_display() {
        for style in [Style::Chained, Style::Sequenced] {
            assert_eq!(style.to_string().parse::<Style>(), Ok(style));
        }
        assert_eq!("callback".parse::<Style>(), Ok(Style::Chained));
        assert_eq!(
            "parallel".parse::<Style>(),
            Err(ConfigError::UnknownStyle("parallel".to_string()))
        );
    }
}
