//! Linear realization: each step is awaited in turn, errors propagate with
//! `?` and are reported once by [`annotate`].

use std::path::Path;

use crate::{
    errors::AnnotateError,
    models::{Event, FIRST_FRAGMENT, SECOND_FRAGMENT, Step},
    report::Reporter,
    store::TextStore,
};

pub async fn annotate<S, R>(store: &S, path: &Path, reporter: &R) -> Result<(), AnnotateError>
where
    S: TextStore,
    R: Reporter + ?Sized,
{
    let outcome = process(store, path, reporter).await;

    if let Err(err) = &outcome {
        tracing::debug!(error = %err, "annotation stopped");

        if let Some(event) = super::failure_event(err) {
            reporter.report(event);
        }
    }

    outcome
}

async fn process<S, R>(store: &S, path: &Path, reporter: &R) -> Result<(), AnnotateError>
where
    S: TextStore,
    R: Reporter + ?Sized,
{
    let content = store
        .read_to_string(path)
        .await
        .map_err(|e| AnnotateError::read(path, e))?;
    reporter.report(Event::ContentRead { content });

    store
        .append(path, FIRST_FRAGMENT)
        .await
        .map_err(|e| AnnotateError::append(Step::FirstAppend, path, e))?;
    reporter.report(Event::FirstAppended);

    store
        .append(path, SECOND_FRAGMENT)
        .await
        .map_err(|e| AnnotateError::append(Step::SecondAppend, path, e))?;
    reporter.report(Event::SecondAppended);

    reporter.report(Event::Completed);
    Ok(())
}
