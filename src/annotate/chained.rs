//! Callback-style realization. [`read_file`] and [`append_file`] hand their
//! result to a completion callback, and each callback starts the next step.
//! Failures are reported where they happen.

use std::{io, path::PathBuf, sync::Arc};

use tokio::sync::oneshot;

use crate::{
    errors::AnnotateError,
    models::{Event, FIRST_FRAGMENT, SECOND_FRAGMENT, Step},
    report::Reporter,
    store::TextStore,
};

type Done = oneshot::Sender<Result<(), AnnotateError>>;

/// Reads `path` on a background task and passes the text to `callback`.
pub fn read_file<S, F>(store: Arc<S>, path: PathBuf, callback: F)
where
    S: TextStore,
    F: FnOnce(io::Result<String>) + Send + 'static,
{
    tokio::spawn(async move {
        let result = store.read_to_string(&path).await;
        callback(result);
    });
}

/// Appends `text` to `path` on a background task, then calls `callback`.
pub fn append_file<S, F>(store: Arc<S>, path: PathBuf, text: &'static str, callback: F)
where
    S: TextStore,
    F: FnOnce(io::Result<()>) + Send + 'static,
{
    tokio::spawn(async move {
        let result = store.append(&path, text).await;
        callback(result);
    });
}

/// Runs the sequence as nested continuations and waits for its outcome.
pub async fn annotate<S, R>(
    store: Arc<S>,
    path: PathBuf,
    reporter: Arc<R>,
) -> Result<(), AnnotateError>
where
    S: TextStore,
    R: Reporter + ?Sized + 'static,
{
    let (done, outcome) = oneshot::channel();
    start(store, path, reporter, done);

    // The sender only drops unsent if a callback panicked.
    outcome.await.unwrap_or(Err(AnnotateError::Abandoned))
}

fn start<S, R>(store: Arc<S>, path: PathBuf, reporter: Arc<R>, done: Done)
where
    S: TextStore,
    R: Reporter + ?Sized + 'static,
{
    read_file(store.clone(), path.clone(), move |result| {
        let content = match result {
            Ok(content) => content,
            Err(err) => return fail(&*reporter, done, AnnotateError::read(path, err)),
        };
        reporter.report(Event::ContentRead { content });

        append_file(store.clone(), path.clone(), FIRST_FRAGMENT, move |result| {
            if let Err(err) = result {
                return fail(
                    &*reporter,
                    done,
                    AnnotateError::append(Step::FirstAppend, path, err),
                );
            }
            reporter.report(Event::FirstAppended);

            append_file(store, path.clone(), SECOND_FRAGMENT, move |result| {
                if let Err(err) = result {
                    return fail(
                        &*reporter,
                        done,
                        AnnotateError::append(Step::SecondAppend, path, err),
                    );
                }
                reporter.report(Event::SecondAppended);
                reporter.report(Event::Completed);

                let _ = done.send(Ok(()));
            });
        });
    });
}

fn fail<R: Reporter + ?Sized>(reporter: &R, done: Done, err: AnnotateError) {
    tracing::debug!(error = %err, "annotation stopped");

    if let Some(event) = super::failure_event(&err) {
        reporter.report(event);
    }
    let _ = done.send(Err(err));
}
