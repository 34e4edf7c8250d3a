//! Diagnostic tracing, separate from the status lines the annotator prints.
//!
//! Controlled by `RUST_LOG`, defaults to `warn`, always written to stderr.

use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

pub fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Compact formatter behind `filter`, writing to `writer`.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).compact())
}

pub fn init() {
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = subscriber(default_filter(), std::io::stderr).try_init();
}
