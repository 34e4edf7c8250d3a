//! # File access
//!
//! The annotator never touches the filesystem directly; it goes through
//! [`TextStore`] so both realizations can be driven against the same backing
//! store, and tests can substitute one that fails on demand.

use std::{future::Future, io, path::Path};

use tokio::{fs::OpenOptions, io::AsyncWriteExt};

/// Asynchronous text access to a single file at a time.
pub trait TextStore: Send + Sync + 'static {
    /// Reads the whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> impl Future<Output = io::Result<String>> + Send;

    /// Appends `text` to the end of an existing file. Must not create it.
    fn append(&self, path: &Path, text: &str) -> impl Future<Output = io::Result<()>> + Send;
}

/// [`TextStore`] backed by `tokio::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskStore;

impl TextStore for DiskStore {
    fn read_to_string(&self, path: &Path) -> impl Future<Output = io::Result<String>> + Send {
        tokio::fs::read_to_string(path.to_path_buf())
    }

    fn append(&self, path: &Path, text: &str) -> impl Future<Output = io::Result<()>> + Send {
        let path = path.to_path_buf();
        let text = text.to_owned();

        async move {
            let mut file = OpenOptions::new().append(true).open(&path).await?;
            file.write_all(text.as_bytes()).await?;
            file.flush().await
        }
    }
}
