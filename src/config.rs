//! Settings read from the environment (and `.env`, via `dotenvy`).
//!
//! - `ANNOTATE_PATH`: file to annotate, defaults to `student.txt`
//! - `ANNOTATE_STYLE`: `chained` (default) or `sequenced`
//! - `DATABASE_URL` or `MONGODB_URL`: connection string for `connect-steps`
//!
//! Values are kept as given; they are only interpreted when a command needs
//! them and no command-line flag overrides them.

use std::{env, path::PathBuf};

use crate::{annotate::Style, errors::ConfigError, models::DEFAULT_PATH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub path: PathBuf,
    pub style: Option<String>,
    pub database_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            style: None,
            database_url: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Settings {
            path: get("ANNOTATE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH)),
            style: get("ANNOTATE_STYLE"),
            database_url: get("DATABASE_URL").or_else(|| get("MONGODB_URL")),
        }
    }

    /// The configured style, or the default when `ANNOTATE_STYLE` is unset.
    pub fn style(&self) -> Result<Style, ConfigError> {
        match &self.style {
            Some(style) => style.parse(),
            None => Ok(Style::default()),
        }
    }
}
