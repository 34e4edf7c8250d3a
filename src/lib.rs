//! # student-notes
//!
//! Appends the class greeting to a student file, once with chained
//! callbacks and once with sequential `async`/`.await`, and documents how a
//! client connects to MongoDB.

pub mod annotate;
pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod report;
pub mod store;
