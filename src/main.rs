//! # student-notes
//!
//! ## Environment Variables
//!
//! - `ANNOTATE_PATH`: file to annotate (default `student.txt`)
//! - `ANNOTATE_STYLE`: `chained` or `sequenced`
//! - `DATABASE_URL` or `MONGODB_URL`: connection string checked by `connect-steps`
//! - `RUST_LOG`: diagnostic log filter

use student_notes::{cli, config::Settings, errors::AnnotateError, logging};

#[tokio::main]
async fn main() {
    logging::init();

    let matches = cli::cli().get_matches();
    let settings = Settings::from_env();

    if let Err(e) = cli::handle_cli(&matches, settings).await {
        // Step failures were already printed by the reporter.
        let reported = e
            .downcast_ref::<AnnotateError>()
            .is_some_and(|err| err.step().is_some());
        if !reported {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
