//! Grade an HTML document for the presence of CSS selectors.
//!
//! ## Layers
//! - `domain` — check list, report map and validated run configuration.
//! - `services` — loading, fetching, evaluating and rendering.
//! - `error` — the `GradeError` taxonomy and its exit codes.
//! - `logger` — stderr `tracing` subscriber used by the binary.
//!
//! The embedding entry point is [`check_html_file`].

pub mod domain;
pub mod error;
pub mod logger;
pub mod services;

pub use domain::models::{CheckList, Config, Mode, ReportMap};
pub use error::GradeError;
pub use services::checks::load_checks;
pub use services::document::Document;
pub use services::fetch::{fetch, fetch_to_temp};
pub use services::grader::{check_html_file, grade};
pub use services::output::{print_report, render, write_report};
