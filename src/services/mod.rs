//! Service layer containing grading logic and side-effect helpers.
//!
//! ## Service map
//! - `validate.rs` — input path existence checks.
//! - `fetch.rs` — remote document download.
//! - `document.rs` — HTML parsing and selector queries.
//! - `checks.rs` — check list loading.
//! - `grader.rs` — selector evaluation and the `check_html_file` entry point.
//! - `output.rs` — JSON report rendering.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod checks;
pub mod document;
pub mod fetch;
pub mod grader;
pub mod output;
pub mod validate;
