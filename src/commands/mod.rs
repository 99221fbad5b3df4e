//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `grade.rs` — local/remote mode selection, grading and report output.
//!
//! ## Principles
//! - Validate CLI inputs before reaching a handler.
//! - Delegate business logic to `html_grader::services`.
//! - Keep behavior and output schema stable.

pub mod grade;

pub use grade::handle_grade;
