//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep the check list, report and run configuration in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — `CheckList`, `ReportMap`, `Config`, `Mode`.
//! - `constants.rs` — default file names.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! `ReportMap` serializes to the stdout report. Keep it in sync with
//! `docs/contracts/report.schema.json`.

pub mod constants;
pub mod models;
