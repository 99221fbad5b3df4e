use crate::domain::models::{CheckList, ReportMap};
use crate::error::GradeError;
use crate::services::checks::load_checks;
use crate::services::document::Document;
use std::path::Path;

/// Records, for each selector, whether it matches at least one element.
///
/// A selector that does not parse is recorded as absent rather than failing
/// the run; a `warn` event names it.
pub fn grade(document: &Document, checks: &CheckList) -> ReportMap {
    let mut report = ReportMap::default();
    for selector in checks.iter() {
        let present = match document.count(selector) {
            Some(n) => n > 0,
            None => {
                tracing::warn!(selector, "selector does not parse; reporting it as absent");
                false
            }
        };
        tracing::debug!(selector, present, "evaluated check");
        report.record(selector, present);
    }
    report
}

/// Grades `htmlfile` against the selectors listed in `checksfile`.
pub fn check_html_file(
    htmlfile: impl AsRef<Path>,
    checksfile: impl AsRef<Path>,
) -> Result<ReportMap, GradeError> {
    let document = Document::load(htmlfile.as_ref())?;
    let checks = load_checks(checksfile.as_ref())?.sorted();
    Ok(grade(&document, &checks))
}
