use crate::domain::models::CheckList;
use crate::error::GradeError;
use std::path::Path;

/// Reads a JSON array of selector strings. The list is returned in file order.
pub fn load_checks(path: &Path) -> Result<CheckList, GradeError> {
    let raw = std::fs::read(path).map_err(|source| GradeError::io(path, source))?;
    let selectors: Vec<String> =
        serde_json::from_slice(&raw).map_err(|source| GradeError::MalformedJson {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), count = selectors.len(), "loaded checks");
    Ok(CheckList::from(selectors))
}
