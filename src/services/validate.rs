use crate::error::GradeError;
use std::path::Path;

/// Returns `path` unchanged when a filesystem entry exists there.
pub fn assert_file_exists(path: &Path) -> Result<&Path, GradeError> {
    if path.exists() {
        Ok(path)
    } else {
        Err(GradeError::MissingInput {
            path: path.to_path_buf(),
        })
    }
}
