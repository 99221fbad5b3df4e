use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum GradeError {
    #[error("{} does not exist. Exiting.", .path.display())]
    MissingInput { path: PathBuf },
    #[error("failed to fetch {url}: {detail}")]
    Fetch { url: String, detail: String },
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed checks file {}: {source}", .path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl GradeError {
    /// Process exit status for this failure kind. Status 2 is left to clap usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            GradeError::MissingInput { .. } => 1,
            GradeError::Io { .. } | GradeError::MalformedJson { .. } => 3,
            GradeError::Fetch { .. } => 4,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GradeError::Io {
            path: path.into(),
            source,
        }
    }
}
