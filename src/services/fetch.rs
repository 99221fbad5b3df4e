use crate::error::GradeError;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;

/// Downloads `url` and writes the body verbatim to `dest`, replacing any existing file.
/// `timeout` of `None` waits for as long as the request takes.
pub fn fetch(url: &str, dest: &Path, timeout: Option<Duration>) -> Result<PathBuf, GradeError> {
    tracing::info!(url, dest = %dest.display(), "fetching document");
    let body = fetch_body(url, timeout)?;
    std::fs::write(dest, &body).map_err(|source| GradeError::io(dest, source))?;
    tracing::info!(bytes = body.len(), dest = %dest.display(), "wrote fetched document");
    Ok(dest.to_path_buf())
}

/// Same as [`fetch`], but into a uniquely named temporary file that is removed on drop.
pub fn fetch_to_temp(url: &str, timeout: Option<Duration>) -> Result<NamedTempFile, GradeError> {
    let body = fetch_body(url, timeout)?;
    let mut file = tempfile::Builder::new()
        .prefix("html-grader-")
        .suffix(".html")
        .tempfile()
        .map_err(|source| GradeError::io(std::env::temp_dir(), source))?;
    file.write_all(&body)
        .and_then(|_| file.flush())
        .map_err(|source| GradeError::io(file.path(), source))?;
    tracing::info!(bytes = body.len(), dest = %file.path().display(), "wrote fetched document");
    Ok(file)
}

fn fetch_body(url: &str, timeout: Option<Duration>) -> Result<Vec<u8>, GradeError> {
    request(url, timeout).map_err(|e| GradeError::Fetch {
        url: url.to_string(),
        detail: error_chain(&e),
    })
}

fn request(url: &str, timeout: Option<Duration>) -> reqwest::Result<Vec<u8>> {
    let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
    let resp = client.get(url).send()?.error_for_status()?;
    Ok(resp.bytes()?.to_vec())
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut cur = err.source();
    while let Some(e) = cur {
        let msg = e.to_string();
        if !out.contains(&msg) {
            out.push_str(": ");
            out.push_str(&msg);
        }
        cur = e.source();
    }
    out
}
