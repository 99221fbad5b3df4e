use html_grader::{check_html_file, fetch, print_report, Config, Mode};

/// Runs one grade: local file, or fetch then grade. Prints the report on success.
pub fn handle_grade(config: &Config) -> anyhow::Result<()> {
    let report = match &config.mode {
        Mode::Local { html } => {
            tracing::info!(
                html = %html.display(),
                checks = %config.checks.display(),
                "grading local file"
            );
            check_html_file(html, &config.checks)?
        }
        Mode::Remote { url, download } => {
            let path = fetch(url, download, config.timeout)?;
            tracing::info!(
                html = %path.display(),
                checks = %config.checks.display(),
                "grading fetched document"
            );
            check_html_file(&path, &config.checks)?
        }
    };
    print_report(&report)
}
