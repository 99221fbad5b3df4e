use crate::domain::models::ReportMap;
use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

/// JSON with 4-space indentation, keys in report order.
pub fn render(report: &ReportMap) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    report.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

/// Writes the rendered report plus a trailing newline. Write failures are returned, not panicked on.
pub fn write_report(out: &mut impl Write, report: &ReportMap) -> anyhow::Result<()> {
    writeln!(out, "{}", render(report)?)?;
    out.flush()?;
    Ok(())
}

pub fn print_report(report: &ReportMap) -> anyhow::Result<()> {
    write_report(&mut std::io::stdout().lock(), report)
}
