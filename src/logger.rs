use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use colored::*;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

const AUDIT_LOG_FILE: &str = "admin_actions.log";

/// Append one audit line for a completed operation. The log is a courtesy
/// trail for the operator; a write failure warns and never aborts the
/// operation that triggered it.
pub fn log_action(operation: &str, detail: &str) {
    if let Err(e) = append_line(Path::new(AUDIT_LOG_FILE), operation, detail) {
        eprintln!(
            "{}",
            format!("[WARNING] Failed to record audit entry: {e:#}").yellow()
        );
    }
}

fn append_line(path: &Path, operation: &str, detail: &str) -> Result<()> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    writeln!(file, "{timestamp} | {operation} | {detail}")
        .with_context(|| format!("Failed to write to {}", path.display()))?;
    Ok(())
}
