// src/export/logic.rs

use crate::core::ranking::Report;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ReportRow, pair_rows, report_rows};
use crate::models::PairKey;
use crate::ui::messages::warning;
use chrono::Duration;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// High level export entry points.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the per-project breakdown of the best pair.
    pub fn export_report(
        report: &Report,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        let Report::Best(best) = report else {
            warning("No pair worked together, nothing to export.");
            return Ok(());
        };

        Self::write(&report_rows(best), format, path, force)
    }

    /// Export the totals of every ranked pair.
    pub fn export_pairs(
        ranked: &[(PairKey, Duration)],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        if ranked.is_empty() {
            warning("No pair worked together, nothing to export.");
            return Ok(());
        }

        Self::write(&pair_rows(ranked), format, path, force)
    }

    fn write(rows: &[ReportRow], format: ExportFormat, path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force && !confirm_overwrite(path, io::stdin().lock())? {
            return Err(AppError::Export(format!(
                "{} already exists, use --force to replace it",
                path.display()
            )));
        }

        tracing::debug!(rows = rows.len(), format = format.as_str(), "writing export");

        match format {
            ExportFormat::Csv => export_csv(rows, path),
            ExportFormat::Json => export_json(rows, path),
        }
    }
}

/// Asks on stdout whether `path` may be replaced; only `y`/`yes` agree.
fn confirm_overwrite<R: BufRead>(path: &Path, mut answers: R) -> AppResult<bool> {
    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    answers.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn only_yes_allows_overwrite() {
        let path = Path::new("report.csv");
        assert!(confirm_overwrite(path, Cursor::new("y\n")).unwrap());
        assert!(confirm_overwrite(path, Cursor::new("YES\n")).unwrap());
        assert!(!confirm_overwrite(path, Cursor::new("n\n")).unwrap());
        assert!(!confirm_overwrite(path, Cursor::new("")).unwrap());
    }
}
