use std::path::Path;

use crate::config::Config;
use crate::error::AppError;
use crate::models::ScanReport;
use crate::services::excel::{numeric_cells, open_first_sheet};
use crate::services::selection::{try_select_nth_max, Rank};

/// Finds the `n`-th largest distinct integer in the first sheet of `path`.
///
/// Blocking: decodes the whole workbook. Run it off the async executor.
pub fn find_nth_max(path: &Path, n: i64, config: &Config) -> Result<i64, AppError> {
    let rank = Rank::new(n)?;
    let report = scan_workbook(path, rank, config)?;
    report.outcome.into_result(rank)
}

/// Scans the first sheet of `path` with a fresh selector for `rank`.
pub fn scan_workbook(path: &Path, rank: Rank, config: &Config) -> Result<ScanReport, AppError> {
    let start = std::time::Instant::now();
    let sheet = open_first_sheet(path, config.max_file_size)?;

    let mut numeric = 0usize;
    let values = numeric_cells(&sheet, config.fractional_policy).inspect(|value| {
        if value.is_ok() {
            numeric += 1;
        }
    });
    let outcome = try_select_nth_max(values, rank)?;

    tracing::info!(
        "Scanned sheet '{}' of {}: {} numeric cells, outcome {:?}, took {:?}",
        sheet.name,
        path.display(),
        numeric,
        outcome,
        start.elapsed()
    );

    Ok(ScanReport {
        sheet_name: sheet.name,
        numeric_cells: numeric,
        outcome,
    })
}
