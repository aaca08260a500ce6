use serde::Deserialize;
use crate::services::selection::ScanOutcome;

/// Query string of `GET /find-nth-max`.
#[derive(Debug, Clone, Deserialize)]
pub struct NthMaxQuery {
    #[serde(rename = "filePath")]
    pub file_path: String,
    pub n: i64,
}

/// What a single scan of a workbook produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub sheet_name: String,
    pub numeric_cells: usize,
    pub outcome: ScanOutcome,
}
