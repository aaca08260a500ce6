use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use super::types::{FractionalPolicy, NumericCell};
use crate::error::AppError;

/// The first worksheet of a workbook, fully decoded.
pub struct FirstSheet {
    pub name: String,
    pub range: Range<Data>,
    /// Formula text by cell; cells holding a formula are never counted.
    pub formulas: Range<String>,
}

impl FirstSheet {
    fn has_formula(&self, pos: (u32, u32)) -> bool {
        self.formulas
            .get_value(pos)
            .map_or(false, |formula| !formula.is_empty())
    }
}

/// Opens `path` and decodes its first worksheet.
///
/// I/O failures on the file itself become [`AppError::SourceUnavailable`];
/// anything calamine rejects becomes [`AppError::DecodeFailure`].
pub fn open_first_sheet(path: &Path, max_file_size: u64) -> Result<FirstSheet, AppError> {
    let metadata = std::fs::metadata(path).map_err(|source| AppError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.len() > max_file_size {
        return Err(AppError::FileTooLarge {
            size: metadata.len(),
            limit: max_file_size,
        });
    }

    tracing::debug!("Opening workbook {}", path.display());
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        tracing::error!("Failed to open workbook {}: {}", path.display(), e);
        AppError::from(e)
    })?;

    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::DecodeFailure("Workbook contains no sheets".to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::DecodeFailure("Workbook contains no sheets".to_string()))??;
    let formulas = workbook.worksheet_formula(&name)?;

    tracing::debug!(
        "Sheet '{}' spans {} rows x {} columns, {} formula cells",
        name,
        range.height(),
        range.width(),
        formulas.used_cells().filter(|(_, _, f)| !f.is_empty()).count()
    );
    Ok(FirstSheet { name, range, formulas })
}

/// Integer values of the numeric, non-formula cells of `sheet`, rows first,
/// then cells.
pub fn numeric_cells(
    sheet: &FirstSheet,
    policy: FractionalPolicy,
) -> impl Iterator<Item = Result<i64, AppError>> + '_ {
    let (row0, col0) = sheet.range.start().unwrap_or((0, 0));
    sheet.range.rows().enumerate().flat_map(move |(row_idx, row)| {
        row.iter().enumerate().filter_map(move |(col_idx, cell)| {
            let pos = (row0 + row_idx as u32, col0 + col_idx as u32);
            if sheet.has_formula(pos) {
                return None;
            }
            match NumericCell::classify(cell, policy) {
                NumericCell::Integer(value) => Some(Ok(value)),
                NumericCell::NotNumeric => None,
                NumericCell::Rejected(value) => Some(Err(AppError::DecodeFailure(format!(
                    "Cell at row {}, column {} holds non-integer value {}",
                    pos.0 + 1,
                    pos.1 + 1,
                    value
                )))),
            }
        })
    })
}
