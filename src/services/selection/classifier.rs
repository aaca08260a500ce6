use crate::error::AppError;

use super::Rank;

/// Result of one completed scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Found { value: i64 },
    InsufficientCount { seen: usize },
    Empty,
}

pub fn classify(seen_count: usize, rank: Rank, buffer: &[i64]) -> ScanOutcome {
    let n = rank.get();
    if seen_count == 0 {
        return ScanOutcome::Empty;
    }
    if seen_count < n {
        return ScanOutcome::InsufficientCount { seen: seen_count };
    }
    match buffer.get(n - 1) {
        Some(&value) => ScanOutcome::Found { value },
        None => {
            debug_assert!(
                buffer.len() >= n,
                "{} values seen but only {} buffered for rank {}",
                seen_count,
                buffer.len(),
                n
            );
            ScanOutcome::InsufficientCount { seen: buffer.len() }
        }
    }
}

impl ScanOutcome {
    /// Turns a non-`Found` outcome into the matching request error.
    pub fn into_result(self, rank: Rank) -> Result<i64, AppError> {
        match self {
            ScanOutcome::Found { value } => Ok(value),
            ScanOutcome::InsufficientCount { seen } => Err(AppError::InsufficientRank {
                requested: rank.get(),
                found: seen,
            }),
            ScanOutcome::Empty => Err(AppError::EmptyDataset),
        }
    }
}
