//! N-th largest distinct value selection.
//!
//! A scan feeds integers one at a time into a [`TopNSelector`], which drops
//! repeated values and keeps a bounded, descending buffer of the largest ones.
//! Once the input is exhausted, [`classify`] turns the selector state into a
//! [`ScanOutcome`].

pub mod classifier;
pub mod top_n;
pub mod unique;

use std::convert::Infallible;
use std::num::NonZeroUsize;

use crate::error::AppError;

pub use classifier::{classify, ScanOutcome};
pub use top_n::TopNSelector;
pub use unique::UniqueValues;

/// 1-based position, counted from the largest, of the requested value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank(NonZeroUsize);

impl Rank {
    pub fn new(n: i64) -> Result<Self, AppError> {
        usize::try_from(n)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Rank)
            .ok_or(AppError::InvalidRank { n })
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

/// Runs one complete scan over `values` with fresh selector state.
pub fn select_nth_max<I>(values: I, rank: Rank) -> ScanOutcome
where
    I: IntoIterator<Item = i64>,
{
    match try_select_nth_max(values.into_iter().map(Ok::<_, Infallible>), rank) {
        Ok(outcome) => outcome,
        Err(never) => match never {},
    }
}

/// Like [`select_nth_max`], but stops at the first error produced by the input.
pub fn try_select_nth_max<I, E>(values: I, rank: Rank) -> Result<ScanOutcome, E>
where
    I: IntoIterator<Item = Result<i64, E>>,
{
    let mut selector = TopNSelector::new(rank);
    for value in values {
        selector.observe(value?);
    }
    Ok(classify(selector.seen_count(), rank, selector.buffer()))
}
