use super::unique::UniqueValues;
use super::Rank;

/// Keeps the `rank` largest distinct values seen so far, largest first.
///
/// Slots that have not been filled yet are simply absent from `buffer`, which
/// makes them compare below every real value (including `i64::MIN`) without a
/// sentinel.
#[derive(Debug)]
pub struct TopNSelector {
    rank: Rank,
    unique: UniqueValues,
    buffer: Vec<i64>,
    seen_count: usize,
}

// Upper bound on the eager allocation; the buffer still grows up to `rank`.
const INITIAL_CAPACITY_LIMIT: usize = 1024;

impl TopNSelector {
    pub fn new(rank: Rank) -> Self {
        Self {
            rank,
            unique: UniqueValues::new(),
            buffer: Vec::with_capacity(rank.get().min(INITIAL_CAPACITY_LIMIT)),
            seen_count: 0,
        }
    }

    /// Feeds one numeric cell value in scan order.
    pub fn observe(&mut self, value: i64) {
        if !self.unique.admit(value) {
            return;
        }
        self.seen_count += 1;
        debug_assert_eq!(self.unique.len(), self.seen_count);
        self.insert(value);
    }

    fn insert(&mut self, value: i64) {
        let capacity = self.rank.get();
        match self.buffer.iter().position(|&slot| slot < value) {
            Some(idx) => {
                if self.buffer.len() == capacity {
                    self.buffer.pop();
                }
                self.buffer.insert(idx, value);
            }
            None if self.buffer.len() < capacity => self.buffer.push(value),
            None => {}
        }
    }

    /// Number of distinct values admitted so far.
    pub fn seen_count(&self) -> usize {
        self.seen_count
    }

    /// Filled slots, sorted descending.
    pub fn buffer(&self) -> &[i64] {
        &self.buffer
    }
}
