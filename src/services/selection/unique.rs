use std::collections::HashSet;

/// Set of integer values already admitted during one scan.
#[derive(Debug, Default)]
pub struct UniqueValues {
    seen: HashSet<i64>,
}

impl UniqueValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time `value` is presented, `false` afterwards.
    pub fn admit(&mut self, value: i64) -> bool {
        self.seen.insert(value)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
