use crate::metadata::Coordinate;
use std::collections::HashSet;

/// Remembers every coordinate emitted during one run.
#[derive(Debug, Default)]
pub struct CoordinateDeduplicator {
    seen: HashSet<Coordinate>,
}

impl CoordinateDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `coordinate` and returns `true` if it has not been admitted before.
    pub fn admit(&mut self, coordinate: Coordinate) -> bool {
        self.seen.insert(coordinate)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }
}
