use crate::types::ScanDirection;

/// Inclusive block range walked by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRange {
    /// Lowest block number (inclusive)
    pub low: u64,
    /// Highest block number (inclusive)
    pub high: u64,
    pub direction: ScanDirection,
}

impl ScanRange {
    /// `head - depth ..= head`, saturating at genesis
    pub fn from_head(head: u64, depth: u64, direction: ScanDirection) -> Self {
        Self {
            low: head.saturating_sub(depth),
            high: head,
            direction,
        }
    }

    pub fn new(low: u64, high: u64, direction: ScanDirection) -> Self {
        Self {
            low: low.min(high),
            high: low.max(high),
            direction,
        }
    }

    /// First block number visited
    pub fn start(&self) -> u64 {
        match self.direction {
            ScanDirection::Descending => self.high,
            ScanDirection::Ascending => self.low,
        }
    }

    pub fn len(&self) -> u64 {
        self.high - self.low + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Block numbers in scan order
    pub fn blocks(&self) -> Box<dyn Iterator<Item = u64> + Send> {
        match self.direction {
            ScanDirection::Descending => Box::new((self.low..=self.high).rev()),
            ScanDirection::Ascending => Box::new(self.low..=self.high),
        }
    }
}
