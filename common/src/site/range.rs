use thiserror::Error;

use super::SiteId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    /// A zero bound or an empty interval: the user asked to leave.
    #[error("range scan cancelled")]
    Exit,
    #[error("upper range {high} is not greater than lower range {low}")]
    NotAscending { low: u32, high: u32 },
}

impl RangeError {
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}

/// Closed interval of site identifiers, `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SiteRange {
    pub start: SiteId,
    pub end: SiteId,
}

impl SiteRange {
    /// Validates the bounds entered for a range scan.
    ///
    /// A zero on either side, or `low == high`, is the exit sentinel. `low > high`
    /// is rejected so the caller can ask again.
    pub fn new(low: u32, high: u32) -> Result<Self, RangeError> {
        if low == 0 || high == 0 || low == high {
            return Err(RangeError::Exit);
        }
        if low > high {
            return Err(RangeError::NotAscending { low, high });
        }
        Ok(Self {
            start: SiteId::new(low),
            end: SiteId::new(high),
        })
    }

    pub fn to_iter(self) -> impl Iterator<Item = SiteId> {
        (self.start.get()..=self.end.get()).map(SiteId::new)
    }

    pub fn len(&self) -> usize {
        (self.end.get() - self.start.get()) as usize + 1
    }
}
