use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Width of the zero-padded form used in every endpoint hostname.
pub const PADDED_WIDTH: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SiteIdError {
    #[error("site id cannot be empty")]
    Empty,
    #[error("'{0}' is not a valid site id")]
    Invalid(String),
}

/// Numeric site identifier. Displays zero-padded to five digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SiteId(u32);

impl SiteId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// The sentinel used by the interactive drivers to leave a scan.
    pub const fn is_sentinel(self) -> bool {
        self.0 == 0
    }

    pub fn padded(self) -> String {
        format!("{:0width$}", self.0, width = PADDED_WIDTH)
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = PADDED_WIDTH)
    }
}

impl FromStr for SiteId {
    type Err = SiteIdError;

    /// Accepts plain decimal digits, with or without leading zeros.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SiteIdError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SiteIdError::Invalid(s.to_string()));
        }
        s.parse::<u32>()
            .map(Self)
            .map_err(|_| SiteIdError::Invalid(s.to_string()))
    }
}
