use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized country code '{0}', expected US or CA")]
pub struct CountryError(pub String);

/// Country code used as the register hostname prefix.
///
/// Only `US` and `CA` are recognized. [`Country::lenient`] keeps any other code
/// so that address construction never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Country {
    #[default]
    Us,
    Ca,
    /// Unrecognized code, stored lowercase.
    Other(String),
}

impl Country {
    /// Parses without validation: recognized codes map to their variant, anything
    /// else is carried through as [`Country::Other`].
    pub fn lenient(s: &str) -> Self {
        s.parse()
            .unwrap_or_else(|CountryError(code)| Self::Other(code.to_ascii_lowercase()))
    }

    /// Lowercase code as it appears in hostnames.
    pub fn code(&self) -> &str {
        match self {
            Self::Us => "us",
            Self::Ca => "ca",
            Self::Other(code) => code,
        }
    }
}

impl FromStr for Country {
    type Err = CountryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "us" => Ok(Self::Us),
            "ca" => Ok(Self::Ca),
            _ => Err(CountryError(s.to_string())),
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code().to_ascii_uppercase())
    }
}
