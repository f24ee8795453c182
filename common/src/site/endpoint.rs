use std::fmt;

/// Logical endpoint within a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EndpointRole {
    /// Default-route device (`DG`).
    Gateway,
    /// In-store server (`MWS`).
    BackOffice,
    /// Point-of-sale register, numbered from 1.
    Register(u32),
}

impl EndpointRole {
    /// Short label used in reports.
    pub fn label(&self) -> String {
        match self {
            Self::Gateway => "DG".to_string(),
            Self::BackOffice => "MWS".to_string(),
            Self::Register(idx) => format!("RG{idx}"),
        }
    }
}

impl fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Outcome of a single probe. Timeouts and errors are [`ProbeResult::Unreachable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProbeResult {
    Reachable,
    #[default]
    Unreachable,
}

impl ProbeResult {
    pub fn is_reachable(self) -> bool {
        self == Self::Reachable
    }
}

impl From<bool> for ProbeResult {
    fn from(reachable: bool) -> Self {
        if reachable {
            Self::Reachable
        } else {
            Self::Unreachable
        }
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reachable => f.write_str("UP"),
            Self::Unreachable => f.write_str("DOWN"),
        }
    }
}
