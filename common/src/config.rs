use std::time::Duration;

use crate::site::Country;

/// Addresses probed instead of the resolved ones when simulating.
///
/// Two public resolvers answer, the placeholder never does, so roughly two out of
/// three probes succeed.
pub const SIMULATION_POOL: &[&str] = &["8.8.8.8", "8.8.4.4", "BAD ADDRESS"];

pub const DEFAULT_TIMEOUT_MS: u64 = 500;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(DEFAULT_TIMEOUT_MS);
pub const DEFAULT_ATTEMPTS: u32 = 1;
pub const DEFAULT_PAYLOAD_SIZE: u32 = 2;
pub const DEFAULT_CONCURRENCY: usize = 8;
pub const DEFAULT_REGISTERS: u32 = 2;

/// Run configuration, built once by the front end and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Echo the raw output of every probe.
    pub verbose: bool,
    /// Probe a random address from [`SIMULATION_POOL`] instead of the real endpoint.
    pub simulate: bool,
    /// Skip the intro banner.
    pub no_banner: bool,
    /// Upper bound on probes in flight for a single site.
    pub concurrency: usize,
    pub probe: ProbeSettings,
    /// Applied to sites entered without country or register information.
    pub defaults: SiteDefaults,
}

/// Tuning knobs of a single reachability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSettings {
    pub timeout: Duration,
    pub attempts: u32,
    pub payload_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteDefaults {
    pub country: Country,
    pub registers: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            simulate: false,
            no_banner: false,
            concurrency: DEFAULT_CONCURRENCY,
            probe: ProbeSettings::default(),
            defaults: SiteDefaults::default(),
        }
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            attempts: DEFAULT_ATTEMPTS,
            payload_size: DEFAULT_PAYLOAD_SIZE,
        }
    }
}

impl ProbeSettings {
    /// Longest time a whole probe may take before it is abandoned.
    ///
    /// Every attempt gets the configured timeout plus a second of slack for
    /// process start-up and name resolution.
    pub fn deadline(&self) -> Duration {
        let per_attempt = self.timeout + Duration::from_secs(1);
        per_attempt * self.attempts.max(1)
    }
}

impl Default for SiteDefaults {
    fn default() -> Self {
        Self {
            country: Country::Us,
            registers: DEFAULT_REGISTERS,
        }
    }
}
