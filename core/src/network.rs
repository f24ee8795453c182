//! The **Probe Transport** abstraction.
//!
//! A transport answers one question about one address: did it reply? Every failure
//! (timeouts, launch errors, garbage output, ICMP "destination unreachable" replies)
//! collapses into [`ProbeResult::Unreachable`], so callers never handle errors.
//!
//! The production transport is [`PingTransport`], which shells out to the system
//! `ping`. Tests substitute their own [`Transport`].

use async_trait::async_trait;
use netcheck_common::site::ProbeResult;

mod classify;
mod ping;
mod selector;

pub use classify::classify;
pub use ping::PingTransport;
pub use selector::{AddressSelector, Fixed, Literal, SimulatedPool};

/// Tracing target of raw probe output, enabled in verbose mode.
pub const PROBE_TARGET: &str = "netcheck::probe";

#[async_trait]
pub trait Transport: Send + Sync {
    /// Checks whether `address` replies. Must not panic and must not block past its own timeout.
    async fn probe(&self, address: &str) -> ProbeResult;
}
