use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use netcheck_common::site::ProbeResult;
use netcheck_core::network::Transport;
use netcheck_core::prober::SiteProber;

/// Deterministic transport: every address is unreachable unless scripted otherwise.
#[derive(Default)]
pub struct FakeTransport {
    script: HashMap<String, ProbeResult>,
    calls: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn up(mut self, addresses: &[&str]) -> Self {
        for address in addresses {
            self.script.insert(address.to_string(), ProbeResult::Reachable);
        }
        self
    }

    /// Addresses probed so far, in completion order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn probe(&self, address: &str) -> ProbeResult {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(address.to_string());
        }
        self.script.get(address).copied().unwrap_or_default()
    }
}

pub fn prober(transport: Arc<FakeTransport>) -> SiteProber {
    SiteProber::new(transport, 4)
}
