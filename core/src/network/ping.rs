use std::borrow::Cow;
use std::process::Stdio;

use async_trait::async_trait;
use netcheck_common::config::{Config, ProbeSettings};
use netcheck_common::site::ProbeResult;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use super::{AddressSelector, Literal, PROBE_TARGET, SimulatedPool, Transport, classify};

/// Transport backed by the operating system's `ping` binary.
pub struct PingTransport {
    settings: ProbeSettings,
    selector: Box<dyn AddressSelector>,
    verbose: bool,
}

impl PingTransport {
    pub fn new(settings: ProbeSettings, selector: Box<dyn AddressSelector>) -> Self {
        Self {
            settings,
            selector,
            verbose: false,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        let selector: Box<dyn AddressSelector> = if cfg.simulate {
            Box::new(SimulatedPool::default())
        } else {
            Box::new(Literal)
        };
        Self::new(cfg.probe, selector).with_verbose(cfg.verbose)
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Address that will actually be pinged for `requested`.
    fn target<'a>(&self, requested: &'a str) -> Cow<'a, str> {
        self.selector.select(requested)
    }

    async fn run(&self, address: &str) -> ProbeResult {
        let mut command = Command::new("ping");
        command
            .args(ping_args(address, &self.settings))
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match timeout(self.settings.deadline(), command.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                debug!(target: PROBE_TARGET, "failed to launch ping for {address}: {e}");
                return ProbeResult::Unreachable;
            }
            Err(_elapsed) => {
                debug!(target: PROBE_TARGET, "ping for {address} exceeded its deadline");
                return ProbeResult::Unreachable;
            }
        };

        let mut text: String = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        if self.verbose {
            debug!(target: PROBE_TARGET, "{address}\n{}", text.trim_end());
        }

        classify(&text)
    }
}

#[async_trait]
impl Transport for PingTransport {
    async fn probe(&self, address: &str) -> ProbeResult {
        let selected = self.target(address);
        if !is_probeable(&selected) {
            debug!(target: PROBE_TARGET, "refusing to ping '{selected}'");
            return ProbeResult::Unreachable;
        }
        self.run(&selected).await
    }
}

/// Rejects input that `ping` would misread, such as an empty string or a flag.
fn is_probeable(address: &str) -> bool {
    let address = address.trim();
    !address.is_empty() && !address.starts_with('-')
}

#[cfg(windows)]
fn ping_args(address: &str, settings: &ProbeSettings) -> Vec<String> {
    vec![
        "-n".into(),
        settings.attempts.max(1).to_string(),
        "-w".into(),
        settings.timeout.as_millis().to_string(),
        "-l".into(),
        settings.payload_size.to_string(),
        address.into(),
    ]
}

#[cfg(target_os = "macos")]
fn ping_args(address: &str, settings: &ProbeSettings) -> Vec<String> {
    vec![
        "-c".into(),
        settings.attempts.max(1).to_string(),
        "-W".into(),
        settings.timeout.as_millis().to_string(),
        "-s".into(),
        settings.payload_size.to_string(),
        address.into(),
    ]
}

/// iputils `ping` only takes whole seconds for `-W`, so the timeout is rounded up.
#[cfg(all(unix, not(target_os = "macos")))]
fn ping_args(address: &str, settings: &ProbeSettings) -> Vec<String> {
    let wait_secs = settings.timeout.as_millis().div_ceil(1000).max(1);
    vec![
        "-c".into(),
        settings.attempts.max(1).to_string(),
        "-W".into(),
        wait_secs.to_string(),
        "-s".into(),
        settings.payload_size.to_string(),
        address.into(),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
