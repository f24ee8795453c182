//! # Site Prober
//!
//! Probes every endpoint of a site and aggregates the answers into a
//! [`SiteStatus`]. Endpoints are independent, so they are probed concurrently,
//! capped by a semaphore so a site with many registers does not flood the local
//! network stack.

use std::sync::Arc;

use netcheck_common::config::Config;
use netcheck_common::site::{Site, SiteStatus};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::network::{PingTransport, Transport};

pub struct SiteProber {
    transport: Arc<dyn Transport>,
    concurrency: usize,
}

impl SiteProber {
    pub fn new(transport: Arc<dyn Transport>, concurrency: usize) -> Self {
        Self {
            transport,
            concurrency: concurrency.max(1),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(Arc::new(PingTransport::from_config(cfg)), cfg.concurrency)
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Runs one probe pass over `site`.
    ///
    /// Never fails: a probe task that dies leaves its endpoint unreachable.
    pub async fn probe_site(&self, site: Site) -> SiteStatus {
        let permits = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();

        for role in site.endpoints() {
            let address: String = site.address(role);
            let transport = Arc::clone(&self.transport);
            let permits = Arc::clone(&permits);

            tasks.spawn(async move {
                let _permit = permits.acquire_owned().await;
                let result = transport.probe(&address).await;
                (role, address, result)
            });
        }

        let mut builder = SiteStatus::builder(site);
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((role, address, result)) => {
                    debug!("{role} {address}: {result}");
                    if !builder.record(role, result) {
                        debug!("Dropped result for {role}, not an endpoint of this site");
                    }
                }
                Err(e) => error!("Probe task failed: {e}"),
            }
        }

        builder.build()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
