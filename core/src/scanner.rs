//! # Scan Drivers
//!
//! Orchestration over many sites. Sites are scanned strictly one after another, in
//! input order; each finished site is handed to the caller through a callback as
//! soon as it is available so reports can stream.

use std::time::{Duration, Instant};

use netcheck_common::config::SiteDefaults;
use netcheck_common::sheet::{RowError, RowOutcome};
use netcheck_common::site::range::SiteRange;
use netcheck_common::site::{Site, SiteId, SiteStatus};
use tracing::debug;

use crate::prober::SiteProber;

/// Something a scan produced, in input order.
#[derive(Debug)]
pub enum ScanEvent {
    Status(SiteStatus),
    /// A bulk row that could not be parsed and was skipped.
    Rejected(RowError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub scanned: usize,
    pub hard_down: usize,
    pub rejected: usize,
    pub elapsed: Duration,
}

impl ScanSummary {
    fn record(&mut self, event: &ScanEvent) {
        match event {
            ScanEvent::Status(status) => {
                self.scanned += 1;
                if status.is_hard_down() {
                    self.hard_down += 1;
                }
            }
            ScanEvent::Rejected(_) => self.rejected += 1,
        }
    }
}

/// Probes a single site identified only by its id.
pub async fn scan_single(prober: &SiteProber, id: SiteId, defaults: &SiteDefaults) -> SiteStatus {
    prober.probe_site(Site::with_defaults(id, defaults)).await
}

/// Probes every site in `range`, ascending.
pub async fn scan_range<F>(
    prober: &SiteProber,
    range: SiteRange,
    defaults: &SiteDefaults,
    on_event: F,
) -> ScanSummary
where
    F: FnMut(ScanEvent),
{
    let sites = range
        .to_iter()
        .map(|id| Ok(Site::with_defaults(id, defaults)));
    scan_rows(prober, sites, on_event).await
}

/// Probes the parsed rows of a bulk sheet in file order.
///
/// Rejected rows are reported and skipped; they never stop the scan.
pub async fn scan_sheet<F>(prober: &SiteProber, rows: Vec<RowOutcome>, on_event: F) -> ScanSummary
where
    F: FnMut(ScanEvent),
{
    scan_rows(prober, rows, on_event).await
}

async fn scan_rows<I, F>(prober: &SiteProber, rows: I, mut on_event: F) -> ScanSummary
where
    I: IntoIterator<Item = RowOutcome>,
    F: FnMut(ScanEvent),
{
    let start_time = Instant::now();
    let mut summary = ScanSummary::default();

    for row in rows {
        let event = match row {
            Ok(site) => ScanEvent::Status(prober.probe_site(site).await),
            Err(e) => {
                debug!("Skipping row: {e}");
                ScanEvent::Rejected(e)
            }
        };
        summary.record(&event);
        on_event(event);
    }

    summary.elapsed = start_time.elapsed();
    summary
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
