use std::sync::Arc;

use netcheck_common::config::SiteDefaults;
use netcheck_common::site::range::SiteRange;
use netcheck_core::scanner::{self, ScanEvent};

use crate::util::{FakeTransport, prober};

#[tokio::test]
async fn range_yields_one_status_per_site_ascending() {
    let transport = Arc::new(FakeTransport::new().up(&["dg00101", "dg00103"]));
    let range = SiteRange::new(100, 104).unwrap();

    let mut statuses = Vec::new();
    let summary = scanner::scan_range(&prober(transport), range, &SiteDefaults::default(), |event| {
        if let ScanEvent::Status(status) = event {
            statuses.push(status);
        }
    })
    .await;

    assert_eq!(statuses.len(), 104 - 100 + 1);
    let ids: Vec<u32> = statuses.iter().map(|s| s.id().get()).collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(ids.first(), Some(&100));
    assert_eq!(ids.last(), Some(&104));

    assert_eq!(summary.scanned, 5);
    assert_eq!(summary.hard_down, 2);
    assert!(statuses[1].is_hard_down());
    assert!(statuses[3].is_hard_down());
}

#[tokio::test]
async fn range_sites_use_the_configured_defaults() {
    let transport = Arc::new(FakeTransport::new());
    let defaults = SiteDefaults {
        country: "CA".parse().unwrap(),
        registers: 5,
    };

    let mut counts = Vec::new();
    scanner::scan_range(&prober(transport.clone()), SiteRange::new(1, 2).unwrap(), &defaults, |event| {
        if let ScanEvent::Status(status) = event {
            counts.push(status.register_count());
        }
    })
    .await;

    assert_eq!(counts, vec![5, 5]);
    assert!(transport.calls().iter().any(|addr| addr == "carg05000002"));
}
