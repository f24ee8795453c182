use std::sync::Arc;

use netcheck_common::sheet::{RowError, parse_sheet};
use netcheck_common::site::{Country, SiteStatus};
use netcheck_core::scanner::{self, ScanEvent};

use crate::util::{FakeTransport, prober};

async fn scan(text: &str, transport: Arc<FakeTransport>) -> (Vec<SiteStatus>, Vec<RowError>) {
    let mut statuses = Vec::new();
    let mut rejected = Vec::new();
    scanner::scan_sheet(&prober(transport), parse_sheet(text), |event| match event {
        ScanEvent::Status(status) => statuses.push(status),
        ScanEvent::Rejected(e) => rejected.push(e),
    })
    .await;
    (statuses, rejected)
}

#[tokio::test]
async fn reference_sheet() {
    let (statuses, rejected) = scan("10304,US,2\n267,CA,6\n", Arc::new(FakeTransport::new())).await;

    assert!(rejected.is_empty());
    assert_eq!(statuses.len(), 2);

    assert_eq!(statuses[0].register_count(), 2);
    assert_eq!(statuses[0].registers().keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(statuses[0].country(), &Country::Us);

    assert_eq!(statuses[1].register_count(), 6);
    assert_eq!(
        statuses[1].registers().keys().copied().collect::<Vec<_>>(),
        (1..=6).collect::<Vec<u32>>()
    );
    assert_eq!(statuses[1].country(), &Country::Ca);
}

#[tokio::test]
async fn malformed_rows_are_skipped_not_fatal() {
    let text = "10304,US,2\n10304;US;2\n5,XX,1\n7,US,two\n267,CA,6\n";
    let transport = Arc::new(FakeTransport::new().up(&["dg00267"]));
    let (statuses, rejected) = scan(text, transport).await;

    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[1].id().get(), 267);
    assert!(statuses[1].is_hard_down());

    let lines: Vec<usize> = rejected.iter().map(RowError::line).collect();
    assert_eq!(lines, vec![2, 3, 4]);
    assert!(matches!(rejected[0], RowError::FieldCount { found: 1, .. }));
    assert!(matches!(rejected[1], RowError::Country { .. }));
    assert!(matches!(rejected[2], RowError::RegisterCount { .. }));
}

#[tokio::test]
async fn empty_sheet_scans_nothing() {
    let transport = Arc::new(FakeTransport::new());
    let (statuses, rejected) = scan("\n\n", transport.clone()).await;
    assert!(statuses.is_empty());
    assert!(rejected.is_empty());
    assert!(transport.calls().is_empty());
}
