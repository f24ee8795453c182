use std::collections::BTreeSet;
use std::sync::Arc;

use netcheck_common::config::SiteDefaults;
use netcheck_common::site::{Country, ProbeResult, Site, SiteId};
use netcheck_core::scanner;

use crate::util::{FakeTransport, prober};

#[tokio::test]
async fn probes_every_resolved_hostname_once() {
    let transport = Arc::new(FakeTransport::new());
    let site = Site::new(SiteId::new(267), Country::Ca, 3);
    prober(transport.clone()).probe_site(site).await;

    let calls: BTreeSet<String> = transport.calls().into_iter().collect();
    let expected: BTreeSet<String> = [
        "dg00267",
        "mws00267",
        "carg01000267",
        "carg02000267",
        "carg03000267",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    assert_eq!(calls, expected);
    assert_eq!(transport.calls().len(), 5);
}

#[tokio::test]
async fn hard_down_requires_gateway() {
    let up_gateway = Arc::new(FakeTransport::new().up(&["dg10304"]));
    let status = scanner::scan_single(&prober(up_gateway), SiteId::new(10304), &SiteDefaults::default()).await;
    assert!(status.is_hard_down());

    let down_gateway = Arc::new(FakeTransport::new().up(&["mws10304"]));
    let status = scanner::scan_single(&prober(down_gateway), SiteId::new(10304), &SiteDefaults::default()).await;
    assert!(!status.is_hard_down());
    assert_eq!(status.back_office(), ProbeResult::Reachable);
}

#[tokio::test]
async fn one_live_register_is_enough() {
    let transport = Arc::new(FakeTransport::new().up(&["dg10304", "usrg02010304"]));
    let status = scanner::scan_single(&prober(transport), SiteId::new(10304), &SiteDefaults::default()).await;

    assert_eq!(status.register(1), Some(ProbeResult::Unreachable));
    assert_eq!(status.register(2), Some(ProbeResult::Reachable));
    assert_eq!(status.crashed_registers(), 1);
    assert!(!status.is_hard_down());
}

#[tokio::test]
async fn zero_register_site_follows_gateway() {
    let transport = Arc::new(FakeTransport::new().up(&["dg00042"]));
    let site = Site::new(SiteId::new(42), Country::Us, 0);
    let status = prober(transport).probe_site(site).await;

    assert!(status.registers().is_empty());
    assert!(status.is_hard_down());
}

#[tokio::test]
async fn unrecognized_country_is_passed_through() {
    let transport = Arc::new(FakeTransport::new().up(&["dg00001", "mxrg01000001"]));
    let site = Site::new(SiteId::new(1), Country::lenient("MX"), 1);
    let status = prober(transport).probe_site(site).await;

    assert_eq!(status.register(1), Some(ProbeResult::Reachable));
    assert!(!status.is_hard_down());
}

#[tokio::test]
async fn repeated_probes_are_identical() {
    let transport = Arc::new(FakeTransport::new().up(&["dg10304", "usrg01010304"]));
    let prober = prober(transport);
    let site = Site::new(SiteId::new(10304), Country::Us, 4);

    let first = prober.probe_site(site.clone()).await;
    let second = prober.probe_site(site).await;
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}
