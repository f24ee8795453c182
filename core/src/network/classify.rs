use netcheck_common::site::ProbeResult;

/// Evidence that an echo reply came back (Windows, then Unix wording).
const REPLY_MARKERS: &[&str] = &["reply from", "bytes from"];

/// Replies that are ICMP errors rather than echo replies.
const FAILURE_MARKERS: &[&str] = &["unreachable", "ttl expired", "time to live exceeded"];

/// Classifies the combined output of a `ping` run.
///
/// The exit status is not trusted: Windows `ping` exits with success when a router
/// answers "Destination host unreachable", because a reply was received. Only an
/// echo reply without any failure marker counts as reachable.
pub fn classify(output: &str) -> ProbeResult {
    let output = output.to_ascii_lowercase();
    let replied = REPLY_MARKERS.iter().any(|marker| output.contains(marker));
    let failed = FAILURE_MARKERS.iter().any(|marker| output.contains(marker));
    ProbeResult::from(replied && !failed)
}
