//! The interactive monitor: a numbered menu over the three scan drivers.
//!
//! Every driver keeps asking until it gets its exit sentinel (`0`, or `0.csv` for
//! files), then returns to the menu. Bad input is re-prompted, never fatal.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use netcheck_common::config::{Config, SIMULATION_POOL};
use netcheck_common::site::SiteId;
use netcheck_common::site::range::{RangeError, SiteRange};
use netcheck_common::{error, success};
use netcheck_core::prober::SiteProber;
use netcheck_core::scanner;

use crate::commands::{list, range};
use crate::terminal::print;
use crate::terminal::prompt::Prompt;

const EXIT_FILE: &str = "0.csv";

pub async fn menu(cfg: &Config) -> anyhow::Result<()> {
    let prober = SiteProber::from_config(cfg);
    if cfg.verbose {
        self_test(&prober, cfg).await;
    }

    let mut prompt = Prompt::stdin();
    run(&prober, cfg, &mut prompt).await;
    Ok(())
}

pub async fn run<R: BufRead, W: Write>(prober: &SiteProber, cfg: &Config, prompt: &mut Prompt<R, W>) {
    loop {
        print::fat_separator();
        print::print_status("1) Net Check");
        print::print_status("2) Range Monitor");
        print::print_status("3) List Monitor");
        print::print_status("4) Quit");
        print::fat_separator();

        match prompt.integer() {
            Some(1) => net_check(prober, cfg, prompt).await,
            Some(2) => range_monitor(prober, cfg, prompt).await,
            Some(3) => list_monitor(prober, prompt).await,
            Some(4) | None => break,
            Some(_) => print::print_status("Unknown option, pick 1-4"),
        }
    }
}

/// Probes the network before the menu so a broken uplink is obvious up front.
async fn self_test(prober: &SiteProber, cfg: &Config) {
    print::header("network self-test");
    let transport = prober.transport();
    if cfg.simulate {
        print::print_status(format!("Pinging random addresses from {SIMULATION_POOL:?} x3"));
        for _ in 0..3 {
            let result = transport.probe("").await;
            print::print_status(format!("    Response: {result}"));
        }
    } else {
        print::print_status("Pinging Google DNS at 8.8.8.8");
        let result = transport.probe("8.8.8.8").await;
        print::print_status(format!("    Response: {result}"));
    }
}

async fn net_check<R: BufRead, W: Write>(prober: &SiteProber, cfg: &Config, prompt: &mut Prompt<R, W>) {
    print::header("net check - store 0 to exit");

    while let Some(id) = prompt.integer().map(SiteId::new) {
        if id.is_sentinel() {
            break;
        }
        let status = scanner::scan_single(prober, id, &cfg.defaults).await;
        print::site_report(&status);
    }
    print::print_status("Returning to menu");
}

async fn range_monitor<R: BufRead, W: Write>(prober: &SiteProber, cfg: &Config, prompt: &mut Prompt<R, W>) {
    print::header("range monitor - 0 to exit");

    loop {
        print::print_status("Lower Range:");
        let Some(low) = prompt.integer() else { break };
        print::print_status("Upper Range:");
        let Some(high) = prompt.integer() else { break };

        match SiteRange::new(low, high) {
            Ok(site_range) => {
                range::run_range(prober, site_range, cfg).await;
                success!("Range Monitor complete");
                break;
            }
            Err(RangeError::Exit) => break,
            Err(e) => error!("{e}"),
        }
    }
    print::print_status("Returning to menu");
}

async fn list_monitor<R: BufRead, W: Write>(prober: &SiteProber, prompt: &mut Prompt<R, W>) {
    print::header("list monitor - file 0 to exit");
    print::print_status("Files are comma-separated: site,country,registers");

    while let Some(name) = prompt.file_name() {
        if name == EXIT_FILE {
            break;
        }
        if let Err(e) = list::run_sheet(prober, &PathBuf::from(name)).await {
            error!("{e:#}");
        }
    }
    print::print_status("Returning to menu");
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use netcheck_common::site::ProbeResult;
    use netcheck_core::network::Transport;

    /// Records every address and answers unreachable.
    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn gateways(&self) -> Vec<String> {
            self.calls
                .lock()
                .map(|calls| calls.iter().filter(|a| a.starts_with("dg")).cloned().collect())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl Transport for Recorder {
        async fn probe(&self, address: &str) -> ProbeResult {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(address.to_string());
            }
            ProbeResult::Unreachable
        }
    }

    /// Runs the menu over `script` and returns the gateways probed, in order.
    async fn drive(script: &str) -> Vec<String> {
        let recorder = Arc::new(Recorder::default());
        let prober = SiteProber::new(recorder.clone(), 4);
        let mut prompt = Prompt::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        run(&prober, &Config::default(), &mut prompt).await;
        recorder.gateways()
    }

    #[tokio::test]
    async fn full_session_visits_every_monitor() {
        let gateways = drive("1\n5\n0\n2\n9\n3\n3\n4\n3\nnope\n0\n4\n").await;
        assert_eq!(gateways, vec!["dg00005", "dg00003", "dg00004"]);
    }

    #[tokio::test]
    async fn net_check_stops_at_zero() {
        let gateways = drive("1\n12\n34\n0\n1\n56\n0\n4\n").await;
        assert_eq!(gateways, vec!["dg00012", "dg00034", "dg00056"]);
    }

    #[tokio::test]
    async fn range_zero_or_equal_bounds_exit_without_probing() {
        assert!(drive("2\n0\n10\n4\n").await.is_empty());
        assert!(drive("2\n10\n0\n4\n").await.is_empty());
        assert!(drive("2\n7\n7\n4\n").await.is_empty());
    }

    #[tokio::test]
    async fn descending_range_asks_again() {
        let gateways = drive("2\n20\n10\n20\n21\n4\n").await;
        assert_eq!(gateways, vec!["dg00020", "dg00021"]);
    }

    #[tokio::test]
    async fn missing_file_asks_again_and_zero_exits() {
        let sheet = std::env::temp_dir().join(format!("netcheck-menu-{}.csv", std::process::id()));
        std::fs::write(&sheet, "12,CA,1\n").unwrap();

        let script = format!("3\ndefinitely-missing\n{}\n0.csv\n1\n7\n0\n4\n", sheet.display());
        let gateways = drive(&script).await;
        let _ = std::fs::remove_file(&sheet);

        assert_eq!(gateways, vec!["dg00012", "dg00007"]);
    }

    #[tokio::test]
    async fn end_of_input_leaves_every_loop() {
        assert_eq!(drive("1\n5\n").await, vec!["dg00005"]);
        assert!(drive("2\n15\n").await.is_empty());
        assert!(drive("3\n").await.is_empty());
        assert!(drive("").await.is_empty());
    }

    #[tokio::test]
    async fn unknown_options_are_ignored() {
        assert_eq!(drive("9\nabc\n1\n8\n0\n4\n").await, vec!["dg00008"]);
    }
}
