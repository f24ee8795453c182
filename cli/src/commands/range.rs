use colored::*;
use indicatif::ProgressBar;
use netcheck_common::config::Config;
use netcheck_common::site::range::{RangeError, SiteRange};
use netcheck_core::prober::SiteProber;
use netcheck_core::scanner::{self, ScanEvent, ScanSummary};

use crate::terminal::{print, progress};

pub async fn range(low: u32, high: u32, cfg: &Config) -> anyhow::Result<()> {
    let range = match SiteRange::new(low, high) {
        Ok(range) => range,
        Err(RangeError::Exit) => {
            anyhow::bail!("range bounds must be non-zero and different, got {low}-{high}")
        }
        Err(e) => return Err(e.into()),
    };
    let prober = SiteProber::from_config(cfg);
    run_range(&prober, range, cfg).await;
    Ok(())
}

pub async fn run_range(prober: &SiteProber, range: SiteRange, cfg: &Config) -> ScanSummary {
    let pb: ProgressBar = progress::create_progressbar(range.len() as u64, "RANGE");
    let summary = scanner::scan_range(prober, range, &cfg.defaults, |event| {
        report_event(&pb, event)
    })
    .await;
    pb.finish_and_clear();

    print_summary(&summary);
    summary
}

/// Prints one scan event without tearing the progress bar.
pub fn report_event(pb: &ProgressBar, event: ScanEvent) {
    match event {
        ScanEvent::Status(status) => pb.suspend(|| print::site_report(&status)),
        ScanEvent::Rejected(e) => pb.suspend(|| print::print_status(format!("{}", e.to_string().yellow()))),
    }
    pb.inc(1);
}

pub fn print_summary(summary: &ScanSummary) {
    let sites: ColoredString = format!("{} sites", summary.scanned).bold().green();
    let hard_down: ColoredString = if summary.hard_down > 0 {
        format!("{} hard down", summary.hard_down).bold().red()
    } else {
        "none hard down".bold().green()
    };
    let total_time: ColoredString = format!("{:.2}s", summary.elapsed.as_secs_f64()).bold().yellow();

    print::fat_separator();
    print::centerln(&format!("Scan Complete: {sites} checked, {hard_down} in {total_time}"));
    if summary.rejected > 0 {
        let rejected: ColoredString = format!("{} rows skipped", summary.rejected).bold().yellow();
        print::centerln(&format!("{rejected}"));
    }
}
