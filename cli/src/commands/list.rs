use std::path::{Path, PathBuf};

use anyhow::Context;
use netcheck_common::config::Config;
use netcheck_common::sheet;
use netcheck_core::prober::SiteProber;
use netcheck_core::scanner::{self, ScanSummary};

use crate::commands::range::{print_summary, report_event};
use crate::terminal::{print, progress, prompt};

pub async fn list(file: &Path, cfg: &Config) -> anyhow::Result<()> {
    let prober = SiteProber::from_config(cfg);
    let file: PathBuf = match file.to_str() {
        Some(name) => prompt::with_csv_extension(name).into(),
        None => file.to_path_buf(),
    };
    run_sheet(&prober, &file).await?;
    Ok(())
}

/// Reads and scans one sheet. Only an unreadable file is an error.
pub async fn run_sheet(prober: &SiteProber, file: &Path) -> anyhow::Result<ScanSummary> {
    let text: String = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("could not read {}", file.display()))?;

    print::print_status(format!("File: {}", file.display()));

    let rows = sheet::parse_sheet(&text);
    let pb = progress::create_progressbar(rows.len() as u64, "LIST");
    let summary = scanner::scan_sheet(prober, rows, |event| report_event(&pb, event)).await;
    pb.finish_and_clear();

    print_summary(&summary);
    Ok(summary)
}
