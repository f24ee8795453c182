use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "[{prefix}] {elapsed_precise} {bar:36.cyan/blue} {pos:>4}/{len:4} {msg}";

pub fn create_progressbar(len: u64, prefix: &str) -> ProgressBar {
    let style = ProgressStyle::with_template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("■■□");

    let progress_bar = ProgressBar::new(len);
    progress_bar.set_prefix(prefix.to_string());
    progress_bar.set_style(style);
    progress_bar.enable_steady_tick(Duration::from_millis(100));
    progress_bar
}
