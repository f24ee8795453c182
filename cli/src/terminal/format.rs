use colored::*;
use netcheck_common::site::SiteStatus;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

/// Report fields after the store line, coloured by outcome.
pub fn status_to_details(status: &SiteStatus) -> Vec<Detail> {
    status
        .report_lines()
        .into_iter()
        .skip(1)
        .map(|(label, value)| {
            let colored: ColoredString = match value.as_str() {
                "UP" | "NO" => value.color(colors::UP),
                "DOWN" => value.color(colors::DOWN),
                "YES" => value.color(colors::DOWN).bold(),
                _ => value.color(colors::TEXT_DEFAULT),
            };
            (label, colored)
        })
        .collect()
}

pub fn store_title(status: &SiteStatus) -> String {
    let crashed = status.crashed_registers();
    let total = status.register_count();
    format!(
        "STORE {} {} {}",
        status.id().to_string().color(colors::PRIMARY).bold(),
        status.country().to_string().color(colors::ACCENT),
        format!("({crashed}/{total} registers down)").color(colors::SEPARATOR),
    )
}
