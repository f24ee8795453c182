pub mod check;
pub mod list;
pub mod menu;
pub mod range;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, value_parser};
use netcheck_common::config::{
    Config, DEFAULT_ATTEMPTS, DEFAULT_CONCURRENCY, DEFAULT_PAYLOAD_SIZE, DEFAULT_REGISTERS,
    DEFAULT_TIMEOUT_MS, ProbeSettings, SiteDefaults,
};
use netcheck_common::site::Country;

#[derive(Parser)]
#[command(name = "netcheck", version)]
#[command(about = "Proactive availability monitor for retail sites.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Echo the raw output of every probe
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Probe a random public address instead of the real endpoints
    #[arg(long, global = true)]
    pub simulate: bool,

    /// Time to wait for each reply, in milliseconds
    #[arg(long, global = true, value_name = "MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout: u64,

    /// Echo requests sent per endpoint
    #[arg(long, global = true, default_value_t = DEFAULT_ATTEMPTS, value_parser = value_parser!(u32).range(1..))]
    pub attempts: u32,

    /// Payload size of each echo request, in bytes
    #[arg(long, global = true, value_name = "BYTES", default_value_t = DEFAULT_PAYLOAD_SIZE)]
    pub size: u32,

    /// Maximum probes in flight for one site
    #[arg(long, global = true, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Country of sites entered by id only
    #[arg(long, global = true, default_value = "us")]
    pub country: Country,

    /// Register count of sites entered by id only
    #[arg(long, global = true, default_value_t = DEFAULT_REGISTERS)]
    pub registers: u32,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu (default)
    #[command(alias = "m")]
    Menu,
    /// Check one or more sites by id
    #[command(alias = "c")]
    Check {
        #[arg(required = true, value_parser = value_parser!(u32).range(1..))]
        sites: Vec<u32>,
    },
    /// Check every site between two ids, inclusive
    #[command(alias = "r")]
    Range { low: u32, high: u32 },
    /// Check the sites listed in a comma-separated file
    #[command(alias = "l")]
    List { file: PathBuf },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            verbose: self.verbose,
            simulate: self.simulate,
            no_banner: self.no_banner,
            concurrency: self.concurrency,
            probe: ProbeSettings {
                timeout: Duration::from_millis(self.timeout),
                attempts: self.attempts,
                payload_size: self.size,
            },
            defaults: SiteDefaults {
                country: self.country.clone(),
                registers: self.registers,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_probe() {
        let cli = CommandLine::try_parse_from(["netcheck"]).unwrap();
        let cfg = cli.to_config();
        assert!(cli.command.is_none());
        assert_eq!(cfg.probe, ProbeSettings::default());
        assert_eq!(cfg.defaults, SiteDefaults::default());
        assert!(!cfg.simulate);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = CommandLine::try_parse_from([
            "netcheck", "range", "10", "20", "--simulate", "--country", "CA", "--timeout", "250",
        ])
        .unwrap();
        let cfg = cli.to_config();
        assert!(matches!(cli.command, Some(Commands::Range { low: 10, high: 20 })));
        assert!(cfg.simulate);
        assert_eq!(cfg.defaults.country, Country::Ca);
        assert_eq!(cfg.probe.timeout, Duration::from_millis(250));
    }

    #[test]
    fn rejects_unknown_country_and_zero_site() {
        assert!(CommandLine::try_parse_from(["netcheck", "--country", "mx"]).is_err());
        assert!(CommandLine::try_parse_from(["netcheck", "check", "0"]).is_err());
        assert!(CommandLine::try_parse_from(["netcheck", "check"]).is_err());
    }
}
