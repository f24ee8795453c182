use netcheck_common::config::Config;
use netcheck_common::site::SiteId;
use netcheck_core::prober::SiteProber;
use netcheck_core::scanner;

use crate::mprint;
use crate::terminal::print;

pub async fn check(sites: Vec<u32>, cfg: &Config) -> anyhow::Result<()> {
    let prober = SiteProber::from_config(cfg);
    for (idx, id) in sites.into_iter().enumerate() {
        if idx > 0 {
            mprint!();
        }
        let status = scanner::scan_single(&prober, SiteId::new(id), &cfg.defaults).await;
        print::site_report(&status);
    }
    Ok(())
}
