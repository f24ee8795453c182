//! Hostname scheme of site endpoints.
//!
//! | Role        | Hostname                                 |
//! |-------------|------------------------------------------|
//! | Gateway     | `dg` + site                              |
//! | Back-office | `mws` + site                             |
//! | Register i  | country + `rg0` + i + `0` + site         |
//!
//! `site` is the five digit zero-padded identifier and `country` is lowercase.

use super::{Country, EndpointRole, SiteId};

pub fn resolve(site: SiteId, country: &Country, role: EndpointRole) -> String {
    let site = site.padded();
    match role {
        EndpointRole::Gateway => format!("dg{site}"),
        EndpointRole::BackOffice => format!("mws{site}"),
        EndpointRole::Register(idx) => format!("{}rg0{idx}0{site}", country.code()),
    }
}
