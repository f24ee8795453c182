//! # Site Model
//!
//! A site is one retail location: a gateway, a back-office server and a
//! configurable number of registers, all addressed through the naming scheme in
//! [`address`].

pub mod address;
mod country;
mod endpoint;
mod id;
pub mod range;
mod status;

pub use country::{Country, CountryError};
pub use endpoint::{EndpointRole, ProbeResult};
pub use id::{SiteId, SiteIdError};
pub use status::{SiteStatus, StatusBuilder};

use crate::config::SiteDefaults;

/// The input tuple of every scan: which site, in which country, with how many registers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Site {
    pub id: SiteId,
    pub country: Country,
    pub registers: u32,
}

impl Site {
    pub fn new(id: SiteId, country: Country, registers: u32) -> Self {
        Self {
            id,
            country,
            registers,
        }
    }

    pub fn with_defaults(id: SiteId, defaults: &SiteDefaults) -> Self {
        Self::new(id, defaults.country.clone(), defaults.registers)
    }

    /// Every endpoint of the site: gateway, back-office, then registers in ascending order.
    pub fn endpoints(&self) -> impl Iterator<Item = EndpointRole> {
        let fixed = [EndpointRole::Gateway, EndpointRole::BackOffice];
        fixed
            .into_iter()
            .chain((1..=self.registers).map(EndpointRole::Register))
    }

    pub fn address(&self, role: EndpointRole) -> String {
        address::resolve(self.id, &self.country, role)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
