use std::collections::BTreeMap;
use std::fmt;

use super::{Country, EndpointRole, ProbeResult, Site, SiteId};

/// Aggregated verdict for one site, built from a single probe pass.
///
/// A site is *hard down* when its gateway answers but every register is
/// unreachable: the store has connectivity yet cannot transact. A site with zero
/// registers and a reachable gateway therefore counts as hard down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteStatus {
    site: Site,
    gateway: ProbeResult,
    back_office: ProbeResult,
    registers: BTreeMap<u32, ProbeResult>,
    crashed_registers: u32,
    hard_down: bool,
}

/// Collects probe results in any order and seals them into a [`SiteStatus`].
///
/// Endpoints that never get a result stay [`ProbeResult::Unreachable`].
#[derive(Debug)]
pub struct StatusBuilder {
    site: Site,
    gateway: ProbeResult,
    back_office: ProbeResult,
    registers: BTreeMap<u32, ProbeResult>,
}

impl StatusBuilder {
    pub fn new(site: Site) -> Self {
        let registers = (1..=site.registers)
            .map(|idx| (idx, ProbeResult::Unreachable))
            .collect();
        Self {
            site,
            gateway: ProbeResult::Unreachable,
            back_office: ProbeResult::Unreachable,
            registers,
        }
    }

    /// Stores the result for `role`. Returns `false` for a register index the site does not have.
    pub fn record(&mut self, role: EndpointRole, result: ProbeResult) -> bool {
        match role {
            EndpointRole::Gateway => self.gateway = result,
            EndpointRole::BackOffice => self.back_office = result,
            EndpointRole::Register(idx) => match self.registers.get_mut(&idx) {
                Some(slot) => *slot = result,
                None => return false,
            },
        }
        true
    }

    pub fn build(self) -> SiteStatus {
        let crashed_registers = self
            .registers
            .values()
            .filter(|result| !result.is_reachable())
            .count() as u32;
        let hard_down = self.gateway.is_reachable() && crashed_registers == self.site.registers;

        SiteStatus {
            site: self.site,
            gateway: self.gateway,
            back_office: self.back_office,
            registers: self.registers,
            crashed_registers,
            hard_down,
        }
    }
}

impl SiteStatus {
    pub fn builder(site: Site) -> StatusBuilder {
        StatusBuilder::new(site)
    }

    pub fn id(&self) -> SiteId {
        self.site.id
    }

    pub fn country(&self) -> &Country {
        &self.site.country
    }

    pub fn register_count(&self) -> u32 {
        self.site.registers
    }

    pub fn gateway(&self) -> ProbeResult {
        self.gateway
    }

    pub fn back_office(&self) -> ProbeResult {
        self.back_office
    }

    /// Register results keyed by index, ascending.
    pub fn registers(&self) -> &BTreeMap<u32, ProbeResult> {
        &self.registers
    }

    pub fn register(&self, idx: u32) -> Option<ProbeResult> {
        self.registers.get(&idx).copied()
    }

    pub fn crashed_registers(&self) -> u32 {
        self.crashed_registers
    }

    pub fn is_hard_down(&self) -> bool {
        self.hard_down
    }

    /// Report fields in their fixed order: store, gateway, registers, back-office, verdict.
    pub fn report_lines(&self) -> Vec<(String, String)> {
        let mut lines = Vec::with_capacity(self.registers.len() + 4);
        lines.push(("STORE".to_string(), self.site.id.padded()));
        lines.push((EndpointRole::Gateway.label(), self.gateway.to_string()));
        for (idx, result) in &self.registers {
            lines.push((EndpointRole::Register(*idx).label(), result.to_string()));
        }
        lines.push((EndpointRole::BackOffice.label(), self.back_office.to_string()));
        let verdict = if self.hard_down { "YES" } else { "NO" };
        lines.push(("H.Down".to_string(), verdict.to_string()));
        lines
    }
}

impl fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.report_lines() {
            writeln!(f, "{label:<7}| {value}")?;
        }
        Ok(())
    }
}
