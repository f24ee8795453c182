use std::borrow::Cow;

use netcheck_common::config::SIMULATION_POOL;

/// Decides which address a transport actually probes for a requested endpoint.
pub trait AddressSelector: Send + Sync {
    fn select<'a>(&self, requested: &'a str) -> Cow<'a, str>;
}

/// Probes the requested address unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct Literal;

impl AddressSelector for Literal {
    fn select<'a>(&self, requested: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(requested)
    }
}

/// Ignores the requested address and picks one uniformly from a pool.
#[derive(Debug, Clone)]
pub struct SimulatedPool {
    pool: Vec<String>,
}

impl SimulatedPool {
    pub fn new(pool: Vec<String>) -> Self {
        Self { pool }
    }
}

impl Default for SimulatedPool {
    fn default() -> Self {
        Self::new(SIMULATION_POOL.iter().map(|addr| addr.to_string()).collect())
    }
}

impl AddressSelector for SimulatedPool {
    fn select<'a>(&self, requested: &'a str) -> Cow<'a, str> {
        if self.pool.is_empty() {
            return Cow::Borrowed(requested);
        }
        let idx: usize = rand::random_range(0..self.pool.len());
        Cow::Owned(self.pool[idx].clone())
    }
}

/// Always probes the same address.
#[derive(Debug, Clone)]
pub struct Fixed(pub String);

impl AddressSelector for Fixed {
    fn select<'a>(&self, _requested: &'a str) -> Cow<'a, str> {
        Cow::Owned(self.0.clone())
    }
}
