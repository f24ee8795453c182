//! # Netcheck Core
//!
//! The probing engine: [`network`] classifies single endpoints, [`prober`] turns a
//! site's endpoints into a [`netcheck_common::site::SiteStatus`], and [`scanner`]
//! drives the prober over single sites, ranges and bulk sheets.

pub mod network;
pub mod prober;
pub mod scanner;
