//! # Netcheck Common
//!
//! Shared vocabulary for the netcheck workspace.
//!
//! * **[`site`]**: the site topology, per-endpoint probe results and the aggregated
//!   [`site::SiteStatus`] verdict.
//! * **[`sheet`]**: parsing of the comma-separated bulk input.
//! * **[`config`]**: immutable run configuration handed to the probing engine.
//!
//! The logging macros exported here wrap `tracing` so that library crates can report
//! progress without knowing anything about the terminal front end.

pub mod config;
pub mod sheet;
pub mod site;

#[doc(hidden)]
pub use tracing;

/// Target used by [`success!`] so the formatter can tell a success apart from plain info.
pub const SUCCESS_TARGET: &str = "netcheck::success";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "netcheck::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}
