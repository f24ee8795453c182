//! Cross-crate tests for the netcheck engine, driven by a scripted transport.

pub mod util;

#[cfg(test)]
mod scanning;
