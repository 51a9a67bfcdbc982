//! Shared runtime helpers for the product catalog crates.

pub mod utils;
