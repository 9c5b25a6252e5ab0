//! Shared building blocks for the product API crates.

pub mod types;
pub mod utils;
