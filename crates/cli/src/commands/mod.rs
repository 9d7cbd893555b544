//! CLI command implementations.

pub mod customers;
