//! Rolodex Core - Shared domain types.
//!
//! This crate provides the customer-directory domain types used across the
//! Rolodex components:
//! - `directory` - Directory Service client and screen coordinators
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Customer records, newtype wrappers, and list query types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
