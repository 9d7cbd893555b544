//! Core types for Rolodex.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod customer;
pub mod email;
pub mod id;
pub mod phone;
pub mod query;

pub use customer::{CustomerRecord, Gender, Portrait, PostalAddress};
pub use email::{Email, EmailError};
pub use id::CustomerId;
pub use phone::{Phone, PhoneError};
pub use query::{ListQuery, SortKey};
