//! Rolodex Directory - Directory Service client and screen coordinators.
//!
//! This crate is the headless core of the Rolodex CRM screens. It talks to
//! the remote Directory Service (the system of record for customer data)
//! over HTTP+JSON and owns the state the presentation layer renders:
//!
//! - [`client::DirectoryClient`] - thin REST client for `/api/users`
//! - [`coordinator::ListCoordinator`] - searchable, paginated customer list
//! - [`coordinator::EditorCoordinator`] - single-record create/edit draft
//! - [`session::DirectorySession`] - wires the two coordinators together
//!
//! # Architecture
//!
//! - Explicitly constructed, injectable client - no ambient singleton
//! - Coordinators expose immutable state snapshots; the presentation layer
//!   renders snapshots and forwards user intents back as operations
//! - Transport failures never escape a coordinator as a panic: they are
//!   captured as human-readable messages, leaving prior valid state intact
//!
//! # Example
//!
//! ```rust,ignore
//! use rolodex_directory::{client::DirectoryClient, config::DirectoryConfig,
//!     session::DirectorySession};
//!
//! let config = DirectoryConfig::from_env()?;
//! let client = DirectoryClient::new(&config)?;
//! let session = DirectorySession::new(client, &config);
//!
//! session.list().refresh().await;
//! let snapshot = session.list().snapshot();
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod config;
pub mod coordinator;
pub mod session;

pub use client::{DirectoryClient, DirectoryError};
pub use config::{ConfigError, DirectoryConfig};
pub use coordinator::{
    Draft, DraftField, EditorCoordinator, EditorMode, EditorSnapshot, FetchPhase, ListCoordinator,
    ListSnapshot, SubmitOutcome,
};
pub use session::DirectorySession;
