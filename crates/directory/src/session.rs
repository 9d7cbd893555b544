//! Directory session.
//!
//! Wires the list and editor coordinators over one shared client, and owns
//! the one cross-screen rule: a successful save refreshes the list exactly
//! once, so the list reflects the record the editor just wrote.

use crate::client::DirectoryClient;
use crate::config::DirectoryConfig;
use crate::coordinator::{EditorCoordinator, ListCoordinator, SubmitOutcome};

use rolodex_core::CustomerId;

/// The coordinators behind one set of CRM screens.
///
/// Cheap to clone; clones share the coordinators and the client's
/// connection pool.
#[derive(Clone)]
pub struct DirectorySession {
    list: ListCoordinator,
    editor: EditorCoordinator,
}

impl DirectorySession {
    /// Create a session over `client`.
    #[must_use]
    pub fn new(client: DirectoryClient, config: &DirectoryConfig) -> Self {
        Self {
            list: ListCoordinator::new(client.clone(), config),
            editor: EditorCoordinator::new(client),
        }
    }

    /// The customer list coordinator.
    #[must_use]
    pub fn list(&self) -> &ListCoordinator {
        &self.list
    }

    /// The record editor coordinator.
    #[must_use]
    pub fn editor(&self) -> &EditorCoordinator {
        &self.editor
    }

    /// Submit the editor draft, refreshing the list once on success.
    ///
    /// Invalid drafts and failed submissions leave the list untouched.
    pub async fn submit_draft(&self) -> SubmitOutcome {
        let outcome = self.editor.submit().await;
        if matches!(outcome, SubmitOutcome::Saved { .. }) {
            self.list.refresh().await;
        }
        outcome
    }

    /// Delete a record through the list coordinator.
    ///
    /// See [`ListCoordinator::delete_record`] for the confirmation
    /// contract.
    pub async fn delete_record(&self, id: &CustomerId, confirmed: bool) -> bool {
        self.list.delete_record(id, confirmed).await
    }
}
