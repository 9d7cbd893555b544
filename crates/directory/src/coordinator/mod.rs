//! Screen coordinators.
//!
//! Coordinators own the state behind a CRM screen and expose it as
//! immutable snapshots. The presentation layer renders snapshots and
//! forwards user intents back as operations; all Directory Service I/O
//! happens in here.

mod editor;
mod list;

pub use editor::{Draft, DraftField, EditorCoordinator, EditorMode, EditorSnapshot, SubmitOutcome};
pub use list::{FetchPhase, ListCoordinator, ListSnapshot};
