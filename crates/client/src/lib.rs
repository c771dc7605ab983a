//! Scriptwright client - script/editor state synchronization layer
//!
//! The client-side data layer of the screenwriting application: a
//! context-passed [`store::ScriptStore`] mediating every async operation
//! against the script service, the [`editor`] layer (markup parsing, caret
//! preservation, save flow), the [`creation`] wizard, and the
//! infrastructure adapters behind the outbound ports.
//!
//! The visual shell (layout, modals, routing) lives elsewhere and consumes
//! this crate; nothing here depends on a rendering framework.

pub mod application;
pub mod creation;
pub mod editor;
pub mod infrastructure;
pub mod ports;
pub mod store;

pub use creation::{CreationWizard, WizardStep};
pub use store::{ScriptStore, UpdateCharacterInput};
