pub mod editor_content;
pub mod error;
pub mod ids;
pub mod script;

pub use editor_content::{CharacterDescriptor, EditorContent};
pub use error::DomainError;
pub use ids::ScriptId;
pub use script::{Script, ScriptDraft, ScriptFormat};
