//! Script state - the single source of truth for script-related UI state

use std::collections::HashMap;

use scriptwright_domain::{EditorContent, Script};

/// The async operations the store performs
///
/// Used to scope loading flags and error messages per operation so an
/// unrelated success never clears (or masks) an earlier failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    FetchScripts,
    FetchTitleSuggestions,
    SubmitScript,
    FetchEditorContent,
    UpdateScript,
    GenerateDescription,
    UpdateCharacter,
    DeleteScript,
    FetchScript,
}

impl std::fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::FetchScripts => "fetch-scripts",
            Self::FetchTitleSuggestions => "fetch-title-suggestions",
            Self::SubmitScript => "submit-script",
            Self::FetchEditorContent => "fetch-editor-content",
            Self::UpdateScript => "update-script",
            Self::GenerateDescription => "generate-description",
            Self::UpdateCharacter => "update-character",
            Self::DeleteScript => "delete-script",
            Self::FetchScript => "fetch-script",
        };
        write!(f, "{name}")
    }
}

/// Script-related state, mutated only by the reducer
#[derive(Debug, Clone, Default)]
pub struct ScriptState {
    /// The user's script collection as last fetched
    pub scripts: Vec<Script>,
    /// Ephemeral title suggestions; cleared before each new request
    pub title_suggestions: Vec<String>,
    /// The editor's working bundle for the currently loaded script
    pub editor_content: Option<EditorContent>,
    /// Transient output of the last character-description generation,
    /// consumed by the character-edit flow
    pub generated_description: Option<String>,
    /// Per-operation loading flags
    pub fetching_scripts: bool,
    pub fetching_title_suggestions: bool,
    pub fetching_editor_content: bool,
    pub saving_script: bool,
    /// Latest error message per operation
    pub errors: HashMap<StoreOperation, String>,
    /// The operation whose error was recorded most recently
    pub last_failed: Option<StoreOperation>,
}

impl ScriptState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest error for a specific operation
    pub fn error_for(&self, operation: StoreOperation) -> Option<&str> {
        self.errors.get(&operation).map(String::as_str)
    }

    /// The most recently recorded error, if any
    pub fn last_error(&self) -> Option<&str> {
        self.last_failed
            .and_then(|operation| self.error_for(operation))
    }

    /// Look up a script in the collection by id
    pub fn script(&self, id: scriptwright_domain::ScriptId) -> Option<&Script> {
        self.scripts.iter().find(|script| script.id == id)
    }
}
