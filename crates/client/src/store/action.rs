//! Action objects dispatched to the script reducer
//!
//! Every async operation produces exactly one of {pending, fulfilled,
//! rejected}; the fulfilled shape is operation-specific. The remaining
//! variants are local-only mutations that never touch the network.

use chrono::{DateTime, Utc};

use scriptwright_domain::{EditorContent, Script, ScriptId};

use super::state::StoreOperation;

#[derive(Debug, Clone)]
pub enum ScriptAction {
    /// An async operation started
    Pending(StoreOperation),
    /// An async operation failed; the message is user-facing
    Rejected {
        operation: StoreOperation,
        message: String,
    },

    // -- fulfilled transitions --
    /// fetch_scripts succeeded; replaces the collection wholesale
    ScriptsLoaded(Vec<Script>),
    /// fetch_script / view succeeded; refreshes one entry in place
    ScriptFetched(Script),
    /// submit_script succeeded; the created script joins the collection and
    /// its generated content becomes the editor bundle
    ScriptCreated {
        script: Script,
        editor_content: EditorContent,
    },
    /// update_script succeeded; the local copy is overwritten with the
    /// snapshot that was saved, stamped with the save time
    ScriptSaved {
        script: Script,
        saved_at: DateTime<Utc>,
    },
    /// delete_script succeeded
    ScriptDeleted(ScriptId),
    /// fetch_title_suggestions produced a usable list
    TitleSuggestionsLoaded(Vec<String>),
    /// fetch_title_suggestions answered without a usable list
    TitleSuggestionsUnusable,
    /// sample-script generation or editor fetch completed
    EditorContentLoaded(EditorContent),
    /// generate_character_description completed
    DescriptionGenerated(String),
    /// update_character succeeded remotely; rename the first matching
    /// entry in the script's character list
    CharacterRenamed {
        script_id: ScriptId,
        old_name: String,
        new_name: String,
    },

    // -- local-only mutations --
    /// Live-typing buffer update of the editor's raw markup
    EditorContentEdited(String),
    /// Append a script to the collection without a network call
    ScriptAdded(Script),
    /// Drop stale suggestions before a new request (or on dismiss)
    TitleSuggestionsCleared,
}
