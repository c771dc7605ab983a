//! Pure reducer for script state
//!
//! The only code allowed to mutate [`ScriptState`]. No I/O, no clocks, no
//! randomness: everything time- or network-dependent arrives inside the
//! action.

use super::action::ScriptAction;
use super::state::{ScriptState, StoreOperation};

pub fn reduce(state: &mut ScriptState, action: ScriptAction) {
    match action {
        ScriptAction::Pending(operation) => {
            set_loading(state, operation, true);
        }
        ScriptAction::Rejected { operation, message } => {
            set_loading(state, operation, false);
            state.errors.insert(operation, message);
            state.last_failed = Some(operation);
        }

        ScriptAction::ScriptsLoaded(scripts) => {
            state.scripts = scripts;
            settle(state, StoreOperation::FetchScripts);
        }
        ScriptAction::ScriptFetched(script) => {
            match state.scripts.iter_mut().find(|s| s.id == script.id) {
                Some(existing) => *existing = script,
                None => state.scripts.push(script),
            }
            settle(state, StoreOperation::FetchScript);
        }
        ScriptAction::ScriptCreated {
            script,
            editor_content,
        } => {
            state.scripts.push(script);
            // A new script takes over the editor; stale transient output
            // from the previous script goes with the old bundle.
            state.editor_content = Some(editor_content);
            state.generated_description = None;
            settle(state, StoreOperation::SubmitScript);
        }
        ScriptAction::ScriptSaved { mut script, saved_at } => {
            script.updated_at = saved_at;
            if let Some(existing) = state.scripts.iter_mut().find(|s| s.id == script.id) {
                *existing = script;
            }
            settle(state, StoreOperation::UpdateScript);
        }
        ScriptAction::ScriptDeleted(id) => {
            state.scripts.retain(|script| script.id != id);
            settle(state, StoreOperation::DeleteScript);
        }

        ScriptAction::TitleSuggestionsLoaded(titles) => {
            state.title_suggestions = titles;
            settle(state, StoreOperation::FetchTitleSuggestions);
        }
        ScriptAction::TitleSuggestionsUnusable => {
            state.title_suggestions.clear();
            settle(state, StoreOperation::FetchTitleSuggestions);
        }

        ScriptAction::EditorContentLoaded(content) => {
            state.editor_content = Some(content);
            state.generated_description = None;
            settle(state, StoreOperation::FetchEditorContent);
        }
        ScriptAction::DescriptionGenerated(description) => {
            state.generated_description = Some(description);
            settle(state, StoreOperation::GenerateDescription);
        }
        ScriptAction::CharacterRenamed {
            script_id,
            old_name,
            new_name,
        } => {
            if let Some(script) = state.scripts.iter_mut().find(|s| s.id == script_id) {
                script.rename_character(&old_name, &new_name);
            }
            settle(state, StoreOperation::UpdateCharacter);
        }

        ScriptAction::EditorContentEdited(raw_markup) => {
            match state.editor_content.as_mut() {
                Some(content) => content.script_sample = raw_markup,
                // Typing into an editor with nothing loaded starts a
                // fresh bundle with empty character/scene lists.
                None => {
                    state.editor_content = Some(scriptwright_domain::EditorContent::new(
                        raw_markup,
                        Vec::new(),
                        Vec::new(),
                    ))
                }
            }
        }
        ScriptAction::ScriptAdded(script) => {
            state.scripts.push(script);
        }
        ScriptAction::TitleSuggestionsCleared => {
            state.title_suggestions.clear();
        }
    }
}

/// Clear the loading flag and any previous error for a completed operation.
fn settle(state: &mut ScriptState, operation: StoreOperation) {
    set_loading(state, operation, false);
    state.errors.remove(&operation);
    if state.last_failed == Some(operation) {
        state.last_failed = None;
    }
}

fn set_loading(state: &mut ScriptState, operation: StoreOperation, loading: bool) {
    match operation {
        StoreOperation::FetchScripts => state.fetching_scripts = loading,
        StoreOperation::FetchTitleSuggestions => state.fetching_title_suggestions = loading,
        StoreOperation::SubmitScript | StoreOperation::FetchEditorContent => {
            state.fetching_editor_content = loading
        }
        StoreOperation::UpdateScript => state.saving_script = loading,
        // Remaining operations are quick one-shots without a dedicated
        // spinner in the UI
        StoreOperation::GenerateDescription
        | StoreOperation::UpdateCharacter
        | StoreOperation::DeleteScript
        | StoreOperation::FetchScript => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use scriptwright_domain::{EditorContent, Script, ScriptId};

    fn script(title: &str) -> Script {
        Script {
            id: ScriptId::new(),
            title: title.to_string(),
            updated_at: Utc::now(),
            genre: None,
            synopsis: None,
            social_media: None,
            content: None,
            script_sample: None,
            characters: None,
            scenes: None,
        }
    }

    #[test]
    fn rejected_records_error_and_clears_flag() {
        let mut state = ScriptState::new();
        reduce(&mut state, ScriptAction::Pending(StoreOperation::FetchScripts));
        assert!(state.fetching_scripts);

        reduce(
            &mut state,
            ScriptAction::Rejected {
                operation: StoreOperation::FetchScripts,
                message: "boom".to_string(),
            },
        );
        assert!(!state.fetching_scripts);
        assert_eq!(state.error_for(StoreOperation::FetchScripts), Some("boom"));
        assert_eq!(state.last_error(), Some("boom"));
    }

    #[test]
    fn success_in_one_operation_keeps_another_operations_error() {
        let mut state = ScriptState::new();
        reduce(
            &mut state,
            ScriptAction::Rejected {
                operation: StoreOperation::UpdateScript,
                message: "save failed".to_string(),
            },
        );
        reduce(&mut state, ScriptAction::ScriptsLoaded(vec![script("A")]));

        assert_eq!(
            state.error_for(StoreOperation::UpdateScript),
            Some("save failed")
        );
        assert_eq!(state.scripts.len(), 1);
    }

    #[test]
    fn editing_without_loaded_content_starts_a_fresh_bundle() {
        let mut state = ScriptState::new();
        reduce(
            &mut state,
            ScriptAction::EditorContentEdited("# Draft".to_string()),
        );
        assert_eq!(
            state.editor_content,
            Some(EditorContent::new("# Draft".to_string(), vec![], vec![]))
        );
    }

    #[test]
    fn loading_a_script_discards_the_previous_transient_description() {
        let mut state = ScriptState::new();
        reduce(
            &mut state,
            ScriptAction::DescriptionGenerated("a loner".to_string()),
        );
        assert!(state.generated_description.is_some());

        reduce(
            &mut state,
            ScriptAction::EditorContentLoaded(EditorContent::default()),
        );
        assert!(state.generated_description.is_none());
    }

    #[test]
    fn saved_script_is_stamped_and_replaced_in_place() {
        let mut state = ScriptState::new();
        let original = script("Before");
        let id = original.id;
        reduce(&mut state, ScriptAction::ScriptAdded(original));

        let saved_at = Utc::now();
        let mut updated = script("After");
        updated.id = id;
        reduce(
            &mut state,
            ScriptAction::ScriptSaved {
                script: updated,
                saved_at,
            },
        );

        assert_eq!(state.scripts.len(), 1);
        assert_eq!(state.scripts[0].title, "After");
        assert_eq!(state.scripts[0].updated_at, saved_at);
    }
}
