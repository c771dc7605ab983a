//! Editor save flow
//!
//! The editor view buffers keystrokes locally and only talks to the service
//! on an explicit save. This module is the state machine behind that:
//!
//! ```text
//! Idle -> Editing -> Saving -> Idle        (save succeeded)
//!                      \-> Error -> Editing (save failed; manual retry)
//! ```
//!
//! The unsaved buffer is never discarded on failure. Saving requires the
//! script's metadata to be loaded; there are no placeholder defaults
//! masking missing state.

use scriptwright_domain::{EditorContent, Script, ScriptId};

use crate::application::dto::UpdateScriptRequest;
use crate::application::error::ServiceError;
use crate::store::ScriptStore;

/// Save-flow status of the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorStatus {
    #[default]
    Idle,
    /// The buffer holds unsaved input
    Editing,
    /// A save request is in flight
    Saving,
    /// The last save failed; the buffer is intact and a retry is manual
    Error,
}

/// One editing session over a loaded script
pub struct EditorSession {
    script: Option<Script>,
    status: EditorStatus,
    /// Raw markup buffer; the single source for the next save
    buffer: String,
}

impl EditorSession {
    pub fn new() -> Self {
        Self {
            script: None,
            status: EditorStatus::Idle,
            buffer: String::new(),
        }
    }

    /// Begin editing a script whose editor content has been loaded.
    pub fn load(&mut self, script: Script, content: &EditorContent) {
        self.buffer = content.script_sample.clone();
        self.script = Some(script);
        self.status = EditorStatus::Idle;
    }

    pub fn status(&self) -> EditorStatus {
        self.status
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn script_id(&self) -> Option<ScriptId> {
        self.script.as_ref().map(|script| script.id)
    }

    /// Handle an input event: buffer the raw markup locally (through the
    /// store, so other views observe the live buffer) without any network
    /// call.
    pub fn handle_input(&mut self, store: &ScriptStore, raw_markup: &str) {
        self.buffer = raw_markup.to_string();
        store.update_editor_content(raw_markup);
        match self.status {
            EditorStatus::Idle | EditorStatus::Editing | EditorStatus::Error => {
                self.status = EditorStatus::Editing;
            }
            // Input while a save is in flight keeps the buffer current;
            // the status resolves when the save settles.
            EditorStatus::Saving => {}
        }
    }

    /// Explicit save: send the full current snapshot through the store.
    ///
    /// Fails validation when no script is loaded. On service failure the
    /// session moves to Error with the buffer untouched.
    pub async fn save(&mut self, store: &ScriptStore) -> Result<(), ServiceError> {
        let Some(script) = self.script.clone() else {
            return Err(ServiceError::Validation(
                "no script loaded; cannot save".to_string(),
            ));
        };

        let content = store.editor_content().unwrap_or_else(|| {
            EditorContent::new(self.buffer.clone(), Vec::new(), Vec::new())
        });

        let request = UpdateScriptRequest {
            title: script.title.clone(),
            synopsis: script.synopsis.clone(),
            genre: script.genre.clone(),
            content: script.content.clone(),
            social_media: script.social_media.clone(),
            script_sample: self.buffer.clone(),
            characters: content.characters,
            scenes: content.scenes,
        };

        self.status = EditorStatus::Saving;
        match store.update_script(script.id, request).await {
            Ok(()) => {
                self.status = EditorStatus::Idle;
                Ok(())
            }
            Err(e) => {
                self.status = EditorStatus::Error;
                Err(e)
            }
        }
    }

    /// Acknowledge a failed save and return to editing (manual retry path).
    pub fn resume_editing(&mut self) {
        if self.status == EditorStatus::Error {
            self.status = EditorStatus::Editing;
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
