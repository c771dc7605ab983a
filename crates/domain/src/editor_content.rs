//! EditorContent - the structured bundle driving the rich-text editor
//!
//! Created by the remote service in response to a generation or fetch
//! request, held exclusively by the state store, mutated in place only
//! through explicit update actions, and discarded when a new script loads.

use serde::{Deserialize, Serialize};

/// The editor's working bundle: raw markup plus the derived lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorContent {
    /// Raw markup of the generated sample (the editor's source of truth)
    pub script_sample: String,
    /// Character names in order of narrative first appearance
    pub characters: Vec<String>,
    /// Scene labels in script order
    pub scenes: Vec<String>,
}

impl EditorContent {
    pub fn new(script_sample: String, characters: Vec<String>, scenes: Vec<String>) -> Self {
        Self {
            script_sample,
            characters,
            scenes,
        }
    }
}

/// A character referenced by name within a script's character list
///
/// Derived view, not persisted as its own entity: renaming a character is a
/// positional first-match replacement in the owning script's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDescriptor {
    pub name: String,
    pub description: String,
}
