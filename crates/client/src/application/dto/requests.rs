//! Request payloads for the script service

use serde::{Deserialize, Serialize};

use scriptwright_domain::{EditorContent, ScriptDraft};

use super::responses::CharacterDescriptorData;

/// POST /scripts/create
///
/// The merged payload: the user's draft plus the generated editor content
/// from the sample-script phase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScriptRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_sample: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenes: Option<Vec<String>>,
}

impl CreateScriptRequest {
    /// Merge a validated draft with the generated editor content.
    pub fn from_draft(draft: &ScriptDraft, generated: &EditorContent) -> Self {
        Self {
            title: draft.title.clone(),
            synopsis: non_empty(&draft.synopsis),
            genre: non_empty(&draft.genre),
            content: non_empty(&draft.content),
            social_media: non_empty(&draft.social_media),
            script_sample: Some(generated.script_sample.clone()),
            characters: Some(generated.characters.clone()),
            scenes: Some(generated.scenes.clone()),
        }
    }
}

/// PUT /scripts/update/{id}
///
/// Full-document overwrite, not a diff: the payload must carry the current
/// script sample, character list, and scene list snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScriptRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media: Option<String>,
    pub script_sample: String,
    pub characters: Vec<String>,
    pub scenes: Vec<String>,
}

/// POST /scripts/title-suggestions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleSuggestionsRequest {
    pub synopsis: String,
}

/// POST /scripts/sample-script
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleScriptRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl From<&ScriptDraft> for SampleScriptRequest {
    fn from(draft: &ScriptDraft) -> Self {
        Self {
            synopsis: non_empty(&draft.synopsis),
            genre: non_empty(&draft.genre),
            social_media: non_empty(&draft.social_media),
            content: non_empty(&draft.content),
        }
    }
}

/// POST /scripts/generate-desc
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDescriptionRequest {
    /// Free-text character brief driving the generation
    pub individuality: String,
}

/// PUT /scripts/update-char-details/{id}
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCharacterRequest {
    pub old_character_name: String,
    pub new_character_name: String,
    pub character_descriptions: Vec<CharacterDescriptorData>,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
