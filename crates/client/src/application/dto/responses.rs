//! Response payloads from the script service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use scriptwright_domain::{CharacterDescriptor, DomainError, EditorContent, Script, ScriptId};

/// A script as returned by /create, /list-scripts, and /view/{id}
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptData {
    pub id: String,
    pub title: String,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_media: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_sample: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenes: Option<Vec<String>>,
}

impl TryFrom<ScriptData> for Script {
    type Error = DomainError;

    fn try_from(data: ScriptData) -> Result<Self, Self::Error> {
        let id: ScriptId = data
            .id
            .parse()
            .map_err(|_| DomainError::InvalidId(data.id.clone()))?;
        Ok(Script {
            id,
            title: data.title,
            updated_at: data.updated_at,
            genre: data.genre,
            synopsis: data.synopsis,
            social_media: data.social_media,
            content: data.content,
            script_sample: data.script_sample,
            characters: data.characters,
            scenes: data.scenes,
        })
    }
}

impl From<Script> for ScriptData {
    fn from(script: Script) -> Self {
        Self {
            id: script.id.to_string(),
            title: script.title,
            updated_at: script.updated_at,
            genre: script.genre,
            synopsis: script.synopsis,
            social_media: script.social_media,
            content: script.content,
            script_sample: script.script_sample,
            characters: script.characters,
            scenes: script.scenes,
        }
    }
}

/// EditorContent as returned by /sample-script and /editor/{id}
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorContentData {
    pub script_sample: String,
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub scenes: Vec<String>,
}

impl From<EditorContentData> for EditorContent {
    fn from(data: EditorContentData) -> Self {
        EditorContent::new(data.script_sample, data.characters, data.scenes)
    }
}

impl From<EditorContent> for EditorContentData {
    fn from(content: EditorContent) -> Self {
        Self {
            script_sample: content.script_sample,
            characters: content.characters,
            scenes: content.scenes,
        }
    }
}

/// `{description}` payload from /generate-desc
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDescription {
    pub description: String,
}

/// Character name + description pair on the wire
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDescriptorData {
    pub name: String,
    pub description: String,
}

impl From<CharacterDescriptor> for CharacterDescriptorData {
    fn from(descriptor: CharacterDescriptor) -> Self {
        Self {
            name: descriptor.name,
            description: descriptor.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_data_round_trips_through_domain() {
        let id = ScriptId::new();
        let data = ScriptData {
            id: id.to_string(),
            title: "T".to_string(),
            updated_at: Utc::now(),
            genre: Some("drama".to_string()),
            synopsis: Some("S".to_string()),
            social_media: None,
            content: None,
            script_sample: None,
            characters: Some(vec!["Alice".to_string()]),
            scenes: None,
        };

        let script = Script::try_from(data.clone()).expect("valid id");
        assert_eq!(script.id, id);
        assert_eq!(ScriptData::from(script), data);
    }

    #[test]
    fn malformed_id_is_rejected() {
        let data = ScriptData {
            id: "not-a-uuid".to_string(),
            title: "T".to_string(),
            updated_at: Utc::now(),
            genre: None,
            synopsis: None,
            social_media: None,
            content: None,
            script_sample: None,
            characters: None,
            scenes: None,
        };
        assert!(Script::try_from(data).is_err());
    }

    #[test]
    fn editor_content_tolerates_missing_lists() {
        let json = serde_json::json!({ "scriptSample": "# T" });
        let data: EditorContentData =
            serde_json::from_value(json).expect("lists default to empty");
        assert!(data.characters.is_empty());
        assert!(data.scenes.is_empty());
    }
}
