//! Script entity - A screenplay tracked by the writing client
//!
//! A script is either a "feature" (long form, described by genre + synopsis)
//! or a "short" (social-media video, described by platform + raw content).
//! The remote service assigns the identifier; it is stable for the lifetime
//! of the script.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::ScriptId;

/// The two script formats the creation wizard offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptFormat {
    /// Feature film screenplay (genre + synopsis)
    Feature,
    /// Social-media video short (platform + raw content)
    Short,
}

impl std::fmt::Display for ScriptFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Feature => write!(f, "feature"),
            Self::Short => write!(f, "short"),
        }
    }
}

impl std::str::FromStr for ScriptFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "feature" => Ok(Self::Feature),
            "short" => Ok(Self::Short),
            other => Err(DomainError::validation(format!(
                "unknown script format: {other}"
            ))),
        }
    }
}

/// A screenplay as held in the client's collection
///
/// Plain data struct: any combination of optional fields is representable
/// because the remote service owns the canonical record. The feature/short
/// split is enforced at creation time by [`ScriptDraft::validate`], not by
/// the type system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub id: ScriptId,
    pub title: String,
    pub updated_at: DateTime<Utc>,
    /// Feature scripts: the selected genre
    pub genre: Option<String>,
    /// Feature scripts: the synopsis driving generation
    pub synopsis: Option<String>,
    /// Shorts: the targeted social-media platform
    pub social_media: Option<String>,
    /// Shorts: the raw script content the user supplied
    pub content: Option<String>,
    /// Generated sample in editor markup, if one has been produced
    pub script_sample: Option<String>,
    /// Character names in order of narrative first appearance
    pub characters: Option<Vec<String>>,
    /// Scene labels in script order
    pub scenes: Option<Vec<String>>,
}

impl Script {
    /// Rename the first character entry equal to `old_name`.
    ///
    /// The match is positional and first-only: duplicate names later in the
    /// list are left alone. Returns `true` when a rename happened.
    pub fn rename_character(&mut self, old_name: &str, new_name: &str) -> bool {
        let Some(characters) = self.characters.as_mut() else {
            return false;
        };
        match characters.iter().position(|name| name == old_name) {
            Some(index) => {
                characters[index] = new_name.to_string();
                true
            }
            None => false,
        }
    }

    /// Which format this script belongs to, judged from the populated fields.
    pub fn format(&self) -> ScriptFormat {
        if self.social_media.is_some() || self.content.is_some() {
            ScriptFormat::Short
        } else {
            ScriptFormat::Feature
        }
    }
}

/// Creation input collected by the wizard before the script exists remotely
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptDraft {
    pub format: Option<ScriptFormat>,
    pub title: String,
    pub synopsis: String,
    pub genre: String,
    pub content: String,
    pub social_media: String,
}

impl ScriptDraft {
    /// Validate the draft against its format's required fields.
    ///
    /// Feature: title, synopsis, genre. Short: title, social_media, content.
    /// Whitespace-only values count as empty.
    pub fn validate(&self) -> Result<ScriptFormat, DomainError> {
        let format = self
            .format
            .ok_or_else(|| DomainError::validation("script format not selected"))?;

        if self.title.trim().is_empty() {
            return Err(DomainError::validation("title is required"));
        }

        match format {
            ScriptFormat::Feature => {
                if self.synopsis.trim().is_empty() {
                    return Err(DomainError::validation(
                        "synopsis is required for a feature script",
                    ));
                }
                if self.genre.trim().is_empty() {
                    return Err(DomainError::validation(
                        "genre is required for a feature script",
                    ));
                }
            }
            ScriptFormat::Short => {
                if self.social_media.trim().is_empty() {
                    return Err(DomainError::validation(
                        "social media platform is required for a short",
                    ));
                }
                if self.content.trim().is_empty() {
                    return Err(DomainError::validation(
                        "script content is required for a short",
                    ));
                }
            }
        }

        Ok(format)
    }
}
