//! Generation Service - AI-generated editor content
//!
//! Covers the three generation-backed endpoints: producing a sample script
//! for a new draft, fetching the stored editor content of an existing
//! script, and generating a character description from a free-text brief.
//! Generation itself is an opaque remote service.

use scriptwright_domain::{EditorContent, ScriptId};

use crate::application::api::Api;
use crate::application::dto::{
    EditorContentData, GenerateDescriptionRequest, GeneratedDescription, SampleScriptRequest,
};
use crate::application::error::ServiceError;

#[derive(Clone)]
pub struct GenerationService {
    api: Api,
}

impl GenerationService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Generate a sample script (markup + characters + scenes) for a draft.
    pub async fn generate_sample(
        &self,
        request: &SampleScriptRequest,
    ) -> Result<EditorContent, ServiceError> {
        let data: EditorContentData = self.api.post("/scripts/sample-script", request).await?;
        Ok(data.into())
    }

    /// Fetch the stored editor content of an existing script.
    pub async fn fetch_editor_content(&self, id: ScriptId) -> Result<EditorContent, ServiceError> {
        let data: EditorContentData = self.api.get(&format!("/scripts/editor/{id}")).await?;
        Ok(data.into())
    }

    /// Generate a character description from a free-text brief.
    pub async fn generate_description(&self, brief: &str) -> Result<String, ServiceError> {
        if brief.trim().is_empty() {
            return Err(ServiceError::Validation(
                "character brief is required to generate a description".to_string(),
            ));
        }

        let request = GenerateDescriptionRequest {
            individuality: brief.to_string(),
        };
        let data: GeneratedDescription = self.api.post("/scripts/generate-desc", &request).await?;
        Ok(data.description)
    }
}
