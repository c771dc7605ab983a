//! Suggestion Service - AI-generated title suggestions
//!
//! The suggestion endpoint is an opaque generation service and its payload
//! shape has drifted before, so the response is decoded defensively: a
//! missing or non-list `titles` field is reported as "no usable
//! suggestions" (`Ok(None)`) rather than a hard failure.

use serde_json::Value;

use crate::application::api::Api;
use crate::application::dto::TitleSuggestionsRequest;
use crate::application::error::ServiceError;

#[derive(Clone)]
pub struct SuggestionService {
    api: Api,
}

impl SuggestionService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Request title suggestions for a synopsis.
    ///
    /// An empty synopsis is rejected locally; no request is issued.
    /// Returns `Ok(None)` when the service answered successfully but the
    /// payload held no usable list of titles.
    pub async fn suggest_titles(
        &self,
        synopsis: &str,
    ) -> Result<Option<Vec<String>>, ServiceError> {
        if synopsis.trim().is_empty() {
            return Err(ServiceError::Validation(
                "synopsis is required for title suggestions".to_string(),
            ));
        }

        let request = TitleSuggestionsRequest {
            synopsis: synopsis.to_string(),
        };
        let payload: Value = self.api.post("/scripts/title-suggestions", &request).await?;

        let titles: Vec<String> = match payload.get("titles").and_then(Value::as_array) {
            Some(values) => values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            None => return Ok(None),
        };

        if titles.is_empty() {
            Ok(None)
        } else {
            Ok(Some(titles))
        }
    }
}
