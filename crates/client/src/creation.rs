//! Script creation wizard
//!
//! Two-step flow: step 1 picks the format variant, step 2 collects the
//! variant's fields. Submission stays disabled until the required fields
//! for the selected variant are non-empty; on success the wizard resets and
//! hands back the new script's id for navigation, on failure every field is
//! left intact so nothing the user typed is lost.

use scriptwright_domain::{ScriptDraft, ScriptFormat, ScriptId};

use crate::application::error::ServiceError;
use crate::store::ScriptStore;

/// The wizard's two steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Format,
    Details,
}

/// State machine backing the create-script dialog
#[derive(Debug, Clone, Default)]
pub struct CreationWizard {
    step: WizardStep,
    draft: ScriptDraft,
}

impl CreationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ScriptDraft {
        &self.draft
    }

    pub fn select_format(&mut self, format: ScriptFormat) {
        self.draft.format = Some(format);
    }

    /// Step 1 -> 2 requires a selected format.
    pub fn can_advance(&self) -> bool {
        self.draft.format.is_some()
    }

    pub fn next_step(&mut self) {
        if self.step == WizardStep::Format && self.can_advance() {
            self.step = WizardStep::Details;
        }
    }

    pub fn previous_step(&mut self) {
        self.step = WizardStep::Format;
    }

    // -- field setters for the details step --

    pub fn set_title(&mut self, title: &str) {
        self.draft.title = title.to_string();
    }

    pub fn set_synopsis(&mut self, synopsis: &str) {
        self.draft.synopsis = synopsis.to_string();
    }

    pub fn set_genre(&mut self, genre: &str) {
        self.draft.genre = genre.to_string();
    }

    pub fn set_content(&mut self, content: &str) {
        self.draft.content = content.to_string();
    }

    pub fn set_social_media(&mut self, social_media: &str) {
        self.draft.social_media = social_media.to_string();
    }

    /// Pick a suggested title from the suggestion popover.
    pub fn select_suggested_title(&mut self, title: &str) {
        self.draft.title = title.to_string();
    }

    /// Whether the submit button is enabled for the selected variant.
    pub fn can_submit(&self) -> bool {
        self.draft.validate().is_ok()
    }

    /// Submit through the store. Success resets the wizard and returns the
    /// created script's id; failure leaves all fields intact.
    pub async fn submit(&mut self, store: &ScriptStore) -> Result<ScriptId, ServiceError> {
        let id = store.submit_script(&self.draft).await?;
        *self = Self::new();
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    use crate::application::api::Api;
    use crate::ports::outbound::testing::{FixedClock, RecordingNotifier, ScriptedApi};
    use crate::ports::outbound::ApiError;

    fn make_store() -> (ScriptStore, Arc<ScriptedApi>) {
        let api = Arc::new(ScriptedApi::new());
        let store = ScriptStore::new(
            Api::new(api.clone()),
            Arc::new(RecordingNotifier::new()),
            Arc::new(FixedClock::default()),
        );
        (store, api)
    }

    #[test]
    fn feature_submission_requires_title_synopsis_genre() {
        let mut wizard = CreationWizard::new();
        assert!(!wizard.can_advance());

        wizard.select_format(ScriptFormat::Feature);
        wizard.next_step();
        assert_eq!(wizard.step(), WizardStep::Details);
        assert!(!wizard.can_submit());

        wizard.set_title("T");
        wizard.set_synopsis("S");
        assert!(!wizard.can_submit());

        wizard.set_genre("drama");
        assert!(wizard.can_submit());
    }

    #[test]
    fn short_submission_requires_title_platform_content() {
        let mut wizard = CreationWizard::new();
        wizard.select_format(ScriptFormat::Short);
        wizard.next_step();

        wizard.set_title("T");
        wizard.set_social_media("tiktok");
        assert!(!wizard.can_submit());

        wizard.set_content("INT. KITCHEN - DAY");
        assert!(wizard.can_submit());
    }

    #[tokio::test]
    async fn failed_submission_keeps_the_fields_intact() {
        let (store, api) = make_store();
        let mut wizard = CreationWizard::new();
        wizard.select_format(ScriptFormat::Feature);
        wizard.next_step();
        wizard.set_title("T");
        wizard.set_synopsis("S");
        wizard.set_genre("drama");

        api.push_response(Err(ApiError::Network("down".to_string())));
        wizard.submit(&store).await.expect_err("submission fails");

        assert_eq!(wizard.step(), WizardStep::Details);
        assert_eq!(wizard.draft().title, "T");
        assert_eq!(wizard.draft().synopsis, "S");
    }

    #[tokio::test]
    async fn successful_submission_resets_and_returns_the_id() {
        let (store, api) = make_store();
        let mut wizard = CreationWizard::new();
        wizard.select_format(ScriptFormat::Feature);
        wizard.next_step();
        wizard.set_title("T");
        wizard.set_synopsis("S");
        wizard.set_genre("drama");

        let id = scriptwright_domain::ScriptId::new();
        api.push_response(Ok(json!({"scriptSample": "# T", "characters": [], "scenes": []})));
        api.push_response(Ok(json!({
            "id": id.to_string(),
            "title": "T",
            "updatedAt": "2024-06-01T12:00:00Z",
        })));

        let created = wizard.submit(&store).await.expect("submission succeeds");
        assert_eq!(created, id);
        assert_eq!(wizard.step(), WizardStep::Format);
        assert!(wizard.draft().title.is_empty());
    }
}
