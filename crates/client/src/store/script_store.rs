//! ScriptStore - the context-passed store mediating all async operations
//!
//! Views dispatch operations here and read state snapshots back; they never
//! mutate state directly. Each async operation produces exactly one of
//! {pending, fulfilled, rejected} reducer transitions plus a transient
//! notification. State is only ever mutated inside [`ScriptStore::apply`],
//! and the lock is never held across an await point, so concurrent distinct
//! operations interleave safely. A superseding request of the same kind is
//! last-resolved-wins; there is no cancellation.

use std::sync::{Arc, RwLock, RwLockWriteGuard};

use scriptwright_domain::{EditorContent, Script, ScriptDraft, ScriptId};

use crate::application::api::Api;
use crate::application::dto::{
    CharacterDescriptorData, CreateScriptRequest, SampleScriptRequest, UpdateCharacterRequest,
    UpdateScriptRequest,
};
use crate::application::error::ServiceError;
use crate::application::services::{
    CharacterService, GenerationService, ScriptService, SuggestionService,
};
use crate::ports::outbound::{Notification, Notifier, TimeProvider};

use super::action::ScriptAction;
use super::reducer::reduce;
use super::state::{ScriptState, StoreOperation};

/// Input for a character rename + description update
#[derive(Debug, Clone)]
pub struct UpdateCharacterInput {
    pub script_id: ScriptId,
    pub old_name: String,
    pub new_name: String,
    pub description: Option<String>,
}

pub struct ScriptStore {
    state: RwLock<ScriptState>,
    scripts: ScriptService,
    suggestions: SuggestionService,
    generation: GenerationService,
    characters: CharacterService,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn TimeProvider>,
}

impl ScriptStore {
    pub fn new(api: Api, notifier: Arc<dyn Notifier>, clock: Arc<dyn TimeProvider>) -> Self {
        Self {
            state: RwLock::new(ScriptState::new()),
            scripts: ScriptService::new(api.clone()),
            suggestions: SuggestionService::new(api.clone()),
            generation: GenerationService::new(api.clone()),
            characters: CharacterService::new(api),
            notifier,
            clock,
        }
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    /// Read the current state under the lock.
    pub fn with_state<R>(&self, f: impl FnOnce(&ScriptState) -> R) -> R {
        let guard = match self.state.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&guard)
    }

    /// Snapshot of the current editor bundle, if a script is loaded.
    pub fn editor_content(&self) -> Option<EditorContent> {
        self.with_state(|state| state.editor_content.clone())
    }

    /// Snapshot of the current title suggestions.
    pub fn title_suggestions(&self) -> Vec<String> {
        self.with_state(|state| state.title_suggestions.clone())
    }

    // -------------------------------------------------------------------------
    // Async operations
    // -------------------------------------------------------------------------

    /// Replace the script collection from the service.
    ///
    /// On failure the prior collection is preserved and the error recorded.
    pub async fn fetch_scripts(&self) -> Result<(), ServiceError> {
        self.start(StoreOperation::FetchScripts, "Fetching scripts...");
        match self.scripts.list().await {
            Ok(scripts) => {
                self.apply(ScriptAction::ScriptsLoaded(scripts));
                self.notifier
                    .notify(Notification::success("Scripts retrieved successfully"));
                Ok(())
            }
            Err(e) => Err(self.fail(StoreOperation::FetchScripts, e)),
        }
    }

    /// Request title suggestions for a synopsis.
    ///
    /// An empty synopsis is rejected before any network call. Prior
    /// suggestions are cleared before the request so stale titles are never
    /// displayed alongside a spinner.
    pub async fn fetch_title_suggestions(&self, synopsis: &str) -> Result<(), ServiceError> {
        if synopsis.trim().is_empty() {
            return Err(self.fail(
                StoreOperation::FetchTitleSuggestions,
                ServiceError::Validation("synopsis is required for title suggestions".to_string()),
            ));
        }

        self.apply(ScriptAction::TitleSuggestionsCleared);
        self.start(
            StoreOperation::FetchTitleSuggestions,
            "Fetching title suggestions...",
        );
        match self.suggestions.suggest_titles(synopsis).await {
            Ok(Some(titles)) => {
                self.apply(ScriptAction::TitleSuggestionsLoaded(titles));
                self.notifier.notify(Notification::success(
                    "Title suggestions fetched successfully",
                ));
                Ok(())
            }
            Ok(None) => {
                self.apply(ScriptAction::TitleSuggestionsUnusable);
                self.notifier
                    .notify(Notification::warning("No usable title suggestions"));
                Ok(())
            }
            Err(e) => Err(self.fail(StoreOperation::FetchTitleSuggestions, e)),
        }
    }

    /// Create a script: generate editor content for the draft, then create
    /// the script with the merged payload.
    ///
    /// If the generation phase fails the operation fails whole; no partial
    /// script is added client-side.
    pub async fn submit_script(&self, draft: &ScriptDraft) -> Result<ScriptId, ServiceError> {
        if let Err(e) = draft.validate() {
            return Err(self.fail(StoreOperation::SubmitScript, e.into()));
        }

        self.start(StoreOperation::SubmitScript, "Submitting script...");

        let generated = match self
            .generation
            .generate_sample(&SampleScriptRequest::from(draft))
            .await
        {
            Ok(content) => content,
            Err(e) => return Err(self.fail(StoreOperation::SubmitScript, e)),
        };

        let request = CreateScriptRequest::from_draft(draft, &generated);
        match self.scripts.create(&request).await {
            Ok(script) => {
                let id = script.id;
                self.apply(ScriptAction::ScriptCreated {
                    script,
                    editor_content: generated,
                });
                self.notifier
                    .notify(Notification::success("Script created successfully!"));
                Ok(id)
            }
            Err(e) => Err(self.fail(StoreOperation::SubmitScript, e)),
        }
    }

    /// Load an existing script's stored sample/characters/scenes into the
    /// editor bundle.
    pub async fn fetch_sample_script(&self, id: ScriptId) -> Result<(), ServiceError> {
        self.start(
            StoreOperation::FetchEditorContent,
            "Loading editor content...",
        );
        match self.generation.fetch_editor_content(id).await {
            Ok(content) => {
                self.apply(ScriptAction::EditorContentLoaded(content));
                self.notifier
                    .notify(Notification::success("Editor content loaded"));
                Ok(())
            }
            Err(e) => Err(self.fail(StoreOperation::FetchEditorContent, e)),
        }
    }

    /// Full-document save. The request must carry the complete current
    /// snapshot (sample, characters, scenes): the service overwrites.
    pub async fn update_script(
        &self,
        id: ScriptId,
        request: UpdateScriptRequest,
    ) -> Result<(), ServiceError> {
        self.start(StoreOperation::UpdateScript, "Saving script...");
        match self.scripts.update(id, &request).await {
            Ok(()) => {
                let saved_at = self.clock.now_utc();
                let script = self.merged_script(id, &request, saved_at);
                self.apply(ScriptAction::ScriptSaved { script, saved_at });
                self.notifier
                    .notify(Notification::success("Script updated successfully"));
                Ok(())
            }
            Err(e) => Err(self.fail(StoreOperation::UpdateScript, e)),
        }
    }

    /// Local-only mutation of the editor's raw markup buffer. No network
    /// call; this is the live-typing buffer ahead of an explicit save.
    pub fn update_editor_content(&self, raw_markup: &str) {
        self.apply(ScriptAction::EditorContentEdited(raw_markup.to_string()));
    }

    /// Generate a character description from a free-text brief.
    ///
    /// The result lands in the transient `generated_description` field for
    /// the character-edit flow; no script's character list is touched.
    pub async fn generate_character_description(
        &self,
        brief: &str,
    ) -> Result<String, ServiceError> {
        if brief.trim().is_empty() {
            return Err(self.fail(
                StoreOperation::GenerateDescription,
                ServiceError::Validation(
                    "character brief is required to generate a description".to_string(),
                ),
            ));
        }

        self.start(
            StoreOperation::GenerateDescription,
            "Generating character description...",
        );
        match self.generation.generate_description(brief).await {
            Ok(description) => {
                self.apply(ScriptAction::DescriptionGenerated(description.clone()));
                self.notifier
                    .notify(Notification::success("Character description generated"));
                Ok(description)
            }
            Err(e) => Err(self.fail(StoreOperation::GenerateDescription, e)),
        }
    }

    /// Persist a character rename and mirror it into the in-memory
    /// collection (first matching entry only).
    ///
    /// When the script or the old name is not present locally, the
    /// collection stays untouched and a warning is surfaced - the remote
    /// update still succeeded, but the local view had nothing to rename.
    pub async fn update_character(&self, input: UpdateCharacterInput) -> Result<(), ServiceError> {
        let request = UpdateCharacterRequest {
            old_character_name: input.old_name.clone(),
            new_character_name: input.new_name.clone(),
            character_descriptions: input
                .description
                .map(|description| {
                    vec![CharacterDescriptorData {
                        name: input.new_name.clone(),
                        description,
                    }]
                })
                .unwrap_or_default(),
        };

        self.start(
            StoreOperation::UpdateCharacter,
            "Updating character details...",
        );
        match self.characters.update_details(input.script_id, &request).await {
            Ok(()) => {
                let known_locally = self.with_state(|state| {
                    state.script(input.script_id).is_some_and(|script| {
                        script
                            .characters
                            .as_ref()
                            .is_some_and(|characters| characters.contains(&input.old_name))
                    })
                });
                self.apply(ScriptAction::CharacterRenamed {
                    script_id: input.script_id,
                    old_name: input.old_name.clone(),
                    new_name: input.new_name.clone(),
                });
                if known_locally {
                    self.notifier
                        .notify(Notification::success("Character details updated"));
                } else {
                    self.notifier.notify(Notification::warning(format!(
                        "Character '{}' not found in the loaded script",
                        input.old_name
                    )));
                }
                Ok(())
            }
            Err(e) => Err(self.fail(StoreOperation::UpdateCharacter, e)),
        }
    }

    /// Delete a script and drop it from the collection.
    pub async fn delete_script(&self, id: ScriptId) -> Result<(), ServiceError> {
        self.start(StoreOperation::DeleteScript, "Deleting script...");
        match self.scripts.delete(id).await {
            Ok(()) => {
                self.apply(ScriptAction::ScriptDeleted(id));
                self.notifier
                    .notify(Notification::success("Script deleted successfully"));
                Ok(())
            }
            Err(e) => Err(self.fail(StoreOperation::DeleteScript, e)),
        }
    }

    /// Refresh a single script from the service.
    pub async fn fetch_script(&self, id: ScriptId) -> Result<(), ServiceError> {
        self.start(StoreOperation::FetchScript, "Loading script...");
        match self.scripts.view(id).await {
            Ok(script) => {
                self.apply(ScriptAction::ScriptFetched(script));
                self.notifier
                    .notify(Notification::success("Script retrieved successfully"));
                Ok(())
            }
            Err(e) => Err(self.fail(StoreOperation::FetchScript, e)),
        }
    }

    /// Append a script locally without a network call.
    pub fn add_script(&self, script: Script) {
        self.apply(ScriptAction::ScriptAdded(script));
    }

    /// Install an editor bundle that arrived by another path (e.g. carried
    /// on a freshly viewed script) without a dedicated fetch.
    pub fn set_editor_content(&self, content: EditorContent) {
        self.apply(ScriptAction::EditorContentLoaded(content));
    }

    /// Drop the current title suggestions.
    pub fn clear_title_suggestions(&self) {
        self.apply(ScriptAction::TitleSuggestionsCleared);
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Apply an action to the state. The only mutation point.
    fn apply(&self, action: ScriptAction) {
        reduce(&mut self.write_state(), action);
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ScriptState> {
        match self.state.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn start(&self, operation: StoreOperation, message: &str) {
        self.notifier.notify(Notification::pending(message));
        self.apply(ScriptAction::Pending(operation));
    }

    fn fail(&self, operation: StoreOperation, error: ServiceError) -> ServiceError {
        let message = error.to_string();
        tracing::warn!(%operation, %message, "store operation failed");
        self.apply(ScriptAction::Rejected {
            operation,
            message: message.clone(),
        });
        self.notifier.notify(Notification::error(message));
        error
    }

    /// Build the local copy of a saved script: the existing entry (if any)
    /// overwritten with the snapshot that was sent to the service.
    fn merged_script(
        &self,
        id: ScriptId,
        request: &UpdateScriptRequest,
        saved_at: chrono::DateTime<chrono::Utc>,
    ) -> Script {
        let base = self.with_state(|state| state.script(id).cloned());
        let mut script = base.unwrap_or(Script {
            id,
            title: String::new(),
            updated_at: saved_at,
            genre: None,
            synopsis: None,
            social_media: None,
            content: None,
            script_sample: None,
            characters: None,
            scenes: None,
        });
        script.title = request.title.clone();
        script.genre = request.genre.clone();
        script.synopsis = request.synopsis.clone();
        script.content = request.content.clone();
        script.social_media = request.social_media.clone();
        script.script_sample = Some(request.script_sample.clone());
        script.characters = Some(request.characters.clone());
        script.scenes = Some(request.scenes.clone());
        script
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::ports::outbound::testing::{FixedClock, RecordingNotifier, ScriptedApi};
    use crate::ports::outbound::{ApiError, NotificationKind};
    use scriptwright_domain::ScriptFormat;

    fn make_store() -> (ScriptStore, Arc<ScriptedApi>, Arc<RecordingNotifier>) {
        let api = Arc::new(ScriptedApi::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let store = ScriptStore::new(
            Api::new(api.clone()),
            notifier.clone(),
            Arc::new(FixedClock::default()),
        );
        (store, api, notifier)
    }

    fn script_json(id: &str, title: &str) -> Value {
        json!({
            "id": id,
            "title": title,
            "updatedAt": "2024-06-01T12:00:00Z",
            "genre": "drama",
            "synopsis": "S",
            "characters": ["Alice", "Bob"],
            "scenes": ["INT. LAB - NIGHT"],
        })
    }

    fn existing_script() -> Script {
        Script {
            id: ScriptId::new(),
            title: "Existing".to_string(),
            updated_at: Utc::now(),
            genre: Some("drama".to_string()),
            synopsis: Some("S".to_string()),
            social_media: None,
            content: None,
            script_sample: None,
            characters: Some(vec!["Alice".to_string(), "Bob".to_string()]),
            scenes: None,
        }
    }

    fn feature_draft() -> ScriptDraft {
        ScriptDraft {
            format: Some(ScriptFormat::Feature),
            title: "T".to_string(),
            synopsis: "S".to_string(),
            genre: "drama".to_string(),
            ..ScriptDraft::default()
        }
    }

    #[tokio::test]
    async fn fetch_scripts_replaces_the_collection() {
        let (store, api, _) = make_store();
        let id = ScriptId::new();
        api.push_response(Ok(json!([script_json(&id.to_string(), "A")])));

        store.fetch_scripts().await.expect("fetch succeeds");

        store.with_state(|state| {
            assert_eq!(state.scripts.len(), 1);
            assert_eq!(state.scripts[0].id, id);
            assert!(!state.fetching_scripts);
        });
    }

    #[tokio::test]
    async fn failed_fetch_preserves_the_prior_collection() {
        let (store, api, _) = make_store();
        let existing = existing_script();
        store.add_script(existing.clone());
        api.push_response(Err(ApiError::Status {
            status: 500,
            message: "internal error".to_string(),
        }));

        let err = store.fetch_scripts().await.expect_err("fetch fails");
        assert!(matches!(err, ServiceError::Api(ApiError::Status { status: 500, .. })));

        store.with_state(|state| {
            assert_eq!(state.scripts, vec![existing.clone()]);
            assert!(!state.fetching_scripts);
            assert!(state.error_for(StoreOperation::FetchScripts).is_some());
        });
    }

    #[tokio::test]
    async fn empty_synopsis_issues_no_network_call() {
        let (store, api, _) = make_store();

        let err = store
            .fetch_title_suggestions("   ")
            .await
            .expect_err("rejected client-side");
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn suggestions_are_cleared_before_the_request() {
        let (store, api, _) = make_store();
        api.push_response(Ok(json!({"titles": ["First"]})));
        store
            .fetch_title_suggestions("a synopsis")
            .await
            .expect("first fetch");
        assert_eq!(store.title_suggestions(), vec!["First"]);

        // Second request fails mid-flight: the stale titles must already
        // be gone.
        api.push_response(Err(ApiError::Network("down".to_string())));
        let _ = store.fetch_title_suggestions("another synopsis").await;
        assert!(store.title_suggestions().is_empty());
    }

    #[tokio::test]
    async fn unusable_suggestion_payload_is_a_warning_not_an_error() {
        let (store, api, notifier) = make_store();
        api.push_response(Ok(json!({"unexpected": "shape"})));

        store
            .fetch_title_suggestions("a synopsis")
            .await
            .expect("soft outcome");

        store.with_state(|state| {
            assert!(state.title_suggestions.is_empty());
            assert!(state
                .error_for(StoreOperation::FetchTitleSuggestions)
                .is_none());
        });
        let kinds: Vec<NotificationKind> = notifier
            .notifications()
            .iter()
            .map(|n| n.kind)
            .collect();
        assert!(kinds.contains(&NotificationKind::Warning));
        assert!(!kinds.contains(&NotificationKind::Error));
    }

    #[tokio::test]
    async fn submit_script_generates_then_creates_with_merged_payload() {
        let (store, api, _) = make_store();
        api.push_response(Ok(json!({
            "scriptSample": "# T\nINT. LAB - NIGHT",
            "characters": ["Mara"],
            "scenes": ["INT. LAB - NIGHT"],
        })));
        let id = ScriptId::new();
        api.push_response(Ok(script_json(&id.to_string(), "T")));

        let created = store
            .submit_script(&feature_draft())
            .await
            .expect("submit succeeds");
        assert_eq!(created, id);

        let requests = api.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/scripts/sample-script");
        assert_eq!(requests[1].method, "POST");
        assert_eq!(requests[1].path, "/scripts/create");

        let create_body = requests[1].body.as_ref().expect("create has a body");
        assert_eq!(create_body["title"], "T");
        assert_eq!(create_body["scriptSample"], "# T\nINT. LAB - NIGHT");
        assert_eq!(create_body["characters"], json!(["Mara"]));

        store.with_state(|state| {
            assert_eq!(state.scripts.len(), 1);
            assert_eq!(
                state.editor_content.as_ref().map(|c| c.characters.clone()),
                Some(vec!["Mara".to_string()])
            );
        });
    }

    #[tokio::test]
    async fn failed_generation_creates_no_script() {
        let (store, api, _) = make_store();
        api.push_response(Err(ApiError::Status {
            status: 502,
            message: "generator offline".to_string(),
        }));

        store
            .submit_script(&feature_draft())
            .await
            .expect_err("submit fails");

        assert_eq!(api.requests().len(), 1, "no create call after failure");
        store.with_state(|state| {
            assert!(state.scripts.is_empty());
            assert!(!state.fetching_editor_content);
        });
    }

    #[tokio::test]
    async fn invalid_draft_is_rejected_before_any_request() {
        let (store, api, _) = make_store();
        let draft = ScriptDraft {
            format: Some(ScriptFormat::Feature),
            title: "T".to_string(),
            ..ScriptDraft::default()
        };

        let err = store.submit_script(&draft).await.expect_err("invalid");
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn update_character_renames_first_match() {
        let (store, api, notifier) = make_store();
        let script = existing_script();
        let id = script.id;
        store.add_script(script);
        api.push_response(Ok(Value::Null));

        store
            .update_character(UpdateCharacterInput {
                script_id: id,
                old_name: "Bob".to_string(),
                new_name: "Robert".to_string(),
                description: Some("a reformed cartographer".to_string()),
            })
            .await
            .expect("update succeeds");

        store.with_state(|state| {
            let script = state.script(id).expect("script present");
            assert_eq!(
                script.characters,
                Some(vec!["Alice".to_string(), "Robert".to_string()])
            );
        });
        assert!(notifier
            .notifications()
            .iter()
            .any(|n| n.kind == NotificationKind::Success));
    }

    #[tokio::test]
    async fn update_character_with_unknown_name_warns_and_leaves_state() {
        let (store, api, notifier) = make_store();
        let script = existing_script();
        let id = script.id;
        store.add_script(script.clone());
        api.push_response(Ok(Value::Null));

        store
            .update_character(UpdateCharacterInput {
                script_id: id,
                old_name: "Carol".to_string(),
                new_name: "Caroline".to_string(),
                description: None,
            })
            .await
            .expect("remote update still succeeds");

        store.with_state(|state| {
            assert_eq!(state.script(id), Some(&script));
        });
        assert!(notifier
            .notifications()
            .iter()
            .any(|n| n.kind == NotificationKind::Warning));
    }

    #[tokio::test]
    async fn update_editor_content_is_local_only() {
        let (store, api, _) = make_store();
        store.update_editor_content("# Draft in progress");

        assert!(api.requests().is_empty());
        assert_eq!(
            store.editor_content().map(|c| c.script_sample),
            Some("# Draft in progress".to_string())
        );
    }

    #[tokio::test]
    async fn generated_description_lands_in_the_transient_field() {
        let (store, api, _) = make_store();
        api.push_response(Ok(json!({"description": "keeps maps of dead cities"})));

        let description = store
            .generate_character_description("a cartographer")
            .await
            .expect("generation succeeds");
        assert_eq!(description, "keeps maps of dead cities");

        store.with_state(|state| {
            assert_eq!(
                state.generated_description.as_deref(),
                Some("keeps maps of dead cities")
            );
            assert!(state.scripts.is_empty(), "no script list involvement");
        });
    }

    #[tokio::test]
    async fn delete_script_removes_the_entry() {
        let (store, api, _) = make_store();
        let script = existing_script();
        let id = script.id;
        store.add_script(script);
        api.push_response(Ok(Value::Null));

        store.delete_script(id).await.expect("delete succeeds");

        store.with_state(|state| assert!(state.scripts.is_empty()));
        assert_eq!(api.requests()[0].method, "DELETE");
        assert_eq!(api.requests()[0].path, format!("/scripts/delete/{id}"));
    }

    #[tokio::test]
    async fn distinct_operations_proceed_independently() {
        let (store, api, _) = make_store();
        // Responses are consumed in issue order: the script list first,
        // then the description.
        api.push_response(Ok(json!([])));
        api.push_response(Ok(json!({"description": "restless"})));

        let (scripts, description) = futures_util::future::join(
            store.fetch_scripts(),
            store.generate_character_description("a drifter"),
        )
        .await;

        scripts.expect("fetch succeeds");
        assert_eq!(description.expect("generation succeeds"), "restless");
        store.with_state(|state| {
            assert!(!state.fetching_scripts);
            assert_eq!(state.generated_description.as_deref(), Some("restless"));
        });
    }

    #[tokio::test]
    async fn local_mutations_emit_no_notifications() {
        let api = Arc::new(ScriptedApi::new());
        let mut mock = crate::ports::outbound::notifier::MockNotifier::new();
        mock.expect_notify().never();
        let store = ScriptStore::new(
            Api::new(api),
            Arc::new(mock),
            Arc::new(FixedClock::default()),
        );

        store.add_script(existing_script());
        store.update_editor_content("# local edit");
        store.clear_title_suggestions();
    }

    #[tokio::test]
    async fn update_script_overwrites_the_local_copy() {
        let (store, api, _) = make_store();
        let script = existing_script();
        let id = script.id;
        store.add_script(script);
        api.push_response(Ok(Value::Null));

        let request = UpdateScriptRequest {
            title: "Renamed".to_string(),
            synopsis: Some("S2".to_string()),
            genre: Some("drama".to_string()),
            content: None,
            social_media: None,
            script_sample: "# Renamed".to_string(),
            characters: vec!["Alice".to_string()],
            scenes: vec!["INT. LAB - NIGHT".to_string()],
        };
        store
            .update_script(id, request)
            .await
            .expect("save succeeds");

        store.with_state(|state| {
            let saved = state.script(id).expect("still present");
            assert_eq!(saved.title, "Renamed");
            assert_eq!(saved.script_sample.as_deref(), Some("# Renamed"));
            assert!(!state.saving_script);
        });
    }
}
