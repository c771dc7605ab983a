//! Character Service - character detail updates within a script

use scriptwright_domain::ScriptId;

use crate::application::api::Api;
use crate::application::dto::UpdateCharacterRequest;
use crate::application::error::ServiceError;

#[derive(Clone)]
pub struct CharacterService {
    api: Api,
}

impl CharacterService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Persist a character rename plus updated descriptions for a script.
    ///
    /// The in-memory rename of the store's copy happens separately, after
    /// this call succeeds.
    pub async fn update_details(
        &self,
        script_id: ScriptId,
        request: &UpdateCharacterRequest,
    ) -> Result<(), ServiceError> {
        self.api
            .put_no_response(&format!("/scripts/update-char-details/{script_id}"), request)
            .await?;
        Ok(())
    }
}
