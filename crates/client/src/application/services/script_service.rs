//! Script Service - CRUD operations against the script service
//!
//! Thin typed layer over the `/scripts` HTTP contract. Every method returns
//! a domain value or a [`ServiceError`]; the store decides how failures
//! surface to the user.

use scriptwright_domain::{Script, ScriptId};

use crate::application::api::Api;
use crate::application::dto::{CreateScriptRequest, ScriptData, UpdateScriptRequest};
use crate::application::error::ServiceError;

#[derive(Clone)]
pub struct ScriptService {
    api: Api,
}

impl ScriptService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Create a script from the merged draft + generated content payload.
    ///
    /// The service answers 201 with the stored script, including the
    /// server-assigned identifier.
    pub async fn create(&self, request: &CreateScriptRequest) -> Result<Script, ServiceError> {
        let data: ScriptData = self.api.post("/scripts/create", request).await?;
        Ok(Script::try_from(data)?)
    }

    /// List every script owned by the current user.
    pub async fn list(&self) -> Result<Vec<Script>, ServiceError> {
        let data: Vec<ScriptData> = self.api.get("/scripts/list-scripts").await?;
        data.into_iter()
            .map(|d| Script::try_from(d).map_err(ServiceError::from))
            .collect()
    }

    /// Fetch a single script by id.
    pub async fn view(&self, id: ScriptId) -> Result<Script, ServiceError> {
        let data: ScriptData = self.api.get(&format!("/scripts/view/{id}")).await?;
        Ok(Script::try_from(data)?)
    }

    /// Full-document update. The request must carry the complete current
    /// snapshot; the service overwrites, it does not merge.
    pub async fn update(
        &self,
        id: ScriptId,
        request: &UpdateScriptRequest,
    ) -> Result<(), ServiceError> {
        self.api
            .put_no_response(&format!("/scripts/update/{id}"), request)
            .await?;
        Ok(())
    }

    /// Delete a script by id.
    pub async fn delete(&self, id: ScriptId) -> Result<(), ServiceError> {
        self.api.delete(&format!("/scripts/delete/{id}")).await?;
        Ok(())
    }
}
