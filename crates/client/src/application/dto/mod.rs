//! Wire DTOs for the script service HTTP contract
//!
//! All payloads use camelCase field names on the wire. DTOs convert to and
//! from domain types at the service boundary so the store only ever holds
//! domain values.

pub mod requests;
pub mod responses;

pub use requests::{
    CreateScriptRequest, GenerateDescriptionRequest, SampleScriptRequest,
    TitleSuggestionsRequest, UpdateCharacterRequest, UpdateScriptRequest,
};
pub use responses::{CharacterDescriptorData, EditorContentData, GeneratedDescription, ScriptData};
