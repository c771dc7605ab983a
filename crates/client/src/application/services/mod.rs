//! Application services - typed use cases over the script service contract

pub mod character_service;
pub mod generation_service;
pub mod script_service;
pub mod suggestion_service;

pub use character_service::CharacterService;
pub use generation_service::GenerationService;
pub use script_service::ScriptService;
pub use suggestion_service::SuggestionService;
