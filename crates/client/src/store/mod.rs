//! Script state store: state, action objects, reducer, and the async store
//!
//! Views dispatch through [`ScriptStore`] and read state snapshots back;
//! the reducer is the single mutation point for [`ScriptState`].

pub mod action;
pub mod reducer;
pub mod script_store;
pub mod state;

pub use action::ScriptAction;
pub use reducer::reduce;
pub use script_store::{ScriptStore, UpdateCharacterInput};
pub use state::{ScriptState, StoreOperation};
