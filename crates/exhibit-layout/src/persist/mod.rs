//! Save endpoint collaborator: where the arrangement goes on release.

use exhibit_common::PersistError;

use crate::arrangement::ArrangementParams;

pub mod jsonl;
pub mod memory;

pub use jsonl::JsonLinesSaveEndpoint;
pub use memory::MemorySaveEndpoint;

pub type Result<T> = std::result::Result<T, PersistError>;

/// Receives the flat arrangement parameters once per save.
pub trait SaveEndpoint {
    fn save(&mut self, params: &ArrangementParams) -> Result<()>;
}
