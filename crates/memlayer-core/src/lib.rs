//! Core data model for memlayer.
//!
//! Defines the memory records an extraction pipeline produces from
//! conversational data: the [`Memory`] envelope, its typed contents
//! (currently [`ProfileMemory`] and [`EpisodicMemory`]), and the
//! [`MemoryExtractRequest`] kinds used to route work to extractors.
//!
//! The crate is a pure schema contract: construction, serde, and nothing
//! else. Extraction, scoring, and storage live in other components.

pub mod error;
pub mod model;

pub use error::CoreError;
pub use model::{
    AttributeEntry, ConversationMessage, EpisodicMemory, ExtractParams, GroupImportanceEvidence,
    ImportanceEvidence, Memory, MemoryContent, MemoryExtractRequest, MemoryId, MemoryType,
    MessageRole, ProfileMemory, ProjectInfo,
};
