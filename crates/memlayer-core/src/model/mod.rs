pub mod attribute;
pub mod extract;
pub mod importance;
pub mod memory;
pub mod profile;

pub use attribute::AttributeEntry;
pub use extract::{ConversationMessage, ExtractParams, MemoryExtractRequest, MessageRole};
pub use importance::{GroupImportanceEvidence, ImportanceEvidence};
pub use memory::{EpisodicMemory, Memory, MemoryContent, MemoryId, MemoryType};
pub use profile::{ProfileMemory, ProjectInfo};
