use serde::{Deserialize, Serialize};

/// Participation counters for one user within one group.
/// Counters are cumulative; the unsigned type keeps them non-negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportanceEvidence {
    pub user_id: String,
    pub group_id: String,
    #[serde(default)]
    pub speak_count: u64,
    #[serde(default)]
    pub refer_count: u64,
    #[serde(default)]
    pub conversation_count: u64,
}

impl ImportanceEvidence {
    /// Fresh counters for a user/group pair.
    pub fn new(user_id: impl Into<String>, group_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            group_id: group_id.into(),
            speak_count: 0,
            refer_count: 0,
            conversation_count: 0,
        }
    }
}

/// Evidence aggregated across a group for one importance verdict.
/// `evidence_list` keeps insertion order; the order carries no meaning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupImportanceEvidence {
    pub group_id: String,
    #[serde(default)]
    pub evidence_list: Vec<ImportanceEvidence>,
    pub is_important: bool,
}
