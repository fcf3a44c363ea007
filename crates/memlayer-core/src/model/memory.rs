use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::profile::ProfileMemory;
use crate::error::CoreError;

/// A unique identifier for a memory record.
/// Generated as UUID v4 hex (no dashes).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoryId(pub String);

impl MemoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().as_simple().to_string())
    }

    /// Parse and validate an ID string. Must be at least 2 characters.
    pub fn parse(s: impl Into<String>) -> Result<Self, CoreError> {
        let s = s.into();
        if s.len() < 2 {
            return Err(CoreError::InvalidId(format!(
                "ID must be at least 2 characters, got {}",
                s.len()
            )));
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MemoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MemoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MemoryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MemoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The kinds of memory the extraction pipeline produces.
/// Doubles as the routing/filter tag in requests and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryType {
    Episodic,
    Profile,
}

impl MemoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Episodic => "episodic",
            Self::Profile => "profile",
        }
    }
}

impl std::fmt::Display for MemoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MemoryType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "episodic" => Ok(Self::Episodic),
            "profile" => Ok(Self::Profile),
            other => Err(CoreError::Parse(format!("unknown memory type: {other}"))),
        }
    }
}

/// Envelope shared by every memory record: identity, scope, and the
/// typed content. The `memory_type` discriminant in the serialized form
/// comes from the [`MemoryContent`] variant, so a record can never carry
/// a tag that disagrees with its content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Memory {
    pub memory_id: MemoryId,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub content: MemoryContent,
}

/// Typed memory content. Serialized with an internal `memory_type` tag;
/// the tag is implied by the variant and is not settable by callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "memory_type", rename_all = "snake_case")]
pub enum MemoryContent {
    Episodic(EpisodicMemory),
    Profile(ProfileMemory),
}

impl MemoryContent {
    pub fn memory_type(&self) -> MemoryType {
        match self {
            Self::Episodic(_) => MemoryType::Episodic,
            Self::Profile(_) => MemoryType::Profile,
        }
    }
}

impl Memory {
    /// Wrap a profile extraction result in a fresh envelope.
    pub fn profile(user_id: impl Into<String>, group_id: Option<String>, profile: ProfileMemory) -> Self {
        Self {
            memory_id: MemoryId::new(),
            user_id: user_id.into(),
            group_id,
            timestamp: Utc::now(),
            content: MemoryContent::Profile(profile),
        }
    }

    /// Wrap an episodic extraction result in a fresh envelope.
    pub fn episodic(user_id: impl Into<String>, group_id: Option<String>, episode: EpisodicMemory) -> Self {
        Self {
            memory_id: MemoryId::new(),
            user_id: user_id.into(),
            group_id,
            timestamp: Utc::now(),
            content: MemoryContent::Episodic(episode),
        }
    }

    pub fn memory_type(&self) -> MemoryType {
        self.content.memory_type()
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One remembered episode from a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EpisodicMemory {
    pub episode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}
