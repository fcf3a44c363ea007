use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::memory::MemoryType;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One conversation message handed to an extractor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationMessage {
    pub message_id: String,
    pub create_time: DateTime<Utc>,
    pub sender: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<MessageRole>,
}

/// Fields shared by every extraction request: whose memory to extract,
/// in which group scope, from which messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractParams {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<ConversationMessage>,
}

/// A request routed to one extractor. Each variant carries the shared
/// params and nothing else; the variant itself is what dispatch keys on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "memory_type", rename_all = "snake_case")]
pub enum MemoryExtractRequest {
    Episodic(ExtractParams),
    Profile(ExtractParams),
}

impl MemoryExtractRequest {
    pub fn memory_type(&self) -> MemoryType {
        match self {
            Self::Episodic(_) => MemoryType::Episodic,
            Self::Profile(_) => MemoryType::Profile,
        }
    }

    pub fn params(&self) -> &ExtractParams {
        match self {
            Self::Episodic(params) | Self::Profile(params) => params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_params() -> ExtractParams {
        ExtractParams {
            user_id: "alice".into(),
            group_id: Some("team-42".into()),
            messages: vec![ConversationMessage {
                message_id: "msg-1".into(),
                create_time: "2024-01-01T09:30:00Z".parse().unwrap(),
                sender: "alice".into(),
                content: "I finished the invoice migration".into(),
                sender_name: Some("Alice".into()),
                role: Some(MessageRole::User),
            }],
        }
    }

    #[test]
    fn test_profile_request_from_base_fields() {
        let request = MemoryExtractRequest::Profile(base_params());
        assert_eq!(request.memory_type(), MemoryType::Profile);
        assert_eq!(request.params().user_id, "alice");
    }

    #[test]
    fn test_request_kinds_distinguishable() {
        let profile = MemoryExtractRequest::Profile(base_params());
        let episodic = MemoryExtractRequest::Episodic(base_params());
        assert_ne!(profile, episodic);

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"memory_type\":\"profile\""));
        let parsed: MemoryExtractRequest = serde_json::from_str(&json).unwrap();
        assert!(matches!(parsed, MemoryExtractRequest::Profile(_)));
    }

    #[test]
    fn test_minimal_request() {
        let json = r#"{"memory_type": "profile", "user_id": "bob"}"#;
        let request: MemoryExtractRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.memory_type(), MemoryType::Profile);
        assert!(request.params().group_id.is_none());
        assert!(request.params().messages.is_empty());
    }
}
