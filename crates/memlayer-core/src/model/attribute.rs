use serde::{de, Deserialize, Deserializer, Serialize};

/// One extracted fact about a user, with the evidence backing it.
///
/// Evidence strings are conventionally `"date|conversation_id"` pairs;
/// they are carried as opaque strings and never parsed here.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AttributeEntry {
    pub value: String,
    /// Proficiency or intensity, where the attribute carries one
    /// (skills, motivational attributes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidences: Vec<String>,
}

impl AttributeEntry {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            level: None,
            evidences: Vec::new(),
        }
    }
}

/// Accepts both the current shape (`value`) and the legacy skill shape
/// (`skill`). The legacy key is mapped to `value` here, at the trust
/// boundary, so only the current shape exists past deserialization.
impl<'de> Deserialize<'de> for AttributeEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawEntry {
            #[serde(default)]
            value: Option<String>,
            #[serde(default)]
            skill: Option<String>,
            #[serde(default)]
            level: Option<String>,
            #[serde(default)]
            evidences: Vec<String>,
        }

        let raw = RawEntry::deserialize(deserializer)?;
        let value = match (raw.value, raw.skill) {
            // Current key wins when a writer emitted both.
            (Some(value), _) => value,
            (None, Some(skill)) => skill,
            (None, None) => return Err(de::Error::missing_field("value")),
        };
        Ok(AttributeEntry {
            value,
            level: raw.level,
            evidences: raw.evidences,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_shape() {
        let entry: AttributeEntry = serde_json::from_str(
            r#"{"value": "Rust", "level": "advanced", "evidences": ["2024-01-01|conv_123"]}"#,
        )
        .unwrap();
        assert_eq!(entry.value, "Rust");
        assert_eq!(entry.level.as_deref(), Some("advanced"));
        assert_eq!(entry.evidences, vec!["2024-01-01|conv_123"]);
    }

    #[test]
    fn test_legacy_skill_key_migrated() {
        let entry: AttributeEntry =
            serde_json::from_str(r#"{"skill": "Python", "level": "expert"}"#).unwrap();
        assert_eq!(entry.value, "Python");
        assert_eq!(entry.level.as_deref(), Some("expert"));
        assert!(entry.evidences.is_empty());

        // The legacy key never survives re-serialization.
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"value\":\"Python\""));
        assert!(!json.contains("skill"));
    }

    #[test]
    fn test_current_key_wins_over_legacy() {
        let entry: AttributeEntry =
            serde_json::from_str(r#"{"value": "Go", "skill": "Golang"}"#).unwrap();
        assert_eq!(entry.value, "Go");
    }

    #[test]
    fn test_missing_value_rejected() {
        let result: Result<AttributeEntry, _> =
            serde_json::from_str(r#"{"level": "high", "evidences": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_omitted() {
        let entry = AttributeEntry::new("curiosity");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"value":"curiosity"}"#);
    }

    #[test]
    fn test_roundtrip() {
        let entry = AttributeEntry {
            value: "mentoring".into(),
            level: Some("high".into()),
            evidences: vec!["2024-02-10|conv_7".into(), "2024-03-01|conv_9".into()],
        };
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: AttributeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, parsed);
    }
}
