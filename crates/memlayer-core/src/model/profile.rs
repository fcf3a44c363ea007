use serde::{Deserialize, Serialize};

use super::attribute::AttributeEntry;
use super::importance::GroupImportanceEvidence;

/// A user's participation in one project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectInfo {
    pub project_id: String,
    pub project_name: String,
    pub entry_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<Vec<AttributeEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_objective: Option<Vec<AttributeEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributions: Option<Vec<AttributeEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_concerns: Option<Vec<AttributeEntry>>,
}

/// A user profile extracted from conversations.
///
/// Every field is optional: an absent field means "not extracted", which
/// downstream consumers treat differently from an empty list. Built once
/// per extraction run and immutable afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileMemory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard_skills: Option<Vec<AttributeEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soft_skills: Option<Vec<AttributeEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub way_of_decision_making: Option<Vec<AttributeEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<Vec<AttributeEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_goal: Option<Vec<AttributeEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_responsibility: Option<Vec<AttributeEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_habit_preference: Option<Vec<AttributeEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<AttributeEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tendency: Option<Vec<AttributeEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivation_system: Option<Vec<AttributeEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fear_system: Option<Vec<AttributeEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_system: Option<Vec<AttributeEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humor_use: Option<Vec<AttributeEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colloquialism: Option<Vec<AttributeEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_participated: Option<Vec<ProjectInfo>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_importance_evidence: Option<GroupImportanceEvidence>,

    /// Free-text rationale the extractor produced alongside the result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_reasoning: Option<String>,
}
