use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Sort weight used when ordering a learning path: high=3, medium=2, low=1.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// Shortfall between an employee's level and a role's minimum for one skill.
/// Only ever built for skills where `current_level < required_level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub current_level: i32,
    pub required_level: i32,
    /// required_level - current_level, always >= 1
    pub gap: i32,
    pub priority: Priority,
    pub weight: f64,
    pub critical: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningItemType {
    Course,
    Project,
    Mentoring,
}

/// One step of a learning path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningItem {
    #[serde(rename = "type")]
    pub item_type: LearningItemType,
    pub skill: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    pub duration: String,
    pub effort: String,
    /// 1-based month in which the item starts.
    pub month: u32,
    pub priority: Priority,
    pub skill_impact: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    #[default]
    Pending,
    InProgress,
    Implemented,
    Rejected,
}

impl RecommendationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RecommendationStatus::Pending => "pending",
            RecommendationStatus::InProgress => "in_progress",
            RecommendationStatus::Implemented => "implemented",
            RecommendationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RecommendationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecommendationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RecommendationStatus::Pending),
            "in_progress" => Ok(RecommendationStatus::InProgress),
            "implemented" => Ok(RecommendationStatus::Implemented),
            "rejected" => Ok(RecommendationStatus::Rejected),
            other => Err(format!("unknown recommendation status '{other}'")),
        }
    }
}

/// A computed career recommendation for one employee and one target role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: Uuid,
    pub employee_id: String,
    pub target_role_id: String,
    pub skill_gaps: BTreeMap<String, SkillGap>,
    pub learning_path: Vec<LearningItem>,
    /// Estimated months to close every gap. 0 when there is nothing to close.
    pub timeline: u32,
    pub confidence: f64,
    pub status: RecommendationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recommendation {
    /// False when the employee already meets every requirement of the role.
    pub fn is_actionable(&self) -> bool {
        !self.skill_gaps.is_empty()
    }
}
