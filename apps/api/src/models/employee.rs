use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current proficiency in a single skill, 0 (none) through 5 (expert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub level: i32,
}

/// An employee's skill profile as consumed by the recommendation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Years of professional experience.
    pub experience: f64,
    #[serde(default)]
    pub skills: BTreeMap<String, SkillLevel>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Employee {
    /// Level for `skill`, folding absent skills to 0.
    pub fn skill_level(&self, skill: &str) -> i32 {
        self.skills.get(skill).map(|s| s.level).unwrap_or(0)
    }
}
