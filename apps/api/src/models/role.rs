use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// What a role demands of a single skill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillRequirement {
    /// 0 – 5
    pub minimum_level: i32,
    /// 0.0 – 1.0
    pub weight: f64,
    #[serde(default)]
    pub critical: bool,
}

/// A target role from the role catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Years of experience the role expects.
    pub experience: f64,
    pub required_skills: BTreeMap<String, SkillRequirement>,
}
