use std::collections::BTreeMap;

use crate::models::employee::Employee;
use crate::models::recommendation::SkillGap;
use crate::models::role::Role;

const BASE_CONFIDENCE: f64 = 0.5;
const EXPERIENCE_WEIGHT: f64 = 0.2;
const SKILL_MATCH_WEIGHT: f64 = 0.3;
const SEVERITY_WEIGHT: f64 = 0.2;
const MAX_LEVEL: f64 = 5.0;

pub const MIN_CONFIDENCE: f64 = 0.1;
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Heuristic estimate of how well `employee` maps onto `role`:
///
/// ```text
/// 0.5 + min(employee.experience / role.experience, 1) × 0.2
///     + (skills already met / skills required)       × 0.3
///     + (1 − total gap / (skills required × 5))      × 0.2
/// ```
///
/// clamped to [0.1, 0.95]. A role with no experience bar or no required
/// skills contributes a full ratio for that term.
pub fn calculate_confidence(
    employee: &Employee,
    role: &Role,
    skill_gaps: &BTreeMap<String, SkillGap>,
) -> f64 {
    let experience_ratio = if role.experience > 0.0 {
        (employee.experience / role.experience).min(1.0)
    } else {
        1.0
    };

    let required = role.required_skills.len();
    let (match_ratio, severity_ratio) = if required == 0 {
        (1.0, 1.0)
    } else {
        let met = role
            .required_skills
            .iter()
            .filter(|(skill, req)| employee.skill_level(skill) >= req.minimum_level)
            .count();
        let severity: i32 = skill_gaps.values().map(|g| g.gap).sum();
        (
            met as f64 / required as f64,
            1.0 - severity as f64 / (required as f64 * MAX_LEVEL),
        )
    };

    let confidence = BASE_CONFIDENCE
        + experience_ratio * EXPERIENCE_WEIGHT
        + match_ratio * SKILL_MATCH_WEIGHT
        + severity_ratio * SEVERITY_WEIGHT;

    confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}
