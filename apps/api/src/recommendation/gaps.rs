//! Skill-gap analysis: compares an employee's skill profile against a role's requirements.

use std::collections::BTreeMap;

use crate::models::employee::SkillLevel;
use crate::models::recommendation::{Priority, SkillGap};
use crate::models::role::SkillRequirement;

/// Computes the gap for every required skill the employee falls short on.
///
/// Skills missing from the employee profile count as level 0. Skills at or
/// above the required level never appear in the result.
pub fn compute_skill_gaps(
    employee_skills: &BTreeMap<String, SkillLevel>,
    requirements: &BTreeMap<String, SkillRequirement>,
) -> BTreeMap<String, SkillGap> {
    let mut gaps = BTreeMap::new();

    for (skill, requirement) in requirements {
        let current_level = employee_skills.get(skill).map(|s| s.level).unwrap_or(0);
        let required_level = requirement.minimum_level;

        if current_level >= required_level {
            continue;
        }

        let gap = required_level - current_level;
        gaps.insert(
            skill.clone(),
            SkillGap {
                current_level,
                required_level,
                gap,
                priority: classify_priority(gap, requirement.weight, requirement.critical),
                weight: requirement.weight,
                critical: requirement.critical,
            },
        );
    }

    gaps
}

/// Priority rules, first match wins:
/// 1. critical and gap >= 2 → high
/// 2. critical → high
/// 3. gap >= 3 → high
/// 4. gap >= 2 or weight > 0.8 → medium
/// 5. otherwise → low
///
/// Rule 1 is subsumed by rule 2. Kept in order until HR confirms whether
/// small critical gaps should really rank high.
#[allow(clippy::if_same_then_else)]
pub fn classify_priority(gap: i32, weight: f64, critical: bool) -> Priority {
    if critical && gap >= 2 {
        Priority::High
    } else if critical {
        Priority::High
    } else if gap >= 3 {
        Priority::High
    } else if gap >= 2 || weight > 0.8 {
        Priority::Medium
    } else {
        Priority::Low
    }
}
