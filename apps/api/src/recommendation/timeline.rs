use std::collections::BTreeMap;

use crate::models::recommendation::{Priority, SkillGap};

const BASE_MONTHS: u32 = 6;
const MIN_MONTHS: u32 = 3;
const MAX_MONTHS: u32 = 24;

/// Estimates months needed to close every gap:
/// `6 + (gaps / 2) × 2 + high_priority × 2 + floor(average_gap) × 2`, clamped to 3 – 24.
///
/// An empty gap set needs no plan and yields 0.
pub fn calculate_timeline(skill_gaps: &BTreeMap<String, SkillGap>) -> u32 {
    let total_gaps = skill_gaps.len() as u32;
    if total_gaps == 0 {
        return 0;
    }

    let high_priority = skill_gaps
        .values()
        .filter(|g| g.priority == Priority::High)
        .count() as u32;
    let gap_sum: i32 = skill_gaps.values().map(|g| g.gap).sum();
    let average_gap = (gap_sum.max(0) as u32) / total_gaps;

    let months = BASE_MONTHS + (total_gaps / 2) * 2 + high_priority * 2 + average_gap * 2;
    months.clamp(MIN_MONTHS, MAX_MONTHS)
}
