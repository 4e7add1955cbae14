//! Learning-path planner: turns skill gaps into a time-phased sequence of
//! courses, hands-on projects and mentoring.
//!
//! Ordering: priority (high → low), then `gap × weight` descending, then
//! skill name. Two gaps share each starting month: the gap at sorted index
//! `i` starts in month `i / 2 + 1`.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::recommendation::{LearningItem, LearningItemType, Priority, SkillGap};
use crate::models::role::Role;
use crate::recommendation::providers::provider_for;

/// A single item never claims to close more than this many levels.
const MAX_SKILL_IMPACT: i32 = 2;

const COURSE_DURATION: &str = "4-6 weeks";
const PROJECT_DURATION: &str = "2-3 weeks";
const MENTORING_DURATION: &str = "4-8 weeks";

const COURSE_EFFORT: &str = "3-5 hours/week";
const PROJECT_EFFORT: &str = "8-10 hours/week";
const MENTORING_EFFORT: &str = "1-2 hours/week";

/// Builds the ordered learning path for `skill_gaps` towards `target_role`.
pub fn generate_learning_path(
    skill_gaps: &BTreeMap<String, SkillGap>,
    target_role: &Role,
) -> Vec<LearningItem> {
    let role_title = display_title(target_role);
    let mut path = Vec::new();

    for (index, (skill, gap)) in sort_gaps(skill_gaps).into_iter().enumerate() {
        let base_month = (index / 2) as u32 + 1;

        if gap.gap >= 1 {
            path.push(course_item(skill, gap, role_title, base_month));
        }
        if gap.gap >= 2 {
            path.push(project_item(skill, gap, role_title, base_month + 1));
        }
        if gap.gap >= 3 || gap.critical {
            path.push(mentoring_item(skill, gap, role_title, base_month + 2));
        }
    }

    path
}

/// Gaps in planning order.
pub fn sort_gaps(skill_gaps: &BTreeMap<String, SkillGap>) -> Vec<(&str, &SkillGap)> {
    let mut sorted: Vec<(&str, &SkillGap)> = skill_gaps
        .iter()
        .map(|(skill, gap)| (skill.as_str(), gap))
        .collect();

    sorted.sort_by(|(name_a, a), (name_b, b)| {
        b.priority
            .rank()
            .cmp(&a.priority.rank())
            .then_with(|| {
                let severity_a = a.gap as f64 * a.weight;
                let severity_b = b.gap as f64 * b.weight;
                severity_b
                    .partial_cmp(&severity_a)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| name_a.cmp(name_b))
    });

    sorted
}

fn course_item(skill: &str, gap: &SkillGap, role_title: &str, month: u32) -> LearningItem {
    LearningItem {
        item_type: LearningItemType::Course,
        skill: skill.to_string(),
        title: format!("{skill} Fundamentals"),
        description: format!(
            "Structured course taking {skill} from level {} towards the level {} expected of a {role_title}.",
            gap.current_level, gap.required_level
        ),
        provider: Some(provider_for(skill).to_string()),
        duration: COURSE_DURATION.to_string(),
        effort: COURSE_EFFORT.to_string(),
        month,
        priority: gap.priority,
        skill_impact: impact(gap.gap),
    }
}

fn project_item(skill: &str, gap: &SkillGap, role_title: &str, month: u32) -> LearningItem {
    LearningItem {
        item_type: LearningItemType::Project,
        skill: skill.to_string(),
        title: format!("Applied {skill} Project"),
        description: format!(
            "Hands-on assignment applying {skill} to real work in the scope of a {role_title}."
        ),
        provider: None,
        duration: PROJECT_DURATION.to_string(),
        effort: PROJECT_EFFORT.to_string(),
        month,
        priority: gap.priority,
        skill_impact: impact(gap.gap - 1),
    }
}

fn mentoring_item(skill: &str, gap: &SkillGap, role_title: &str, month: u32) -> LearningItem {
    LearningItem {
        item_type: LearningItemType::Mentoring,
        skill: skill.to_string(),
        title: format!("{skill} Mentorship"),
        description: format!(
            "Regular sessions with an experienced {role_title} to consolidate {skill} in practice."
        ),
        provider: None,
        duration: MENTORING_DURATION.to_string(),
        effort: MENTORING_EFFORT.to_string(),
        month,
        priority: gap.priority,
        skill_impact: impact(gap.gap - 2),
    }
}

/// Levels an item is expected to close, capped at [`MAX_SKILL_IMPACT`].
/// Critical skills with small gaps still get mentoring, which then closes nothing.
fn impact(remaining: i32) -> i32 {
    remaining.clamp(0, MAX_SKILL_IMPACT)
}

fn display_title(role: &Role) -> &str {
    if role.title.trim().is_empty() {
        &role.id
    } else {
        &role.title
    }
}

/// Counts path items at `priority`.
pub fn count_by_priority(path: &[LearningItem], priority: Priority) -> usize {
    path.iter().filter(|item| item.priority == priority).count()
}
