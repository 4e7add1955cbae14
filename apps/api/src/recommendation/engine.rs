//! Recommendation Engine: orchestrates gap analysis, path planning, timeline and confidence.
//!
//! Flow: validate inputs → compute_skill_gaps → generate_learning_path →
//!       calculate_timeline → calculate_confidence → Recommendation (status = pending).
//!
//! The engine performs no I/O. Time and ids come from injected capabilities so
//! identical inputs under a frozen clock give identical recommendations.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::models::employee::Employee;
use crate::models::recommendation::{Priority, Recommendation, RecommendationStatus};
use crate::models::role::Role;
use crate::recommendation::confidence::calculate_confidence;
use crate::recommendation::gaps::compute_skill_gaps;
use crate::recommendation::learning_path::{count_by_priority, generate_learning_path};
use crate::recommendation::timeline::calculate_timeline;
use crate::recommendation::validation::{validate_employee, validate_role};

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Injected capabilities
// ────────────────────────────────────────────────────────────────────────────

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Random v4 ids.
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct RecommendationEngine {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(RandomIds))
    }
}

impl RecommendationEngine {
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// Current time according to the injected clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Builds a pending recommendation for moving `employee` into `target_role`.
    ///
    /// When the employee already meets every requirement the result has no
    /// gaps, an empty path and a timeline of 0; callers should treat it as
    /// "nothing to recommend".
    pub fn generate_recommendation(
        &self,
        employee: &Employee,
        target_role: &Role,
    ) -> Result<Recommendation, EngineError> {
        validate_employee(employee)?;
        validate_role(target_role)?;

        let skill_gaps = compute_skill_gaps(&employee.skills, &target_role.required_skills);
        let learning_path = generate_learning_path(&skill_gaps, target_role);
        let timeline = calculate_timeline(&skill_gaps);
        let confidence = calculate_confidence(employee, target_role, &skill_gaps);

        debug!(
            "Recommendation {} → {}: {} gaps, {} path items ({} high priority), {} months, confidence {:.2}",
            employee.id,
            target_role.id,
            skill_gaps.len(),
            learning_path.len(),
            count_by_priority(&learning_path, Priority::High),
            timeline,
            confidence
        );

        let now = self.clock.now();
        Ok(Recommendation {
            id: self.ids.next_id(),
            employee_id: employee.id.clone(),
            target_role_id: target_role.id.clone(),
            skill_gaps,
            learning_path,
            timeline,
            confidence,
            status: RecommendationStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }
}


#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::testing::{frozen_engine, frozen_time};
    use super::*;
    use crate::models::employee::SkillLevel;
    use crate::models::recommendation::LearningItemType;
    use crate::models::role::SkillRequirement;

    fn employee(skills: &[(&str, i32)]) -> Employee {
        Employee {
            id: "EMP001".to_string(),
            name: "Sarah Johnson".to_string(),
            experience: 5.0,
            skills: skills
                .iter()
                .map(|(s, l)| (s.to_string(), SkillLevel { level: *l }))
                .collect(),
            updated_at: None,
        }
    }

    fn leadership_role() -> Role {
        Role {
            id: "ROLE-MGR".to_string(),
            title: "Engineering Manager".to_string(),
            experience: 5.0,
            required_skills: BTreeMap::from([(
                "Leadership".to_string(),
                SkillRequirement {
                    minimum_level: 3,
                    weight: 0.9,
                    critical: true,
                },
            )]),
        }
    }

    #[test]
    fn test_leadership_scenario() {
        let rec = frozen_engine()
            .generate_recommendation(&employee(&[]), &leadership_role())
            .unwrap();

        let gap = &rec.skill_gaps["Leadership"];
        assert_eq!(gap.current_level, 0);
        assert_eq!(gap.required_level, 3);
        assert_eq!(gap.gap, 3);
        assert_eq!(gap.priority, Priority::High);
        assert!(gap.critical);

        let kinds: Vec<_> = rec.learning_path.iter().map(|i| i.item_type).collect();
        assert_eq!(
            kinds,
            vec![
                LearningItemType::Course,
                LearningItemType::Project,
                LearningItemType::Mentoring
            ]
        );
        assert_eq!(rec.timeline, 14);
        assert_eq!(rec.status, RecommendationStatus::Pending);
        assert_eq!(rec.created_at, frozen_time());
        assert_eq!(rec.updated_at, frozen_time());
        assert_eq!(rec.id, Uuid::from_u128(42));
        assert_eq!(rec.employee_id, "EMP001");
        assert_eq!(rec.target_role_id, "ROLE-MGR");
        assert!(rec.is_actionable());
    }

    #[test]
    fn test_all_requirements_met() {
        let rec = frozen_engine()
            .generate_recommendation(&employee(&[("Leadership", 3)]), &leadership_role())
            .unwrap();

        assert!(rec.skill_gaps.is_empty());
        assert!(rec.learning_path.is_empty());
        assert_eq!(rec.timeline, 0);
        assert!(rec.confidence.is_finite());
        assert!(!rec.is_actionable());
    }

    #[test]
    fn test_identical_inputs_identical_output() {
        let engine = frozen_engine();
        let e = employee(&[("Leadership", 1)]);
        let r = leadership_role();
        let first = engine.generate_recommendation(&e, &r).unwrap();
        let second = engine.generate_recommendation(&e, &r).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let result = frozen_engine()
            .generate_recommendation(&employee(&[("Leadership", 9)]), &leadership_role());
        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn test_system_clock_engine_produces_fresh_ids() {
        let engine = RecommendationEngine::default();
        let e = employee(&[]);
        let r = leadership_role();
        let a = engine.generate_recommendation(&e, &r).unwrap();
        let b = engine.generate_recommendation(&e, &r).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.skill_gaps, b.skill_gaps);
    }
}
