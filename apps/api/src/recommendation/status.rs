//! Review lifecycle of a recommendation.
//!
//! pending → in_progress → implemented
//! pending → rejected
//!
//! Implemented and rejected are terminal. Transitions are driven by HR
//! reviewers through the API, never by the engine.

use crate::errors::AppError;
use crate::models::recommendation::RecommendationStatus;

impl RecommendationStatus {
    pub fn can_transition_to(self, next: RecommendationStatus) -> bool {
        use RecommendationStatus::*;
        matches!(
            (self, next),
            (Pending, InProgress) | (InProgress, Implemented) | (Pending, Rejected)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RecommendationStatus::Implemented | RecommendationStatus::Rejected
        )
    }
}

/// Checks a requested transition, returning `AppError::Conflict` when it is not allowed.
pub fn ensure_transition(
    current: RecommendationStatus,
    next: RecommendationStatus,
) -> Result<(), AppError> {
    if current.can_transition_to(next) {
        Ok(())
    } else if current.is_terminal() {
        Err(AppError::Conflict(format!(
            "Recommendation is already {current} and cannot move to {next}"
        )))
    } else {
        Err(AppError::Conflict(format!(
            "Cannot move recommendation from {current} to {next}"
        )))
    }
}
