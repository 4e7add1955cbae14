//! Collaborators the recommendation flow reads from and writes to.
//!
//! Handlers only see these traits; `AppState` carries them as `Arc<dyn _>`,
//! with the backend picked at startup (PostgreSQL or in-memory).

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::models::recommendation::{Recommendation, RecommendationStatus};
use crate::models::role::Role;

/// Source of target-role skill requirements.
#[async_trait]
pub trait RoleCatalog: Send + Sync {
    async fn get_role(&self, role_id: &str) -> Result<Option<Role>, AppError>;

    /// All roles, ordered by id.
    async fn list_roles(&self) -> Result<Vec<Role>, AppError>;

    async fn upsert_role(&self, role: &Role) -> Result<(), AppError>;
}

/// Source of employee skill profiles.
#[async_trait]
pub trait EmployeeProfiles: Send + Sync {
    async fn get_employee(&self, employee_id: &str) -> Result<Option<Employee>, AppError>;

    async fn upsert_employee(&self, employee: &Employee) -> Result<(), AppError>;
}

/// Persists recommendations. At most one recommendation exists per
/// (employee, target role) pair.
#[async_trait]
pub trait RecommendationStore: Send + Sync {
    /// Stores `recommendation`, replacing a `pending` one for the same pair.
    /// Fails with `Conflict` if the pair's recommendation is already under
    /// review or closed; that row is left untouched.
    async fn save(&self, recommendation: &Recommendation) -> Result<(), AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<Recommendation>, AppError>;

    async fn find_for_pair(
        &self,
        employee_id: &str,
        target_role_id: &str,
    ) -> Result<Option<Recommendation>, AppError>;

    /// Newest first.
    async fn list_for_employee(&self, employee_id: &str) -> Result<Vec<Recommendation>, AppError>;

    /// Removes the pair's recommendation if it is still `pending`.
    /// Returns whether a row was removed.
    async fn discard_pending(
        &self,
        employee_id: &str,
        target_role_id: &str,
    ) -> Result<bool, AppError>;

    /// Writes `status` and `updated_at` only if the stored status is still
    /// `expected`. Returns `None` if `id` is unknown or the status has moved
    /// on. Transition rules are checked by the caller.
    async fn update_status(
        &self,
        id: Uuid,
        expected: RecommendationStatus,
        status: RecommendationStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Recommendation>, AppError>;
}

pub(crate) fn reviewed_conflict(existing: &Recommendation) -> AppError {
    AppError::Conflict(format!(
        "Recommendation {} for employee {} and role {} is already {}; it cannot be regenerated",
        existing.id, existing.employee_id, existing.target_role_id, existing.status
    ))
}
