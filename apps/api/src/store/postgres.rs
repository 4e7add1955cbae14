use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::employee::{Employee, SkillLevel};
use crate::models::recommendation::{
    LearningItem, Recommendation, RecommendationStatus, SkillGap,
};
use crate::models::role::{Role, SkillRequirement};
use crate::store::{reviewed_conflict, EmployeeProfiles, RecommendationStore, RoleCatalog};

// ────────────────────────────────────────────────────────────────────────────
// Row types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, FromRow)]
struct EmployeeRow {
    id: String,
    name: String,
    experience: f64,
    skills: Json<BTreeMap<String, SkillLevel>>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: row.id,
            name: row.name,
            experience: row.experience,
            skills: row.skills.0,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct RoleRow {
    id: String,
    title: String,
    experience: f64,
    required_skills: Json<BTreeMap<String, SkillRequirement>>,
}

impl From<RoleRow> for Role {
    fn from(row: RoleRow) -> Self {
        Role {
            id: row.id,
            title: row.title,
            experience: row.experience,
            required_skills: row.required_skills.0,
        }
    }
}

#[derive(Debug, FromRow)]
struct RecommendationRow {
    id: Uuid,
    employee_id: String,
    target_role_id: String,
    skill_gaps: Json<BTreeMap<String, SkillGap>>,
    learning_path: Json<Vec<LearningItem>>,
    timeline: i32,
    confidence: f64,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RecommendationRow> for Recommendation {
    type Error = AppError;

    fn try_from(row: RecommendationRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<RecommendationStatus>()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("recommendation {}: {e}", row.id)))?;

        Ok(Recommendation {
            id: row.id,
            employee_id: row.employee_id,
            target_role_id: row.target_role_id,
            skill_gaps: row.skill_gaps.0,
            learning_path: row.learning_path.0,
            timeline: row.timeline.max(0) as u32,
            confidence: row.confidence,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PgStore
// ────────────────────────────────────────────────────────────────────────────

/// PostgreSQL backend. Schema lives in `migrations/`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleCatalog for PgStore {
    async fn get_role(&self, role_id: &str) -> Result<Option<Role>, AppError> {
        let row = sqlx::query_as::<_, RoleRow>("SELECT * FROM roles WHERE id = $1")
            .bind(role_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Role::from))
    }

    async fn list_roles(&self) -> Result<Vec<Role>, AppError> {
        let rows = sqlx::query_as::<_, RoleRow>("SELECT * FROM roles ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Role::from).collect())
    }

    async fn upsert_role(&self, role: &Role) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO roles (id, title, experience, required_skills)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET title = EXCLUDED.title,
                experience = EXCLUDED.experience,
                required_skills = EXCLUDED.required_skills
            "#,
        )
        .bind(&role.id)
        .bind(&role.title)
        .bind(role.experience)
        .bind(Json(role.required_skills.clone()))
        .execute(&self.pool)
        .await?;

        info!("Upserted role {}", role.id);
        Ok(())
    }
}

#[async_trait]
impl EmployeeProfiles for PgStore {
    async fn get_employee(&self, employee_id: &str) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query_as::<_, EmployeeRow>("SELECT * FROM employees WHERE id = $1")
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Employee::from))
    }

    async fn upsert_employee(&self, employee: &Employee) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO employees (id, name, experience, skills, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                experience = EXCLUDED.experience,
                skills = EXCLUDED.skills,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(&employee.id)
        .bind(&employee.name)
        .bind(employee.experience)
        .bind(Json(employee.skills.clone()))
        .bind(employee.updated_at)
        .execute(&self.pool)
        .await?;

        info!("Upserted employee {}", employee.id);
        Ok(())
    }
}

#[async_trait]
impl RecommendationStore for PgStore {
    async fn save(&self, rec: &Recommendation) -> Result<(), AppError> {
        // One row per (employee, role). A fresh analysis only replaces a row
        // nobody has started reviewing.
        let result = sqlx::query(
            r#"
            INSERT INTO recommendations
                (id, employee_id, target_role_id, skill_gaps, learning_path,
                 timeline, confidence, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (employee_id, target_role_id) DO UPDATE
            SET id = EXCLUDED.id,
                skill_gaps = EXCLUDED.skill_gaps,
                learning_path = EXCLUDED.learning_path,
                timeline = EXCLUDED.timeline,
                confidence = EXCLUDED.confidence,
                status = EXCLUDED.status,
                created_at = EXCLUDED.created_at,
                updated_at = EXCLUDED.updated_at
            WHERE recommendations.status = 'pending'
            "#,
        )
        .bind(rec.id)
        .bind(&rec.employee_id)
        .bind(&rec.target_role_id)
        .bind(Json(rec.skill_gaps.clone()))
        .bind(Json(rec.learning_path.clone()))
        .bind(rec.timeline as i32)
        .bind(rec.confidence)
        .bind(rec.status.as_str())
        .bind(rec.created_at)
        .bind(rec.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(
                match self.find_for_pair(&rec.employee_id, &rec.target_role_id).await? {
                    Some(existing) => reviewed_conflict(&existing),
                    None => AppError::Conflict(format!(
                        "Recommendation for employee {} and role {} changed concurrently",
                        rec.employee_id, rec.target_role_id
                    )),
                },
            );
        }

        info!(
            "Saved recommendation {} for employee {} → role {}",
            rec.id, rec.employee_id, rec.target_role_id
        );
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Recommendation>, AppError> {
        sqlx::query_as::<_, RecommendationRow>("SELECT * FROM recommendations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Recommendation::try_from)
            .transpose()
    }

    async fn find_for_pair(
        &self,
        employee_id: &str,
        target_role_id: &str,
    ) -> Result<Option<Recommendation>, AppError> {
        sqlx::query_as::<_, RecommendationRow>(
            "SELECT * FROM recommendations WHERE employee_id = $1 AND target_role_id = $2",
        )
        .bind(employee_id)
        .bind(target_role_id)
        .fetch_optional(&self.pool)
        .await?
        .map(Recommendation::try_from)
        .transpose()
    }

    async fn list_for_employee(&self, employee_id: &str) -> Result<Vec<Recommendation>, AppError> {
        sqlx::query_as::<_, RecommendationRow>(
            r#"
            SELECT * FROM recommendations
            WHERE employee_id = $1
            ORDER BY created_at DESC, target_role_id ASC
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Recommendation::try_from)
        .collect()
    }

    async fn discard_pending(
        &self,
        employee_id: &str,
        target_role_id: &str,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM recommendations
            WHERE employee_id = $1 AND target_role_id = $2 AND status = 'pending'
            "#,
        )
        .bind(employee_id)
        .bind(target_role_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn update_status(
        &self,
        id: Uuid,
        expected: RecommendationStatus,
        status: RecommendationStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Recommendation>, AppError> {
        sqlx::query_as::<_, RecommendationRow>(
            r#"
            UPDATE recommendations SET status = $1, updated_at = $2
            WHERE id = $3 AND status = $4
            RETURNING *
            "#,
        )
        .bind(status.as_str())
        .bind(updated_at)
        .bind(id)
        .bind(expected.as_str())
        .fetch_optional(&self.pool)
        .await?
        .map(Recommendation::try_from)
        .transpose()
    }
}
