//! In-process backend. Plays the part local storage played in the browser
//! app: handy for demos and tests, gone on restart.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::models::recommendation::{Recommendation, RecommendationStatus};
use crate::models::role::Role;
use crate::store::{reviewed_conflict, EmployeeProfiles, RecommendationStore, RoleCatalog};

#[derive(Default)]
pub struct MemoryStore {
    roles: RwLock<BTreeMap<String, Role>>,
    employees: RwLock<HashMap<String, Employee>>,
    recommendations: RwLock<HashMap<Uuid, Recommendation>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleCatalog for MemoryStore {
    async fn get_role(&self, role_id: &str) -> Result<Option<Role>, AppError> {
        Ok(self.roles.read().await.get(role_id).cloned())
    }

    async fn list_roles(&self) -> Result<Vec<Role>, AppError> {
        Ok(self.roles.read().await.values().cloned().collect())
    }

    async fn upsert_role(&self, role: &Role) -> Result<(), AppError> {
        self.roles
            .write()
            .await
            .insert(role.id.clone(), role.clone());
        Ok(())
    }
}

#[async_trait]
impl EmployeeProfiles for MemoryStore {
    async fn get_employee(&self, employee_id: &str) -> Result<Option<Employee>, AppError> {
        Ok(self.employees.read().await.get(employee_id).cloned())
    }

    async fn upsert_employee(&self, employee: &Employee) -> Result<(), AppError> {
        self.employees
            .write()
            .await
            .insert(employee.id.clone(), employee.clone());
        Ok(())
    }
}

#[async_trait]
impl RecommendationStore for MemoryStore {
    async fn save(&self, recommendation: &Recommendation) -> Result<(), AppError> {
        let mut recs = self.recommendations.write().await;
        let same_pair = |r: &Recommendation| {
            r.employee_id == recommendation.employee_id
                && r.target_role_id == recommendation.target_role_id
        };
        if let Some(existing) = recs
            .values()
            .find(|r| same_pair(r) && r.status != RecommendationStatus::Pending)
        {
            return Err(reviewed_conflict(existing));
        }
        recs.retain(|_, existing| !same_pair(existing));
        recs.insert(recommendation.id, recommendation.clone());
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Recommendation>, AppError> {
        Ok(self.recommendations.read().await.get(&id).cloned())
    }

    async fn find_for_pair(
        &self,
        employee_id: &str,
        target_role_id: &str,
    ) -> Result<Option<Recommendation>, AppError> {
        Ok(self
            .recommendations
            .read()
            .await
            .values()
            .find(|r| r.employee_id == employee_id && r.target_role_id == target_role_id)
            .cloned())
    }

    async fn list_for_employee(&self, employee_id: &str) -> Result<Vec<Recommendation>, AppError> {
        let mut recs: Vec<Recommendation> = self
            .recommendations
            .read()
            .await
            .values()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect();
        recs.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.target_role_id.cmp(&b.target_role_id))
        });
        Ok(recs)
    }

    async fn discard_pending(
        &self,
        employee_id: &str,
        target_role_id: &str,
    ) -> Result<bool, AppError> {
        let mut recs = self.recommendations.write().await;
        let before = recs.len();
        recs.retain(|_, r| {
            !(r.employee_id == employee_id
                && r.target_role_id == target_role_id
                && r.status == RecommendationStatus::Pending)
        });
        Ok(recs.len() < before)
    }

    async fn update_status(
        &self,
        id: Uuid,
        expected: RecommendationStatus,
        status: RecommendationStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Recommendation>, AppError> {
        let mut recs = self.recommendations.write().await;
        Ok(recs
            .get_mut(&id)
            .filter(|rec| rec.status == expected)
            .map(|rec| {
                rec.status = status;
                rec.updated_at = updated_at;
                rec.clone()
            }))
    }
}
