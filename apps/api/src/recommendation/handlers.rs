//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::models::recommendation::{Recommendation, RecommendationStatus};
use crate::models::role::Role;
use crate::recommendation::status::ensure_transition;
use crate::state::AppState;
use crate::store::reviewed_conflict;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRecommendationRequest {
    pub employee_id: String,
    pub target_role_id: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateRecommendationResponse {
    pub recommendation: Recommendation,
    /// False when the employee already meets the role and nothing was stored.
    pub persisted: bool,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub employee: Employee,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct EmployeeQuery {
    pub employee_id: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: RecommendationStatus,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// Loads the employee and target role, runs the engine and stores the result.
/// A recommendation with no skill gaps is returned but not stored, and any
/// still-pending recommendation for the pair is discarded as stale. Once the
/// pair's recommendation is under review or closed, regenerating is a conflict.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRecommendationRequest>,
) -> Result<Json<GenerateRecommendationResponse>, AppError> {
    let employee = state
        .employees
        .get_employee(&request.employee_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", request.employee_id)))?;

    let role = state
        .roles
        .get_role(&request.target_role_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Role {} not found", request.target_role_id)))?;

    let recommendation = state.engine.generate_recommendation(&employee, &role)?;

    let existing = state
        .recommendations
        .find_for_pair(&employee.id, &role.id)
        .await?;
    if let Some(existing) = existing.filter(|r| r.status != RecommendationStatus::Pending) {
        let e = reviewed_conflict(&existing);
        warn!("Refused to regenerate for {} → {}: {e}", employee.id, role.id);
        return Err(e);
    }

    let persisted = if recommendation.is_actionable() {
        state.recommendations.save(&recommendation).await?;
        true
    } else {
        if state
            .recommendations
            .discard_pending(&employee.id, &role.id)
            .await?
        {
            info!(
                "Discarded stale pending recommendation for {} → {}",
                employee.id, role.id
            );
        }
        info!(
            "Employee {} already meets every requirement of {}; nothing stored",
            employee.id, role.id
        );
        false
    };

    info!(
        "Recommendation for {} → {}: {} gaps, {} months, confidence {:.2}",
        employee.id,
        role.id,
        recommendation.skill_gaps.len(),
        recommendation.timeline,
        recommendation.confidence
    );

    Ok(Json(GenerateRecommendationResponse {
        recommendation,
        persisted,
    }))
}

/// POST /api/v1/recommendations/preview
///
/// Runs the engine on inline employee and role records. Nothing is read or stored.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<Recommendation>, AppError> {
    let recommendation = state
        .engine
        .generate_recommendation(&request.employee, &request.role)?;
    Ok(Json(recommendation))
}

/// GET /api/v1/recommendations?employee_id=
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<EmployeeQuery>,
) -> Result<Json<Vec<Recommendation>>, AppError> {
    let recommendations = state
        .recommendations
        .list_for_employee(&params.employee_id)
        .await?;
    Ok(Json(recommendations))
}

/// GET /api/v1/recommendations/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Recommendation>, AppError> {
    let recommendation = state
        .recommendations
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Recommendation {id} not found")))?;
    Ok(Json(recommendation))
}

/// PATCH /api/v1/recommendations/:id/status
///
/// Moves a recommendation through its review lifecycle.
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<Recommendation>, AppError> {
    let current = state
        .recommendations
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Recommendation {id} not found")))?;

    if let Err(e) = ensure_transition(current.status, request.status) {
        warn!("Rejected status change for {id}: {e}");
        return Err(e);
    }

    let updated = match state
        .recommendations
        .update_status(id, current.status, request.status, state.engine.now())
        .await?
    {
        Some(updated) => updated,
        None => {
            let e = match state.recommendations.get(id).await? {
                Some(latest) => AppError::Conflict(format!(
                    "Recommendation {id} moved from {} to {} before this update was applied",
                    current.status, latest.status
                )),
                None => AppError::NotFound(format!("Recommendation {id} not found")),
            };
            warn!("Lost status update race for {id}: {e}");
            return Err(e);
        }
    };

    info!("Recommendation {id}: {} → {}", current.status, updated.status);
    Ok(Json(updated))
}
