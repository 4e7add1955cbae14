use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::models::role::Role;
use crate::recommendation::validation::{validate_employee, validate_role};
use crate::state::AppState;

/// GET /api/v1/employees/:id
pub async fn handle_get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, AppError> {
    let employee = state
        .employees
        .get_employee(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {id} not found")))?;
    Ok(Json(employee))
}

/// PUT /api/v1/employees/:id
pub async fn handle_put_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut employee): Json<Employee>,
) -> Result<Json<Employee>, AppError> {
    ensure_path_matches(&id, &employee.id)?;
    validate_employee(&employee)?;

    employee.updated_at = Some(state.engine.now());
    state.employees.upsert_employee(&employee).await?;

    info!("Employee {id} saved with {} skills", employee.skills.len());
    Ok(Json(employee))
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Result<Json<Vec<Role>>, AppError> {
    Ok(Json(state.roles.list_roles().await?))
}

/// GET /api/v1/roles/:id
pub async fn handle_get_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Role>, AppError> {
    let role = state
        .roles
        .get_role(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Role {id} not found")))?;
    Ok(Json(role))
}

/// PUT /api/v1/roles/:id
pub async fn handle_put_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(role): Json<Role>,
) -> Result<Json<Role>, AppError> {
    ensure_path_matches(&id, &role.id)?;
    validate_role(&role)?;

    state.roles.upsert_role(&role).await?;

    info!(
        "Role {id} saved with {} required skills",
        role.required_skills.len()
    );
    Ok(Json(role))
}

fn ensure_path_matches(path_id: &str, body_id: &str) -> Result<(), AppError> {
    if path_id != body_id {
        return Err(AppError::Validation(format!(
            "Path id '{path_id}' does not match body id '{body_id}'"
        )));
    }
    Ok(())
}
