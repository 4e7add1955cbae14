//! Input checks run before any scoring, so malformed profiles fail loudly
//! instead of producing NaN scores or negative gaps.

use crate::models::employee::Employee;
use crate::models::role::Role;
use crate::recommendation::engine::EngineError;

pub const MIN_LEVEL: i32 = 0;
pub const MAX_LEVEL: i32 = 5;

pub fn validate_employee(employee: &Employee) -> Result<(), EngineError> {
    if employee.id.trim().is_empty() {
        return Err(EngineError::InvalidInput("employee id cannot be empty".to_string()));
    }
    validate_experience("employee", &employee.id, employee.experience)?;

    for (skill, level) in &employee.skills {
        validate_level(&employee.id, skill, level.level)?;
    }
    Ok(())
}

pub fn validate_role(role: &Role) -> Result<(), EngineError> {
    if role.id.trim().is_empty() {
        return Err(EngineError::InvalidInput("role id cannot be empty".to_string()));
    }
    validate_experience("role", &role.id, role.experience)?;

    for (skill, req) in &role.required_skills {
        if skill.trim().is_empty() {
            return Err(EngineError::InvalidInput(format!(
                "role {} has a required skill with an empty name",
                role.id
            )));
        }
        validate_level(&role.id, skill, req.minimum_level)?;
        if !req.weight.is_finite() || !(0.0..=1.0).contains(&req.weight) {
            return Err(EngineError::InvalidInput(format!(
                "weight for '{skill}' on {} must be between 0 and 1, got {}",
                role.id, req.weight
            )));
        }
    }
    Ok(())
}

fn validate_experience(kind: &str, id: &str, experience: f64) -> Result<(), EngineError> {
    if !experience.is_finite() || experience < 0.0 {
        return Err(EngineError::InvalidInput(format!(
            "{kind} {id} has invalid experience {experience}"
        )));
    }
    Ok(())
}

fn validate_level(owner: &str, skill: &str, level: i32) -> Result<(), EngineError> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(EngineError::InvalidInput(format!(
            "level for '{skill}' on {owner} must be between {MIN_LEVEL} and {MAX_LEVEL}, got {level}"
        )));
    }
    Ok(())
}
