//! Profile API endpoints (the admin CRUD surface).

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateProfileRequest, Profile, UpdateProfileRequest};
use crate::AppState;

/// GET /api/profiles - List all profiles, newest first.
pub async fn list_profiles(State(state): State<AppState>) -> ApiResult<Vec<Profile>> {
    let profiles = state.repo.list_profiles().await?;
    success(profiles)
}

/// GET /api/profiles/:id - Get a single profile.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Profile> {
    match state.repo.get_profile(&id).await? {
        Some(profile) => success(profile),
        None => Err(AppError::NotFound(format!("Profile {} not found", id))),
    }
}

/// POST /api/profiles - Create a new profile.
pub async fn create_profile(
    State(state): State<AppState>,
    Json(mut request): Json<CreateProfileRequest>,
) -> ApiResult<Profile> {
    // Validate required fields
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }
    if request.role.trim().is_empty() {
        return Err(AppError::Validation("Role is required".to_string()));
    }

    request.skills = normalize_skills(request.skills);
    if request.skills.is_empty() {
        return Err(AppError::Validation(
            "At least one skill is required".to_string(),
        ));
    }

    let profile = state.repo.create_profile(&request).await?;
    success(profile)
}

/// PUT /api/profiles/:id - Update a profile.
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut request): Json<UpdateProfileRequest>,
) -> ApiResult<Profile> {
    if let Some(name) = &request.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Name cannot be empty".to_string()));
        }
    }
    if let Some(role) = &request.role {
        if role.trim().is_empty() {
            return Err(AppError::Validation("Role cannot be empty".to_string()));
        }
    }
    if let Some(skills) = request.skills.take() {
        let skills = normalize_skills(skills);
        if skills.is_empty() {
            return Err(AppError::Validation(
                "At least one skill is required".to_string(),
            ));
        }
        request.skills = Some(skills);
    }

    let profile = state.repo.update_profile(&id, &request).await?;
    success(profile)
}

/// DELETE /api/profiles/:id - Delete a profile.
pub async fn delete_profile(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.repo.delete_profile(&id).await?;
    success(())
}

/// Trim skill labels, drop empties, and deduplicate while keeping the order
/// they were entered in (display order is storage order).
fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        let skill = skill.trim();
        if skill.is_empty() {
            continue;
        }
        if !normalized.iter().any(|s| s == skill) {
            normalized.push(skill.to_string());
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_skills_trims_and_dedupes() {
        let skills = vec![
            " Go ".to_string(),
            "SQL".to_string(),
            "Go".to_string(),
            "  ".to_string(),
        ];
        assert_eq!(normalize_skills(skills), vec!["Go", "SQL"]);
    }
}
