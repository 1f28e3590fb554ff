//! Database repository for profile CRUD operations.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    Availability, CreateProfileRequest, MediaType, Profile, UpdateProfileRequest,
};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

const PROFILE_COLUMNS: &str = "id, name, role, experience, skills, availability, media_type, \
     media_url, thumbnail_url, bio, email, location, cv_url, created_at";

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all profiles, newest first. This is the one-shot read every
    /// listing surface starts from.
    pub async fn list_profiles(&self) -> Result<Vec<Profile>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(profile_from_row).collect())
    }

    /// Get a profile by ID.
    pub async fn get_profile(&self, id: &str) -> Result<Option<Profile>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(profile_from_row))
    }

    /// Create a new profile.
    pub async fn create_profile(
        &self,
        request: &CreateProfileRequest,
    ) -> Result<Profile, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let skills_json = serde_json::to_string(&request.skills).unwrap_or_default();

        sqlx::query(
            "INSERT INTO profiles (id, name, role, experience, skills, availability, media_type, \
             media_url, thumbnail_url, bio, email, location, cv_url, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.role)
        .bind(&request.experience)
        .bind(&skills_json)
        .bind(request.availability.as_str())
        .bind(request.media_type.as_str())
        .bind(&request.media_url)
        .bind(&request.thumbnail_url)
        .bind(&request.bio)
        .bind(&request.email)
        .bind(&request.location)
        .bind(&request.cv_url)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Profile {
            id,
            name: request.name.clone(),
            role: request.role.clone(),
            experience: request.experience.clone(),
            skills: request.skills.clone(),
            availability: request.availability,
            media_type: request.media_type,
            media_url: request.media_url.clone(),
            thumbnail_url: request.thumbnail_url.clone(),
            bio: request.bio.clone(),
            email: request.email.clone(),
            location: request.location.clone(),
            cv_url: request.cv_url.clone(),
            created_at: now,
        })
    }

    /// Update a profile. Fields absent from the request keep their stored
    /// value; the last writer wins.
    pub async fn update_profile(
        &self,
        id: &str,
        request: &UpdateProfileRequest,
    ) -> Result<Profile, AppError> {
        let existing = self
            .get_profile(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", id)))?;

        let name = request.name.as_ref().unwrap_or(&existing.name);
        let role = request.role.as_ref().unwrap_or(&existing.role);
        let experience = request.experience.as_ref().unwrap_or(&existing.experience);
        let skills = request.skills.clone().unwrap_or(existing.skills.clone());
        let availability = request.availability.unwrap_or(existing.availability);
        let media_type = request.media_type.unwrap_or(existing.media_type);
        let media_url = request.media_url.as_ref().unwrap_or(&existing.media_url);
        let thumbnail_url = request
            .thumbnail_url
            .clone()
            .or(existing.thumbnail_url.clone());
        let bio = request.bio.clone().or(existing.bio.clone());
        let email = request.email.clone().or(existing.email.clone());
        let location = request.location.clone().or(existing.location.clone());
        let cv_url = request.cv_url.clone().or(existing.cv_url.clone());
        let skills_json = serde_json::to_string(&skills).unwrap_or_default();

        let result = sqlx::query(
            "UPDATE profiles SET name = ?, role = ?, experience = ?, skills = ?, \
             availability = ?, media_type = ?, media_url = ?, thumbnail_url = ?, bio = ?, \
             email = ?, location = ?, cv_url = ? WHERE id = ?",
        )
        .bind(name)
        .bind(role)
        .bind(experience)
        .bind(&skills_json)
        .bind(availability.as_str())
        .bind(media_type.as_str())
        .bind(media_url)
        .bind(&thumbnail_url)
        .bind(&bio)
        .bind(&email)
        .bind(&location)
        .bind(&cv_url)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Profile {} not found", id)));
        }

        Ok(Profile {
            id: id.to_string(),
            name: name.clone(),
            role: role.clone(),
            experience: experience.clone(),
            skills,
            availability,
            media_type,
            media_url: media_url.clone(),
            thumbnail_url,
            bio,
            email,
            location,
            cv_url,
            created_at: existing.created_at,
        })
    }

    /// Delete a profile.
    pub async fn delete_profile(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Profile {} not found", id)));
        }

        Ok(())
    }
}

// Helper for row conversion. Raw availability and media type strings are
// validated here; anything outside the closed set becomes Unknown instead
// of passing through unchecked.

fn profile_from_row(row: &sqlx::sqlite::SqliteRow) -> Profile {
    let skills_str: Option<String> = row.get("skills");
    let availability: String = row.get("availability");
    let media_type: String = row.get("media_type");

    Profile {
        id: row.get("id"),
        name: row.get("name"),
        role: row.get("role"),
        experience: row.get("experience"),
        skills: skills_str.map(|s| parse_json_array(&s)).unwrap_or_default(),
        availability: Availability::from_db(&availability),
        media_type: MediaType::from_db(&media_type),
        media_url: row.get("media_url"),
        thumbnail_url: row.get("thumbnail_url"),
        bio: row.get("bio"),
        email: row.get("email"),
        location: row.get("location"),
        cv_url: row.get("cv_url"),
        created_at: row.get("created_at"),
    }
}

fn parse_json_array(s: &str) -> Vec<String> {
    serde_json::from_str(s).unwrap_or_default()
}
