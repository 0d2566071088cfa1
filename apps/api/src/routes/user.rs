//! Account settings, dashboard stats, and the activity feed.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::activity::{action_icon, action_label, log_action, recent_activity};
use crate::models::user::{PublicUser, UserRow};
use crate::state::AppState;
use crate::validation::{optional_str, required_str};

const ACTIVITY_LIMIT: i64 = 20;
const MAX_YEARS_EXPERIENCE: i64 = 50;

#[derive(Debug, Deserialize)]
pub struct SettingsRequest {
    pub name: Option<String>,
    pub current_role: Option<String>,
    /// Accepts any JSON value; anything but an in-range integer stores 0.
    pub years_experience: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub user: PublicUser,
    pub updated: bool,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub skills: i64,
    pub career_paths: i64,
    pub roadmaps: i64,
    pub learning_progress: i64,
    pub completed_weeks: usize,
    pub total_weeks: usize,
}

#[derive(Debug, Serialize)]
pub struct ActivityEntry {
    pub id: i64,
    pub action: String,
    pub label: String,
    pub icon: String,
    pub details: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub activity: Vec<ActivityEntry>,
}

/// PATCH /api/user/settings
///
/// Partial update. Out-of-range years_experience is stored as 0 rather
/// than rejected.
pub async fn handle_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SettingsRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    let name = match req.name.as_deref() {
        Some(v) => Some(required_str("name", Some(v), 2, 100)?),
        None => None,
    };
    let current_role = optional_str("current_role", req.current_role.as_deref(), 0, 100)?;
    let years_experience = req.years_experience.map(|v| {
        v.as_i64()
            .filter(|y| (0..=MAX_YEARS_EXPERIENCE).contains(y))
            .unwrap_or(0)
    });

    if name.is_none() && current_role.is_none() && years_experience.is_none() {
        return Err(AppError::Validation("No fields to update".to_string()));
    }

    sqlx::query(
        "UPDATE users SET
            name = COALESCE(?, name),
            current_role = COALESCE(?, current_role),
            years_experience = COALESCE(?, years_experience),
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
         WHERE id = ?",
    )
    .bind(&name)
    .bind(&current_role)
    .bind(years_experience)
    .bind(auth.id)
    .execute(&state.db)
    .await?;

    let user: UserRow = sqlx::query_as("SELECT * FROM users WHERE id = ?")
        .bind(auth.id)
        .fetch_one(&state.db)
        .await?;

    log_action(&state.db, auth.id, "settings_update", "Updated profile settings").await?;

    Ok(Json(SettingsResponse {
        user: user.into(),
        updated: true,
    }))
}

/// GET /api/user/stats
pub async fn handle_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<StatsResponse>, AppError> {
    let skills: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM skill_profiles WHERE user_id = ?")
            .bind(auth.id)
            .fetch_one(&state.db)
            .await?;
    let career_paths: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM career_paths WHERE user_id = ?")
            .bind(auth.id)
            .fetch_one(&state.db)
            .await?;

    let progress_blobs: Vec<String> =
        sqlx::query_scalar("SELECT progress FROM learning_roadmaps WHERE user_id = ?")
            .bind(auth.id)
            .fetch_all(&state.db)
            .await?;

    let roadmaps = progress_blobs.len() as i64;
    let mut completed_weeks = 0usize;
    let mut total_weeks = 0usize;
    for blob in &progress_blobs {
        let progress: Vec<bool> = serde_json::from_str(blob).unwrap_or_default();
        completed_weeks += progress.iter().filter(|&&done| done).count();
        total_weeks += progress.len();
    }
    let learning_progress = if total_weeks == 0 {
        0
    } else {
        ((completed_weeks as f64 / total_weeks as f64) * 100.0).round() as i64
    };

    Ok(Json(StatsResponse {
        skills,
        career_paths,
        roadmaps,
        learning_progress,
        completed_weeks,
        total_weeks,
    }))
}

/// GET /api/user/activity
pub async fn handle_activity(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ActivityResponse>, AppError> {
    let rows = recent_activity(&state.db, auth.id, ACTIVITY_LIMIT).await?;

    let activity = rows
        .into_iter()
        .map(|row| ActivityEntry {
            id: row.id,
            label: action_label(&row.action).to_string(),
            icon: action_icon(&row.action).to_string(),
            action: row.action,
            details: row.details,
            created_at: row.created_at,
        })
        .collect();

    Ok(Json(ActivityResponse { activity }))
}
