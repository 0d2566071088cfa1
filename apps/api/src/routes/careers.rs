//! Career exploration routes.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::auth::AuthUser;
use crate::engine::UserSkill;
use crate::errors::AppError;
use crate::models::activity::log_action;
use crate::models::career::{paths_for_user, replace_career_paths, CareerPath};
use crate::models::skills::skills_for_user;
use crate::state::AppState;

const DEFAULT_SOURCE_ROLE: &str = "General Professional";

#[derive(Debug, Serialize)]
pub struct SavedPathsResponse {
    pub paths: Vec<CareerPath>,
    pub source_role: String,
}

#[derive(Debug, Serialize)]
pub struct ExploreResponse {
    pub paths: Vec<CareerPath>,
    pub source_role: String,
    pub mock_mode: bool,
}

async fn source_role_for(state: &AppState, user_id: i64) -> Result<String, AppError> {
    let current_role: Option<String> =
        sqlx::query_scalar("SELECT current_role FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&state.db)
            .await?;
    Ok(current_role
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SOURCE_ROLE.to_string()))
}

/// GET /api/careers/saved
///
/// Stored paths only — no regeneration, fast enough for the dashboard.
pub async fn handle_saved(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<SavedPathsResponse>, AppError> {
    let paths = paths_for_user(&state.db, auth.id).await?;
    let source_role = source_role_for(&state, auth.id).await?;
    Ok(Json(SavedPathsResponse { paths, source_role }))
}

/// GET /api/careers/explore
///
/// Scores the catalog against the user's skills and replaces the stored
/// path set, then re-reads it so the response carries row ids.
pub async fn handle_explore(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ExploreResponse>, AppError> {
    let source_role = source_role_for(&state, auth.id).await?;

    let skills: Vec<UserSkill> = skills_for_user(&state.db, auth.id)
        .await?
        .into_iter()
        .map(|s| UserSkill {
            name: s.skill_name,
            category: s.category,
            proficiency: s.proficiency,
        })
        .collect();

    let scored = state.scorer.score(&source_role, &skills).await?;
    replace_career_paths(&state.db, auth.id, &source_role, &scored).await?;

    let paths = paths_for_user(&state.db, auth.id).await?;

    log_action(
        &state.db,
        auth.id,
        "career_explore",
        &format!("Generated {} career paths", paths.len()),
    )
    .await?;

    Ok(Json(ExploreResponse {
        paths,
        source_role,
        mock_mode: state.config.mock_mode(),
    }))
}
