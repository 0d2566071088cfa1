//! Roadmap generation, retrieval, and progress tracking.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::engine::UserSkill;
use crate::errors::AppError;
use crate::models::activity::log_action;
use crate::models::career::{path_by_id, CareerPath};
use crate::models::roadmap::{
    insert_roadmap, roadmap_by_id, roadmap_for_path, update_progress, Roadmap,
};
use crate::models::skills::skills_for_user;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub career_path_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub roadmap: Roadmap,
    pub career_path: Option<CareerPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock_mode: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub week_index: Option<i64>,
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub progress: Vec<bool>,
    pub updated: bool,
}

/// POST /api/roadmap/generate
///
/// Idempotent per (user, career_path): a repeat call returns the stored
/// roadmap unchanged instead of regenerating.
pub async fn handle_generate(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<GenerateRequest>,
) -> Result<(StatusCode, Json<RoadmapResponse>), AppError> {
    let career_path_id = req
        .career_path_id
        .ok_or_else(|| AppError::Validation("career_path_id is required".to_string()))?;

    let career_path = path_by_id(&state.db, career_path_id, auth.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Career path not found".to_string()))?;

    if let Some(existing) = roadmap_for_path(&state.db, career_path_id, auth.id).await? {
        return Ok((
            StatusCode::OK,
            Json(RoadmapResponse {
                roadmap: existing,
                career_path: Some(career_path),
                mock_mode: None,
            }),
        ));
    }

    let skills: Vec<UserSkill> = skills_for_user(&state.db, auth.id)
        .await?
        .into_iter()
        .map(|s| UserSkill {
            name: s.skill_name,
            category: s.category,
            proficiency: s.proficiency,
        })
        .collect();

    let plan = state
        .roadmaps
        .generate(
            &career_path.target_role,
            &career_path.source_role,
            &career_path.skill_gaps,
            &skills,
        )
        .await?;

    let roadmap = insert_roadmap(&state.db, auth.id, career_path_id, &plan).await?;

    log_action(
        &state.db,
        auth.id,
        "roadmap_generate",
        &format!("Generated roadmap for {}", career_path.target_role),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(RoadmapResponse {
            roadmap,
            career_path: Some(career_path),
            mock_mode: Some(state.config.mock_mode()),
        }),
    ))
}

/// GET /api/roadmap/:pathId
///
/// Looks up by career path id, not roadmap id.
pub async fn handle_get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path_id): Path<i64>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let roadmap = roadmap_for_path(&state.db, path_id, auth.id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound("Roadmap not found. Generate one first.".to_string())
        })?;

    let career_path = path_by_id(&state.db, path_id, auth.id).await?;

    Ok(Json(RoadmapResponse {
        roadmap,
        career_path,
        mock_mode: None,
    }))
}

/// PATCH /api/roadmap/:id/progress
pub async fn handle_progress(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(roadmap_id): Path<i64>,
    Json(req): Json<ProgressRequest>,
) -> Result<Json<ProgressResponse>, AppError> {
    let (week_index, completed) = match (req.week_index, req.completed) {
        (Some(w), Some(c)) => (w, c),
        _ => {
            return Err(AppError::Validation(
                "week_index and completed are required".to_string(),
            ))
        }
    };

    let roadmap = roadmap_by_id(&state.db, roadmap_id, auth.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Roadmap not found".to_string()))?;

    let mut progress = roadmap.progress;
    if week_index < 0 || week_index as usize >= progress.len() {
        return Err(AppError::Validation("Invalid week index".to_string()));
    }
    progress[week_index as usize] = completed;

    update_progress(&state.db, roadmap_id, &progress).await?;

    log_action(
        &state.db,
        auth.id,
        "progress_update",
        &format!(
            "Week {}: {}",
            week_index + 1,
            if completed { "completed" } else { "uncompleted" }
        ),
    )
    .await?;

    Ok(Json(ProgressResponse {
        progress,
        updated: true,
    }))
}
