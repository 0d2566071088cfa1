//! Job board and saved-job routes. Listings come from the fixed catalog;
//! bookmarks are the only persisted state.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::engine::matcher::{match_jobs, MatchedJob};
use crate::engine::UserSkill;
use crate::errors::AppError;
use crate::models::activity::log_action;
use crate::models::jobs::{delete_saved_job, saved_jobs_for_user, upsert_saved_job, SavedJobRow};
use crate::models::skills::skills_for_user;
use crate::state::AppState;
use crate::validation::{optional_str, required_str};

#[derive(Debug, Deserialize)]
pub struct JobsQuery {
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub jobs: Vec<MatchedJob>,
    pub target_role: Option<String>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct SavedJobsResponse {
    pub saved: Vec<SavedJobRow>,
}

#[derive(Debug, Deserialize)]
pub struct SaveJobRequest {
    pub job_id: Option<String>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /api/jobs
///
/// Ranked listings. The role filter falls back to the user's top stored
/// career path when the query leaves it out.
pub async fn handle_list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<JobsQuery>,
) -> Result<Json<JobsResponse>, AppError> {
    let skills: Vec<UserSkill> = skills_for_user(&state.db, auth.id)
        .await?
        .into_iter()
        .map(|s| UserSkill {
            name: s.skill_name,
            category: s.category,
            proficiency: s.proficiency,
        })
        .collect();

    let target_role = match query.role {
        Some(role) if !role.trim().is_empty() => Some(role),
        _ => {
            sqlx::query_scalar::<_, String>(
                "SELECT target_role FROM career_paths WHERE user_id = ?
                 ORDER BY feasibility_score DESC LIMIT 1",
            )
            .bind(auth.id)
            .fetch_optional(&state.db)
            .await?
        }
    };

    let jobs = match_jobs(&skills, target_role.as_deref());

    let details = match &target_role {
        Some(role) => format!("Searched jobs for {role}"),
        None => "Searched jobs".to_string(),
    };
    log_action(&state.db, auth.id, "job_search", &details).await?;

    Ok(Json(JobsResponse {
        total: jobs.len(),
        jobs,
        target_role,
    }))
}

/// GET /api/jobs/saved
pub async fn handle_saved(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<SavedJobsResponse>, AppError> {
    let saved = saved_jobs_for_user(&state.db, auth.id).await?;
    Ok(Json(SavedJobsResponse { saved }))
}

/// POST /api/jobs/save
pub async fn handle_save(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SaveJobRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let job_id = required_str("job_id", req.job_id.as_deref(), 1, 100)?;
    let job_title = required_str("job_title", req.job_title.as_deref(), 1, 200)?;
    let company = optional_str("company", req.company.as_deref(), 0, 200)?.unwrap_or_default();
    let status = optional_str("status", req.status.as_deref(), 0, 50)?
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "saved".to_string());

    let inserted =
        upsert_saved_job(&state.db, auth.id, &job_id, &job_title, &company, &status).await?;

    if inserted {
        log_action(
            &state.db,
            auth.id,
            "job_saved",
            &format!("Saved job: {job_title}"),
        )
        .await?;
        Ok(Json(MessageResponse {
            message: "Job saved",
        }))
    } else {
        Ok(Json(MessageResponse {
            message: "Job status updated",
        }))
    }
}

/// DELETE /api/jobs/save/:jobId
pub async fn handle_unsave(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    delete_saved_job(&state.db, auth.id, &job_id).await?;
    Ok(Json(MessageResponse {
        message: "Job removed",
    }))
}
