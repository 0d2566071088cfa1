//! Skill assessment and profile routes.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::engine::ExtractedSkill;
use crate::errors::AppError;
use crate::models::activity::log_action;
use crate::models::skills::{replace_skill_set, skills_for_user, SkillProfileRow};
use crate::state::AppState;
use crate::validation::required_str;

#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    pub resume_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AssessResponse {
    pub skills: Vec<ExtractedSkill>,
    pub count: usize,
    pub mock_mode: bool,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub skills: Vec<SkillProfileRow>,
    pub categories: BTreeMap<String, Vec<SkillProfileRow>>,
    pub count: usize,
}

/// POST /api/skills/assess
///
/// Extracts skills from resume text and replaces the user's stored skill set.
pub async fn handle_assess(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<AssessRequest>,
) -> Result<Json<AssessResponse>, AppError> {
    let resume_text = required_str("resume_text", req.resume_text.as_deref(), 20, 15_000)?;

    let skills = state.extractor.extract(&resume_text).await?;

    replace_skill_set(&state.db, auth.id, &skills).await?;
    log_action(
        &state.db,
        auth.id,
        "skill_assessment",
        &format!("Extracted {} skills", skills.len()),
    )
    .await?;

    Ok(Json(AssessResponse {
        count: skills.len(),
        mock_mode: state.config.mock_mode(),
        skills,
    }))
}

/// GET /api/skills/profile
pub async fn handle_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let skills = skills_for_user(&state.db, auth.id).await?;

    let mut categories: BTreeMap<String, Vec<SkillProfileRow>> = BTreeMap::new();
    for skill in &skills {
        categories
            .entry(skill.category.clone())
            .or_default()
            .push(skill.clone());
    }

    Ok(Json(ProfileResponse {
        count: skills.len(),
        categories,
        skills,
    }))
}
