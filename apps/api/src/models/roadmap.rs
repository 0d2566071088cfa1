use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::engine::RoadmapPlan;
use crate::errors::AppError;

/// Raw row. `weeks_data` and `progress` are JSON stored as text.
#[derive(Debug, Clone, FromRow)]
pub struct LearningRoadmapRow {
    pub id: i64,
    pub user_id: i64,
    pub career_path_id: i64,
    pub title: String,
    pub description: String,
    pub weeks_data: String,
    pub progress: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One week of a learning roadmap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekPlan {
    pub week: u32,
    pub topic: String,
    pub description: String,
    pub resources: Vec<String>,
    pub hours: u32,
}

/// Client-facing roadmap with the JSON columns parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub id: i64,
    pub user_id: i64,
    pub career_path_id: i64,
    pub title: String,
    pub description: String,
    pub weeks_data: Vec<WeekPlan>,
    pub progress: Vec<bool>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<LearningRoadmapRow> for Roadmap {
    type Error = AppError;

    fn try_from(row: LearningRoadmapRow) -> Result<Self, AppError> {
        let weeks_data: Vec<WeekPlan> =
            serde_json::from_str(&row.weeks_data).map_err(|e| AppError::Internal(e.into()))?;
        let progress: Vec<bool> =
            serde_json::from_str(&row.progress).map_err(|e| AppError::Internal(e.into()))?;
        Ok(Roadmap {
            id: row.id,
            user_id: row.user_id,
            career_path_id: row.career_path_id,
            title: row.title,
            description: row.description,
            weeks_data,
            progress,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

pub async fn roadmap_for_path(
    pool: &SqlitePool,
    career_path_id: i64,
    user_id: i64,
) -> Result<Option<Roadmap>, AppError> {
    let row = sqlx::query_as::<_, LearningRoadmapRow>(
        "SELECT * FROM learning_roadmaps WHERE career_path_id = ? AND user_id = ?",
    )
    .bind(career_path_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    row.map(Roadmap::try_from).transpose()
}

pub async fn roadmap_by_id(
    pool: &SqlitePool,
    roadmap_id: i64,
    user_id: i64,
) -> Result<Option<Roadmap>, AppError> {
    let row = sqlx::query_as::<_, LearningRoadmapRow>(
        "SELECT * FROM learning_roadmaps WHERE id = ? AND user_id = ?",
    )
    .bind(roadmap_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    row.map(Roadmap::try_from).transpose()
}

/// Inserts a freshly generated roadmap with progress zeroed for every week.
/// Returns the stored record.
pub async fn insert_roadmap(
    pool: &SqlitePool,
    user_id: i64,
    career_path_id: i64,
    plan: &RoadmapPlan,
) -> Result<Roadmap, AppError> {
    let progress = vec![false; plan.weeks.len()];
    let weeks_json =
        serde_json::to_string(&plan.weeks).map_err(|e| AppError::Internal(e.into()))?;
    let progress_json =
        serde_json::to_string(&progress).map_err(|e| AppError::Internal(e.into()))?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO learning_roadmaps (user_id, career_path_id, title, description, weeks_data, progress)
         VALUES (?, ?, ?, ?, ?, ?)
         RETURNING id",
    )
    .bind(user_id)
    .bind(career_path_id)
    .bind(&plan.title)
    .bind(&plan.description)
    .bind(weeks_json)
    .bind(progress_json)
    .fetch_one(pool)
    .await?;

    roadmap_by_id(pool, id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Roadmap {id} not found after insert")))
}

/// Sets one week's completion flag. The caller validates the index bounds.
pub async fn update_progress(
    pool: &SqlitePool,
    roadmap_id: i64,
    progress: &[bool],
) -> Result<(), AppError> {
    let progress_json =
        serde_json::to_string(progress).map_err(|e| AppError::Internal(e.into()))?;
    sqlx::query(
        "UPDATE learning_roadmaps
         SET progress = ?, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
         WHERE id = ?",
    )
    .bind(progress_json)
    .bind(roadmap_id)
    .execute(pool)
    .await?;
    Ok(())
}
