use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::engine::ScoredPath;
use crate::errors::AppError;

/// Raw row. `skill_gaps` is a JSON array stored as text.
#[derive(Debug, Clone, FromRow)]
pub struct CareerPathRow {
    pub id: i64,
    pub user_id: i64,
    pub source_role: String,
    pub target_role: String,
    pub skill_overlap: i64,
    pub feasibility_score: i64,
    pub median_salary: i64,
    pub growth_rate: f64,
    pub market_demand: String,
    pub skill_gaps: String,
    pub transition_time_months: i64,
    pub created_at: DateTime<Utc>,
}

/// Client-facing career path with `skill_gaps` parsed out of the JSON column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPath {
    pub id: i64,
    pub user_id: i64,
    pub source_role: String,
    pub target_role: String,
    pub skill_overlap: i64,
    pub feasibility_score: i64,
    pub median_salary: i64,
    pub growth_rate: f64,
    pub market_demand: String,
    pub skill_gaps: Vec<String>,
    pub transition_time_months: i64,
    pub created_at: DateTime<Utc>,
}

impl From<CareerPathRow> for CareerPath {
    fn from(row: CareerPathRow) -> Self {
        let skill_gaps = serde_json::from_str(&row.skill_gaps).unwrap_or_default();
        CareerPath {
            id: row.id,
            user_id: row.user_id,
            source_role: row.source_role,
            target_role: row.target_role,
            skill_overlap: row.skill_overlap,
            feasibility_score: row.feasibility_score,
            median_salary: row.median_salary,
            growth_rate: row.growth_rate,
            market_demand: row.market_demand,
            skill_gaps,
            transition_time_months: row.transition_time_months,
            created_at: row.created_at,
        }
    }
}

/// Replaces the user's stored career paths with a freshly scored set,
/// in one transaction. Explore calls are full regenerations, never merges.
pub async fn replace_career_paths(
    pool: &SqlitePool,
    user_id: i64,
    source_role: &str,
    paths: &[ScoredPath],
) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM career_paths WHERE user_id = ?")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    for path in paths {
        let gaps_json =
            serde_json::to_string(&path.skill_gaps).map_err(|e| AppError::Internal(e.into()))?;
        sqlx::query(
            "INSERT INTO career_paths
                (user_id, source_role, target_role, skill_overlap, feasibility_score,
                 median_salary, growth_rate, market_demand, skill_gaps, transition_time_months)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(source_role)
        .bind(&path.target_role)
        .bind(path.skill_overlap)
        .bind(path.feasibility_score)
        .bind(path.median_salary)
        .bind(path.growth_rate)
        .bind(&path.market_demand)
        .bind(gaps_json)
        .bind(path.transition_time_months)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

pub async fn paths_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<CareerPath>, AppError> {
    let rows = sqlx::query_as::<_, CareerPathRow>(
        "SELECT * FROM career_paths WHERE user_id = ? ORDER BY feasibility_score DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(CareerPath::from).collect())
}

pub async fn path_by_id(
    pool: &SqlitePool,
    path_id: i64,
    user_id: i64,
) -> Result<Option<CareerPath>, AppError> {
    let row = sqlx::query_as::<_, CareerPathRow>(
        "SELECT * FROM career_paths WHERE id = ? AND user_id = ?",
    )
    .bind(path_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(CareerPath::from))
}
