use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedJobRow {
    pub id: i64,
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

pub async fn saved_jobs_for_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<SavedJobRow>, AppError> {
    let rows = sqlx::query_as::<_, SavedJobRow>(
        "SELECT id, job_id, job_title, company, status, created_at
         FROM saved_jobs WHERE user_id = ? ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Upserts a bookmark keyed on (user_id, job_id). A repeat save only
/// updates the status. Returns true when a new row was inserted.
pub async fn upsert_saved_job(
    pool: &SqlitePool,
    user_id: i64,
    job_id: &str,
    job_title: &str,
    company: &str,
    status: &str,
) -> Result<bool, AppError> {
    let existing: Option<i64> =
        sqlx::query_scalar("SELECT id FROM saved_jobs WHERE user_id = ? AND job_id = ?")
            .bind(user_id)
            .bind(job_id)
            .fetch_optional(pool)
            .await?;

    match existing {
        Some(id) => {
            sqlx::query(
                "UPDATE saved_jobs
                 SET status = ?, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?",
            )
            .bind(status)
            .bind(id)
            .execute(pool)
            .await?;
            Ok(false)
        }
        None => {
            sqlx::query(
                "INSERT INTO saved_jobs (user_id, job_id, job_title, company, status)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(user_id)
            .bind(job_id)
            .bind(job_title)
            .bind(company)
            .bind(status)
            .execute(pool)
            .await?;
            Ok(true)
        }
    }
}

pub async fn delete_saved_job(
    pool: &SqlitePool,
    user_id: i64,
    job_id: &str,
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM saved_jobs WHERE user_id = ? AND job_id = ?")
        .bind(user_id)
        .bind(job_id)
        .execute(pool)
        .await?;
    Ok(())
}
