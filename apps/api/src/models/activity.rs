use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SessionLogRow {
    pub id: i64,
    pub action: String,
    pub details: String,
    pub created_at: DateTime<Utc>,
}

/// Appends one audit row. Every mutating route calls this; the log is
/// append-only and never edited.
pub async fn log_action(
    pool: &SqlitePool,
    user_id: i64,
    action: &str,
    details: &str,
) -> Result<(), AppError> {
    sqlx::query("INSERT INTO session_logs (user_id, action, details) VALUES (?, ?, ?)")
        .bind(user_id)
        .bind(action)
        .bind(details)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn recent_activity(
    pool: &SqlitePool,
    user_id: i64,
    limit: i64,
) -> Result<Vec<SessionLogRow>, AppError> {
    let rows = sqlx::query_as::<_, SessionLogRow>(
        "SELECT id, action, details, created_at FROM session_logs
         WHERE user_id = ? ORDER BY created_at DESC LIMIT ?",
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Human-readable label for a logged action, for the activity feed.
pub fn action_label(action: &str) -> &str {
    match action {
        "register" => "Account Created",
        "login" => "Signed In",
        "skill_assessment" => "Skills Assessed",
        "career_explore" => "Careers Explored",
        "roadmap_generate" => "Roadmap Generated",
        "progress_update" => "Progress Updated",
        "settings_update" => "Settings Updated",
        "job_search" => "Jobs Searched",
        "job_saved" => "Job Saved",
        other => other,
    }
}

/// Icon name the client renders next to each activity entry.
pub fn action_icon(action: &str) -> &str {
    match action {
        "register" => "user-add",
        "login" => "login",
        "skill_assessment" => "clipboard-check",
        "career_explore" => "map",
        "roadmap_generate" => "academic-cap",
        "progress_update" => "check-circle",
        "settings_update" => "cog",
        "job_search" => "briefcase",
        "job_saved" => "bookmark",
        _ => "information-circle",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_actions_have_labels() {
        assert_eq!(action_label("login"), "Signed In");
        assert_eq!(action_label("roadmap_generate"), "Roadmap Generated");
    }

    #[test]
    fn test_unknown_action_passes_through() {
        assert_eq!(action_label("mystery"), "mystery");
        assert_eq!(action_icon("mystery"), "information-circle");
    }
}
