use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::engine::ExtractedSkill;
use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillProfileRow {
    pub id: i64,
    pub user_id: i64,
    pub skill_name: String,
    pub category: String,
    pub proficiency: i64,
    pub onet_code: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

/// Replaces the user's entire skill set in one transaction.
/// Assessments never merge: the old set is deleted and the new one inserted.
pub async fn replace_skill_set(
    pool: &SqlitePool,
    user_id: i64,
    skills: &[ExtractedSkill],
) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM skill_profiles WHERE user_id = ?")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    for skill in skills {
        sqlx::query(
            "INSERT INTO skill_profiles (user_id, skill_name, category, proficiency, onet_code, source)
             VALUES (?, ?, ?, ?, ?, 'assessment')",
        )
        .bind(user_id)
        .bind(&skill.name)
        .bind(&skill.category)
        .bind(skill.proficiency)
        .bind(&skill.onet_code)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

pub async fn skills_for_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<SkillProfileRow>, AppError> {
    let rows = sqlx::query_as::<_, SkillProfileRow>(
        "SELECT * FROM skill_profiles WHERE user_id = ? ORDER BY proficiency DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
