//! Job matching — scores the fixed job board against a user's skill set,
//! with an optional role-category filter.

use serde::Serialize;

use crate::engine::catalog::{JobTemplate, JOB_CATALOG};
use crate::engine::UserSkill;

/// Match score used when a posting lists no required skills.
const UNSCORED_MATCH: i64 = 30;

/// A posting annotated with the user's match score and skill breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct MatchedJob {
    pub id: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub salary_min: i64,
    pub salary_max: i64,
    #[serde(rename = "type")]
    pub employment_type: &'static str,
    pub experience: &'static str,
    pub role_category: &'static str,
    pub required_skills: Vec<&'static str>,
    pub posted_days_ago: i64,
    pub description: &'static str,
    pub match_score: i64,
    pub matching_skills: Vec<&'static str>,
    pub missing_skills: Vec<&'static str>,
}

/// Filters the catalog by role category (case-insensitive exact match) and
/// ranks by match score. A filter that matches nothing is silently dropped
/// rather than returning an empty board.
pub fn match_jobs(skills: &[UserSkill], target_role: Option<&str>) -> Vec<MatchedJob> {
    let filtered: Vec<&JobTemplate> = match target_role {
        Some(role) => {
            let role_lower = role.to_lowercase();
            let hits: Vec<&JobTemplate> = JOB_CATALOG
                .iter()
                .filter(|j| j.role_category.to_lowercase() == role_lower)
                .collect();
            if hits.is_empty() {
                JOB_CATALOG.iter().collect()
            } else {
                hits
            }
        }
        None => JOB_CATALOG.iter().collect(),
    };

    let mut jobs: Vec<MatchedJob> = filtered.into_iter().map(|j| score_job(j, skills)).collect();

    // Stable sort: equal scores keep catalog order.
    jobs.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    jobs
}

fn score_job(job: &JobTemplate, skills: &[UserSkill]) -> MatchedJob {
    let has = |required: &str| skills.iter().any(|s| s.name == required);

    let matching_skills: Vec<&'static str> = job
        .required_skills
        .iter()
        .copied()
        .filter(|r| has(r))
        .collect();
    let missing_skills: Vec<&'static str> = job
        .required_skills
        .iter()
        .copied()
        .filter(|r| !has(r))
        .collect();

    let match_score = if job.required_skills.is_empty() {
        UNSCORED_MATCH
    } else {
        ((matching_skills.len() as f64 / job.required_skills.len() as f64) * 100.0).round() as i64
    };

    MatchedJob {
        id: job.id,
        title: job.title,
        company: job.company,
        location: job.location,
        salary_min: job.salary_min,
        salary_max: job.salary_max,
        employment_type: job.employment_type,
        experience: job.experience,
        role_category: job.role_category,
        required_skills: job.required_skills.to_vec(),
        posted_days_ago: job.posted_days_ago,
        description: job.description,
        match_score,
        matching_skills,
        missing_skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str) -> UserSkill {
        UserSkill {
            name: name.to_string(),
            category: "Technical".to_string(),
            proficiency: 70,
        }
    }

    #[test]
    fn test_role_filter_case_insensitive() {
        let jobs = match_jobs(&[], Some("data analyst"));
        assert!(!jobs.is_empty());
        assert!(jobs.iter().all(|j| j.role_category == "Data Analyst"));
    }

    #[test]
    fn test_unknown_filter_falls_back_to_full_catalog() {
        let jobs = match_jobs(&[], Some("Astronaut"));
        assert_eq!(jobs.len(), JOB_CATALOG.len());
    }

    #[test]
    fn test_no_filter_returns_full_catalog() {
        let jobs = match_jobs(&[], None);
        assert_eq!(jobs.len(), JOB_CATALOG.len());
    }

    #[test]
    fn test_match_score_is_required_skill_coverage() {
        // da-1 requires 5 skills; supplying 2 of them → round(2/5*100) = 40.
        let skills = vec![skill("SQL & Databases"), skill("Data Analysis")];
        let jobs = match_jobs(&skills, Some("Data Analyst"));
        let da1 = jobs.iter().find(|j| j.id == "da-1").unwrap();
        assert_eq!(da1.match_score, 40);
        assert_eq!(da1.matching_skills.len(), 2);
        assert_eq!(da1.missing_skills.len(), 3);
    }

    #[test]
    fn test_sorted_descending_by_match_score() {
        let skills = vec![skill("Data Analysis"), skill("Communication")];
        let jobs = match_jobs(&skills, None);
        for pair in jobs.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn test_scores_bounded() {
        let skills: Vec<UserSkill> = JOB_CATALOG
            .iter()
            .flat_map(|j| j.required_skills.iter())
            .map(|s| skill(s))
            .collect();
        for job in match_jobs(&skills, None) {
            assert!((0..=100).contains(&job.match_score));
        }
    }
}
