//! Career-path scoring — overlap against each catalog role's ideal skill
//! list, plus a bounded random feasibility bonus.
//!
//! The jitter source is injected so tests can pin it; the production default
//! draws from `rand::thread_rng`. Feasibility is therefore non-deterministic
//! across calls while the overlap component stays fixed for a given skill set.

use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;

use crate::engine::catalog::PATH_TEMPLATES;
use crate::engine::{ScoredPath, UserSkill};
use crate::errors::AppError;
use crate::llm_client::{prompts, LlmClient};

/// Returns a value in `[lo, hi)`.
pub type JitterFn = Arc<dyn Fn(i64, i64) -> i64 + Send + Sync>;

pub fn thread_rng_jitter() -> JitterFn {
    Arc::new(|lo, hi| rand::thread_rng().gen_range(lo..hi))
}

#[async_trait]
pub trait PathScorer: Send + Sync {
    async fn score(
        &self,
        source_role: &str,
        skills: &[UserSkill],
    ) -> Result<Vec<ScoredPath>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicPathScorer — deterministic default (modulo jitter)
// ────────────────────────────────────────────────────────────────────────────

pub struct HeuristicPathScorer {
    pub jitter: JitterFn,
}

impl HeuristicPathScorer {
    pub fn new(jitter: JitterFn) -> Self {
        Self { jitter }
    }
}

#[async_trait]
impl PathScorer for HeuristicPathScorer {
    async fn score(
        &self,
        source_role: &str,
        skills: &[UserSkill],
    ) -> Result<Vec<ScoredPath>, AppError> {
        Ok(score_career_paths(source_role, skills, &self.jitter))
    }
}

pub fn score_career_paths(
    source_role: &str,
    skills: &[UserSkill],
    jitter: &JitterFn,
) -> Vec<ScoredPath> {
    let source_lower = source_role.trim().to_lowercase();

    let mut paths: Vec<ScoredPath> = PATH_TEMPLATES
        .iter()
        .filter(|t| t.target_role.to_lowercase() != source_lower)
        .map(|t| {
            let skill_overlap = if t.ideal_skills.is_empty() {
                jitter(20, 50)
            } else {
                let matching = skills
                    .iter()
                    .filter(|s| t.ideal_skills.contains(&s.name.as_str()))
                    .count();
                ((matching as f64 / t.ideal_skills.len() as f64) * 100.0).round() as i64
            };
            let feasibility_score = (skill_overlap + jitter(10, 25)).min(100);

            ScoredPath {
                target_role: t.target_role.to_string(),
                median_salary: t.median_salary,
                growth_rate: t.growth_rate,
                market_demand: t.market_demand.to_string(),
                skill_overlap,
                feasibility_score,
                skill_gaps: t.skill_gaps.iter().map(|g| g.to_string()).collect(),
                transition_time_months: t.transition_time_months,
            }
        })
        .collect();

    // Stable sort: equal feasibility keeps catalog order.
    paths.sort_by(|a, b| b.feasibility_score.cmp(&a.feasibility_score));
    paths
}

// ────────────────────────────────────────────────────────────────────────────
// LlmPathScorer — live backend
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmPathScorer(pub LlmClient);

#[derive(serde::Deserialize)]
struct PathsEnvelope {
    paths: Vec<ScoredPath>,
}

#[async_trait]
impl PathScorer for LlmPathScorer {
    async fn score(
        &self,
        source_role: &str,
        skills: &[UserSkill],
    ) -> Result<Vec<ScoredPath>, AppError> {
        let skill_summary = skills
            .iter()
            .map(|s| format!("{} ({}, {}%)", s.name, s.category, s.proficiency))
            .collect::<Vec<_>>()
            .join(", ");
        let prompt = format!(
            "Current role: {}\nSkills: {}",
            if source_role.trim().is_empty() {
                "General Professional"
            } else {
                source_role
            },
            if skill_summary.is_empty() {
                "No skills assessed yet".to_string()
            } else {
                skill_summary
            }
        );
        let envelope: PathsEnvelope = self
            .0
            .call_json(prompts::CAREER_PATHS_SYSTEM, &prompt, 0.4)
            .await
            .map_err(|e| AppError::Llm(e.to_string()))?;
        Ok(envelope.paths)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn pinned(value: i64) -> JitterFn {
        Arc::new(move |lo, hi| value.clamp(lo, hi - 1))
    }

    fn skill(name: &str) -> UserSkill {
        UserSkill {
            name: name.to_string(),
            category: "Technical".to_string(),
            proficiency: 70,
        }
    }

    #[test]
    fn test_source_role_excluded_case_insensitive() {
        let paths = score_career_paths("marketing MANAGER", &[], &pinned(10));
        assert!(paths.iter().all(|p| p.target_role != "Marketing Manager"));
        assert_eq!(paths.len(), PATH_TEMPLATES.len() - 1);
    }

    #[test]
    fn test_unknown_source_role_keeps_full_catalog() {
        let paths = score_career_paths("Zookeeper", &[], &pinned(10));
        assert_eq!(paths.len(), PATH_TEMPLATES.len());
    }

    #[test]
    fn test_overlap_bounds_and_feasibility_at_least_overlap() {
        let skills: Vec<UserSkill> = [
            "Data Analysis",
            "SQL & Databases",
            "Python Programming",
            "Problem Solving",
        ]
        .iter()
        .map(|s| skill(s))
        .collect();

        let paths = score_career_paths("", &skills, &pinned(10));
        for p in &paths {
            assert!((0..=100).contains(&p.skill_overlap), "{}", p.target_role);
            assert!((0..=100).contains(&p.feasibility_score));
            assert!(p.feasibility_score >= p.skill_overlap || p.feasibility_score == 100);
        }
    }

    #[test]
    fn test_exact_overlap_for_data_analyst_ideal_set() {
        // 4 of the Data Analyst role's 7 ideal skills → round(4/7*100) = 57.
        let skills: Vec<UserSkill> = [
            "Data Analysis",
            "SQL & Databases",
            "Python Programming",
            "Problem Solving",
        ]
        .iter()
        .map(|s| skill(s))
        .collect();

        let paths = score_career_paths("", &skills, &pinned(10));
        let da = paths
            .iter()
            .find(|p| p.target_role == "Data Analyst")
            .unwrap();
        assert_eq!(da.skill_overlap, 57);
        assert_eq!(da.feasibility_score, 67);
    }

    #[test]
    fn test_feasibility_capped_at_100() {
        let skills: Vec<UserSkill> = PATH_TEMPLATES
            .iter()
            .flat_map(|t| t.ideal_skills.iter())
            .map(|s| skill(s))
            .collect();
        let paths = score_career_paths("", &skills, &pinned(24));
        for p in &paths {
            assert!(p.feasibility_score <= 100);
        }
        // Full overlap everywhere: 100 + jitter clamps to 100.
        assert!(paths.iter().all(|p| p.feasibility_score == 100));
    }

    #[test]
    fn test_sorted_descending_by_feasibility() {
        let skills = vec![skill("Data Analysis"), skill("SQL & Databases")];
        let paths = score_career_paths("", &skills, &pinned(12));
        for pair in paths.windows(2) {
            assert!(pair[0].feasibility_score >= pair[1].feasibility_score);
        }
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        // No skills and pinned jitter: every overlap is 0, every feasibility
        // equal, so the output must match catalog order exactly.
        let paths = score_career_paths("", &[], &pinned(15));
        let expected: Vec<&str> = PATH_TEMPLATES.iter().map(|t| t.target_role).collect();
        let actual: Vec<&str> = paths.iter().map(|p| p.target_role.as_str()).collect();
        assert_eq!(actual, expected);
    }
}
