//! The skill-matching and career-path scoring engine.
//!
//! Each generator is a trait with two backends — a deterministic rules-based
//! one and an LLM-backed one — selected once at startup from config. Route
//! handlers only see the trait objects in `AppState`.

pub mod catalog;
pub mod extractor;
pub mod matcher;
pub mod roadmap;
pub mod scorer;

use serde::{Deserialize, Serialize};

pub use crate::models::roadmap::WeekPlan;

/// A skill extracted from resume text, before persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractedSkill {
    pub name: String,
    pub category: String,
    pub onet_code: String,
    pub proficiency: i64,
}

/// A user's stored skill, as the scorers see it.
#[derive(Debug, Clone, Serialize)]
pub struct UserSkill {
    pub name: String,
    pub category: String,
    pub proficiency: i64,
}

/// A scored career-path candidate, before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPath {
    pub target_role: String,
    pub median_salary: i64,
    pub growth_rate: f64,
    pub market_demand: String,
    pub skill_overlap: i64,
    pub feasibility_score: i64,
    pub skill_gaps: Vec<String>,
    pub transition_time_months: i64,
}

/// A generated 12-week plan, before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapPlan {
    pub title: String,
    pub description: String,
    pub weeks: Vec<WeekPlan>,
}
