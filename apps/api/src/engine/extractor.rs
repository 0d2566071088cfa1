//! Skill extraction — keyword table lookup by default, LLM-backed when a key
//! is configured. Both backends honor the same contract: text of at least 20
//! characters in, at least 3 deduplicated skills out.

use async_trait::async_trait;

use crate::engine::catalog::{DEFAULT_SKILLS, SKILL_KEYWORDS};
use crate::engine::ExtractedSkill;
use crate::errors::AppError;
use crate::llm_client::{prompts, LlmClient};

/// Minimum skills returned for any accepted resume.
const MIN_SKILLS: usize = 3;
/// Backfill stops once this many skills are present.
const BACKFILL_TARGET: usize = 5;

#[async_trait]
pub trait SkillExtractor: Send + Sync {
    async fn extract(&self, resume_text: &str) -> Result<Vec<ExtractedSkill>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordSkillExtractor — deterministic default
// ────────────────────────────────────────────────────────────────────────────

/// Table-driven extractor. No NLP, no frequency weighting: each keyword is a
/// substring test against the lowercased text, first match wins per skill,
/// and table order is the tie-break.
pub struct KeywordSkillExtractor;

#[async_trait]
impl SkillExtractor for KeywordSkillExtractor {
    async fn extract(&self, resume_text: &str) -> Result<Vec<ExtractedSkill>, AppError> {
        Ok(extract_keyword_skills(resume_text))
    }
}

pub fn extract_keyword_skills(resume_text: &str) -> Vec<ExtractedSkill> {
    let text = resume_text.to_lowercase();
    let mut detected: Vec<ExtractedSkill> = Vec::new();

    for entry in SKILL_KEYWORDS {
        if text.contains(entry.keyword) && !detected.iter().any(|s| s.name == entry.name) {
            detected.push(ExtractedSkill {
                name: entry.name.to_string(),
                category: entry.category.to_string(),
                onet_code: entry.onet_code.to_string(),
                proficiency: entry.proficiency,
            });
        }
    }

    // Thin resumes still get a usable profile: backfill from the defaults.
    if detected.len() < MIN_SKILLS {
        for entry in DEFAULT_SKILLS {
            if !detected.iter().any(|s| s.name == entry.name) {
                detected.push(ExtractedSkill {
                    name: entry.name.to_string(),
                    category: entry.category.to_string(),
                    onet_code: entry.onet_code.to_string(),
                    proficiency: entry.proficiency,
                });
            }
            if detected.len() >= BACKFILL_TARGET {
                break;
            }
        }
    }

    detected
}

// ────────────────────────────────────────────────────────────────────────────
// LlmSkillExtractor — live backend
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmSkillExtractor(pub LlmClient);

#[derive(serde::Deserialize)]
struct SkillsEnvelope {
    skills: Vec<ExtractedSkill>,
}

#[async_trait]
impl SkillExtractor for LlmSkillExtractor {
    async fn extract(&self, resume_text: &str) -> Result<Vec<ExtractedSkill>, AppError> {
        let prompt = format!(
            "Extract all professional skills from this resume/experience text and \
             return as a JSON object with a \"skills\" array:\n\n{resume_text}"
        );
        let envelope: SkillsEnvelope = self
            .0
            .call_json(prompts::SKILL_EXTRACTION_SYSTEM, &prompt, 0.3)
            .await
            .map_err(|e| AppError::Llm(e.to_string()))?;
        Ok(envelope.skills)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Bundled sample resume used across the demo flows.
    pub const SAMPLE_MARKETING_RESUME: &str = "Marketing manager with 8 years of experience \
        leading cross-functional teams. Drove data-driven campaign strategy, owned budget \
        planning, and communicated results to executive stakeholders.";

    #[test]
    fn test_sample_resume_hits_expected_skills() {
        let skills = extract_keyword_skills(SAMPLE_MARKETING_RESUME);
        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        for expected in [
            "Data Analysis",
            "Strategic Planning",
            "Leadership",
            "Communication",
        ] {
            assert!(names.contains(&expected), "missing {expected} in {names:?}");
        }
    }

    #[test]
    fn test_always_returns_at_least_three_skills() {
        let skills = extract_keyword_skills("zzz qqq xxx completely unrelated noise words");
        assert!(skills.len() >= 3);
        assert!(skills.len() <= 5);
    }

    #[test]
    fn test_backfill_skips_already_detected_defaults() {
        // "communicat" and "problem" hit two of the default skills directly.
        let skills = extract_keyword_skills("communicating and problem solving daily");
        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        let communication = names.iter().filter(|n| **n == "Communication").count();
        assert_eq!(communication, 1, "no duplicates from backfill");
        assert!(skills.len() >= 3);
    }

    #[test]
    fn test_no_duplicate_skills_from_multiple_keywords() {
        // "project" and "manage" both map to Project Management.
        let skills = extract_keyword_skills(
            "managed projects, managed people, managed more projects, python, sql",
        );
        let pm = skills
            .iter()
            .filter(|s| s.name == "Project Management")
            .count();
        assert_eq!(pm, 1);
    }

    #[test]
    fn test_proficiency_always_in_range() {
        let skills = extract_keyword_skills(
            "python javascript react sql database machine learning ai strategy \
             communication leadership research design agile scrum marketing seo",
        );
        for skill in &skills {
            assert!((0..=100).contains(&skill.proficiency), "{}", skill.name);
        }
    }

    #[test]
    fn test_first_match_wins_proficiency() {
        // "project" (75) precedes "manage" (70) in the table.
        let skills = extract_keyword_skills("project and manage work streams daily basis");
        let pm = skills
            .iter()
            .find(|s| s.name == "Project Management")
            .expect("Project Management detected");
        assert_eq!(pm.proficiency, 75);
    }
}
