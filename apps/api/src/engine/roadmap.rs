//! Roadmap generation — hand-authored 12-week templates for the two flagship
//! roles, a gap-driven generic template for everything else, and an LLM
//! backend for live mode.

use async_trait::async_trait;

use crate::engine::{RoadmapPlan, UserSkill, WeekPlan};
use crate::errors::AppError;
use crate::llm_client::{prompts, LlmClient};

pub const ROADMAP_WEEKS: usize = 12;

#[async_trait]
pub trait RoadmapGenerator: Send + Sync {
    async fn generate(
        &self,
        target_role: &str,
        source_role: &str,
        skill_gaps: &[String],
        skills: &[UserSkill],
    ) -> Result<RoadmapPlan, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// TemplateRoadmapGenerator — deterministic default
// ────────────────────────────────────────────────────────────────────────────

pub struct TemplateRoadmapGenerator;

#[async_trait]
impl RoadmapGenerator for TemplateRoadmapGenerator {
    async fn generate(
        &self,
        target_role: &str,
        _source_role: &str,
        skill_gaps: &[String],
        _skills: &[UserSkill],
    ) -> Result<RoadmapPlan, AppError> {
        Ok(build_roadmap(target_role, skill_gaps))
    }
}

pub fn build_roadmap(target_role: &str, skill_gaps: &[String]) -> RoadmapPlan {
    let weeks = match target_role {
        "Product Manager" => product_manager_weeks(),
        "Data Analyst" => data_analyst_weeks(),
        _ => generic_weeks(target_role, skill_gaps),
    };

    RoadmapPlan {
        title: format!("12-Week {target_role} Career Transition Roadmap"),
        description: format!(
            "A structured learning path designed to help you transition into a {target_role} \
             role. Each week builds on the previous, combining theory with practical \
             application to ensure job-readiness."
        ),
        weeks,
    }
}

fn week(week: u32, topic: &str, description: &str, resources: [&str; 3], hours: u32) -> WeekPlan {
    WeekPlan {
        week,
        topic: topic.to_string(),
        description: description.to_string(),
        resources: resources.iter().map(|r| r.to_string()).collect(),
        hours,
    }
}

fn product_manager_weeks() -> Vec<WeekPlan> {
    vec![
        week(
            1,
            "Product Management Foundations",
            "Understand the PM role, responsibilities, and how PMs drive product strategy across organizations.",
            ["Product School Free Course", "Inspired by Marty Cagan (Book)", "Mind the Product Blog"],
            10,
        ),
        week(
            2,
            "User Research & Discovery",
            "Learn qualitative and quantitative research methods to deeply understand user needs and pain points.",
            ["IDEO Human-Centered Design Kit", "Google UX Research Course", "User Interviews Platform"],
            12,
        ),
        week(
            3,
            "Product Roadmapping",
            "Master frameworks for prioritization (RICE, MoSCoW) and build compelling product roadmaps.",
            ["Productboard Academy", "Roadmunk Templates", "ProductPlan Guides"],
            10,
        ),
        week(
            4,
            "User Stories & Requirements",
            "Write effective user stories, acceptance criteria, and product requirement documents (PRDs).",
            ["Atlassian Agile Guide", "User Story Mapping by Jeff Patton", "JIRA Fundamentals"],
            8,
        ),
        week(
            5,
            "Data-Driven Product Decisions",
            "Use analytics, A/B testing, and metrics frameworks to make evidence-based product decisions.",
            ["Google Analytics Academy", "Mixpanel Free Tier", "Lean Analytics (Book)"],
            12,
        ),
        week(
            6,
            "Market Analysis & Competitive Intelligence",
            "Analyze market trends, evaluate competitors, and identify strategic opportunities for your product.",
            ["CB Insights Reports", "Porter's Five Forces Framework", "Crunchbase Research"],
            10,
        ),
        week(
            7,
            "Agile & Scrum for PMs",
            "Lead sprint planning, backlog grooming, and retrospectives as a product manager in agile teams.",
            ["Scrum.org Free Course", "Agile Manifesto", "Mountain Goat Software Blog"],
            8,
        ),
        week(
            8,
            "Stakeholder Communication",
            "Develop executive communication skills, build alignment across teams, and manage competing priorities.",
            ["Crucial Conversations (Book)", "Presentation Zen", "TED Talks Presentation Guide"],
            8,
        ),
        week(
            9,
            "Technical Fluency for PMs",
            "Build enough technical knowledge to have productive conversations with engineering teams.",
            ["CS50 Introduction (Harvard)", "APIs for Non-Developers", "System Design Primer"],
            12,
        ),
        week(
            10,
            "Product Strategy & Vision",
            "Develop and articulate a compelling product vision, strategy, and measurable OKRs.",
            ["Good Strategy Bad Strategy (Book)", "Measure What Matters (OKRs)", "Reforge Product Strategy"],
            10,
        ),
        week(
            11,
            "Portfolio Project: End-to-End Product Case",
            "Build a complete product case study: identify a problem, research users, define solution, create roadmap, and present to stakeholders.",
            ["Product School Case Studies", "Figma for Mockups", "Notion for Documentation"],
            15,
        ),
        week(
            12,
            "Interview Prep & Career Launch",
            "Prepare for PM interviews with case studies, practice product sense questions, and build your professional brand.",
            ["Cracking the PM Interview (Book)", "Exponent PM Practice", "LinkedIn Profile Optimization Guide"],
            12,
        ),
    ]
}

fn data_analyst_weeks() -> Vec<WeekPlan> {
    vec![
        week(
            1,
            "Data Analysis Fundamentals",
            "Build a strong foundation in data types, analysis workflows, and statistical thinking.",
            ["Google Data Analytics Certificate", "Khan Academy Statistics", "Naked Statistics (Book)"],
            10,
        ),
        week(
            2,
            "Advanced SQL Mastery",
            "Master complex queries including window functions, CTEs, subqueries, and query optimization techniques.",
            ["SQLZoo Interactive", "Mode Analytics SQL Tutorial", "LeetCode SQL Problems"],
            12,
        ),
        week(
            3,
            "Python for Data Analysis",
            "Learn pandas, NumPy, and data manipulation techniques for efficient data processing and analysis.",
            ["Python for Data Analysis (Book)", "Kaggle Learn Python", "DataCamp Free Tier"],
            14,
        ),
        week(
            4,
            "Data Visualization & Storytelling",
            "Create compelling visualizations and learn to tell stories with data using modern tools and techniques.",
            ["Tableau Public Free", "Storytelling with Data (Book)", "Matplotlib/Seaborn Docs"],
            10,
        ),
        week(
            5,
            "Statistical Methods & Hypothesis Testing",
            "Apply statistical tests, understand p-values, confidence intervals, and experimental design principles.",
            ["Statistics 110 (Harvard)", "Think Stats (Free Book)", "SciPy Documentation"],
            12,
        ),
        week(
            6,
            "Business Intelligence & Dashboards",
            "Build interactive dashboards and BI reports that drive business decisions using Power BI and Tableau.",
            ["Microsoft Power BI Learning Path", "Tableau Desktop Training", "Dashboard Design Patterns"],
            10,
        ),
        week(
            7,
            "A/B Testing & Experimentation",
            "Design and analyze experiments, calculate sample sizes, and interpret results for product teams.",
            ["Trustworthy Online Experiments (Book)", "Google Optimize", "Evan Miller A/B Calculator"],
            10,
        ),
        week(
            8,
            "Data Cleaning & ETL Pipelines",
            "Handle messy real-world data: cleaning, transformation, validation, and building reliable data pipelines.",
            ["OpenRefine Tutorial", "dbt Fundamentals", "Great Expectations Docs"],
            12,
        ),
        week(
            9,
            "Machine Learning Basics for Analysts",
            "Understand ML concepts like regression, classification, and clustering to enhance analytical capabilities.",
            ["Scikit-learn Tutorial", "Andrew Ng ML Course (Coursera)", "Kaggle Competitions"],
            14,
        ),
        week(
            10,
            "Excel & Spreadsheet Mastery",
            "Advanced spreadsheet techniques including pivot tables, VLOOKUP, array formulas, and VBA basics.",
            ["ExcelJet Tutorials", "Google Sheets Functions", "Chandoo Excel Blog"],
            8,
        ),
        week(
            11,
            "Portfolio Project: Full Analysis Case Study",
            "Complete an end-to-end data analysis project: data collection, cleaning, analysis, visualization, and presentation.",
            ["Kaggle Datasets", "GitHub Portfolio Guide", "Jupyter Notebook"],
            15,
        ),
        week(
            12,
            "Interview Prep & Career Strategy",
            "Prepare for data analyst interviews with SQL challenges, case studies, and portfolio presentation practice.",
            ["StrataScratch SQL Practice", "Glassdoor Interview Questions", "Data Analyst Resume Guide"],
            12,
        ),
    ]
}

/// Generic template for roles without bespoke content. Weeks 2, 3, and 5 are
/// deep dives into the top three skill gaps, with placeholders when fewer
/// than three gaps exist.
fn generic_weeks(target_role: &str, skill_gaps: &[String]) -> Vec<WeekPlan> {
    let gap = |i: usize, fallback: &str| -> String {
        skill_gaps
            .get(i)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    };

    vec![
        WeekPlan {
            week: 1,
            topic: format!("{target_role} Fundamentals"),
            description: format!("Build a solid foundation in core {target_role} concepts, methodologies, and industry best practices."),
            resources: vec![
                format!("{target_role} Beginner Course"),
                "Industry Overview Guide".to_string(),
                "Professional Community Forums".to_string(),
            ],
            hours: 10,
        },
        week(
            2,
            &format!("Core Skills Deep Dive: {}", gap(0, "Technical Skills")),
            &format!("Intensive focus on the most critical skill gap for your {target_role} transition."),
            ["Online Course Platform", "Hands-on Tutorial", "Practice Exercises"],
            12,
        ),
        week(
            3,
            &format!("Core Skills Deep Dive: {}", gap(1, "Domain Knowledge")),
            "Continue building essential skills with practical projects and real-world applications.",
            ["Intermediate Course", "Project-Based Learning", "Mentor Sessions"],
            12,
        ),
        week(
            4,
            "Industry Tools & Technologies",
            &format!("Master the key tools and technologies used daily by {target_role} professionals."),
            ["Tool Documentation", "YouTube Tutorials", "Free Trial Accounts"],
            10,
        ),
        week(
            5,
            &format!("Core Skills Deep Dive: {}", gap(2, "Advanced Techniques")),
            "Address your third major skill gap with structured learning and practice exercises.",
            ["Advanced Course", "Case Studies", "Peer Study Group"],
            12,
        ),
        week(
            6,
            "Cross-Functional Collaboration",
            "Learn to work effectively with adjacent teams and understand their workflows and needs.",
            ["Communication Workshop", "Team Dynamics Guide", "Stakeholder Management Course"],
            8,
        ),
        week(
            7,
            "Practical Application & Mini Projects",
            "Apply learned skills to realistic scenarios and build small projects for your portfolio.",
            ["Project Templates", "Real-World Datasets", "Portfolio Examples"],
            14,
        ),
        week(
            8,
            "Advanced Techniques & Best Practices",
            &format!("Explore advanced {target_role} techniques that separate good practitioners from great ones."),
            ["Advanced Workshop", "Industry Conference Talks", "Research Papers"],
            12,
        ),
        week(
            9,
            "Professional Workflows & Processes",
            "Understand end-to-end professional workflows, documentation standards, and quality practices.",
            ["Process Documentation", "Quality Assurance Guide", "Workflow Templates"],
            10,
        ),
        week(
            10,
            "Industry Trends & Emerging Technologies",
            &format!("Stay current with the latest trends and emerging technologies affecting the {target_role} field."),
            ["Industry Reports", "Conference Videos", "Newsletter Subscriptions"],
            8,
        ),
        week(
            11,
            "Capstone Portfolio Project",
            &format!("Build a comprehensive portfolio project that demonstrates your readiness for a {target_role} position."),
            ["Project Brief Template", "GitHub Portfolio Guide", "Peer Review Platform"],
            16,
        ),
        week(
            12,
            "Interview Preparation & Job Search",
            "Prepare for interviews, optimize your resume, practice case studies, and build your professional network.",
            ["Interview Question Bank", "Resume Templates", "LinkedIn Optimization Guide"],
            12,
        ),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// LlmRoadmapGenerator — live backend
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmRoadmapGenerator(pub LlmClient);

#[async_trait]
impl RoadmapGenerator for LlmRoadmapGenerator {
    async fn generate(
        &self,
        target_role: &str,
        source_role: &str,
        skill_gaps: &[String],
        skills: &[UserSkill],
    ) -> Result<RoadmapPlan, AppError> {
        let skill_summary = skills
            .iter()
            .map(|s| format!("{} ({}%)", s.name, s.proficiency))
            .collect::<Vec<_>>()
            .join(", ");
        let prompt = format!(
            "Create a 12-week roadmap for transitioning to: {target_role}\n\
             Current skills: {skill_summary}\n\
             Skill gaps to fill: {}\n\
             Transition from: {source_role}",
            skill_gaps.join(", ")
        );
        self.0
            .call_json(prompts::ROADMAP_SYSTEM, &prompt, 0.5)
            .await
            .map_err(|e| AppError::Llm(e.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn gaps(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_bespoke_templates_have_twelve_weeks() {
        for role in ["Product Manager", "Data Analyst"] {
            let plan = build_roadmap(role, &[]);
            assert_eq!(plan.weeks.len(), ROADMAP_WEEKS);
            assert_eq!(plan.title, format!("12-Week {role} Career Transition Roadmap"));
            for (i, w) in plan.weeks.iter().enumerate() {
                assert_eq!(w.week as usize, i + 1);
                assert_eq!(w.resources.len(), 3);
                assert!(w.hours > 0);
            }
        }
    }

    #[test]
    fn test_bespoke_template_used_verbatim() {
        // Bespoke content ignores skill gaps entirely.
        let with_gaps = build_roadmap("Product Manager", &gaps(&["X", "Y", "Z"]));
        let without = build_roadmap("Product Manager", &[]);
        assert_eq!(with_gaps.weeks, without.weeks);
        assert_eq!(with_gaps.weeks[0].topic, "Product Management Foundations");
    }

    #[test]
    fn test_generic_template_labels_deep_dives_from_gaps() {
        let plan = build_roadmap(
            "DevOps Engineer",
            &gaps(&["CI/CD Pipelines", "Docker & Kubernetes", "Infrastructure as Code"]),
        );
        assert_eq!(plan.weeks.len(), ROADMAP_WEEKS);
        assert_eq!(plan.weeks[1].topic, "Core Skills Deep Dive: CI/CD Pipelines");
        assert_eq!(
            plan.weeks[2].topic,
            "Core Skills Deep Dive: Docker & Kubernetes"
        );
        assert_eq!(
            plan.weeks[4].topic,
            "Core Skills Deep Dive: Infrastructure as Code"
        );
    }

    #[test]
    fn test_generic_template_placeholders_when_gaps_missing() {
        let plan = build_roadmap("UX Designer", &gaps(&["Wireframing"]));
        assert_eq!(plan.weeks[1].topic, "Core Skills Deep Dive: Wireframing");
        assert_eq!(plan.weeks[2].topic, "Core Skills Deep Dive: Domain Knowledge");
        assert_eq!(
            plan.weeks[4].topic,
            "Core Skills Deep Dive: Advanced Techniques"
        );
    }

    #[test]
    fn test_generic_template_mentions_role() {
        let plan = build_roadmap("Business Analyst", &[]);
        assert!(plan.weeks[0].topic.contains("Business Analyst"));
        assert!(plan.description.contains("Business Analyst"));
    }
}
