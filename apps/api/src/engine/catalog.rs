//! Fixed catalogs backing the deterministic engine: the keyword→skill table,
//! the target-role templates with their ideal skill lists, and the job board.
//!
//! Table order is significant. Skill extraction walks `SKILL_KEYWORDS` top to
//! bottom with first-match-wins per keyword, and equal feasibility or match
//! scores keep catalog order after the stable sort.

/// One keyword→skill mapping with the proficiency constant attached to the keyword.
pub struct KeywordSkill {
    pub keyword: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub onet_code: &'static str,
    pub proficiency: i64,
}

const fn kw(
    keyword: &'static str,
    name: &'static str,
    category: &'static str,
    onet_code: &'static str,
    proficiency: i64,
) -> KeywordSkill {
    KeywordSkill {
        keyword,
        name,
        category,
        onet_code,
        proficiency,
    }
}

/// Keyword substrings matched against lowercased resume text.
/// Stems like "strateg" and "communicat" deliberately catch word variants.
pub const SKILL_KEYWORDS: &[KeywordSkill] = &[
    kw("project", "Project Management", "Management", "2.B.1.a", 75),
    kw("manage", "Project Management", "Management", "2.B.1.a", 70),
    kw("data", "Data Analysis", "Analytical", "2.A.1.e", 70),
    kw("analys", "Data Analysis", "Analytical", "2.A.1.e", 72),
    kw("python", "Python Programming", "Technical", "2.B.3.a", 80),
    kw("javascript", "JavaScript", "Technical", "2.B.3.b", 78),
    kw("react", "JavaScript", "Technical", "2.B.3.b", 82),
    kw("sql", "SQL & Databases", "Technical", "2.B.3.c", 75),
    kw("database", "SQL & Databases", "Technical", "2.B.3.c", 68),
    kw("machine learning", "Machine Learning", "Technical", "2.B.3.d", 60),
    kw("ai", "Machine Learning", "Technical", "2.B.3.d", 55),
    kw("strateg", "Strategic Planning", "Management", "2.B.1.b", 72),
    kw("communicat", "Communication", "Interpersonal", "2.A.1.a", 80),
    kw("lead", "Leadership", "Management", "2.B.1.c", 75),
    kw("team", "Leadership", "Management", "2.B.1.c", 70),
    kw("research", "User Research", "Design", "2.A.1.f", 65),
    kw("design", "Visual Design", "Design", "2.B.4.a", 60),
    kw("agile", "Agile/Scrum", "Management", "2.B.1.d", 78),
    kw("scrum", "Agile/Scrum", "Management", "2.B.1.d", 80),
    kw("marketing", "Digital Marketing", "Marketing", "2.B.5.a", 75),
    kw("seo", "SEO/SEM", "Marketing", "2.B.5.b", 70),
    kw("content", "Content Strategy", "Marketing", "2.B.5.c", 68),
    kw("financ", "Financial Analysis", "Analytical", "2.A.1.g", 65),
    kw("budget", "Financial Analysis", "Analytical", "2.A.1.g", 62),
    kw("present", "Presentation Skills", "Interpersonal", "2.A.1.b", 72),
    kw("negotiat", "Negotiation", "Interpersonal", "2.A.1.c", 68),
    kw("problem", "Problem Solving", "Analytical", "2.A.2.a", 80),
    kw("critical", "Critical Thinking", "Analytical", "2.A.2.b", 78),
    kw("aws", "Cloud Computing (AWS/GCP)", "Technical", "2.B.3.e", 65),
    kw("cloud", "Cloud Computing (AWS/GCP)", "Technical", "2.B.3.e", 60),
    kw("api", "API Development", "Technical", "2.B.3.f", 70),
    kw("figma", "Figma / Design Tools", "Design", "2.B.4.b", 72),
    kw("stakeholder", "Stakeholder Management", "Management", "2.B.1.e", 70),
    kw("testing", "A/B Testing", "Analytical", "2.A.1.h", 65),
];

/// Backfill used when extraction finds fewer than three skills.
pub const DEFAULT_SKILLS: &[KeywordSkill] = &[
    kw("", "Communication", "Interpersonal", "2.A.1.a", 75),
    kw("", "Problem Solving", "Analytical", "2.A.2.a", 72),
    kw("", "Critical Thinking", "Analytical", "2.A.2.b", 70),
    kw("", "Project Management", "Management", "2.B.1.a", 65),
    kw("", "Presentation Skills", "Interpersonal", "2.A.1.b", 68),
];

/// A candidate target role: market template plus the ideal skill list
/// overlap is scored against.
pub struct PathTemplate {
    pub target_role: &'static str,
    pub median_salary: i64,
    pub growth_rate: f64,
    pub market_demand: &'static str,
    pub skill_gaps: &'static [&'static str],
    pub transition_time_months: i64,
    pub ideal_skills: &'static [&'static str],
}

pub const PATH_TEMPLATES: &[PathTemplate] = &[
    PathTemplate {
        target_role: "Product Manager",
        median_salary: 145_000,
        growth_rate: 12.0,
        market_demand: "High",
        skill_gaps: &["Product Roadmapping", "User Story Writing", "Market Analysis"],
        transition_time_months: 4,
        ideal_skills: &[
            "Project Management",
            "Strategic Planning",
            "Communication",
            "Leadership",
            "Agile/Scrum",
            "Stakeholder Management",
            "Data Analysis",
        ],
    },
    PathTemplate {
        target_role: "Data Analyst",
        median_salary: 100_000,
        growth_rate: 35.0,
        market_demand: "Very High",
        skill_gaps: &["Advanced SQL", "Tableau/Power BI", "Statistical Modeling"],
        transition_time_months: 5,
        ideal_skills: &[
            "Data Analysis",
            "SQL & Databases",
            "Python Programming",
            "Problem Solving",
            "Critical Thinking",
            "Presentation Skills",
            "A/B Testing",
        ],
    },
    PathTemplate {
        target_role: "UX Designer",
        median_salary: 110_000,
        growth_rate: 16.0,
        market_demand: "High",
        skill_gaps: &["Wireframing", "Usability Testing", "Interaction Design"],
        transition_time_months: 6,
        ideal_skills: &[
            "User Research",
            "Visual Design",
            "Figma / Design Tools",
            "Communication",
            "Problem Solving",
            "A/B Testing",
            "Presentation Skills",
        ],
    },
    PathTemplate {
        target_role: "Software Developer",
        median_salary: 130_000,
        growth_rate: 25.0,
        market_demand: "Very High",
        skill_gaps: &["Data Structures", "System Design", "Version Control (Git)"],
        transition_time_months: 8,
        ideal_skills: &[
            "JavaScript",
            "Python Programming",
            "SQL & Databases",
            "API Development",
            "Cloud Computing (AWS/GCP)",
            "Problem Solving",
            "Agile/Scrum",
        ],
    },
    PathTemplate {
        target_role: "Marketing Manager",
        median_salary: 140_000,
        growth_rate: 10.0,
        market_demand: "Medium",
        skill_gaps: &["Brand Strategy", "Campaign Analytics", "Marketing Automation"],
        transition_time_months: 3,
        ideal_skills: &[
            "Digital Marketing",
            "SEO/SEM",
            "Content Strategy",
            "Data Analysis",
            "Strategic Planning",
            "Communication",
            "A/B Testing",
        ],
    },
    PathTemplate {
        target_role: "DevOps Engineer",
        median_salary: 135_000,
        growth_rate: 22.0,
        market_demand: "High",
        skill_gaps: &["CI/CD Pipelines", "Docker & Kubernetes", "Infrastructure as Code"],
        transition_time_months: 7,
        ideal_skills: &[
            "Cloud Computing (AWS/GCP)",
            "Python Programming",
            "API Development",
            "Problem Solving",
            "Agile/Scrum",
            "SQL & Databases",
        ],
    },
    PathTemplate {
        target_role: "Business Analyst",
        median_salary: 95_000,
        growth_rate: 14.0,
        market_demand: "Medium",
        skill_gaps: &["Requirements Gathering", "Process Modeling", "JIRA Administration"],
        transition_time_months: 3,
        ideal_skills: &[
            "Data Analysis",
            "Communication",
            "Problem Solving",
            "SQL & Databases",
            "Stakeholder Management",
            "Presentation Skills",
            "Critical Thinking",
        ],
    },
];

/// One posting on the fixed job board.
pub struct JobTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub salary_min: i64,
    pub salary_max: i64,
    pub employment_type: &'static str,
    pub experience: &'static str,
    pub role_category: &'static str,
    pub required_skills: &'static [&'static str],
    pub posted_days_ago: i64,
    pub description: &'static str,
}

pub const JOB_CATALOG: &[JobTemplate] = &[
    JobTemplate {
        id: "pm-1",
        title: "Associate Product Manager",
        company: "TechFlow Inc.",
        location: "San Francisco, CA (Hybrid)",
        salary_min: 110_000,
        salary_max: 140_000,
        employment_type: "Full-time",
        experience: "2-4 years",
        role_category: "Product Manager",
        required_skills: &[
            "Product Roadmapping",
            "Data Analysis",
            "Communication",
            "Agile/Scrum",
            "User Research",
        ],
        posted_days_ago: 2,
        description: "Join our growing team to drive product strategy for our SaaS platform. Work with cross-functional teams to deliver features that delight users.",
    },
    JobTemplate {
        id: "pm-2",
        title: "Senior Product Manager",
        company: "DataBridge AI",
        location: "New York, NY (Remote)",
        salary_min: 150_000,
        salary_max: 185_000,
        employment_type: "Full-time",
        experience: "5-8 years",
        role_category: "Product Manager",
        required_skills: &[
            "Strategic Planning",
            "Leadership",
            "Data Analysis",
            "Stakeholder Management",
            "Market Analysis",
        ],
        posted_days_ago: 5,
        description: "Lead product vision and strategy for our AI-powered analytics suite. Drive cross-team alignment and deliver world-class data products.",
    },
    JobTemplate {
        id: "pm-3",
        title: "Product Manager - Growth",
        company: "Nextera Health",
        location: "Austin, TX (Hybrid)",
        salary_min: 125_000,
        salary_max: 155_000,
        employment_type: "Full-time",
        experience: "3-5 years",
        role_category: "Product Manager",
        required_skills: &[
            "A/B Testing",
            "Data Analysis",
            "Communication",
            "SEO/SEM",
            "Strategic Planning",
        ],
        posted_days_ago: 1,
        description: "Own growth product initiatives, experiment with user acquisition funnels, and optimize conversion across our health-tech platform.",
    },
    JobTemplate {
        id: "da-1",
        title: "Data Analyst",
        company: "Meridian Financial",
        location: "Chicago, IL (On-site)",
        salary_min: 85_000,
        salary_max: 105_000,
        employment_type: "Full-time",
        experience: "1-3 years",
        role_category: "Data Analyst",
        required_skills: &[
            "SQL & Databases",
            "Data Analysis",
            "Python Programming",
            "Presentation Skills",
            "Critical Thinking",
        ],
        posted_days_ago: 3,
        description: "Analyze financial datasets to uncover trends, build dashboards, and present insights to senior leadership.",
    },
    JobTemplate {
        id: "da-2",
        title: "Senior Data Analyst",
        company: "CloudPeak Systems",
        location: "Seattle, WA (Remote)",
        salary_min: 115_000,
        salary_max: 140_000,
        employment_type: "Full-time",
        experience: "4-6 years",
        role_category: "Data Analyst",
        required_skills: &[
            "SQL & Databases",
            "Python Programming",
            "Machine Learning",
            "Data Analysis",
            "A/B Testing",
        ],
        posted_days_ago: 7,
        description: "Drive data-informed decision-making across the organization. Build predictive models and lead analytics projects end-to-end.",
    },
    JobTemplate {
        id: "da-3",
        title: "Business Intelligence Analyst",
        company: "RetailEdge Co.",
        location: "Denver, CO (Hybrid)",
        salary_min: 90_000,
        salary_max: 115_000,
        employment_type: "Full-time",
        experience: "2-4 years",
        role_category: "Data Analyst",
        required_skills: &[
            "SQL & Databases",
            "Data Analysis",
            "Presentation Skills",
            "Problem Solving",
            "Financial Analysis",
        ],
        posted_days_ago: 4,
        description: "Create and maintain BI dashboards, analyze retail performance metrics, and provide actionable recommendations to stakeholders.",
    },
    JobTemplate {
        id: "ux-1",
        title: "UX Designer",
        company: "PixelCraft Studio",
        location: "Los Angeles, CA (Hybrid)",
        salary_min: 95_000,
        salary_max: 120_000,
        employment_type: "Full-time",
        experience: "2-4 years",
        role_category: "UX Designer",
        required_skills: &[
            "User Research",
            "Visual Design",
            "Figma / Design Tools",
            "Communication",
            "Problem Solving",
        ],
        posted_days_ago: 6,
        description: "Design intuitive user experiences for our creative collaboration platform. Conduct user research and iterate on designs based on feedback.",
    },
    JobTemplate {
        id: "ux-2",
        title: "Senior UX/UI Designer",
        company: "HealthFirst Digital",
        location: "Boston, MA (Remote)",
        salary_min: 120_000,
        salary_max: 150_000,
        employment_type: "Full-time",
        experience: "5-7 years",
        role_category: "UX Designer",
        required_skills: &[
            "User Research",
            "Visual Design",
            "Figma / Design Tools",
            "A/B Testing",
            "Leadership",
        ],
        posted_days_ago: 3,
        description: "Lead design for our patient-facing health platform. Mentor junior designers and establish design system standards.",
    },
    JobTemplate {
        id: "sd-1",
        title: "Full-Stack Developer",
        company: "BuildStack Technologies",
        location: "Remote (US)",
        salary_min: 120_000,
        salary_max: 155_000,
        employment_type: "Full-time",
        experience: "3-5 years",
        role_category: "Software Developer",
        required_skills: &[
            "JavaScript",
            "Python Programming",
            "SQL & Databases",
            "API Development",
            "Cloud Computing (AWS/GCP)",
        ],
        posted_days_ago: 1,
        description: "Build and scale our developer tools platform. Work across the stack with React, Node.js, and PostgreSQL.",
    },
    JobTemplate {
        id: "sd-2",
        title: "Backend Engineer",
        company: "PayStream Inc.",
        location: "New York, NY (Hybrid)",
        salary_min: 140_000,
        salary_max: 175_000,
        employment_type: "Full-time",
        experience: "4-7 years",
        role_category: "Software Developer",
        required_skills: &[
            "Python Programming",
            "SQL & Databases",
            "API Development",
            "Cloud Computing (AWS/GCP)",
            "Problem Solving",
        ],
        posted_days_ago: 8,
        description: "Design and build scalable backend services for our payment processing infrastructure. Focus on reliability and performance.",
    },
    JobTemplate {
        id: "mm-1",
        title: "Digital Marketing Manager",
        company: "GrowthLab Agency",
        location: "Miami, FL (Hybrid)",
        salary_min: 100_000,
        salary_max: 130_000,
        employment_type: "Full-time",
        experience: "4-6 years",
        role_category: "Marketing Manager",
        required_skills: &[
            "Digital Marketing",
            "SEO/SEM",
            "Content Strategy",
            "Data Analysis",
            "A/B Testing",
        ],
        posted_days_ago: 2,
        description: "Lead multi-channel marketing campaigns for Fortune 500 clients. Analyze performance data and optimize for maximum ROI.",
    },
    JobTemplate {
        id: "mm-2",
        title: "Marketing Director",
        company: "Evergreen Brands",
        location: "Portland, OR (On-site)",
        salary_min: 135_000,
        salary_max: 165_000,
        employment_type: "Full-time",
        experience: "7-10 years",
        role_category: "Marketing Manager",
        required_skills: &[
            "Strategic Planning",
            "Leadership",
            "Digital Marketing",
            "Communication",
            "Content Strategy",
        ],
        posted_days_ago: 10,
        description: "Set the strategic direction for brand marketing across all channels. Build and lead a team of marketing professionals.",
    },
    JobTemplate {
        id: "de-1",
        title: "DevOps Engineer",
        company: "InfraScale Solutions",
        location: "Remote (US)",
        salary_min: 125_000,
        salary_max: 160_000,
        employment_type: "Full-time",
        experience: "3-5 years",
        role_category: "DevOps Engineer",
        required_skills: &[
            "Cloud Computing (AWS/GCP)",
            "Python Programming",
            "API Development",
            "Problem Solving",
            "Agile/Scrum",
        ],
        posted_days_ago: 4,
        description: "Build and maintain CI/CD pipelines, manage cloud infrastructure, and improve developer experience across the engineering org.",
    },
    JobTemplate {
        id: "ba-1",
        title: "Business Analyst",
        company: "ConsultPro Group",
        location: "Washington, DC (Hybrid)",
        salary_min: 80_000,
        salary_max: 105_000,
        employment_type: "Full-time",
        experience: "2-4 years",
        role_category: "Business Analyst",
        required_skills: &[
            "Data Analysis",
            "Communication",
            "Problem Solving",
            "SQL & Databases",
            "Presentation Skills",
        ],
        posted_days_ago: 5,
        description: "Gather and document business requirements, facilitate stakeholder workshops, and drive process improvement initiatives.",
    },
    JobTemplate {
        id: "ba-2",
        title: "Senior Business Analyst",
        company: "Vanguard Consulting",
        location: "Atlanta, GA (Remote)",
        salary_min: 100_000,
        salary_max: 130_000,
        employment_type: "Full-time",
        experience: "5-8 years",
        role_category: "Business Analyst",
        required_skills: &[
            "Stakeholder Management",
            "Data Analysis",
            "Critical Thinking",
            "Communication",
            "Strategic Planning",
        ],
        posted_days_ago: 6,
        description: "Lead complex business analysis engagements, define solution architectures, and mentor junior analysts.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_proficiencies_in_range() {
        for entry in SKILL_KEYWORDS.iter().chain(DEFAULT_SKILLS) {
            assert!(
                (0..=100).contains(&entry.proficiency),
                "{} out of range",
                entry.name
            );
        }
    }

    #[test]
    fn test_path_templates_have_three_gaps_each() {
        for template in PATH_TEMPLATES {
            assert_eq!(template.skill_gaps.len(), 3, "{}", template.target_role);
            assert!(!template.ideal_skills.is_empty());
        }
    }

    #[test]
    fn test_job_catalog_roles_exist_in_path_catalog() {
        for job in JOB_CATALOG {
            assert!(
                PATH_TEMPLATES
                    .iter()
                    .any(|t| t.target_role == job.role_category),
                "unknown role category {}",
                job.role_category
            );
        }
    }
}
