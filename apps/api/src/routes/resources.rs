//! Static transition-resource library. Public, no auth.

use axum::Json;
use serde_json::{json, Value};

/// GET /api/resources
pub async fn handle_list() -> Json<Value> {
    Json(json!({
        "pre_landing": [
            {
                "id": "resume",
                "category": "Resume & Portfolio",
                "title": "Resume Optimization",
                "description": "Tailor your resume to highlight transferable skills for your target role.",
                "items": [
                    { "title": "Action Verb Cheat Sheet", "type": "guide", "url": "#" },
                    { "title": "Resume Template for Career Changers", "type": "template", "url": "#" },
                    { "title": "Portfolio Building Guide", "type": "guide", "url": "#" },
                    { "title": "LinkedIn Profile Optimization", "type": "checklist", "url": "#" },
                ],
            },
            {
                "id": "interview",
                "category": "Interview Prep",
                "title": "Interview Preparation",
                "description": "Practice common questions and build confidence for your target role interviews.",
                "items": [
                    { "title": "STAR Method Response Framework", "type": "guide", "url": "#" },
                    { "title": "Behavioral Interview Questions Bank", "type": "practice", "url": "#" },
                    { "title": "Technical Interview Prep Checklist", "type": "checklist", "url": "#" },
                    { "title": "Salary Negotiation Scripts", "type": "template", "url": "#" },
                ],
            },
            {
                "id": "networking",
                "category": "Networking",
                "title": "Building Your Network",
                "description": "Connect with professionals in your target field to accelerate your transition.",
                "items": [
                    { "title": "Cold Outreach Message Templates", "type": "template", "url": "#" },
                    { "title": "Informational Interview Guide", "type": "guide", "url": "#" },
                    { "title": "Industry Event Finder", "type": "tool", "url": "#" },
                    { "title": "Professional Community Directory", "type": "directory", "url": "#" },
                ],
            },
        ],
        "post_landing": [
            {
                "id": "onboarding",
                "category": "First 90 Days",
                "title": "Onboarding Success",
                "description": "Make a strong start in your new role with a structured 30-60-90 day plan.",
                "items": [
                    { "title": "30-60-90 Day Plan Template", "type": "template", "url": "#" },
                    { "title": "Questions to Ask Your Manager", "type": "checklist", "url": "#" },
                    { "title": "Building Credibility in a New Role", "type": "guide", "url": "#" },
                    { "title": "New Role Transition Journal", "type": "template", "url": "#" },
                ],
            },
            {
                "id": "growth",
                "category": "Career Growth",
                "title": "Continued Development",
                "description": "Keep growing in your new career with ongoing learning and mentorship.",
                "items": [
                    { "title": "Skill Gap Tracker Spreadsheet", "type": "template", "url": "#" },
                    { "title": "Finding a Mentor Guide", "type": "guide", "url": "#" },
                    { "title": "Conference & Workshop Calendar", "type": "directory", "url": "#" },
                    { "title": "Professional Certification Roadmap", "type": "guide", "url": "#" },
                ],
            },
            {
                "id": "community",
                "category": "Community & Support",
                "title": "Stay Connected",
                "description": "Join communities of fellow career changers for ongoing support and advice.",
                "items": [
                    { "title": "Career Changers Slack Communities", "type": "directory", "url": "#" },
                    { "title": "Industry-Specific Subreddits", "type": "directory", "url": "#" },
                    { "title": "Peer Mentoring Program", "type": "program", "url": "#" },
                    { "title": "Success Stories & Case Studies", "type": "inspiration", "url": "#" },
                ],
            },
        ],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resources_have_both_phases() {
        let Json(body) = handle_list().await;
        assert_eq!(body["pre_landing"].as_array().unwrap().len(), 3);
        assert_eq!(body["post_landing"].as_array().unwrap().len(), 3);
        assert_eq!(body["pre_landing"][0]["id"], "resume");
    }
}
