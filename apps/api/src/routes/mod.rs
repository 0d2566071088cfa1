pub mod careers;
pub mod health;
pub mod jobs;
pub mod resources;
pub mod roadmap;
pub mod skills;
pub mod user;

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, patch, post},
    Router,
};

use crate::auth::handlers as auth_handlers;
use crate::ratelimit;
use crate::state::AppState;

async fn security_headers(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    headers.insert("x-content-type-options", HeaderValue::from_static("nosniff"));
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    headers.insert("x-xss-protection", HeaderValue::from_static("1; mode=block"));
    headers.insert(
        "referrer-policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    response
}

pub fn build_router(state: AppState) -> Router {
    // Credential endpoints share the tight auth window.
    let auth_routes = Router::new()
        .route("/api/auth/register", post(auth_handlers::handle_register))
        .route("/api/auth/login", post(auth_handlers::handle_login))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            ratelimit::auth_limit,
        ));

    // Endpoints that may invoke the LLM share the AI window.
    let ai_routes = Router::new()
        .route("/api/skills/assess", post(skills::handle_assess))
        .route("/api/roadmap/generate", post(roadmap::handle_generate))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            ratelimit::ai_limit,
        ));

    Router::new()
        .merge(auth_routes)
        .merge(ai_routes)
        .route("/api/auth/me", get(auth_handlers::handle_me))
        .route("/api/skills/profile", get(skills::handle_profile))
        .route("/api/careers/explore", get(careers::handle_explore))
        .route("/api/careers/saved", get(careers::handle_saved))
        .route("/api/roadmap/:id", get(roadmap::handle_get))
        .route("/api/roadmap/:id/progress", patch(roadmap::handle_progress))
        .route("/api/jobs", get(jobs::handle_list))
        .route("/api/jobs/saved", get(jobs::handle_saved))
        .route("/api/jobs/save", post(jobs::handle_save))
        .route("/api/jobs/save/:job_id", delete(jobs::handle_unsave))
        .route("/api/user/settings", patch(user::handle_settings))
        .route("/api/user/stats", get(user::handle_stats))
        .route("/api/user/activity", get(user::handle_activity))
        .route("/api/resources", get(resources::handle_list))
        .route("/api/health", get(health::handle_health))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            ratelimit::global_limit,
        ))
        .layer(middleware::from_fn(security_headers))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::engine::extractor::KeywordSkillExtractor;
    use crate::engine::roadmap::TemplateRoadmapGenerator;
    use crate::engine::scorer::HeuristicPathScorer;
    use crate::ratelimit::RateLimiters;

    const RESUME: &str = "Marketing manager with years of project management, \
        data analysis, communication, and leadership experience across \
        cross-functional teams and customer research programs.";

    async fn test_app() -> Router {
        let db = crate::db::test_pool().await;
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: "test-secret".to_string(),
            openai_api_key: None,
            port: 3001,
            rust_log: "info".to_string(),
        };
        // Jitter pinned to the window floor keeps scores reproducible.
        let state = AppState {
            db,
            config,
            extractor: Arc::new(KeywordSkillExtractor),
            scorer: Arc::new(HeuristicPathScorer::new(Arc::new(|lo, _hi| lo))),
            roadmaps: Arc::new(TemplateRoadmapGenerator),
            limiters: Arc::new(RateLimiters::new()),
        };
        build_router(state)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn register(app: &Router, email: &str, current_role: &str) -> String {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Test User",
                "email": email,
                "password": "password123",
                "current_role": current_role,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_register_login_me() {
        let app = test_app().await;
        let token = register(&app, "ada@example.com", "Product Manager").await;

        let (status, body) = send(&app, Method::GET, "/api/auth/me", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["email"], "ada@example.com");

        // Duplicate email is a conflict.
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Test User",
                "email": "ada@example.com",
                "password": "password123",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "ada@example.com", "password": "password123" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["token"].as_str().is_some());

        // Wrong password and unknown email share the same message.
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "ada@example.com", "password": "wrong-password" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["message"], "Invalid email or password");
    }

    #[tokio::test]
    async fn test_protected_routes_require_token() {
        let app = test_app().await;
        for uri in [
            "/api/skills/profile",
            "/api/careers/saved",
            "/api/user/stats",
            "/api/jobs",
        ] {
            let (status, _) = send(&app, Method::GET, uri, None, None).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        }
        let (status, _) =
            send(&app, Method::GET, "/api/skills/profile", Some("not-a-jwt"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_assess_explore_roadmap_flow() {
        let app = test_app().await;
        let token = register(&app, "flow@example.com", "Product Manager").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/skills/assess",
            Some(&token),
            Some(json!({ "resume_text": RESUME })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["count"].as_u64().unwrap() >= 3);
        assert_eq!(body["mock_mode"], true);

        let (status, body) =
            send(&app, Method::GET, "/api/careers/explore", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source_role"], "Product Manager");
        let paths = body["paths"].as_array().unwrap();
        assert!(!paths.is_empty());
        // The user's current role never appears as a target.
        assert!(paths
            .iter()
            .all(|p| p["target_role"] != "Product Manager"));
        // Sorted by feasibility, descending.
        let scores: Vec<i64> = paths
            .iter()
            .map(|p| p["feasibility_score"].as_i64().unwrap())
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));

        let path_id = paths[0]["id"].as_i64().unwrap();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/roadmap/generate",
            Some(&token),
            Some(json!({ "career_path_id": path_id })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let roadmap_id = body["roadmap"]["id"].as_i64().unwrap();
        let first_title = body["roadmap"]["title"].clone();
        let first_weeks = body["roadmap"]["weeks_data"].clone();
        assert_eq!(first_weeks.as_array().unwrap().len(), 12);
        assert_eq!(body["roadmap"]["progress"].as_array().unwrap().len(), 12);

        // Repeat generation returns the stored roadmap unchanged: same id,
        // same content.
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/roadmap/generate",
            Some(&token),
            Some(json!({ "career_path_id": path_id })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roadmap"]["id"].as_i64().unwrap(), roadmap_id);
        assert_eq!(body["roadmap"]["title"], first_title);
        assert_eq!(body["roadmap"]["weeks_data"], first_weeks);

        let (status, body) = send(
            &app,
            Method::GET,
            &format!("/api/roadmap/{path_id}"),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roadmap"]["id"].as_i64().unwrap(), roadmap_id);

        let (status, body) = send(
            &app,
            Method::PATCH,
            &format!("/api/roadmap/{roadmap_id}/progress"),
            Some(&token),
            Some(json!({ "week_index": 0, "completed": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["progress"][0], true);
        assert_eq!(body["updated"], true);

        // The toggle persisted: a fresh fetch shows it.
        let (status, body) = send(
            &app,
            Method::GET,
            &format!("/api/roadmap/{path_id}"),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roadmap"]["progress"][0], true);
        assert_eq!(body["roadmap"]["progress"][1], false);

        // Out-of-range week index.
        let (status, body) = send(
            &app,
            Method::PATCH,
            &format!("/api/roadmap/{roadmap_id}/progress"),
            Some(&token),
            Some(json!({ "week_index": 12, "completed": true })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Invalid week index");

        // Both fields are required.
        let (status, _) = send(
            &app,
            Method::PATCH,
            &format!("/api/roadmap/{roadmap_id}/progress"),
            Some(&token),
            Some(json!({ "week_index": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_roadmap_generate_unknown_path() {
        let app = test_app().await;
        let token = register(&app, "nopath@example.com", "").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/roadmap/generate",
            Some(&token),
            Some(json!({ "career_path_id": 999 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Career path not found");

        let (status, body) =
            send(&app, Method::GET, "/api/roadmap/999", Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["error"]["message"],
            "Roadmap not found. Generate one first."
        );
    }

    #[tokio::test]
    async fn test_assess_rejects_short_resume() {
        let app = test_app().await;
        let token = register(&app, "short@example.com", "").await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/skills/assess",
            Some(&token),
            Some(json!({ "resume_text": "too short" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_jobs_save_and_unsave() {
        let app = test_app().await;
        let token = register(&app, "jobs@example.com", "").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/jobs/save",
            Some(&token),
            Some(json!({ "job_id": "da-1", "job_title": "Data Analyst", "company": "TechCorp" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Job saved");

        // Same job again updates in place.
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/jobs/save",
            Some(&token),
            Some(json!({ "job_id": "da-1", "job_title": "Data Analyst", "status": "applied" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Job status updated");

        let (status, body) = send(&app, Method::GET, "/api/jobs/saved", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        let saved = body["saved"].as_array().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0]["status"], "applied");

        let (status, body) = send(
            &app,
            Method::DELETE,
            "/api/jobs/save/da-1",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Job removed");

        let (_, body) = send(&app, Method::GET, "/api/jobs/saved", Some(&token), None).await;
        assert!(body["saved"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_jobs_listing_with_role_filter() {
        let app = test_app().await;
        let token = register(&app, "listing@example.com", "").await;

        let (status, body) = send(
            &app,
            Method::GET,
            "/api/jobs?role=Data%20Analyst",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["target_role"], "Data Analyst");
        let jobs = body["jobs"].as_array().unwrap();
        assert!(!jobs.is_empty());
        assert_eq!(body["total"].as_u64().unwrap() as usize, jobs.len());
    }

    #[tokio::test]
    async fn test_settings_and_stats() {
        let app = test_app().await;
        let token = register(&app, "settings@example.com", "").await;

        let (status, _) = send(
            &app,
            Method::PATCH,
            "/api/user/settings",
            Some(&token),
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/api/user/settings",
            Some(&token),
            Some(json!({ "current_role": "Data Analyst", "years_experience": 99 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["current_role"], "Data Analyst");
        // Out-of-range experience is stored as 0.
        assert_eq!(body["user"]["years_experience"], 0);

        let (status, body) = send(&app, Method::GET, "/api/user/stats", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"], 0);
        assert_eq!(body["career_paths"], 0);
        assert_eq!(body["roadmaps"], 0);
        assert_eq!(body["learning_progress"], 0);
        assert_eq!(body["total_weeks"], 0);
    }

    #[tokio::test]
    async fn test_activity_feed_records_actions() {
        let app = test_app().await;
        let token = register(&app, "activity@example.com", "").await;

        send(
            &app,
            Method::POST,
            "/api/skills/assess",
            Some(&token),
            Some(json!({ "resume_text": RESUME })),
        )
        .await;

        let (status, body) =
            send(&app, Method::GET, "/api/user/activity", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        let activity = body["activity"].as_array().unwrap();
        let actions: Vec<&str> = activity
            .iter()
            .map(|a| a["action"].as_str().unwrap())
            .collect();
        assert!(actions.contains(&"register"));
        assert!(actions.contains(&"skill_assessment"));
        let assessed = activity
            .iter()
            .find(|a| a["action"] == "skill_assessment")
            .unwrap();
        assert_eq!(assessed["label"], "Skills Assessed");
        assert_eq!(assessed["icon"], "clipboard-check");
    }

    #[tokio::test]
    async fn test_public_routes_and_headers() {
        let app = test_app().await;

        let (status, body) = send(&app, Method::GET, "/api/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["mock_mode"], true);

        let (status, body) = send(&app, Method::GET, "/api/resources", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["pre_landing"].as_array().is_some());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let headers = response.headers();
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "DENY");
    }

    #[tokio::test]
    async fn test_auth_rate_limit_applies() {
        let app = test_app().await;

        let mut last = StatusCode::OK;
        for _ in 0..11 {
            let (status, _) = send(
                &app,
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({ "email": "ghost@example.com", "password": "password123" })),
            )
            .await;
            last = status;
        }
        assert_eq!(last, StatusCode::TOO_MANY_REQUESTS);
    }
}
