//! In-process fixed-window rate limiting, keyed per client IP.
//!
//! Three scopes, matching the original deployment policy: a global limit on
//! every route, a tighter window on the credential endpoints, and a separate
//! window on the AI-invoking endpoints. Counters live in mutex-guarded maps;
//! nothing is shared across processes.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tokio::sync::Mutex;

use crate::errors::AppError;
use crate::state::AppState;

struct Window {
    started: Instant,
    count: u32,
}

pub struct FixedWindowLimiter {
    limit: u32,
    window: Duration,
    message: &'static str,
    windows: Mutex<HashMap<String, Window>>,
}

impl FixedWindowLimiter {
    pub fn new(limit: u32, window: Duration, message: &'static str) -> Self {
        Self {
            limit,
            window,
            message,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Counts one request against `key`. Returns false once the window's
    /// limit is exhausted; the counter resets when the window elapses.
    pub async fn allow(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut lock = self.windows.lock().await;
        let window = lock.entry(key.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(window.started) >= self.window {
            window.started = now;
            window.count = 0;
        }

        window.count += 1;
        window.count <= self.limit
    }
}

/// The three limiter scopes carried in `AppState`.
pub struct RateLimiters {
    pub global: FixedWindowLimiter,
    pub auth: FixedWindowLimiter,
    pub ai: FixedWindowLimiter,
}

impl RateLimiters {
    pub fn new() -> Self {
        Self {
            global: FixedWindowLimiter::new(
                100,
                Duration::from_secs(60),
                "Too many requests. Please slow down.",
            ),
            auth: FixedWindowLimiter::new(
                10,
                Duration::from_secs(15 * 60),
                "Too many login attempts. Please try again in 15 minutes.",
            ),
            ai: FixedWindowLimiter::new(
                20,
                Duration::from_secs(15 * 60),
                "Too many AI requests. Please try again later.",
            ),
        }
    }
}

impl Default for RateLimiters {
    fn default() -> Self {
        Self::new()
    }
}

fn client_key(req: &Request) -> String {
    if let Some(forwarded) = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            return first.trim().to_string();
        }
    }
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

async fn enforce(
    limiter: &FixedWindowLimiter,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let key = client_key(&req);
    if limiter.allow(&key).await {
        Ok(next.run(req).await)
    } else {
        Err(AppError::RateLimited(limiter.message.to_string()).into_response())
    }
}

pub async fn global_limit(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match enforce(&state.limiters.global, req, next).await {
        Ok(r) | Err(r) => r,
    }
}

pub async fn auth_limit(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match enforce(&state.limiters.auth, req, next).await {
        Ok(r) | Err(r) => r,
    }
}

pub async fn ai_limit(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match enforce(&state.limiters.ai, req, next).await {
        Ok(r) | Err(r) => r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_allows_up_to_limit_then_denies() {
        let limiter = FixedWindowLimiter::new(3, Duration::from_secs(60), "slow down");
        for _ in 0..3 {
            assert!(limiter.allow("1.2.3.4").await);
        }
        assert!(!limiter.allow("1.2.3.4").await);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let limiter = FixedWindowLimiter::new(1, Duration::from_secs(60), "slow down");
        assert!(limiter.allow("1.1.1.1").await);
        assert!(!limiter.allow("1.1.1.1").await);
        assert!(limiter.allow("2.2.2.2").await);
    }

    #[tokio::test]
    async fn test_window_resets_after_elapse() {
        let limiter = FixedWindowLimiter::new(1, Duration::from_millis(10), "slow down");
        assert!(limiter.allow("1.1.1.1").await);
        assert!(!limiter.allow("1.1.1.1").await);
        tokio::time::sleep(Duration::from_millis(15)).await;
        assert!(limiter.allow("1.1.1.1").await);
    }
}
