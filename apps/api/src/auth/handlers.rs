//! Axum route handlers for registration, login, and the current-user view.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::{issue_token, AuthUser};
use crate::errors::AppError;
use crate::models::activity::log_action;
use crate::models::user::{PublicUser, UserRow};
use crate::state::AppState;
use crate::validation::{optional_str, required_password, required_str, valid_email};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub current_role: Option<String>,
    pub years_experience: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: PublicUser,
}

/// POST /api/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let name = required_str("name", req.name.as_deref(), 2, 100)?;
    let email = valid_email("email", req.email.as_deref())?;
    let password = required_password("password", req.password.as_deref(), 8, 128)?;
    let current_role = optional_str("current_role", req.current_role.as_deref(), 0, 100)?
        .unwrap_or_default();
    let years_experience = req.years_experience.unwrap_or(0);

    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(
            "An account with this email already exists".to_string(),
        ));
    }

    let hashed = hash_password(&password)?;
    let user = sqlx::query_as::<_, UserRow>(
        "INSERT INTO users (name, email, password, current_role, years_experience)
         VALUES (?, ?, ?, ?, ?)
         RETURNING *",
    )
    .bind(&name)
    .bind(&email)
    .bind(&hashed)
    .bind(&current_role)
    .bind(years_experience)
    .fetch_one(&state.db)
    .await?;

    let token = issue_token(user.id, &user.email, &state.config.jwt_secret)?;
    log_action(&state.db, user.id, "register", "Account created").await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let email = valid_email("email", req.email.as_deref())?;
    let password = required_password("password", req.password.as_deref(), 1, 128)?;

    let user = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(&state.db)
        .await?;

    // Same message for unknown email and wrong password.
    let user = user
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;
    if !verify_password(&password, &user.password) {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token = issue_token(user.id, &user.email, &state.config.jwt_secret)?;
    log_action(&state.db, user.id, "login", "User logged in").await?;

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// GET /api/auth/me
pub async fn handle_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MeResponse>, AppError> {
    let user = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = ?")
        .bind(auth.id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(MeResponse { user: user.into() }))
}
