use axum::{extract::State, response::Json};
use chrono::{DateTime, Utc};
use model::entities::user;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::{hash_password, issue_token, verify_password, AuthUser};
use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState};

/// Request body for registering a new user
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Email address, unique per user
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Plain-text password, hashed before storage
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
}

/// Request body for logging in
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User response model. The password digest is never serialized.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

/// Bearer token response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered successfully", body = ApiResponse<UserResponse>),
        (status = 400, description = "Email already registered or invalid input", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    request.validate()?;

    let existing = user::Entity::find()
        .filter(user::Column::Email.eq(&request.email))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        warn!("Registration rejected, email already taken");
        return Err(ApiError::BadRequest("Email already registered".to_string()));
    }

    let now = Utc::now();
    let new_user = user::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        email: Set(request.email.clone()),
        hashed_password: Set(hash_password(&request.password)?),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let user_model = new_user.insert(&state.db).await?;
    info!("User registered with ID: {}", user_model.id);

    Ok(Json(ApiResponse::new(
        UserResponse::from(user_model),
        "User registered successfully",
    )))
}

/// Log in and receive a bearer token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<TokenResponse>),
        (status = 400, description = "Inactive user", body = crate::schemas::ErrorResponse),
        (status = 401, description = "Incorrect credentials", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    let user_model = user::Entity::find()
        .filter(user::Column::Email.eq(&request.email))
        .one(&state.db)
        .await?;

    // A missing user and a wrong password produce the same error
    let user_model = match user_model {
        Some(model) if verify_password(&request.password, &model.hashed_password) => model,
        _ => {
            warn!("Login failed for email");
            return Err(ApiError::Unauthorized(
                "Incorrect email or password".to_string(),
            ));
        }
    };

    if !user_model.is_active {
        return Err(ApiError::BadRequest("Inactive user".to_string()));
    }

    let token = issue_token(&user_model.id, &state.auth)?;
    info!("User {} logged in", user_model.id);

    Ok(Json(ApiResponse::new(
        TokenResponse {
            access_token: token,
            token_type: "bearer".to_string(),
        },
        "Login successful",
    )))
}

/// Get the currently authenticated user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserResponse>),
        (status = 401, description = "Missing or invalid token", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(auth))]
pub async fn me(auth: AuthUser) -> Json<ApiResponse<UserResponse>> {
    Json(ApiResponse::new(
        UserResponse::from(auth.0),
        "Current user retrieved successfully",
    ))
}
