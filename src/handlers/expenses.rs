use axum::extract::{Path, Query, State};
use axum::response::Json;
use chrono::{DateTime, Utc};
use model::entities::expense;
use model::entities::prelude::Expense;
use model::ownership;
use sea_orm::{ActiveModelTrait, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState, ListQuery};

/// Request body for creating an expense
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateExpenseRequest {
    /// Amount in minor currency units
    #[validate(range(min = 0, message = "must not be negative"))]
    pub amount: i64,
    pub description: String,
    /// Free-form category (e.g. "Groceries")
    pub category: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub is_recurring: bool,
    /// "monthly", "weekly", ... Descriptive only.
    pub recurrence_interval: Option<String>,
    pub next_due_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub tags: Option<Vec<String>>,
    pub notes: Option<String>,
}

/// Request body for partially updating an expense
#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateExpenseRequest {
    #[validate(range(min = 0, message = "must not be negative"))]
    pub amount: Option<i64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub is_recurring: Option<bool>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub recurrence_interval: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub next_due_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub end_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<Vec<String>>)]
    pub tags: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
}

/// Expense response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExpenseResponse {
    pub id: String,
    pub amount: i64,
    pub description: String,
    pub category: String,
    pub date: DateTime<Utc>,
    pub is_recurring: bool,
    pub recurrence_interval: Option<String>,
    pub next_due_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub tags: Option<Vec<String>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<expense::Model> for ExpenseResponse {
    fn from(model: expense::Model) -> Self {
        let tags = model.tags.as_deref().map(parse_tags);
        Self {
            id: model.id,
            amount: model.amount,
            description: model.description,
            category: model.category,
            date: model.date,
            is_recurring: model.is_recurring,
            recurrence_interval: model.recurrence_interval,
            next_due_date: model.next_due_date,
            end_date: model.end_date,
            tags,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Tags are stored as a JSON array in a text column.
fn serialize_tags(tags: &[String]) -> String {
    // Vec<String> always serializes
    serde_json::to_string(tags).unwrap_or_else(|_| "[]".to_string())
}

fn parse_tags(raw: &str) -> Vec<String> {
    match serde_json::from_str(raw) {
        Ok(tags) => tags,
        Err(err) => {
            warn!("Discarding unparseable tags column: {}", err);
            Vec::new()
        }
    }
}

/// Create an expense
#[utoipa::path(
    post,
    path = "/api/expenses",
    tag = "expenses",
    request_body = CreateExpenseRequest,
    responses(
        (status = 200, description = "Expense created successfully", body = ApiResponse<ExpenseResponse>),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn create_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreateExpenseRequest>,
) -> Result<Json<ApiResponse<ExpenseResponse>>, ApiError> {
    request.validate()?;

    let now = Utc::now();
    let expense_model = expense::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(auth.0.id.clone()),
        amount: Set(request.amount),
        description: Set(request.description),
        category: Set(request.category),
        date: Set(request.date),
        is_recurring: Set(request.is_recurring),
        recurrence_interval: Set(request.recurrence_interval),
        next_due_date: Set(request.next_due_date),
        end_date: Set(request.end_date),
        tags: Set(request.tags.as_deref().map(serialize_tags)),
        notes: Set(request.notes),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&state.db)
    .await?;

    info!("Expense created with ID: {}", expense_model.id);
    Ok(Json(ApiResponse::new(
        ExpenseResponse::from(expense_model),
        "Expense created successfully",
    )))
}

/// List the caller's expenses
#[utoipa::path(
    get,
    path = "/api/expenses",
    tag = "expenses",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return"),
    ),
    responses(
        (status = 200, description = "Expenses retrieved successfully", body = ApiResponse<Vec<ExpenseResponse>>),
        (status = 401, description = "Missing or invalid token", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_expenses(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<ExpenseResponse>>>, ApiError> {
    let expenses =
        ownership::list_for_user::<Expense, _>(&state.db, &auth.0.id, query.skip(), query.limit())
            .await?;

    Ok(Json(ApiResponse::new(
        expenses.into_iter().map(ExpenseResponse::from).collect(),
        "Expenses retrieved successfully",
    )))
}

/// Get one expense by id
#[utoipa::path(
    get,
    path = "/api/expenses/{id}",
    tag = "expenses",
    params(
        ("id" = String, Path, description = "Expense ID"),
    ),
    responses(
        (status = 200, description = "Expense retrieved successfully", body = ApiResponse<ExpenseResponse>),
        (status = 404, description = "Expense not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ExpenseResponse>>, ApiError> {
    let expense_model = ownership::find_for_user::<Expense, _>(&state.db, &auth.0.id, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Expense not found".to_string()))?;

    Ok(Json(ApiResponse::new(
        ExpenseResponse::from(expense_model),
        "Expense retrieved successfully",
    )))
}

/// Partially update an expense
#[utoipa::path(
    put,
    path = "/api/expenses/{id}",
    tag = "expenses",
    params(
        ("id" = String, Path, description = "Expense ID"),
    ),
    request_body = UpdateExpenseRequest,
    responses(
        (status = 200, description = "Expense updated successfully", body = ApiResponse<ExpenseResponse>),
        (status = 404, description = "Expense not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn update_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateExpenseRequest>,
) -> Result<Json<ApiResponse<ExpenseResponse>>, ApiError> {
    request.validate()?;

    let existing = ownership::find_for_user::<Expense, _>(&state.db, &auth.0.id, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Expense not found".to_string()))?;

    let mut active: expense::ActiveModel = existing.into();
    if let Some(amount) = request.amount {
        active.amount = Set(amount);
    }
    if let Some(description) = request.description {
        active.description = Set(description);
    }
    if let Some(category) = request.category {
        active.category = Set(category);
    }
    if let Some(date) = request.date {
        active.date = Set(date);
    }
    if let Some(is_recurring) = request.is_recurring {
        active.is_recurring = Set(is_recurring);
    }
    if let Some(recurrence_interval) = request.recurrence_interval {
        active.recurrence_interval = Set(recurrence_interval);
    }
    if let Some(next_due_date) = request.next_due_date {
        active.next_due_date = Set(next_due_date);
    }
    if let Some(end_date) = request.end_date {
        active.end_date = Set(end_date);
    }
    if let Some(tags) = request.tags {
        active.tags = Set(tags.as_deref().map(serialize_tags));
    }
    if let Some(notes) = request.notes {
        active.notes = Set(notes);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(&state.db).await?;
    info!("Expense {} updated", updated.id);

    Ok(Json(ApiResponse::new(
        ExpenseResponse::from(updated),
        "Expense updated successfully",
    )))
}

/// Delete an expense
#[utoipa::path(
    delete,
    path = "/api/expenses/{id}",
    tag = "expenses",
    params(
        ("id" = String, Path, description = "Expense ID"),
    ),
    responses(
        (status = 200, description = "Expense deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Expense not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn delete_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let removed = ownership::delete_for_user::<Expense, _>(&state.db, &auth.0.id, &id).await?;
    if removed == 0 {
        return Err(ApiError::NotFound("Expense not found".to_string()));
    }

    info!("Expense {} deleted", id);
    Ok(Json(ApiResponse::new(
        format!("Expense {} deleted", id),
        "Expense deleted successfully",
    )))
}
