use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use chrono::{DateTime, Utc};
use model::entities::income_source::{DeductionCategory, IncomeSourceType};
use model::entities::prelude::{Income, IncomeSource, MonthlyIncomeSummary};
use model::entities::{income, income_source, monthly_income_summary};
use model::ownership;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState, ListQuery};

/// Request body for creating an income source
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateIncomeSourceRequest {
    pub name: String,
    /// Kind of income stream (e.g. "Salary", "Freelance")
    #[schema(value_type = String)]
    pub source_type: IncomeSourceType,
    /// Tax deduction bucket (e.g. "Section 80C", "HRA")
    #[schema(value_type = Option<String>)]
    pub deduction_category: Option<DeductionCategory>,
}

/// Request body for partially updating an income source
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateIncomeSourceRequest {
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub source_type: Option<IncomeSourceType>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub deduction_category: Option<Option<DeductionCategory>>,
    pub is_active: Option<bool>,
}

/// Income source response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IncomeSourceResponse {
    pub id: String,
    pub name: String,
    #[schema(value_type = String)]
    pub source_type: IncomeSourceType,
    #[schema(value_type = Option<String>)]
    pub deduction_category: Option<DeductionCategory>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<income_source::Model> for IncomeSourceResponse {
    fn from(model: income_source::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            source_type: model.source_type,
            deduction_category: model.deduction_category,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Request body for booking an income entry
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateIncomeRequest {
    pub income_source_id: String,
    /// Amount in minor currency units
    #[validate(range(min = 0, message = "must not be negative"))]
    pub amount: i64,
    /// Gross amount, defaults to `amount` in summary rollups
    pub gross_amount: Option<i64>,
    /// Net amount, defaults to `amount` in summary rollups
    pub net_amount: Option<i64>,
    pub date: DateTime<Utc>,
    #[validate(range(min = 1, max = 12, message = "must be between 1 and 12"))]
    pub month: i32,
    #[validate(range(min = 1900, max = 2100, message = "must be a plausible year"))]
    pub year: i32,
    pub description: Option<String>,
    pub notes: Option<String>,
}

/// Request body for partially updating an income entry
#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateIncomeRequest {
    pub income_source_id: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub amount: Option<i64>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<i64>)]
    pub gross_amount: Option<Option<i64>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<i64>)]
    pub net_amount: Option<Option<i64>>,
    pub date: Option<DateTime<Utc>>,
    #[validate(range(min = 1, max = 12, message = "must be between 1 and 12"))]
    pub month: Option<i32>,
    #[validate(range(min = 1900, max = 2100, message = "must be a plausible year"))]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
}

/// Income entry response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IncomeResponse {
    pub id: String,
    pub income_source_id: String,
    pub amount: i64,
    pub gross_amount: Option<i64>,
    pub net_amount: Option<i64>,
    pub date: DateTime<Utc>,
    pub month: i32,
    pub year: i32,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<income::Model> for IncomeResponse {
    fn from(model: income::Model) -> Self {
        Self {
            id: model.id,
            income_source_id: model.income_source_id,
            amount: model.amount,
            gross_amount: model.gross_amount,
            net_amount: model.net_amount,
            date: model.date,
            month: model.month,
            year: model.year,
            description: model.description,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Monthly income summary response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MonthlyIncomeSummaryResponse {
    pub id: String,
    pub month: i32,
    pub year: i32,
    pub total_gross_income: i64,
    pub total_net_income: i64,
    pub total_deductions: i64,
    /// Per-source totals for the period, keyed by income source id
    pub income_sources: BTreeMap<String, i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<monthly_income_summary::Model> for MonthlyIncomeSummaryResponse {
    fn from(model: monthly_income_summary::Model) -> Self {
        let income_sources = model
            .income_sources
            .as_deref()
            .and_then(|raw| match serde_json::from_str(raw) {
                Ok(map) => Some(map),
                Err(err) => {
                    warn!("Discarding unparseable income_sources column: {}", err);
                    None
                }
            })
            .unwrap_or_default();
        Self {
            id: model.id,
            month: model.month,
            year: model.year,
            total_gross_income: model.total_gross_income,
            total_net_income: model.total_net_income,
            total_deductions: model.total_deductions,
            income_sources,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Query parameters for the summaries endpoint
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SummaryQuery {
    pub year: Option<i32>,
    pub month: Option<i32>,
}

/// Recompute the rollup for one (month, year) from the income rows that are
/// visible inside `db`. Runs in the same transaction as the mutation that
/// triggered it, so the summary can never drift from the entries.
async fn recompute_monthly_summary<C: ConnectionTrait>(
    db: &C,
    user_id: &str,
    month: i32,
    year: i32,
) -> Result<(), ApiError> {
    let entries = Income::find()
        .filter(income::Column::UserId.eq(user_id))
        .filter(income::Column::Month.eq(month))
        .filter(income::Column::Year.eq(year))
        .all(db)
        .await?;

    let existing = MonthlyIncomeSummary::find()
        .filter(monthly_income_summary::Column::UserId.eq(user_id))
        .filter(monthly_income_summary::Column::Month.eq(month))
        .filter(monthly_income_summary::Column::Year.eq(year))
        .one(db)
        .await?;

    if entries.is_empty() {
        if let Some(summary) = existing {
            debug!("Removing empty summary for {}/{}", month, year);
            summary.delete(db).await?;
        }
        return Ok(());
    }

    let mut total_gross = 0i64;
    let mut total_net = 0i64;
    let mut by_source: BTreeMap<String, i64> = BTreeMap::new();
    for entry in &entries {
        total_gross += entry.gross_amount.unwrap_or(entry.amount);
        total_net += entry.net_amount.unwrap_or(entry.amount);
        *by_source.entry(entry.income_source_id.clone()).or_insert(0) += entry.amount;
    }
    let by_source_json = serde_json::to_string(&by_source)
        .map_err(|err| ApiError::Internal(format!("Failed to serialize source totals: {err}")))?;

    let now = Utc::now();
    match existing {
        Some(summary) => {
            let mut active: monthly_income_summary::ActiveModel = summary.into();
            active.total_gross_income = Set(total_gross);
            active.total_net_income = Set(total_net);
            active.total_deductions = Set(total_gross - total_net);
            active.income_sources = Set(Some(by_source_json));
            active.updated_at = Set(now);
            active.update(db).await?;
        }
        None => {
            monthly_income_summary::ActiveModel {
                id: Set(Uuid::new_v4().to_string()),
                user_id: Set(user_id.to_string()),
                month: Set(month),
                year: Set(year),
                total_gross_income: Set(total_gross),
                total_net_income: Set(total_net),
                total_deductions: Set(total_gross - total_net),
                income_sources: Set(Some(by_source_json)),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(db)
            .await?;
        }
    }

    debug!("Summary for {}/{} recomputed", month, year);
    Ok(())
}

/// Resolve an income source owned by the caller, or 404.
async fn owned_source<C: ConnectionTrait>(
    db: &C,
    user_id: &str,
    source_id: &str,
) -> Result<income_source::Model, ApiError> {
    ownership::find_for_user::<IncomeSource, _>(db, user_id, source_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Income source not found".to_string()))
}

/// Create an income source
#[utoipa::path(
    post,
    path = "/api/income/sources",
    tag = "income",
    request_body = CreateIncomeSourceRequest,
    responses(
        (status = 200, description = "Income source created successfully", body = ApiResponse<IncomeSourceResponse>),
        (status = 401, description = "Missing or invalid token", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn create_income_source(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreateIncomeSourceRequest>,
) -> Result<Json<ApiResponse<IncomeSourceResponse>>, ApiError> {
    let now = Utc::now();
    let source = income_source::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(auth.0.id.clone()),
        name: Set(request.name),
        source_type: Set(request.source_type),
        deduction_category: Set(request.deduction_category),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&state.db)
    .await?;

    info!("Income source created with ID: {}", source.id);
    Ok(Json(ApiResponse::new(
        IncomeSourceResponse::from(source),
        "Income source created successfully",
    )))
}

/// List the caller's income sources
#[utoipa::path(
    get,
    path = "/api/income/sources",
    tag = "income",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return"),
    ),
    responses(
        (status = 200, description = "Income sources retrieved successfully", body = ApiResponse<Vec<IncomeSourceResponse>>),
        (status = 401, description = "Missing or invalid token", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_income_sources(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<IncomeSourceResponse>>>, ApiError> {
    let sources = ownership::list_for_user::<IncomeSource, _>(
        &state.db,
        &auth.0.id,
        query.skip(),
        query.limit(),
    )
    .await?;

    Ok(Json(ApiResponse::new(
        sources.into_iter().map(IncomeSourceResponse::from).collect(),
        "Income sources retrieved successfully",
    )))
}

/// Get one income source by id
#[utoipa::path(
    get,
    path = "/api/income/sources/{id}",
    tag = "income",
    params(
        ("id" = String, Path, description = "Income source ID"),
    ),
    responses(
        (status = 200, description = "Income source retrieved successfully", body = ApiResponse<IncomeSourceResponse>),
        (status = 404, description = "Income source not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_income_source(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<IncomeSourceResponse>>, ApiError> {
    let source = owned_source(&state.db, &auth.0.id, &id).await?;

    Ok(Json(ApiResponse::new(
        IncomeSourceResponse::from(source),
        "Income source retrieved successfully",
    )))
}

/// Partially update an income source
#[utoipa::path(
    put,
    path = "/api/income/sources/{id}",
    tag = "income",
    params(
        ("id" = String, Path, description = "Income source ID"),
    ),
    request_body = UpdateIncomeSourceRequest,
    responses(
        (status = 200, description = "Income source updated successfully", body = ApiResponse<IncomeSourceResponse>),
        (status = 404, description = "Income source not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn update_income_source(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateIncomeSourceRequest>,
) -> Result<Json<ApiResponse<IncomeSourceResponse>>, ApiError> {
    let existing = owned_source(&state.db, &auth.0.id, &id).await?;

    let mut active: income_source::ActiveModel = existing.into();
    if let Some(name) = request.name {
        active.name = Set(name);
    }
    if let Some(source_type) = request.source_type {
        active.source_type = Set(source_type);
    }
    if let Some(deduction_category) = request.deduction_category {
        active.deduction_category = Set(deduction_category);
    }
    if let Some(is_active) = request.is_active {
        active.is_active = Set(is_active);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(&state.db).await?;
    info!("Income source {} updated", updated.id);

    Ok(Json(ApiResponse::new(
        IncomeSourceResponse::from(updated),
        "Income source updated successfully",
    )))
}

/// Delete an income source, its income entries, and refresh the summaries
/// the cascade touched
#[utoipa::path(
    delete,
    path = "/api/income/sources/{id}",
    tag = "income",
    params(
        ("id" = String, Path, description = "Income source ID"),
    ),
    responses(
        (status = 200, description = "Income source deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Income source not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn delete_income_source(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let txn = state.db.begin().await?;
    let source = owned_source(&txn, &auth.0.id, &id).await?;

    // Periods whose rollups the cascade will invalidate
    let affected: Vec<(i32, i32)> = source
        .find_related(Income)
        .all(&txn)
        .await?
        .into_iter()
        .map(|entry| (entry.month, entry.year))
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();

    source.delete(&txn).await?;
    for (month, year) in affected {
        recompute_monthly_summary(&txn, &auth.0.id, month, year).await?;
    }
    txn.commit().await?;

    info!("Income source {} deleted", id);
    Ok(Json(ApiResponse::new(
        format!("Income source {} deleted", id),
        "Income source deleted successfully",
    )))
}

/// Book an income entry and refresh its period's summary
#[utoipa::path(
    post,
    path = "/api/income",
    tag = "income",
    request_body = CreateIncomeRequest,
    responses(
        (status = 200, description = "Income created successfully", body = ApiResponse<IncomeResponse>),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Income source not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn create_income(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreateIncomeRequest>,
) -> Result<Json<ApiResponse<IncomeResponse>>, ApiError> {
    request.validate()?;

    let txn = state.db.begin().await?;
    let source = owned_source(&txn, &auth.0.id, &request.income_source_id).await?;

    let now = Utc::now();
    let entry = income::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(auth.0.id.clone()),
        income_source_id: Set(source.id),
        amount: Set(request.amount),
        gross_amount: Set(request.gross_amount),
        net_amount: Set(request.net_amount),
        date: Set(request.date),
        month: Set(request.month),
        year: Set(request.year),
        description: Set(request.description),
        notes: Set(request.notes),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    recompute_monthly_summary(&txn, &auth.0.id, entry.month, entry.year).await?;
    txn.commit().await?;

    info!("Income created with ID: {}", entry.id);
    Ok(Json(ApiResponse::new(
        IncomeResponse::from(entry),
        "Income created successfully",
    )))
}

/// List the caller's income entries
#[utoipa::path(
    get,
    path = "/api/income",
    tag = "income",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return"),
    ),
    responses(
        (status = 200, description = "Income entries retrieved successfully", body = ApiResponse<Vec<IncomeResponse>>),
        (status = 401, description = "Missing or invalid token", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_incomes(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<IncomeResponse>>>, ApiError> {
    let entries =
        ownership::list_for_user::<Income, _>(&state.db, &auth.0.id, query.skip(), query.limit())
            .await?;

    Ok(Json(ApiResponse::new(
        entries.into_iter().map(IncomeResponse::from).collect(),
        "Income entries retrieved successfully",
    )))
}

/// Get one income entry by id
#[utoipa::path(
    get,
    path = "/api/income/{id}",
    tag = "income",
    params(
        ("id" = String, Path, description = "Income ID"),
    ),
    responses(
        (status = 200, description = "Income retrieved successfully", body = ApiResponse<IncomeResponse>),
        (status = 404, description = "Income not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_income(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<IncomeResponse>>, ApiError> {
    let entry = ownership::find_for_user::<Income, _>(&state.db, &auth.0.id, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Income not found".to_string()))?;

    Ok(Json(ApiResponse::new(
        IncomeResponse::from(entry),
        "Income retrieved successfully",
    )))
}

/// Partially update an income entry and refresh every summary it touches
#[utoipa::path(
    put,
    path = "/api/income/{id}",
    tag = "income",
    params(
        ("id" = String, Path, description = "Income ID"),
    ),
    request_body = UpdateIncomeRequest,
    responses(
        (status = 200, description = "Income updated successfully", body = ApiResponse<IncomeResponse>),
        (status = 404, description = "Income or income source not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn update_income(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateIncomeRequest>,
) -> Result<Json<ApiResponse<IncomeResponse>>, ApiError> {
    request.validate()?;

    let txn = state.db.begin().await?;
    let existing = ownership::find_for_user::<Income, _>(&txn, &auth.0.id, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Income not found".to_string()))?;
    let old_period = (existing.month, existing.year);

    let mut active: income::ActiveModel = existing.into();
    if let Some(income_source_id) = request.income_source_id {
        // Reassignment must stay within the caller's own sources
        let source = owned_source(&txn, &auth.0.id, &income_source_id).await?;
        active.income_source_id = Set(source.id);
    }
    if let Some(amount) = request.amount {
        active.amount = Set(amount);
    }
    if let Some(gross_amount) = request.gross_amount {
        active.gross_amount = Set(gross_amount);
    }
    if let Some(net_amount) = request.net_amount {
        active.net_amount = Set(net_amount);
    }
    if let Some(date) = request.date {
        active.date = Set(date);
    }
    if let Some(month) = request.month {
        active.month = Set(month);
    }
    if let Some(year) = request.year {
        active.year = Set(year);
    }
    if let Some(description) = request.description {
        active.description = Set(description);
    }
    if let Some(notes) = request.notes {
        active.notes = Set(notes);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(&txn).await?;

    recompute_monthly_summary(&txn, &auth.0.id, updated.month, updated.year).await?;
    if old_period != (updated.month, updated.year) {
        recompute_monthly_summary(&txn, &auth.0.id, old_period.0, old_period.1).await?;
    }
    txn.commit().await?;

    info!("Income {} updated", updated.id);
    Ok(Json(ApiResponse::new(
        IncomeResponse::from(updated),
        "Income updated successfully",
    )))
}

/// Delete an income entry and refresh its period's summary
#[utoipa::path(
    delete,
    path = "/api/income/{id}",
    tag = "income",
    params(
        ("id" = String, Path, description = "Income ID"),
    ),
    responses(
        (status = 200, description = "Income deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Income not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn delete_income(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let txn = state.db.begin().await?;
    let entry = ownership::find_for_user::<Income, _>(&txn, &auth.0.id, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Income not found".to_string()))?;
    let (month, year) = (entry.month, entry.year);

    entry.delete(&txn).await?;
    recompute_monthly_summary(&txn, &auth.0.id, month, year).await?;
    txn.commit().await?;

    info!("Income {} deleted", id);
    Ok(Json(ApiResponse::new(
        format!("Income {} deleted", id),
        "Income deleted successfully",
    )))
}

/// List monthly income summaries, optionally filtered by year and month
#[utoipa::path(
    get,
    path = "/api/income/summaries",
    tag = "income",
    params(
        ("year" = Option<i32>, Query, description = "Filter by year"),
        ("month" = Option<i32>, Query, description = "Filter by month (1-12)"),
    ),
    responses(
        (status = 200, description = "Summaries retrieved successfully", body = ApiResponse<Vec<MonthlyIncomeSummaryResponse>>),
        (status = 401, description = "Missing or invalid token", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_income_summaries(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<ApiResponse<Vec<MonthlyIncomeSummaryResponse>>>, ApiError> {
    let mut select = MonthlyIncomeSummary::find()
        .filter(monthly_income_summary::Column::UserId.eq(&auth.0.id));
    if let Some(year) = query.year {
        select = select.filter(monthly_income_summary::Column::Year.eq(year));
    }
    if let Some(month) = query.month {
        select = select.filter(monthly_income_summary::Column::Month.eq(month));
    }

    let summaries = select
        .order_by_desc(monthly_income_summary::Column::Year)
        .order_by_desc(monthly_income_summary::Column::Month)
        .all(&state.db)
        .await?;

    Ok(Json(ApiResponse::new(
        summaries
            .into_iter()
            .map(MonthlyIncomeSummaryResponse::from)
            .collect(),
        "Summaries retrieved successfully",
    )))
}
