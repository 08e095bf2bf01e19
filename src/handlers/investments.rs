use axum::extract::{Path, Query, State};
use axum::response::Json;
use chrono::{DateTime, Utc};
use model::entities::investment::InvestmentType;
use model::entities::investment_asset::{InvestmentAssetType, RiskLevel};
use model::entities::investment_transaction::TransactionType;
use model::entities::prelude::{
    Investment, InvestmentAsset, InvestmentGoal, InvestmentTransaction, Portfolio,
    PortfolioInvestment,
};
use model::entities::{
    investment, investment_asset, investment_goal, investment_transaction, portfolio,
    portfolio_investment,
};
use model::ownership;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState, ListQuery};

/// Request body for creating an investment asset
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateInvestmentAssetRequest {
    pub name: String,
    /// Asset class (e.g. "Mutual Fund", "Stocks")
    #[schema(value_type = String)]
    pub asset_type: InvestmentAssetType,
    pub category: Option<String>,
    /// Current price in minor currency units
    #[validate(range(min = 0, message = "must not be negative"))]
    pub current_price: i64,
    /// "Low", "Moderate", "High" or "Very High"
    #[schema(value_type = String)]
    pub risk_level: RiskLevel,
    pub symbol: Option<String>,
    pub fund_house: Option<String>,
    pub scheme_code: Option<String>,
    pub expense_ratio: Option<f64>,
    pub interest_rate: Option<f64>,
    pub maturity_date: Option<DateTime<Utc>>,
    pub purity: Option<String>,
    pub exchange: Option<String>,
}

/// Request body for partially updating an investment asset
#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateInvestmentAssetRequest {
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub asset_type: Option<InvestmentAssetType>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub category: Option<Option<String>>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub current_price: Option<i64>,
    #[schema(value_type = Option<String>)]
    pub risk_level: Option<RiskLevel>,
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub symbol: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub fund_house: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub scheme_code: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<f64>)]
    pub expense_ratio: Option<Option<f64>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<f64>)]
    pub interest_rate: Option<Option<f64>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub maturity_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub purity: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub exchange: Option<Option<String>>,
}

/// Investment asset response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InvestmentAssetResponse {
    pub id: String,
    pub name: String,
    #[schema(value_type = String)]
    pub asset_type: InvestmentAssetType,
    pub category: Option<String>,
    pub current_price: i64,
    #[schema(value_type = String)]
    pub risk_level: RiskLevel,
    pub is_active: bool,
    pub symbol: Option<String>,
    pub fund_house: Option<String>,
    pub scheme_code: Option<String>,
    pub expense_ratio: Option<f64>,
    pub interest_rate: Option<f64>,
    pub maturity_date: Option<DateTime<Utc>>,
    pub purity: Option<String>,
    pub exchange: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<investment_asset::Model> for InvestmentAssetResponse {
    fn from(model: investment_asset::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            asset_type: model.asset_type,
            category: model.category,
            current_price: model.current_price,
            risk_level: model.risk_level,
            is_active: model.is_active,
            symbol: model.symbol,
            fund_house: model.fund_house,
            scheme_code: model.scheme_code,
            expense_ratio: model.expense_ratio,
            interest_rate: model.interest_rate,
            maturity_date: model.maturity_date,
            purity: model.purity,
            exchange: model.exchange,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Request body for creating a holding
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateInvestmentRequest {
    pub asset_id: String,
    /// "SIP", "Lumpsum", "Recurring Deposit" or "One-time Purchase"
    #[schema(value_type = String)]
    pub investment_type: InvestmentType,
    /// Invested amount in minor currency units
    #[validate(range(min = 0, message = "must not be negative"))]
    pub amount: i64,
    pub units: f64,
    pub purchase_price: i64,
    pub purchase_date: DateTime<Utc>,
    /// Day of month a SIP debits
    #[validate(range(min = 1, max = 31, message = "must be a day of month"))]
    pub sip_date: Option<i32>,
    pub maturity_date: Option<DateTime<Utc>>,
    /// Lock-in period in months
    pub lock_in_period: Option<i32>,
    pub notes: Option<String>,
}

/// Request body for partially updating a holding
#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateInvestmentRequest {
    pub asset_id: Option<String>,
    #[schema(value_type = Option<String>)]
    pub investment_type: Option<InvestmentType>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub amount: Option<i64>,
    pub units: Option<f64>,
    pub purchase_price: Option<i64>,
    pub purchase_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<i32>)]
    pub sip_date: Option<Option<i32>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub maturity_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<i32>)]
    pub lock_in_period: Option<Option<i32>>,
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
}

/// Holding response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InvestmentResponse {
    pub id: String,
    pub asset_id: String,
    #[schema(value_type = String)]
    pub investment_type: InvestmentType,
    pub amount: i64,
    pub units: f64,
    pub purchase_price: i64,
    pub purchase_date: DateTime<Utc>,
    pub sip_date: Option<i32>,
    pub maturity_date: Option<DateTime<Utc>>,
    pub lock_in_period: Option<i32>,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<investment::Model> for InvestmentResponse {
    fn from(model: investment::Model) -> Self {
        Self {
            id: model.id,
            asset_id: model.asset_id,
            investment_type: model.investment_type,
            amount: model.amount,
            units: model.units,
            purchase_price: model.purchase_price,
            purchase_date: model.purchase_date,
            sip_date: model.sip_date,
            maturity_date: model.maturity_date,
            lock_in_period: model.lock_in_period,
            is_active: model.is_active,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Request body for recording a transaction against a holding
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateTransactionRequest {
    /// "buy", "sell", "dividend", "interest" or "fee"
    #[schema(value_type = String)]
    pub transaction_type: TransactionType,
    /// Amount in minor currency units
    #[validate(range(min = 0, message = "must not be negative"))]
    pub amount: i64,
    pub units: f64,
    pub price_per_unit: i64,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Transaction response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TransactionResponse {
    pub id: String,
    pub investment_id: String,
    #[schema(value_type = String)]
    pub transaction_type: TransactionType,
    pub amount: i64,
    pub units: f64,
    pub price_per_unit: i64,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<investment_transaction::Model> for TransactionResponse {
    fn from(model: investment_transaction::Model) -> Self {
        Self {
            id: model.id,
            investment_id: model.investment_id,
            transaction_type: model.transaction_type,
            amount: model.amount,
            units: model.units,
            price_per_unit: model.price_per_unit,
            date: model.date,
            notes: model.notes,
            created_at: model.created_at,
        }
    }
}

/// A holding linked into a portfolio with its allocation weight
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PortfolioHolding {
    pub investment_id: String,
    pub weight: Option<f64>,
}

/// Request body for creating a portfolio
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreatePortfolioRequest {
    pub name: String,
    pub description: Option<String>,
    /// Intended allocation, free-form JSON object
    #[schema(value_type = Option<Object>)]
    pub target_allocation: Option<serde_json::Value>,
    /// Holdings to link, with optional weights
    #[serde(default)]
    pub investments: Vec<PortfolioHolding>,
}

/// Request body for updating a portfolio. Supplying `investments` replaces
/// the linked set wholesale.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdatePortfolioRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<Object>)]
    pub target_allocation: Option<Option<serde_json::Value>>,
    pub investments: Option<Vec<PortfolioHolding>>,
}

/// Portfolio response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PortfolioResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub target_allocation: Option<serde_json::Value>,
    pub investments: Vec<PortfolioHolding>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PortfolioResponse {
    fn from_model(model: portfolio::Model, links: Vec<portfolio_investment::Model>) -> Self {
        let target_allocation = model
            .target_allocation
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok());
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            target_allocation,
            investments: links
                .into_iter()
                .map(|link| PortfolioHolding {
                    investment_id: link.investment_id,
                    weight: link.weight,
                })
                .collect(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Request body for creating an investment goal
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateGoalRequest {
    pub name: String,
    /// Target amount in minor currency units
    #[validate(range(min = 0, message = "must not be negative"))]
    pub target_amount: i64,
    /// Amount saved so far, defaults to zero
    #[serde(default)]
    pub current_amount: i64,
    pub target_date: DateTime<Utc>,
    pub description: Option<String>,
}

/// Request body for partially updating an investment goal
#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateGoalRequest {
    pub name: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub target_amount: Option<i64>,
    pub current_amount: Option<i64>,
    pub target_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

/// Investment goal response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GoalResponse {
    pub id: String,
    pub name: String,
    pub target_amount: i64,
    pub current_amount: i64,
    pub target_date: DateTime<Utc>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<investment_goal::Model> for GoalResponse {
    fn from(model: investment_goal::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            target_amount: model.target_amount,
            current_amount: model.current_amount,
            target_date: model.target_date,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Resolve an investment asset owned by the caller, or 404.
async fn owned_investment_asset<C: ConnectionTrait>(
    db: &C,
    user_id: &str,
    asset_id: &str,
) -> Result<investment_asset::Model, ApiError> {
    ownership::find_for_user::<InvestmentAsset, _>(db, user_id, asset_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Investment asset not found".to_string()))
}

/// Resolve a holding owned by the caller, or 404.
async fn owned_investment<C: ConnectionTrait>(
    db: &C,
    user_id: &str,
    investment_id: &str,
) -> Result<investment::Model, ApiError> {
    ownership::find_for_user::<Investment, _>(db, user_id, investment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Investment not found".to_string()))
}

/// Resolve a portfolio owned by the caller, or 404.
async fn owned_portfolio<C: ConnectionTrait>(
    db: &C,
    user_id: &str,
    portfolio_id: &str,
) -> Result<portfolio::Model, ApiError> {
    ownership::find_for_user::<Portfolio, _>(db, user_id, portfolio_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Portfolio not found".to_string()))
}

async fn load_portfolio_links<C: ConnectionTrait>(
    db: &C,
    portfolio_id: &str,
) -> Result<Vec<portfolio_investment::Model>, ApiError> {
    Ok(PortfolioInvestment::find()
        .filter(portfolio_investment::Column::PortfolioId.eq(portfolio_id))
        .all(db)
        .await?)
}

/// Replace a portfolio's linked holdings. Every referenced holding must
/// belong to the caller.
async fn link_holdings<C: ConnectionTrait>(
    db: &C,
    user_id: &str,
    portfolio_id: &str,
    holdings: Vec<PortfolioHolding>,
) -> Result<Vec<portfolio_investment::Model>, ApiError> {
    let mut links = Vec::with_capacity(holdings.len());
    for holding in holdings {
        let investment_model = owned_investment(db, user_id, &holding.investment_id).await?;
        let link = portfolio_investment::ActiveModel {
            portfolio_id: Set(portfolio_id.to_string()),
            investment_id: Set(investment_model.id),
            weight: Set(holding.weight),
        }
        .insert(db)
        .await?;
        links.push(link);
    }
    Ok(links)
}

/// Create an investment asset
#[utoipa::path(
    post,
    path = "/api/investments/assets",
    tag = "investments",
    request_body = CreateInvestmentAssetRequest,
    responses(
        (status = 200, description = "Investment asset created successfully", body = ApiResponse<InvestmentAssetResponse>),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn create_investment_asset(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreateInvestmentAssetRequest>,
) -> Result<Json<ApiResponse<InvestmentAssetResponse>>, ApiError> {
    request.validate()?;

    let now = Utc::now();
    let asset = investment_asset::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(auth.0.id.clone()),
        name: Set(request.name),
        asset_type: Set(request.asset_type),
        category: Set(request.category),
        current_price: Set(request.current_price),
        risk_level: Set(request.risk_level),
        is_active: Set(true),
        symbol: Set(request.symbol),
        fund_house: Set(request.fund_house),
        scheme_code: Set(request.scheme_code),
        expense_ratio: Set(request.expense_ratio),
        interest_rate: Set(request.interest_rate),
        maturity_date: Set(request.maturity_date),
        purity: Set(request.purity),
        exchange: Set(request.exchange),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&state.db)
    .await?;

    info!("Investment asset created with ID: {}", asset.id);
    Ok(Json(ApiResponse::new(
        InvestmentAssetResponse::from(asset),
        "Investment asset created successfully",
    )))
}

/// List the caller's investment assets
#[utoipa::path(
    get,
    path = "/api/investments/assets",
    tag = "investments",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return"),
    ),
    responses(
        (status = 200, description = "Investment assets retrieved successfully", body = ApiResponse<Vec<InvestmentAssetResponse>>),
        (status = 401, description = "Missing or invalid token", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_investment_assets(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<InvestmentAssetResponse>>>, ApiError> {
    let assets = ownership::list_for_user::<InvestmentAsset, _>(
        &state.db,
        &auth.0.id,
        query.skip(),
        query.limit(),
    )
    .await?;

    Ok(Json(ApiResponse::new(
        assets
            .into_iter()
            .map(InvestmentAssetResponse::from)
            .collect(),
        "Investment assets retrieved successfully",
    )))
}

/// Get one investment asset by id
#[utoipa::path(
    get,
    path = "/api/investments/assets/{id}",
    tag = "investments",
    params(
        ("id" = String, Path, description = "Investment asset ID"),
    ),
    responses(
        (status = 200, description = "Investment asset retrieved successfully", body = ApiResponse<InvestmentAssetResponse>),
        (status = 404, description = "Investment asset not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_investment_asset(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<InvestmentAssetResponse>>, ApiError> {
    let asset = owned_investment_asset(&state.db, &auth.0.id, &id).await?;

    Ok(Json(ApiResponse::new(
        InvestmentAssetResponse::from(asset),
        "Investment asset retrieved successfully",
    )))
}

/// Partially update an investment asset
#[utoipa::path(
    put,
    path = "/api/investments/assets/{id}",
    tag = "investments",
    params(
        ("id" = String, Path, description = "Investment asset ID"),
    ),
    request_body = UpdateInvestmentAssetRequest,
    responses(
        (status = 200, description = "Investment asset updated successfully", body = ApiResponse<InvestmentAssetResponse>),
        (status = 404, description = "Investment asset not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn update_investment_asset(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateInvestmentAssetRequest>,
) -> Result<Json<ApiResponse<InvestmentAssetResponse>>, ApiError> {
    request.validate()?;

    let existing = owned_investment_asset(&state.db, &auth.0.id, &id).await?;

    let mut active: investment_asset::ActiveModel = existing.into();
    if let Some(name) = request.name {
        active.name = Set(name);
    }
    if let Some(asset_type) = request.asset_type {
        active.asset_type = Set(asset_type);
    }
    if let Some(category) = request.category {
        active.category = Set(category);
    }
    if let Some(current_price) = request.current_price {
        active.current_price = Set(current_price);
    }
    if let Some(risk_level) = request.risk_level {
        active.risk_level = Set(risk_level);
    }
    if let Some(is_active) = request.is_active {
        active.is_active = Set(is_active);
    }
    if let Some(symbol) = request.symbol {
        active.symbol = Set(symbol);
    }
    if let Some(fund_house) = request.fund_house {
        active.fund_house = Set(fund_house);
    }
    if let Some(scheme_code) = request.scheme_code {
        active.scheme_code = Set(scheme_code);
    }
    if let Some(expense_ratio) = request.expense_ratio {
        active.expense_ratio = Set(expense_ratio);
    }
    if let Some(interest_rate) = request.interest_rate {
        active.interest_rate = Set(interest_rate);
    }
    if let Some(maturity_date) = request.maturity_date {
        active.maturity_date = Set(maturity_date);
    }
    if let Some(purity) = request.purity {
        active.purity = Set(purity);
    }
    if let Some(exchange) = request.exchange {
        active.exchange = Set(exchange);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(&state.db).await?;
    info!("Investment asset {} updated", updated.id);

    Ok(Json(ApiResponse::new(
        InvestmentAssetResponse::from(updated),
        "Investment asset updated successfully",
    )))
}

/// Delete an investment asset and the holdings booked against it
#[utoipa::path(
    delete,
    path = "/api/investments/assets/{id}",
    tag = "investments",
    params(
        ("id" = String, Path, description = "Investment asset ID"),
    ),
    responses(
        (status = 200, description = "Investment asset deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Investment asset not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn delete_investment_asset(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let removed =
        ownership::delete_for_user::<InvestmentAsset, _>(&state.db, &auth.0.id, &id).await?;
    if removed == 0 {
        return Err(ApiError::NotFound("Investment asset not found".to_string()));
    }

    info!("Investment asset {} deleted", id);
    Ok(Json(ApiResponse::new(
        format!("Investment asset {} deleted", id),
        "Investment asset deleted successfully",
    )))
}

/// Book a holding in an investment asset
#[utoipa::path(
    post,
    path = "/api/investments",
    tag = "investments",
    request_body = CreateInvestmentRequest,
    responses(
        (status = 200, description = "Investment created successfully", body = ApiResponse<InvestmentResponse>),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Investment asset not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn create_investment(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreateInvestmentRequest>,
) -> Result<Json<ApiResponse<InvestmentResponse>>, ApiError> {
    request.validate()?;
    let asset = owned_investment_asset(&state.db, &auth.0.id, &request.asset_id).await?;

    let now = Utc::now();
    let holding = investment::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(auth.0.id.clone()),
        asset_id: Set(asset.id),
        investment_type: Set(request.investment_type),
        amount: Set(request.amount),
        units: Set(request.units),
        purchase_price: Set(request.purchase_price),
        purchase_date: Set(request.purchase_date),
        sip_date: Set(request.sip_date),
        maturity_date: Set(request.maturity_date),
        lock_in_period: Set(request.lock_in_period),
        is_active: Set(true),
        notes: Set(request.notes),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&state.db)
    .await?;

    info!("Investment created with ID: {}", holding.id);
    Ok(Json(ApiResponse::new(
        InvestmentResponse::from(holding),
        "Investment created successfully",
    )))
}

/// List the caller's holdings
#[utoipa::path(
    get,
    path = "/api/investments",
    tag = "investments",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return"),
    ),
    responses(
        (status = 200, description = "Investments retrieved successfully", body = ApiResponse<Vec<InvestmentResponse>>),
        (status = 401, description = "Missing or invalid token", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_investments(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<InvestmentResponse>>>, ApiError> {
    let holdings = ownership::list_for_user::<Investment, _>(
        &state.db,
        &auth.0.id,
        query.skip(),
        query.limit(),
    )
    .await?;

    Ok(Json(ApiResponse::new(
        holdings.into_iter().map(InvestmentResponse::from).collect(),
        "Investments retrieved successfully",
    )))
}

/// Get one holding by id
#[utoipa::path(
    get,
    path = "/api/investments/{id}",
    tag = "investments",
    params(
        ("id" = String, Path, description = "Investment ID"),
    ),
    responses(
        (status = 200, description = "Investment retrieved successfully", body = ApiResponse<InvestmentResponse>),
        (status = 404, description = "Investment not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_investment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<InvestmentResponse>>, ApiError> {
    let holding = owned_investment(&state.db, &auth.0.id, &id).await?;

    Ok(Json(ApiResponse::new(
        InvestmentResponse::from(holding),
        "Investment retrieved successfully",
    )))
}

/// Partially update a holding
#[utoipa::path(
    put,
    path = "/api/investments/{id}",
    tag = "investments",
    params(
        ("id" = String, Path, description = "Investment ID"),
    ),
    request_body = UpdateInvestmentRequest,
    responses(
        (status = 200, description = "Investment updated successfully", body = ApiResponse<InvestmentResponse>),
        (status = 404, description = "Investment or asset not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn update_investment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateInvestmentRequest>,
) -> Result<Json<ApiResponse<InvestmentResponse>>, ApiError> {
    request.validate()?;
    // Derive cannot reach inside the double-Option sip_date field
    if let Some(Some(sip_date)) = request.sip_date {
        if !(1..=31).contains(&sip_date) {
            return Err(ApiError::invalid_field("sip_date", "must be a day of month"));
        }
    }

    let existing = owned_investment(&state.db, &auth.0.id, &id).await?;

    let mut active: investment::ActiveModel = existing.into();
    if let Some(asset_id) = request.asset_id {
        // Reassignment must stay within the caller's own assets
        let asset = owned_investment_asset(&state.db, &auth.0.id, &asset_id).await?;
        active.asset_id = Set(asset.id);
    }
    if let Some(investment_type) = request.investment_type {
        active.investment_type = Set(investment_type);
    }
    if let Some(amount) = request.amount {
        active.amount = Set(amount);
    }
    if let Some(units) = request.units {
        active.units = Set(units);
    }
    if let Some(purchase_price) = request.purchase_price {
        active.purchase_price = Set(purchase_price);
    }
    if let Some(purchase_date) = request.purchase_date {
        active.purchase_date = Set(purchase_date);
    }
    if let Some(sip_date) = request.sip_date {
        active.sip_date = Set(sip_date);
    }
    if let Some(maturity_date) = request.maturity_date {
        active.maturity_date = Set(maturity_date);
    }
    if let Some(lock_in_period) = request.lock_in_period {
        active.lock_in_period = Set(lock_in_period);
    }
    if let Some(is_active) = request.is_active {
        active.is_active = Set(is_active);
    }
    if let Some(notes) = request.notes {
        active.notes = Set(notes);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(&state.db).await?;
    info!("Investment {} updated", updated.id);

    Ok(Json(ApiResponse::new(
        InvestmentResponse::from(updated),
        "Investment updated successfully",
    )))
}

/// Delete a holding and its transaction history
#[utoipa::path(
    delete,
    path = "/api/investments/{id}",
    tag = "investments",
    params(
        ("id" = String, Path, description = "Investment ID"),
    ),
    responses(
        (status = 200, description = "Investment deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Investment not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn delete_investment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let removed = ownership::delete_for_user::<Investment, _>(&state.db, &auth.0.id, &id).await?;
    if removed == 0 {
        return Err(ApiError::NotFound("Investment not found".to_string()));
    }

    info!("Investment {} deleted", id);
    Ok(Json(ApiResponse::new(
        format!("Investment {} deleted", id),
        "Investment deleted successfully",
    )))
}

/// Record a transaction against a holding
#[utoipa::path(
    post,
    path = "/api/investments/{id}/transactions",
    tag = "investments",
    params(
        ("id" = String, Path, description = "Investment ID"),
    ),
    request_body = CreateTransactionRequest,
    responses(
        (status = 200, description = "Transaction created successfully", body = ApiResponse<TransactionResponse>),
        (status = 404, description = "Investment not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn create_investment_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<Json<ApiResponse<TransactionResponse>>, ApiError> {
    request.validate()?;
    let holding = owned_investment(&state.db, &auth.0.id, &id).await?;

    let transaction = investment_transaction::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(auth.0.id.clone()),
        investment_id: Set(holding.id),
        transaction_type: Set(request.transaction_type),
        amount: Set(request.amount),
        units: Set(request.units),
        price_per_unit: Set(request.price_per_unit),
        date: Set(request.date),
        notes: Set(request.notes),
        created_at: Set(Utc::now()),
    }
    .insert(&state.db)
    .await?;

    info!("Investment transaction created with ID: {}", transaction.id);
    Ok(Json(ApiResponse::new(
        TransactionResponse::from(transaction),
        "Transaction created successfully",
    )))
}

/// List transactions recorded against a holding
#[utoipa::path(
    get,
    path = "/api/investments/{id}/transactions",
    tag = "investments",
    params(
        ("id" = String, Path, description = "Investment ID"),
        ("skip" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return"),
    ),
    responses(
        (status = 200, description = "Transactions retrieved successfully", body = ApiResponse<Vec<TransactionResponse>>),
        (status = 404, description = "Investment not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_investment_transactions(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<TransactionResponse>>>, ApiError> {
    let holding = owned_investment(&state.db, &auth.0.id, &id).await?;

    let transactions = InvestmentTransaction::find()
        .filter(investment_transaction::Column::InvestmentId.eq(&holding.id))
        .order_by_desc(investment_transaction::Column::Date)
        .offset(query.skip())
        .limit(query.limit())
        .all(&state.db)
        .await?;

    Ok(Json(ApiResponse::new(
        transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect(),
        "Transactions retrieved successfully",
    )))
}

/// Create a portfolio, optionally linking holdings with weights
#[utoipa::path(
    post,
    path = "/api/investments/portfolios",
    tag = "investments",
    request_body = CreatePortfolioRequest,
    responses(
        (status = 200, description = "Portfolio created successfully", body = ApiResponse<PortfolioResponse>),
        (status = 404, description = "Investment not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn create_portfolio(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreatePortfolioRequest>,
) -> Result<Json<ApiResponse<PortfolioResponse>>, ApiError> {
    let target_allocation = request
        .target_allocation
        .as_ref()
        .map(|value| value.to_string());

    let now = Utc::now();
    let txn = state.db.begin().await?;

    let portfolio_model = portfolio::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(auth.0.id.clone()),
        name: Set(request.name),
        description: Set(request.description),
        target_allocation: Set(target_allocation),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    let links = link_holdings(&txn, &auth.0.id, &portfolio_model.id, request.investments).await?;
    txn.commit().await?;

    info!("Portfolio created with ID: {}", portfolio_model.id);
    Ok(Json(ApiResponse::new(
        PortfolioResponse::from_model(portfolio_model, links),
        "Portfolio created successfully",
    )))
}

/// List the caller's portfolios
#[utoipa::path(
    get,
    path = "/api/investments/portfolios",
    tag = "investments",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return"),
    ),
    responses(
        (status = 200, description = "Portfolios retrieved successfully", body = ApiResponse<Vec<PortfolioResponse>>),
        (status = 401, description = "Missing or invalid token", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_portfolios(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<PortfolioResponse>>>, ApiError> {
    let portfolios = ownership::list_for_user::<Portfolio, _>(
        &state.db,
        &auth.0.id,
        query.skip(),
        query.limit(),
    )
    .await?;

    let mut responses = Vec::with_capacity(portfolios.len());
    for portfolio_model in portfolios {
        let links = load_portfolio_links(&state.db, &portfolio_model.id).await?;
        responses.push(PortfolioResponse::from_model(portfolio_model, links));
    }

    Ok(Json(ApiResponse::new(
        responses,
        "Portfolios retrieved successfully",
    )))
}

/// Get one portfolio by id
#[utoipa::path(
    get,
    path = "/api/investments/portfolios/{id}",
    tag = "investments",
    params(
        ("id" = String, Path, description = "Portfolio ID"),
    ),
    responses(
        (status = 200, description = "Portfolio retrieved successfully", body = ApiResponse<PortfolioResponse>),
        (status = 404, description = "Portfolio not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_portfolio(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<PortfolioResponse>>, ApiError> {
    let portfolio_model = owned_portfolio(&state.db, &auth.0.id, &id).await?;
    let links = load_portfolio_links(&state.db, &portfolio_model.id).await?;

    Ok(Json(ApiResponse::new(
        PortfolioResponse::from_model(portfolio_model, links),
        "Portfolio retrieved successfully",
    )))
}

/// Update a portfolio. A supplied `investments` list replaces the linked
/// holdings wholesale.
#[utoipa::path(
    put,
    path = "/api/investments/portfolios/{id}",
    tag = "investments",
    params(
        ("id" = String, Path, description = "Portfolio ID"),
    ),
    request_body = UpdatePortfolioRequest,
    responses(
        (status = 200, description = "Portfolio updated successfully", body = ApiResponse<PortfolioResponse>),
        (status = 404, description = "Portfolio or investment not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn update_portfolio(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(request): Json<UpdatePortfolioRequest>,
) -> Result<Json<ApiResponse<PortfolioResponse>>, ApiError> {
    let txn = state.db.begin().await?;
    let existing = owned_portfolio(&txn, &auth.0.id, &id).await?;
    let portfolio_id = existing.id.clone();

    let mut active: portfolio::ActiveModel = existing.into();
    if let Some(name) = request.name {
        active.name = Set(name);
    }
    if let Some(description) = request.description {
        active.description = Set(description);
    }
    if let Some(target_allocation) = request.target_allocation {
        active.target_allocation = Set(target_allocation.map(|value| value.to_string()));
    }
    active.updated_at = Set(Utc::now());
    let updated = active.update(&txn).await?;

    let links = match request.investments {
        Some(holdings) => {
            PortfolioInvestment::delete_many()
                .filter(portfolio_investment::Column::PortfolioId.eq(&portfolio_id))
                .exec(&txn)
                .await?;
            link_holdings(&txn, &auth.0.id, &portfolio_id, holdings).await?
        }
        None => load_portfolio_links(&txn, &portfolio_id).await?,
    };
    txn.commit().await?;

    info!("Portfolio {} updated", updated.id);
    Ok(Json(ApiResponse::new(
        PortfolioResponse::from_model(updated, links),
        "Portfolio updated successfully",
    )))
}

/// Delete a portfolio and its holding links
#[utoipa::path(
    delete,
    path = "/api/investments/portfolios/{id}",
    tag = "investments",
    params(
        ("id" = String, Path, description = "Portfolio ID"),
    ),
    responses(
        (status = 200, description = "Portfolio deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Portfolio not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn delete_portfolio(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let removed = ownership::delete_for_user::<Portfolio, _>(&state.db, &auth.0.id, &id).await?;
    if removed == 0 {
        return Err(ApiError::NotFound("Portfolio not found".to_string()));
    }

    info!("Portfolio {} deleted", id);
    Ok(Json(ApiResponse::new(
        format!("Portfolio {} deleted", id),
        "Portfolio deleted successfully",
    )))
}

/// Create an investment goal
#[utoipa::path(
    post,
    path = "/api/investments/goals",
    tag = "investments",
    request_body = CreateGoalRequest,
    responses(
        (status = 200, description = "Investment goal created successfully", body = ApiResponse<GoalResponse>),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn create_investment_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreateGoalRequest>,
) -> Result<Json<ApiResponse<GoalResponse>>, ApiError> {
    request.validate()?;

    let now = Utc::now();
    let goal = investment_goal::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(auth.0.id.clone()),
        name: Set(request.name),
        target_amount: Set(request.target_amount),
        current_amount: Set(request.current_amount),
        target_date: Set(request.target_date),
        description: Set(request.description),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&state.db)
    .await?;

    info!("Investment goal created with ID: {}", goal.id);
    Ok(Json(ApiResponse::new(
        GoalResponse::from(goal),
        "Investment goal created successfully",
    )))
}

/// List the caller's investment goals
#[utoipa::path(
    get,
    path = "/api/investments/goals",
    tag = "investments",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return"),
    ),
    responses(
        (status = 200, description = "Investment goals retrieved successfully", body = ApiResponse<Vec<GoalResponse>>),
        (status = 401, description = "Missing or invalid token", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_investment_goals(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<GoalResponse>>>, ApiError> {
    let goals = ownership::list_for_user::<InvestmentGoal, _>(
        &state.db,
        &auth.0.id,
        query.skip(),
        query.limit(),
    )
    .await?;

    Ok(Json(ApiResponse::new(
        goals.into_iter().map(GoalResponse::from).collect(),
        "Investment goals retrieved successfully",
    )))
}

/// Get one investment goal by id
#[utoipa::path(
    get,
    path = "/api/investments/goals/{id}",
    tag = "investments",
    params(
        ("id" = String, Path, description = "Investment goal ID"),
    ),
    responses(
        (status = 200, description = "Investment goal retrieved successfully", body = ApiResponse<GoalResponse>),
        (status = 404, description = "Investment goal not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_investment_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<GoalResponse>>, ApiError> {
    let goal = ownership::find_for_user::<InvestmentGoal, _>(&state.db, &auth.0.id, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Investment goal not found".to_string()))?;

    Ok(Json(ApiResponse::new(
        GoalResponse::from(goal),
        "Investment goal retrieved successfully",
    )))
}

/// Partially update an investment goal
#[utoipa::path(
    put,
    path = "/api/investments/goals/{id}",
    tag = "investments",
    params(
        ("id" = String, Path, description = "Investment goal ID"),
    ),
    request_body = UpdateGoalRequest,
    responses(
        (status = 200, description = "Investment goal updated successfully", body = ApiResponse<GoalResponse>),
        (status = 404, description = "Investment goal not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn update_investment_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateGoalRequest>,
) -> Result<Json<ApiResponse<GoalResponse>>, ApiError> {
    request.validate()?;

    let existing = ownership::find_for_user::<InvestmentGoal, _>(&state.db, &auth.0.id, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Investment goal not found".to_string()))?;

    let mut active: investment_goal::ActiveModel = existing.into();
    if let Some(name) = request.name {
        active.name = Set(name);
    }
    if let Some(target_amount) = request.target_amount {
        active.target_amount = Set(target_amount);
    }
    if let Some(current_amount) = request.current_amount {
        active.current_amount = Set(current_amount);
    }
    if let Some(target_date) = request.target_date {
        active.target_date = Set(target_date);
    }
    if let Some(description) = request.description {
        active.description = Set(description);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(&state.db).await?;
    info!("Investment goal {} updated", updated.id);

    Ok(Json(ApiResponse::new(
        GoalResponse::from(updated),
        "Investment goal updated successfully",
    )))
}

/// Delete an investment goal
#[utoipa::path(
    delete,
    path = "/api/investments/goals/{id}",
    tag = "investments",
    params(
        ("id" = String, Path, description = "Investment goal ID"),
    ),
    responses(
        (status = 200, description = "Investment goal deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Investment goal not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn delete_investment_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let removed =
        ownership::delete_for_user::<InvestmentGoal, _>(&state.db, &auth.0.id, &id).await?;
    if removed == 0 {
        return Err(ApiError::NotFound("Investment goal not found".to_string()));
    }

    info!("Investment goal {} deleted", id);
    Ok(Json(ApiResponse::new(
        format!("Investment goal {} deleted", id),
        "Investment goal deleted successfully",
    )))
}
