use std::collections::HashMap;

use chrono::{DateTime, Utc};
use model::entities::{asset_document, document_attachment, insurance_document, maintenance_document};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use crate::config::AuthConfig;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Token signing configuration
    pub auth: AuthConfig,
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
            success: true,
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
    /// Per-field validation failures, when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<HashMap<String, Vec<String>>>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// Pagination query parameters shared by every list endpoint
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ListQuery {
    /// Rows to skip (default 0)
    pub skip: Option<u64>,
    /// Maximum rows to return (default 100)
    pub limit: Option<u64>,
}

impl ListQuery {
    pub fn skip(&self) -> u64 {
        self.skip.unwrap_or(0)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(100)
    }
}

/// Deserialize helper distinguishing an absent key from an explicit null in
/// partial updates: missing field -> `None`, `null` -> `Some(None)`,
/// value -> `Some(Some(value))`. Use with `#[serde(default)]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Where a document's content lives: a link, or the base64 payload itself.
/// Exactly one is present on the wire; storage splits it over two nullable
/// columns.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSource {
    FileUrl(String),
    FileData(String),
}

impl DocumentSource {
    /// Split into the `(file_url, file_data)` storage columns.
    pub fn into_columns(self) -> (Option<String>, Option<String>) {
        match self {
            DocumentSource::FileUrl(url) => (Some(url), None),
            DocumentSource::FileData(data) => (None, Some(data)),
        }
    }

    /// Rebuild from storage. A persisted row always has exactly one side
    /// set; a row with neither carries no source at all.
    fn from_columns(file_url: Option<String>, file_data: Option<String>) -> Option<Self> {
        match (file_url, file_data) {
            (Some(url), _) => Some(DocumentSource::FileUrl(url)),
            (None, Some(data)) => Some(DocumentSource::FileData(data)),
            (None, None) => None,
        }
    }
}

/// Request body for attaching a document to a parent record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DocumentPayload {
    /// Original file name
    pub file_name: String,
    /// MIME type
    pub file_type: String,
    /// Size in bytes
    pub file_size: i64,
    /// `file_url` or `file_data`, never both
    #[serde(flatten)]
    pub source: DocumentSource,
    /// Document category (e.g. "Purchase Receipt")
    pub document_type: String,
}

/// Document response model, shared by all four attachment tables
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DocumentResponse {
    pub id: String,
    pub file_name: String,
    pub file_type: String,
    pub file_size: i64,
    #[serde(flatten)]
    pub source: Option<DocumentSource>,
    pub document_type: String,
    pub upload_date: DateTime<Utc>,
}

impl From<document_attachment::Model> for DocumentResponse {
    fn from(model: document_attachment::Model) -> Self {
        Self {
            id: model.id,
            file_name: model.file_name,
            file_type: model.file_type,
            file_size: model.file_size,
            source: DocumentSource::from_columns(model.file_url, model.file_data),
            document_type: model.document_type,
            upload_date: model.upload_date,
        }
    }
}

impl From<asset_document::Model> for DocumentResponse {
    fn from(model: asset_document::Model) -> Self {
        Self {
            id: model.id,
            file_name: model.file_name,
            file_type: model.file_type,
            file_size: model.file_size,
            source: DocumentSource::from_columns(model.file_url, model.file_data),
            document_type: model.document_type,
            upload_date: model.upload_date,
        }
    }
}

impl From<maintenance_document::Model> for DocumentResponse {
    fn from(model: maintenance_document::Model) -> Self {
        Self {
            id: model.id,
            file_name: model.file_name,
            file_type: model.file_type,
            file_size: model.file_size,
            source: DocumentSource::from_columns(model.file_url, model.file_data),
            document_type: model.document_type,
            upload_date: model.upload_date,
        }
    }
}

impl From<insurance_document::Model> for DocumentResponse {
    fn from(model: insurance_document::Model) -> Self {
        Self {
            id: model.id,
            file_name: model.file_name,
            file_type: model.file_type,
            file_size: model.file_size,
            source: DocumentSource::from_columns(model.file_url, model.file_data),
            document_type: model.document_type,
            upload_date: model.upload_date,
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::root,
        crate::handlers::health::health_check,
        crate::handlers::auth::register,
        crate::handlers::auth::login,
        crate::handlers::auth::me,
        crate::handlers::tax_deductions::create_tax_deduction,
        crate::handlers::tax_deductions::get_tax_deductions,
        crate::handlers::tax_deductions::get_tax_deduction,
        crate::handlers::tax_deductions::update_tax_deduction,
        crate::handlers::tax_deductions::delete_tax_deduction,
        crate::handlers::assets::create_asset,
        crate::handlers::assets::get_assets,
        crate::handlers::assets::get_asset,
        crate::handlers::assets::update_asset,
        crate::handlers::assets::delete_asset,
        crate::handlers::assets::create_maintenance_record,
        crate::handlers::assets::get_maintenance_records,
        crate::handlers::assets::get_maintenance_record,
        crate::handlers::assets::update_maintenance_record,
        crate::handlers::assets::delete_maintenance_record,
        crate::handlers::expenses::create_expense,
        crate::handlers::expenses::get_expenses,
        crate::handlers::expenses::get_expense,
        crate::handlers::expenses::update_expense,
        crate::handlers::expenses::delete_expense,
        crate::handlers::income::create_income_source,
        crate::handlers::income::get_income_sources,
        crate::handlers::income::get_income_source,
        crate::handlers::income::update_income_source,
        crate::handlers::income::delete_income_source,
        crate::handlers::income::create_income,
        crate::handlers::income::get_incomes,
        crate::handlers::income::get_income,
        crate::handlers::income::update_income,
        crate::handlers::income::delete_income,
        crate::handlers::income::get_income_summaries,
        crate::handlers::insurance::create_policy,
        crate::handlers::insurance::get_policies,
        crate::handlers::insurance::get_policy,
        crate::handlers::insurance::update_policy,
        crate::handlers::insurance::delete_policy,
        crate::handlers::insurance::create_claim,
        crate::handlers::insurance::get_claims,
        crate::handlers::insurance::get_claim,
        crate::handlers::insurance::update_claim,
        crate::handlers::insurance::delete_claim,
        crate::handlers::investments::create_investment_asset,
        crate::handlers::investments::get_investment_assets,
        crate::handlers::investments::get_investment_asset,
        crate::handlers::investments::update_investment_asset,
        crate::handlers::investments::delete_investment_asset,
        crate::handlers::investments::create_investment,
        crate::handlers::investments::get_investments,
        crate::handlers::investments::get_investment,
        crate::handlers::investments::update_investment,
        crate::handlers::investments::delete_investment,
        crate::handlers::investments::create_investment_transaction,
        crate::handlers::investments::get_investment_transactions,
        crate::handlers::investments::create_portfolio,
        crate::handlers::investments::get_portfolios,
        crate::handlers::investments::get_portfolio,
        crate::handlers::investments::update_portfolio,
        crate::handlers::investments::delete_portfolio,
        crate::handlers::investments::create_investment_goal,
        crate::handlers::investments::get_investment_goals,
        crate::handlers::investments::get_investment_goal,
        crate::handlers::investments::update_investment_goal,
        crate::handlers::investments::delete_investment_goal,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            ListQuery,
            DocumentSource,
            DocumentPayload,
            DocumentResponse,
            crate::handlers::auth::RegisterRequest,
            crate::handlers::auth::LoginRequest,
            crate::handlers::auth::UserResponse,
            crate::handlers::auth::TokenResponse,
            crate::handlers::tax_deductions::CreateTaxDeductionRequest,
            crate::handlers::tax_deductions::UpdateTaxDeductionRequest,
            crate::handlers::tax_deductions::TaxDeductionResponse,
            crate::handlers::assets::CreateAssetRequest,
            crate::handlers::assets::UpdateAssetRequest,
            crate::handlers::assets::AssetResponse,
            crate::handlers::assets::CreateMaintenanceRequest,
            crate::handlers::assets::UpdateMaintenanceRequest,
            crate::handlers::assets::MaintenanceRecordResponse,
            crate::handlers::expenses::CreateExpenseRequest,
            crate::handlers::expenses::UpdateExpenseRequest,
            crate::handlers::expenses::ExpenseResponse,
            crate::handlers::income::CreateIncomeSourceRequest,
            crate::handlers::income::UpdateIncomeSourceRequest,
            crate::handlers::income::IncomeSourceResponse,
            crate::handlers::income::CreateIncomeRequest,
            crate::handlers::income::UpdateIncomeRequest,
            crate::handlers::income::IncomeResponse,
            crate::handlers::income::MonthlyIncomeSummaryResponse,
            crate::handlers::insurance::CreatePolicyRequest,
            crate::handlers::insurance::UpdatePolicyRequest,
            crate::handlers::insurance::PolicyResponse,
            crate::handlers::insurance::CreateClaimRequest,
            crate::handlers::insurance::UpdateClaimRequest,
            crate::handlers::insurance::ClaimResponse,
            crate::handlers::investments::CreateInvestmentAssetRequest,
            crate::handlers::investments::UpdateInvestmentAssetRequest,
            crate::handlers::investments::InvestmentAssetResponse,
            crate::handlers::investments::CreateInvestmentRequest,
            crate::handlers::investments::UpdateInvestmentRequest,
            crate::handlers::investments::InvestmentResponse,
            crate::handlers::investments::CreateTransactionRequest,
            crate::handlers::investments::TransactionResponse,
            crate::handlers::investments::PortfolioHolding,
            crate::handlers::investments::CreatePortfolioRequest,
            crate::handlers::investments::UpdatePortfolioRequest,
            crate::handlers::investments::PortfolioResponse,
            crate::handlers::investments::CreateGoalRequest,
            crate::handlers::investments::UpdateGoalRequest,
            crate::handlers::investments::GoalResponse,
            ApiResponse<crate::handlers::auth::UserResponse>,
            ApiResponse<crate::handlers::auth::TokenResponse>,
            ApiResponse<crate::handlers::tax_deductions::TaxDeductionResponse>,
            ApiResponse<Vec<crate::handlers::tax_deductions::TaxDeductionResponse>>,
            ApiResponse<crate::handlers::assets::AssetResponse>,
            ApiResponse<Vec<crate::handlers::assets::AssetResponse>>,
            ApiResponse<crate::handlers::assets::MaintenanceRecordResponse>,
            ApiResponse<Vec<crate::handlers::assets::MaintenanceRecordResponse>>,
            ApiResponse<crate::handlers::expenses::ExpenseResponse>,
            ApiResponse<Vec<crate::handlers::expenses::ExpenseResponse>>,
            ApiResponse<crate::handlers::income::IncomeSourceResponse>,
            ApiResponse<Vec<crate::handlers::income::IncomeSourceResponse>>,
            ApiResponse<crate::handlers::income::IncomeResponse>,
            ApiResponse<Vec<crate::handlers::income::IncomeResponse>>,
            ApiResponse<Vec<crate::handlers::income::MonthlyIncomeSummaryResponse>>,
            ApiResponse<crate::handlers::insurance::PolicyResponse>,
            ApiResponse<Vec<crate::handlers::insurance::PolicyResponse>>,
            ApiResponse<crate::handlers::insurance::ClaimResponse>,
            ApiResponse<Vec<crate::handlers::insurance::ClaimResponse>>,
            ApiResponse<crate::handlers::investments::InvestmentAssetResponse>,
            ApiResponse<Vec<crate::handlers::investments::InvestmentAssetResponse>>,
            ApiResponse<crate::handlers::investments::InvestmentResponse>,
            ApiResponse<Vec<crate::handlers::investments::InvestmentResponse>>,
            ApiResponse<crate::handlers::investments::TransactionResponse>,
            ApiResponse<Vec<crate::handlers::investments::TransactionResponse>>,
            ApiResponse<crate::handlers::investments::PortfolioResponse>,
            ApiResponse<Vec<crate::handlers::investments::PortfolioResponse>>,
            ApiResponse<crate::handlers::investments::GoalResponse>,
            ApiResponse<Vec<crate::handlers::investments::GoalResponse>>,
            ApiResponse<String>,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Registration, login and identity"),
        (name = "tax-deductions", description = "Tax deduction records with document attachments"),
        (name = "assets", description = "Physical assets, their documents and maintenance history"),
        (name = "expenses", description = "Expense records"),
        (name = "income", description = "Income sources, entries and monthly summaries"),
        (name = "insurance", description = "Insurance policies, documents and claims"),
        (name = "investments", description = "Investment assets, holdings, portfolios and goals"),
    ),
    info(
        title = "Budget App API",
        description = "Personal finance tracking backend - tax deductions, assets, expenses, income, insurance and investments",
        version = "0.1.0",
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
