use axum::extract::{Path, Query, State};
use axum::response::Json;
use chrono::{DateTime, Utc};
use model::entities::prelude::{DocumentAttachment, TaxDeduction};
use model::entities::{document_attachment, tax_deduction};
use model::ownership;
use sea_orm::{ActiveModelTrait, ConnectionTrait, ModelTrait, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState, DocumentPayload, DocumentResponse, ListQuery};

/// Request body for creating a tax deduction
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateTaxDeductionRequest {
    /// Tax year the deduction applies to
    #[validate(range(min = 1900, max = 2100, message = "must be a plausible year"))]
    pub year: i32,
    /// Deduction bucket (e.g. "Section 80C", "HRA")
    pub deduction_type: String,
    /// Amount in minor currency units
    #[validate(range(min = 0, message = "must not be negative"))]
    pub amount: i64,
    pub description: Option<String>,
    /// Supporting documents, inserted in the same transaction
    #[serde(default)]
    pub attachments: Vec<DocumentPayload>,
}

/// Request body for partially updating a tax deduction. Present fields obey
/// the same rules as on create; absent fields are left alone.
#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateTaxDeductionRequest {
    #[validate(range(min = 1900, max = 2100, message = "must be a plausible year"))]
    pub year: Option<i32>,
    pub deduction_type: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub amount: Option<i64>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

/// Tax deduction response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TaxDeductionResponse {
    pub id: String,
    pub year: i32,
    pub deduction_type: String,
    pub amount: i64,
    pub description: Option<String>,
    pub attachments: Vec<DocumentResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaxDeductionResponse {
    fn from_model(model: tax_deduction::Model, attachments: Vec<document_attachment::Model>) -> Self {
        Self {
            id: model.id,
            year: model.year,
            deduction_type: model.deduction_type,
            amount: model.amount,
            description: model.description,
            attachments: attachments.into_iter().map(DocumentResponse::from).collect(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

fn new_attachment(
    user_id: &str,
    deduction_id: &str,
    payload: DocumentPayload,
    now: DateTime<Utc>,
) -> document_attachment::ActiveModel {
    let (file_url, file_data) = payload.source.into_columns();
    document_attachment::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(user_id.to_string()),
        tax_deduction_id: Set(deduction_id.to_string()),
        file_name: Set(payload.file_name),
        file_type: Set(payload.file_type),
        file_size: Set(payload.file_size),
        file_url: Set(file_url),
        file_data: Set(file_data),
        document_type: Set(payload.document_type),
        upload_date: Set(now),
    }
}

async fn load_response<C: ConnectionTrait>(
    db: &C,
    model: tax_deduction::Model,
) -> Result<TaxDeductionResponse, ApiError> {
    let attachments = model.find_related(DocumentAttachment).all(db).await?;
    Ok(TaxDeductionResponse::from_model(model, attachments))
}

/// Create a tax deduction, with optional attachments
#[utoipa::path(
    post,
    path = "/api/tax-deductions",
    tag = "tax-deductions",
    request_body = CreateTaxDeductionRequest,
    responses(
        (status = 200, description = "Tax deduction created successfully", body = ApiResponse<TaxDeductionResponse>),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn create_tax_deduction(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreateTaxDeductionRequest>,
) -> Result<Json<ApiResponse<TaxDeductionResponse>>, ApiError> {
    request.validate()?;

    let now = Utc::now();
    let txn = state.db.begin().await?;

    let deduction = tax_deduction::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(auth.0.id.clone()),
        year: Set(request.year),
        deduction_type: Set(request.deduction_type),
        amount: Set(request.amount),
        description: Set(request.description),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    let mut attachments = Vec::with_capacity(request.attachments.len());
    for payload in request.attachments {
        let attachment = new_attachment(&auth.0.id, &deduction.id, payload, now)
            .insert(&txn)
            .await?;
        attachments.push(attachment);
    }

    txn.commit().await?;
    info!("Tax deduction created with ID: {}", deduction.id);

    Ok(Json(ApiResponse::new(
        TaxDeductionResponse::from_model(deduction, attachments),
        "Tax deduction created successfully",
    )))
}

/// List the caller's tax deductions
#[utoipa::path(
    get,
    path = "/api/tax-deductions",
    tag = "tax-deductions",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return"),
    ),
    responses(
        (status = 200, description = "Tax deductions retrieved successfully", body = ApiResponse<Vec<TaxDeductionResponse>>),
        (status = 401, description = "Missing or invalid token", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_tax_deductions(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<TaxDeductionResponse>>>, ApiError> {
    let deductions =
        ownership::list_for_user::<TaxDeduction, _>(&state.db, &auth.0.id, query.skip(), query.limit())
            .await?;

    let mut responses = Vec::with_capacity(deductions.len());
    for deduction in deductions {
        responses.push(load_response(&state.db, deduction).await?);
    }

    Ok(Json(ApiResponse::new(
        responses,
        "Tax deductions retrieved successfully",
    )))
}

/// Get one tax deduction by id
#[utoipa::path(
    get,
    path = "/api/tax-deductions/{id}",
    tag = "tax-deductions",
    params(
        ("id" = String, Path, description = "Tax deduction ID"),
    ),
    responses(
        (status = 200, description = "Tax deduction retrieved successfully", body = ApiResponse<TaxDeductionResponse>),
        (status = 404, description = "Tax deduction not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_tax_deduction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<TaxDeductionResponse>>, ApiError> {
    let deduction = ownership::find_for_user::<TaxDeduction, _>(&state.db, &auth.0.id, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Tax deduction not found".to_string()))?;

    Ok(Json(ApiResponse::new(
        load_response(&state.db, deduction).await?,
        "Tax deduction retrieved successfully",
    )))
}

/// Partially update a tax deduction
#[utoipa::path(
    put,
    path = "/api/tax-deductions/{id}",
    tag = "tax-deductions",
    params(
        ("id" = String, Path, description = "Tax deduction ID"),
    ),
    request_body = UpdateTaxDeductionRequest,
    responses(
        (status = 200, description = "Tax deduction updated successfully", body = ApiResponse<TaxDeductionResponse>),
        (status = 404, description = "Tax deduction not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn update_tax_deduction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateTaxDeductionRequest>,
) -> Result<Json<ApiResponse<TaxDeductionResponse>>, ApiError> {
    request.validate()?;

    let existing = ownership::find_for_user::<TaxDeduction, _>(&state.db, &auth.0.id, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Tax deduction not found".to_string()))?;

    let mut active: tax_deduction::ActiveModel = existing.into();
    if let Some(year) = request.year {
        active.year = Set(year);
    }
    if let Some(deduction_type) = request.deduction_type {
        active.deduction_type = Set(deduction_type);
    }
    if let Some(amount) = request.amount {
        active.amount = Set(amount);
    }
    if let Some(description) = request.description {
        active.description = Set(description);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(&state.db).await?;
    info!("Tax deduction {} updated", updated.id);

    Ok(Json(ApiResponse::new(
        load_response(&state.db, updated).await?,
        "Tax deduction updated successfully",
    )))
}

/// Delete a tax deduction and its attachments
#[utoipa::path(
    delete,
    path = "/api/tax-deductions/{id}",
    tag = "tax-deductions",
    params(
        ("id" = String, Path, description = "Tax deduction ID"),
    ),
    responses(
        (status = 200, description = "Tax deduction deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Tax deduction not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn delete_tax_deduction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let removed = ownership::delete_for_user::<TaxDeduction, _>(&state.db, &auth.0.id, &id).await?;
    if removed == 0 {
        return Err(ApiError::NotFound("Tax deduction not found".to_string()));
    }

    info!("Tax deduction {} deleted", id);
    Ok(Json(ApiResponse::new(
        format!("Tax deduction {} deleted", id),
        "Tax deduction deleted successfully",
    )))
}
