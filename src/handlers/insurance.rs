use axum::extract::{Path, Query, State};
use axum::response::Json;
use chrono::{DateTime, Utc};
use model::entities::insurance_claim::ClaimStatus;
use model::entities::insurance_policy::{InsurancePolicyType, PremiumFrequency};
use model::entities::prelude::{InsuranceClaim, InsuranceDocument, InsurancePolicy};
use model::entities::{insurance_claim, insurance_document, insurance_policy};
use model::ownership;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState, DocumentPayload, DocumentResponse, ListQuery};

/// Request body for creating an insurance policy
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreatePolicyRequest {
    pub policy_number: String,
    /// Line of insurance (e.g. "Life Insurance", "Motor Insurance")
    #[schema(value_type = String)]
    pub policy_type: InsurancePolicyType,
    pub insurance_company: String,
    /// Premium in minor currency units
    #[validate(range(min = 0, message = "must not be negative"))]
    pub premium_amount: i64,
    /// "Monthly", "Quarterly", "Half Yearly" or "Yearly"
    #[schema(value_type = String)]
    pub premium_frequency: PremiumFrequency,
    pub sum_assured: Option<i64>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub next_premium_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub notes: Option<String>,
    /// Policy documents, inserted in the same transaction
    #[serde(default)]
    pub documents: Vec<DocumentPayload>,
}

/// Request body for partially updating an insurance policy
#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdatePolicyRequest {
    pub policy_number: Option<String>,
    #[schema(value_type = Option<String>)]
    pub policy_type: Option<InsurancePolicyType>,
    pub insurance_company: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub premium_amount: Option<i64>,
    #[schema(value_type = Option<String>)]
    pub premium_frequency: Option<PremiumFrequency>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<i64>)]
    pub sum_assured: Option<Option<i64>>,
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub end_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub next_premium_date: Option<Option<DateTime<Utc>>>,
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
}

/// Insurance policy response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PolicyResponse {
    pub id: String,
    pub policy_number: String,
    #[schema(value_type = String)]
    pub policy_type: InsurancePolicyType,
    pub insurance_company: String,
    pub premium_amount: i64,
    #[schema(value_type = String)]
    pub premium_frequency: PremiumFrequency,
    pub sum_assured: Option<i64>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub next_premium_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub documents: Vec<DocumentResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PolicyResponse {
    fn from_model(model: insurance_policy::Model, documents: Vec<insurance_document::Model>) -> Self {
        Self {
            id: model.id,
            policy_number: model.policy_number,
            policy_type: model.policy_type,
            insurance_company: model.insurance_company,
            premium_amount: model.premium_amount,
            premium_frequency: model.premium_frequency,
            sum_assured: model.sum_assured,
            start_date: model.start_date,
            end_date: model.end_date,
            next_premium_date: model.next_premium_date,
            is_active: model.is_active,
            description: model.description,
            notes: model.notes,
            documents: documents.into_iter().map(DocumentResponse::from).collect(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Request body for filing a claim against a policy
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateClaimRequest {
    pub claim_number: String,
    /// Claimed amount in minor currency units
    #[validate(range(min = 0, message = "must not be negative"))]
    pub claim_amount: i64,
    pub claim_date: DateTime<Utc>,
    pub description: String,
    pub notes: Option<String>,
}

/// Request body for partially updating a claim
#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateClaimRequest {
    pub claim_number: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub claim_amount: Option<i64>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<i64>)]
    pub approved_amount: Option<Option<i64>>,
    pub claim_date: Option<DateTime<Utc>>,
    /// "pending", "approved" or "rejected"
    #[schema(value_type = Option<String>)]
    pub status: Option<ClaimStatus>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
}

/// Insurance claim response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClaimResponse {
    pub id: String,
    pub policy_id: String,
    pub claim_number: String,
    pub claim_amount: i64,
    pub approved_amount: Option<i64>,
    pub claim_date: DateTime<Utc>,
    #[schema(value_type = String)]
    pub status: ClaimStatus,
    pub description: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<insurance_claim::Model> for ClaimResponse {
    fn from(model: insurance_claim::Model) -> Self {
        Self {
            id: model.id,
            policy_id: model.policy_id,
            claim_number: model.claim_number,
            claim_amount: model.claim_amount,
            approved_amount: model.approved_amount,
            claim_date: model.claim_date,
            status: model.status,
            description: model.description,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

fn new_policy_document(
    user_id: &str,
    policy_id: &str,
    payload: DocumentPayload,
    now: DateTime<Utc>,
) -> insurance_document::ActiveModel {
    let (file_url, file_data) = payload.source.into_columns();
    insurance_document::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(user_id.to_string()),
        policy_id: Set(policy_id.to_string()),
        file_name: Set(payload.file_name),
        file_type: Set(payload.file_type),
        file_size: Set(payload.file_size),
        file_url: Set(file_url),
        file_data: Set(file_data),
        document_type: Set(payload.document_type),
        upload_date: Set(now),
    }
}

async fn load_policy_response<C: ConnectionTrait>(
    db: &C,
    model: insurance_policy::Model,
) -> Result<PolicyResponse, ApiError> {
    let documents = model.find_related(InsuranceDocument).all(db).await?;
    Ok(PolicyResponse::from_model(model, documents))
}

/// Resolve a policy owned by the caller, or 404.
async fn owned_policy(
    state: &AppState,
    user_id: &str,
    policy_id: &str,
) -> Result<insurance_policy::Model, ApiError> {
    ownership::find_for_user::<InsurancePolicy, _>(&state.db, user_id, policy_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Insurance policy not found".to_string()))
}

/// Resolve a claim under an already-verified policy, or 404.
async fn owned_claim(
    state: &AppState,
    policy_id: &str,
    claim_id: &str,
) -> Result<insurance_claim::Model, ApiError> {
    InsuranceClaim::find_by_id(claim_id)
        .filter(insurance_claim::Column::PolicyId.eq(policy_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Insurance claim not found".to_string()))
}

/// Create an insurance policy, with optional documents
#[utoipa::path(
    post,
    path = "/api/insurance",
    tag = "insurance",
    request_body = CreatePolicyRequest,
    responses(
        (status = 200, description = "Insurance policy created successfully", body = ApiResponse<PolicyResponse>),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn create_policy(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreatePolicyRequest>,
) -> Result<Json<ApiResponse<PolicyResponse>>, ApiError> {
    request.validate()?;

    let now = Utc::now();
    let txn = state.db.begin().await?;

    let policy = insurance_policy::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(auth.0.id.clone()),
        policy_number: Set(request.policy_number),
        policy_type: Set(request.policy_type),
        insurance_company: Set(request.insurance_company),
        premium_amount: Set(request.premium_amount),
        premium_frequency: Set(request.premium_frequency),
        sum_assured: Set(request.sum_assured),
        start_date: Set(request.start_date),
        end_date: Set(request.end_date),
        next_premium_date: Set(request.next_premium_date),
        is_active: Set(true),
        description: Set(request.description),
        notes: Set(request.notes),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    let mut documents = Vec::with_capacity(request.documents.len());
    for payload in request.documents {
        let document = new_policy_document(&auth.0.id, &policy.id, payload, now)
            .insert(&txn)
            .await?;
        documents.push(document);
    }

    txn.commit().await?;
    info!("Insurance policy created with ID: {}", policy.id);

    Ok(Json(ApiResponse::new(
        PolicyResponse::from_model(policy, documents),
        "Insurance policy created successfully",
    )))
}

/// List the caller's insurance policies
#[utoipa::path(
    get,
    path = "/api/insurance",
    tag = "insurance",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return"),
    ),
    responses(
        (status = 200, description = "Insurance policies retrieved successfully", body = ApiResponse<Vec<PolicyResponse>>),
        (status = 401, description = "Missing or invalid token", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_policies(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<PolicyResponse>>>, ApiError> {
    let policies = ownership::list_for_user::<InsurancePolicy, _>(
        &state.db,
        &auth.0.id,
        query.skip(),
        query.limit(),
    )
    .await?;

    let mut responses = Vec::with_capacity(policies.len());
    for policy in policies {
        responses.push(load_policy_response(&state.db, policy).await?);
    }

    Ok(Json(ApiResponse::new(
        responses,
        "Insurance policies retrieved successfully",
    )))
}

/// Get one insurance policy by id
#[utoipa::path(
    get,
    path = "/api/insurance/{id}",
    tag = "insurance",
    params(
        ("id" = String, Path, description = "Policy ID"),
    ),
    responses(
        (status = 200, description = "Insurance policy retrieved successfully", body = ApiResponse<PolicyResponse>),
        (status = 404, description = "Insurance policy not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_policy(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<PolicyResponse>>, ApiError> {
    let policy = owned_policy(&state, &auth.0.id, &id).await?;

    Ok(Json(ApiResponse::new(
        load_policy_response(&state.db, policy).await?,
        "Insurance policy retrieved successfully",
    )))
}

/// Partially update an insurance policy
#[utoipa::path(
    put,
    path = "/api/insurance/{id}",
    tag = "insurance",
    params(
        ("id" = String, Path, description = "Policy ID"),
    ),
    request_body = UpdatePolicyRequest,
    responses(
        (status = 200, description = "Insurance policy updated successfully", body = ApiResponse<PolicyResponse>),
        (status = 404, description = "Insurance policy not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn update_policy(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(request): Json<UpdatePolicyRequest>,
) -> Result<Json<ApiResponse<PolicyResponse>>, ApiError> {
    request.validate()?;

    let existing = owned_policy(&state, &auth.0.id, &id).await?;

    let mut active: insurance_policy::ActiveModel = existing.into();
    if let Some(policy_number) = request.policy_number {
        active.policy_number = Set(policy_number);
    }
    if let Some(policy_type) = request.policy_type {
        active.policy_type = Set(policy_type);
    }
    if let Some(insurance_company) = request.insurance_company {
        active.insurance_company = Set(insurance_company);
    }
    if let Some(premium_amount) = request.premium_amount {
        active.premium_amount = Set(premium_amount);
    }
    if let Some(premium_frequency) = request.premium_frequency {
        active.premium_frequency = Set(premium_frequency);
    }
    if let Some(sum_assured) = request.sum_assured {
        active.sum_assured = Set(sum_assured);
    }
    if let Some(start_date) = request.start_date {
        active.start_date = Set(start_date);
    }
    if let Some(end_date) = request.end_date {
        active.end_date = Set(end_date);
    }
    if let Some(next_premium_date) = request.next_premium_date {
        active.next_premium_date = Set(next_premium_date);
    }
    if let Some(is_active) = request.is_active {
        active.is_active = Set(is_active);
    }
    if let Some(description) = request.description {
        active.description = Set(description);
    }
    if let Some(notes) = request.notes {
        active.notes = Set(notes);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(&state.db).await?;
    info!("Insurance policy {} updated", updated.id);

    Ok(Json(ApiResponse::new(
        load_policy_response(&state.db, updated).await?,
        "Insurance policy updated successfully",
    )))
}

/// Delete an insurance policy together with its documents and claims
#[utoipa::path(
    delete,
    path = "/api/insurance/{id}",
    tag = "insurance",
    params(
        ("id" = String, Path, description = "Policy ID"),
    ),
    responses(
        (status = 200, description = "Insurance policy deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Insurance policy not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn delete_policy(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let removed =
        ownership::delete_for_user::<InsurancePolicy, _>(&state.db, &auth.0.id, &id).await?;
    if removed == 0 {
        return Err(ApiError::NotFound("Insurance policy not found".to_string()));
    }

    info!("Insurance policy {} deleted", id);
    Ok(Json(ApiResponse::new(
        format!("Insurance policy {} deleted", id),
        "Insurance policy deleted successfully",
    )))
}

/// File a claim against a policy. New claims start out pending.
#[utoipa::path(
    post,
    path = "/api/insurance/{policy_id}/claims",
    tag = "insurance",
    params(
        ("policy_id" = String, Path, description = "Policy ID"),
    ),
    request_body = CreateClaimRequest,
    responses(
        (status = 200, description = "Insurance claim created successfully", body = ApiResponse<ClaimResponse>),
        (status = 404, description = "Insurance policy not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn create_claim(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(policy_id): Path<String>,
    Json(request): Json<CreateClaimRequest>,
) -> Result<Json<ApiResponse<ClaimResponse>>, ApiError> {
    request.validate()?;
    let policy = owned_policy(&state, &auth.0.id, &policy_id).await?;

    let now = Utc::now();
    let claim = insurance_claim::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(auth.0.id.clone()),
        policy_id: Set(policy.id),
        claim_number: Set(request.claim_number),
        claim_amount: Set(request.claim_amount),
        approved_amount: Set(None),
        claim_date: Set(request.claim_date),
        status: Set(ClaimStatus::Pending),
        description: Set(request.description),
        notes: Set(request.notes),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&state.db)
    .await?;

    info!("Insurance claim created with ID: {}", claim.id);
    Ok(Json(ApiResponse::new(
        ClaimResponse::from(claim),
        "Insurance claim created successfully",
    )))
}

/// List claims filed against a policy
#[utoipa::path(
    get,
    path = "/api/insurance/{policy_id}/claims",
    tag = "insurance",
    params(
        ("policy_id" = String, Path, description = "Policy ID"),
        ("skip" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return"),
    ),
    responses(
        (status = 200, description = "Insurance claims retrieved successfully", body = ApiResponse<Vec<ClaimResponse>>),
        (status = 404, description = "Insurance policy not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_claims(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(policy_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<ClaimResponse>>>, ApiError> {
    let policy = owned_policy(&state, &auth.0.id, &policy_id).await?;

    let claims = InsuranceClaim::find()
        .filter(insurance_claim::Column::PolicyId.eq(&policy.id))
        .order_by_desc(insurance_claim::Column::ClaimDate)
        .offset(query.skip())
        .limit(query.limit())
        .all(&state.db)
        .await?;

    Ok(Json(ApiResponse::new(
        claims.into_iter().map(ClaimResponse::from).collect(),
        "Insurance claims retrieved successfully",
    )))
}

/// Get one claim
#[utoipa::path(
    get,
    path = "/api/insurance/{policy_id}/claims/{id}",
    tag = "insurance",
    params(
        ("policy_id" = String, Path, description = "Policy ID"),
        ("id" = String, Path, description = "Claim ID"),
    ),
    responses(
        (status = 200, description = "Insurance claim retrieved successfully", body = ApiResponse<ClaimResponse>),
        (status = 404, description = "Policy or claim not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_claim(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((policy_id, id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<ClaimResponse>>, ApiError> {
    let policy = owned_policy(&state, &auth.0.id, &policy_id).await?;
    let claim = owned_claim(&state, &policy.id, &id).await?;

    Ok(Json(ApiResponse::new(
        ClaimResponse::from(claim),
        "Insurance claim retrieved successfully",
    )))
}

/// Partially update a claim (settlement sets status and approved amount)
#[utoipa::path(
    put,
    path = "/api/insurance/{policy_id}/claims/{id}",
    tag = "insurance",
    params(
        ("policy_id" = String, Path, description = "Policy ID"),
        ("id" = String, Path, description = "Claim ID"),
    ),
    request_body = UpdateClaimRequest,
    responses(
        (status = 200, description = "Insurance claim updated successfully", body = ApiResponse<ClaimResponse>),
        (status = 404, description = "Policy or claim not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn update_claim(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((policy_id, id)): Path<(String, String)>,
    Json(request): Json<UpdateClaimRequest>,
) -> Result<Json<ApiResponse<ClaimResponse>>, ApiError> {
    request.validate()?;

    let policy = owned_policy(&state, &auth.0.id, &policy_id).await?;
    let existing = owned_claim(&state, &policy.id, &id).await?;

    let mut active: insurance_claim::ActiveModel = existing.into();
    if let Some(claim_number) = request.claim_number {
        active.claim_number = Set(claim_number);
    }
    if let Some(claim_amount) = request.claim_amount {
        active.claim_amount = Set(claim_amount);
    }
    if let Some(approved_amount) = request.approved_amount {
        active.approved_amount = Set(approved_amount);
    }
    if let Some(claim_date) = request.claim_date {
        active.claim_date = Set(claim_date);
    }
    if let Some(status) = request.status {
        active.status = Set(status);
    }
    if let Some(description) = request.description {
        active.description = Set(description);
    }
    if let Some(notes) = request.notes {
        active.notes = Set(notes);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(&state.db).await?;
    info!("Insurance claim {} updated", updated.id);

    Ok(Json(ApiResponse::new(
        ClaimResponse::from(updated),
        "Insurance claim updated successfully",
    )))
}

/// Delete a claim
#[utoipa::path(
    delete,
    path = "/api/insurance/{policy_id}/claims/{id}",
    tag = "insurance",
    params(
        ("policy_id" = String, Path, description = "Policy ID"),
        ("id" = String, Path, description = "Claim ID"),
    ),
    responses(
        (status = 200, description = "Insurance claim deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Policy or claim not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn delete_claim(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((policy_id, id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let policy = owned_policy(&state, &auth.0.id, &policy_id).await?;
    let claim = owned_claim(&state, &policy.id, &id).await?;

    claim.delete(&state.db).await?;
    info!("Insurance claim {} deleted", id);

    Ok(Json(ApiResponse::new(
        format!("Insurance claim {} deleted", id),
        "Insurance claim deleted successfully",
    )))
}
