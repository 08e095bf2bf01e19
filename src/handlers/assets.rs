use axum::extract::{Path, Query, State};
use axum::response::Json;
use chrono::{DateTime, Utc};
use model::entities::asset::AssetCategory;
use model::entities::prelude::{Asset, AssetDocument, MaintenanceDocument, MaintenanceRecord};
use model::entities::{asset, asset_document, maintenance_document, maintenance_record};
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

/// Request body for creating an asset
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateAssetRequest {
    pub name: String,
    /// Asset category (e.g. "Real Estate", "Vehicle")
    #[schema(value_type = String)]
    pub category: AssetCategory,
    /// Purchase price in minor currency units
    #[validate(range(min = 0, message = "must not be negative"))]
    pub purchase_price: i64,
    /// Current value in minor currency units
    #[validate(range(min = 0, message = "must not be negative"))]
    pub current_value: i64,
    pub purchase_date: DateTime<Utc>,
    pub warranty_end_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    /// Supporting documents, inserted in the same transaction
    #[serde(default)]
    pub documents: Vec<DocumentPayload>,
}

/// Request body for partially updating an asset
#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateAssetRequest {
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub category: Option<AssetCategory>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub purchase_price: Option<i64>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub current_value: Option<i64>,
    pub purchase_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub warranty_end_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub brand: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub model: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub serial_number: Option<Option<String>>,
    pub is_active: Option<bool>,
}

/// Asset response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssetResponse {
    pub id: String,
    pub name: String,
    #[schema(value_type = String)]
    pub category: AssetCategory,
    pub purchase_price: i64,
    pub current_value: i64,
    pub purchase_date: DateTime<Utc>,
    pub warranty_end_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub is_active: bool,
    pub documents: Vec<DocumentResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AssetResponse {
    fn from_model(model: asset::Model, documents: Vec<asset_document::Model>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            category: model.category,
            purchase_price: model.purchase_price,
            current_value: model.current_value,
            purchase_date: model.purchase_date,
            warranty_end_date: model.warranty_end_date,
            description: model.description,
            location: model.location,
            brand: model.brand,
            model: model.model,
            serial_number: model.serial_number,
            is_active: model.is_active,
            documents: documents.into_iter().map(DocumentResponse::from).collect(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Request body for recording maintenance on an asset
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateMaintenanceRequest {
    pub date: DateTime<Utc>,
    pub description: String,
    /// Cost in minor currency units
    #[validate(range(min = 0, message = "must not be negative"))]
    pub cost: Option<i64>,
    pub service_provider: Option<String>,
    pub next_maintenance_date: Option<DateTime<Utc>>,
    /// Invoices and service reports, inserted in the same transaction
    #[serde(default)]
    pub documents: Vec<DocumentPayload>,
}

/// Request body for partially updating a maintenance record
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateMaintenanceRequest {
    pub date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<i64>)]
    pub cost: Option<Option<i64>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<String>)]
    pub service_provider: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::schemas::double_option")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub next_maintenance_date: Option<Option<DateTime<Utc>>>,
}

/// Maintenance record response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceRecordResponse {
    pub id: String,
    pub asset_id: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub cost: Option<i64>,
    pub service_provider: Option<String>,
    pub next_maintenance_date: Option<DateTime<Utc>>,
    pub documents: Vec<DocumentResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MaintenanceRecordResponse {
    fn from_model(
        model: maintenance_record::Model,
        documents: Vec<maintenance_document::Model>,
    ) -> Self {
        Self {
            id: model.id,
            asset_id: model.asset_id,
            date: model.date,
            description: model.description,
            cost: model.cost,
            service_provider: model.service_provider,
            next_maintenance_date: model.next_maintenance_date,
            documents: documents.into_iter().map(DocumentResponse::from).collect(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

fn new_asset_document(
    user_id: &str,
    asset_id: &str,
    payload: DocumentPayload,
    now: DateTime<Utc>,
) -> asset_document::ActiveModel {
    let (file_url, file_data) = payload.source.into_columns();
    asset_document::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(user_id.to_string()),
        asset_id: Set(asset_id.to_string()),
        file_name: Set(payload.file_name),
        file_type: Set(payload.file_type),
        file_size: Set(payload.file_size),
        file_url: Set(file_url),
        file_data: Set(file_data),
        document_type: Set(payload.document_type),
        upload_date: Set(now),
    }
}

fn new_maintenance_document(
    user_id: &str,
    record_id: &str,
    payload: DocumentPayload,
    now: DateTime<Utc>,
) -> maintenance_document::ActiveModel {
    let (file_url, file_data) = payload.source.into_columns();
    maintenance_document::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(user_id.to_string()),
        maintenance_record_id: Set(record_id.to_string()),
        file_name: Set(payload.file_name),
        file_type: Set(payload.file_type),
        file_size: Set(payload.file_size),
        file_url: Set(file_url),
        file_data: Set(file_data),
        document_type: Set(payload.document_type),
        upload_date: Set(now),
    }
}

async fn load_asset_response<C: ConnectionTrait>(
    db: &C,
    model: asset::Model,
) -> Result<AssetResponse, ApiError> {
    let documents = model.find_related(AssetDocument).all(db).await?;
    Ok(AssetResponse::from_model(model, documents))
}

async fn load_maintenance_response<C: ConnectionTrait>(
    db: &C,
    model: maintenance_record::Model,
) -> Result<MaintenanceRecordResponse, ApiError> {
    let documents = model.find_related(MaintenanceDocument).all(db).await?;
    Ok(MaintenanceRecordResponse::from_model(model, documents))
}

/// Resolve an asset owned by the caller, or 404.
async fn owned_asset(
    state: &AppState,
    user_id: &str,
    asset_id: &str,
) -> Result<asset::Model, ApiError> {
    ownership::find_for_user::<Asset, _>(&state.db, user_id, asset_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Asset not found".to_string()))
}

/// Resolve a maintenance record under an already-verified asset, or 404.
async fn owned_maintenance_record(
    state: &AppState,
    asset_id: &str,
    record_id: &str,
) -> Result<maintenance_record::Model, ApiError> {
    MaintenanceRecord::find_by_id(record_id)
        .filter(maintenance_record::Column::AssetId.eq(asset_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Maintenance record not found".to_string()))
}

/// Create an asset, with optional documents
#[utoipa::path(
    post,
    path = "/api/assets",
    tag = "assets",
    request_body = CreateAssetRequest,
    responses(
        (status = 200, description = "Asset created successfully", body = ApiResponse<AssetResponse>),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn create_asset(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreateAssetRequest>,
) -> Result<Json<ApiResponse<AssetResponse>>, ApiError> {
    request.validate()?;

    let now = Utc::now();
    let txn = state.db.begin().await?;

    let asset_model = asset::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(auth.0.id.clone()),
        name: Set(request.name),
        category: Set(request.category),
        purchase_price: Set(request.purchase_price),
        current_value: Set(request.current_value),
        purchase_date: Set(request.purchase_date),
        warranty_end_date: Set(request.warranty_end_date),
        description: Set(request.description),
        location: Set(request.location),
        brand: Set(request.brand),
        model: Set(request.model),
        serial_number: Set(request.serial_number),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    let mut documents = Vec::with_capacity(request.documents.len());
    for payload in request.documents {
        let document = new_asset_document(&auth.0.id, &asset_model.id, payload, now)
            .insert(&txn)
            .await?;
        documents.push(document);
    }

    txn.commit().await?;
    info!("Asset created with ID: {}", asset_model.id);

    Ok(Json(ApiResponse::new(
        AssetResponse::from_model(asset_model, documents),
        "Asset created successfully",
    )))
}

/// List the caller's assets
#[utoipa::path(
    get,
    path = "/api/assets",
    tag = "assets",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return"),
    ),
    responses(
        (status = 200, description = "Assets retrieved successfully", body = ApiResponse<Vec<AssetResponse>>),
        (status = 401, description = "Missing or invalid token", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_assets(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<AssetResponse>>>, ApiError> {
    let assets =
        ownership::list_for_user::<Asset, _>(&state.db, &auth.0.id, query.skip(), query.limit())
            .await?;

    let mut responses = Vec::with_capacity(assets.len());
    for asset_model in assets {
        responses.push(load_asset_response(&state.db, asset_model).await?);
    }

    Ok(Json(ApiResponse::new(
        responses,
        "Assets retrieved successfully",
    )))
}

/// Get one asset by id
#[utoipa::path(
    get,
    path = "/api/assets/{id}",
    tag = "assets",
    params(
        ("id" = String, Path, description = "Asset ID"),
    ),
    responses(
        (status = 200, description = "Asset retrieved successfully", body = ApiResponse<AssetResponse>),
        (status = 404, description = "Asset not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_asset(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<AssetResponse>>, ApiError> {
    let asset_model = owned_asset(&state, &auth.0.id, &id).await?;

    Ok(Json(ApiResponse::new(
        load_asset_response(&state.db, asset_model).await?,
        "Asset retrieved successfully",
    )))
}

/// Partially update an asset
#[utoipa::path(
    put,
    path = "/api/assets/{id}",
    tag = "assets",
    params(
        ("id" = String, Path, description = "Asset ID"),
    ),
    request_body = UpdateAssetRequest,
    responses(
        (status = 200, description = "Asset updated successfully", body = ApiResponse<AssetResponse>),
        (status = 404, description = "Asset not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn update_asset(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateAssetRequest>,
) -> Result<Json<ApiResponse<AssetResponse>>, ApiError> {
    request.validate()?;

    let existing = owned_asset(&state, &auth.0.id, &id).await?;

    let mut active: asset::ActiveModel = existing.into();
    if let Some(name) = request.name {
        active.name = Set(name);
    }
    if let Some(category) = request.category {
        active.category = Set(category);
    }
    if let Some(purchase_price) = request.purchase_price {
        active.purchase_price = Set(purchase_price);
    }
    if let Some(current_value) = request.current_value {
        active.current_value = Set(current_value);
    }
    if let Some(purchase_date) = request.purchase_date {
        active.purchase_date = Set(purchase_date);
    }
    if let Some(warranty_end_date) = request.warranty_end_date {
        active.warranty_end_date = Set(warranty_end_date);
    }
    if let Some(description) = request.description {
        active.description = Set(description);
    }
    if let Some(location) = request.location {
        active.location = Set(location);
    }
    if let Some(brand) = request.brand {
        active.brand = Set(brand);
    }
    if let Some(model) = request.model {
        active.model = Set(model);
    }
    if let Some(serial_number) = request.serial_number {
        active.serial_number = Set(serial_number);
    }
    if let Some(is_active) = request.is_active {
        active.is_active = Set(is_active);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(&state.db).await?;
    info!("Asset {} updated", updated.id);

    Ok(Json(ApiResponse::new(
        load_asset_response(&state.db, updated).await?,
        "Asset updated successfully",
    )))
}

/// Delete an asset together with its documents and maintenance history
#[utoipa::path(
    delete,
    path = "/api/assets/{id}",
    tag = "assets",
    params(
        ("id" = String, Path, description = "Asset ID"),
    ),
    responses(
        (status = 200, description = "Asset deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Asset not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn delete_asset(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let removed = ownership::delete_for_user::<Asset, _>(&state.db, &auth.0.id, &id).await?;
    if removed == 0 {
        return Err(ApiError::NotFound("Asset not found".to_string()));
    }

    info!("Asset {} deleted", id);
    Ok(Json(ApiResponse::new(
        format!("Asset {} deleted", id),
        "Asset deleted successfully",
    )))
}

/// Record maintenance on an asset
#[utoipa::path(
    post,
    path = "/api/assets/{asset_id}/maintenance",
    tag = "assets",
    params(
        ("asset_id" = String, Path, description = "Asset ID"),
    ),
    request_body = CreateMaintenanceRequest,
    responses(
        (status = 200, description = "Maintenance record created successfully", body = ApiResponse<MaintenanceRecordResponse>),
        (status = 404, description = "Asset not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn create_maintenance_record(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(asset_id): Path<String>,
    Json(request): Json<CreateMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceRecordResponse>>, ApiError> {
    request.validate()?;
    let asset_model = owned_asset(&state, &auth.0.id, &asset_id).await?;

    let now = Utc::now();
    let txn = state.db.begin().await?;

    let record = maintenance_record::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(auth.0.id.clone()),
        asset_id: Set(asset_model.id.clone()),
        date: Set(request.date),
        description: Set(request.description),
        cost: Set(request.cost),
        service_provider: Set(request.service_provider),
        next_maintenance_date: Set(request.next_maintenance_date),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    let mut documents = Vec::with_capacity(request.documents.len());
    for payload in request.documents {
        let document = new_maintenance_document(&auth.0.id, &record.id, payload, now)
            .insert(&txn)
            .await?;
        documents.push(document);
    }

    txn.commit().await?;
    info!("Maintenance record created with ID: {}", record.id);

    Ok(Json(ApiResponse::new(
        MaintenanceRecordResponse::from_model(record, documents),
        "Maintenance record created successfully",
    )))
}

/// List maintenance history for an asset
#[utoipa::path(
    get,
    path = "/api/assets/{asset_id}/maintenance",
    tag = "assets",
    params(
        ("asset_id" = String, Path, description = "Asset ID"),
        ("skip" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return"),
    ),
    responses(
        (status = 200, description = "Maintenance records retrieved successfully", body = ApiResponse<Vec<MaintenanceRecordResponse>>),
        (status = 404, description = "Asset not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_maintenance_records(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(asset_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<MaintenanceRecordResponse>>>, ApiError> {
    let asset_model = owned_asset(&state, &auth.0.id, &asset_id).await?;

    let records = MaintenanceRecord::find()
        .filter(maintenance_record::Column::AssetId.eq(&asset_model.id))
        .order_by_desc(maintenance_record::Column::Date)
        .offset(query.skip())
        .limit(query.limit())
        .all(&state.db)
        .await?;

    let mut responses = Vec::with_capacity(records.len());
    for record in records {
        responses.push(load_maintenance_response(&state.db, record).await?);
    }

    Ok(Json(ApiResponse::new(
        responses,
        "Maintenance records retrieved successfully",
    )))
}

/// Get one maintenance record
#[utoipa::path(
    get,
    path = "/api/assets/{asset_id}/maintenance/{id}",
    tag = "assets",
    params(
        ("asset_id" = String, Path, description = "Asset ID"),
        ("id" = String, Path, description = "Maintenance record ID"),
    ),
    responses(
        (status = 200, description = "Maintenance record retrieved successfully", body = ApiResponse<MaintenanceRecordResponse>),
        (status = 404, description = "Asset or maintenance record not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn get_maintenance_record(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((asset_id, id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<MaintenanceRecordResponse>>, ApiError> {
    let asset_model = owned_asset(&state, &auth.0.id, &asset_id).await?;
    let record = owned_maintenance_record(&state, &asset_model.id, &id).await?;

    Ok(Json(ApiResponse::new(
        load_maintenance_response(&state.db, record).await?,
        "Maintenance record retrieved successfully",
    )))
}

/// Partially update a maintenance record
#[utoipa::path(
    put,
    path = "/api/assets/{asset_id}/maintenance/{id}",
    tag = "assets",
    params(
        ("asset_id" = String, Path, description = "Asset ID"),
        ("id" = String, Path, description = "Maintenance record ID"),
    ),
    request_body = UpdateMaintenanceRequest,
    responses(
        (status = 200, description = "Maintenance record updated successfully", body = ApiResponse<MaintenanceRecordResponse>),
        (status = 404, description = "Asset or maintenance record not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth, request))]
pub async fn update_maintenance_record(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((asset_id, id)): Path<(String, String)>,
    Json(request): Json<UpdateMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceRecordResponse>>, ApiError> {
    // Derive cannot reach inside the double-Option cost field
    if let Some(Some(cost)) = request.cost {
        if cost < 0 {
            return Err(ApiError::invalid_field("cost", "must not be negative"));
        }
    }

    let asset_model = owned_asset(&state, &auth.0.id, &asset_id).await?;
    let existing = owned_maintenance_record(&state, &asset_model.id, &id).await?;

    let mut active: maintenance_record::ActiveModel = existing.into();
    if let Some(date) = request.date {
        active.date = Set(date);
    }
    if let Some(description) = request.description {
        active.description = Set(description);
    }
    if let Some(cost) = request.cost {
        active.cost = Set(cost);
    }
    if let Some(service_provider) = request.service_provider {
        active.service_provider = Set(service_provider);
    }
    if let Some(next_maintenance_date) = request.next_maintenance_date {
        active.next_maintenance_date = Set(next_maintenance_date);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(&state.db).await?;
    info!("Maintenance record {} updated", updated.id);

    Ok(Json(ApiResponse::new(
        load_maintenance_response(&state.db, updated).await?,
        "Maintenance record updated successfully",
    )))
}

/// Delete a maintenance record and its documents
#[utoipa::path(
    delete,
    path = "/api/assets/{asset_id}/maintenance/{id}",
    tag = "assets",
    params(
        ("asset_id" = String, Path, description = "Asset ID"),
        ("id" = String, Path, description = "Maintenance record ID"),
    ),
    responses(
        (status = 200, description = "Maintenance record deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Asset or maintenance record not found", body = crate::schemas::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth))]
pub async fn delete_maintenance_record(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((asset_id, id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let asset_model = owned_asset(&state, &auth.0.id, &asset_id).await?;
    let record = owned_maintenance_record(&state, &asset_model.id, &id).await?;

    record.delete(&state.db).await?;
    info!("Maintenance record {} deleted", id);

    Ok(Json(ApiResponse::new(
        format!("Maintenance record {} deleted", id),
        "Maintenance record deleted successfully",
    )))
}
