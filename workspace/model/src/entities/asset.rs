use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category of a physical asset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum AssetCategory {
    #[sea_orm(string_value = "Real Estate")]
    #[serde(rename = "Real Estate")]
    RealEstate,
    #[sea_orm(string_value = "Vehicle")]
    Vehicle,
    #[sea_orm(string_value = "Electronics")]
    Electronics,
    #[sea_orm(string_value = "Furniture")]
    Furniture,
    #[sea_orm(string_value = "Jewelry")]
    Jewelry,
    #[sea_orm(string_value = "Art")]
    Art,
    #[sea_orm(string_value = "Other")]
    Other,
}

/// A physical asset (property, vehicle, electronics, ...). Prices and values
/// are integer minor currency units.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "assets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub category: AssetCategory,
    pub purchase_price: i64,
    pub current_value: i64,
    pub purchase_date: DateTimeUtc,
    pub warranty_end_date: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// For real estate.
    pub location: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    #[sea_orm(default_value = "true")]
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::asset_document::Entity")]
    AssetDocument,
    #[sea_orm(has_many = "super::maintenance_record::Entity")]
    MaintenanceRecord,
}

impl Related<super::asset_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssetDocument.def()
    }
}

impl Related<super::maintenance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceRecord.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
