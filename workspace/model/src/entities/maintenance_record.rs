use sea_orm::entity::prelude::*;

/// Maintenance performed on an asset. Carries its own document collection.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub asset_id: String,
    pub date: DateTimeUtc,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub cost: Option<i64>,
    pub service_provider: Option<String>,
    pub next_maintenance_date: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::asset::Entity",
        from = "Column::AssetId",
        to = "super::asset::Column::Id"
    )]
    Asset,
    #[sea_orm(has_many = "super::maintenance_document::Entity")]
    MaintenanceDocument,
}

impl Related<super::asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asset.def()
    }
}

impl Related<super::maintenance_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceDocument.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
