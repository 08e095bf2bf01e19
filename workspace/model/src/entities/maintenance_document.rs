use sea_orm::entity::prelude::*;

/// Document attached to a maintenance record (invoice, service report, ...).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance_documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub maintenance_record_id: String,
    pub file_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub file_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub file_data: Option<String>,
    pub document_type: String,
    pub upload_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::maintenance_record::Entity",
        from = "Column::MaintenanceRecordId",
        to = "super::maintenance_record::Column::Id"
    )]
    MaintenanceRecord,
}

impl Related<super::maintenance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
