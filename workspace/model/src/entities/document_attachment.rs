use sea_orm::entity::prelude::*;

/// Supporting document for a tax deduction. Exactly one of `file_url` and
/// `file_data` is populated; the API models the pair as a closed variant.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "document_attachments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub tax_deduction_id: String,
    pub file_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub file_url: Option<String>,
    /// Base64-encoded content, stored verbatim.
    #[sea_orm(column_type = "Text", nullable)]
    pub file_data: Option<String>,
    pub document_type: String,
    pub upload_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tax_deduction::Entity",
        from = "Column::TaxDeductionId",
        to = "super::tax_deduction::Column::Id"
    )]
    TaxDeduction,
}

impl Related<super::tax_deduction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaxDeduction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
