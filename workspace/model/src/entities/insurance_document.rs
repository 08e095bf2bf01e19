use sea_orm::entity::prelude::*;

/// Document attached to an insurance policy (policy document, premium
/// receipt, ...).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "insurance_documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub policy_id: String,
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
        belongs_to = "super::insurance_policy::Entity",
        from = "Column::PolicyId",
        to = "super::insurance_policy::Column::Id"
    )]
    InsurancePolicy,
}

impl Related<super::insurance_policy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InsurancePolicy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
