use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Processing state of a claim.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

/// A claim filed against a policy. Claim and approved amounts are integer
/// minor units; `approved_amount` stays empty until the insurer settles.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "insurance_claims")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub policy_id: String,
    pub claim_number: String,
    pub claim_amount: i64,
    pub approved_amount: Option<i64>,
    pub claim_date: DateTimeUtc,
    pub status: ClaimStatus,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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
