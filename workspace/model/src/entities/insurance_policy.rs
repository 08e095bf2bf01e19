use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Line of insurance the policy covers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum InsurancePolicyType {
    #[sea_orm(string_value = "Life Insurance")]
    #[serde(rename = "Life Insurance")]
    Life,
    #[sea_orm(string_value = "Health Insurance")]
    #[serde(rename = "Health Insurance")]
    Health,
    #[sea_orm(string_value = "Motor Insurance")]
    #[serde(rename = "Motor Insurance")]
    Motor,
    #[sea_orm(string_value = "Home Insurance")]
    #[serde(rename = "Home Insurance")]
    Home,
    #[sea_orm(string_value = "Travel Insurance")]
    #[serde(rename = "Travel Insurance")]
    Travel,
    #[sea_orm(string_value = "Other")]
    Other,
}

/// How often the premium falls due.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum PremiumFrequency {
    #[sea_orm(string_value = "Monthly")]
    Monthly,
    #[sea_orm(string_value = "Quarterly")]
    Quarterly,
    #[sea_orm(string_value = "Half Yearly")]
    #[serde(rename = "Half Yearly")]
    HalfYearly,
    #[sea_orm(string_value = "Yearly")]
    Yearly,
}

/// An insurance policy. Premium and sum assured are integer minor units.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "insurance_policies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub policy_number: String,
    pub policy_type: InsurancePolicyType,
    pub insurance_company: String,
    pub premium_amount: i64,
    pub premium_frequency: PremiumFrequency,
    pub sum_assured: Option<i64>,
    pub start_date: DateTimeUtc,
    pub end_date: Option<DateTimeUtc>,
    pub next_premium_date: Option<DateTimeUtc>,
    #[sea_orm(default_value = "true")]
    pub is_active: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
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
    #[sea_orm(has_many = "super::insurance_document::Entity")]
    InsuranceDocument,
    #[sea_orm(has_many = "super::insurance_claim::Entity")]
    InsuranceClaim,
}

impl Related<super::insurance_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InsuranceDocument.def()
    }
}

impl Related<super::insurance_claim::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InsuranceClaim.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
