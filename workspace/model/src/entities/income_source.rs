use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of income stream.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum IncomeSourceType {
    #[sea_orm(string_value = "Salary")]
    Salary,
    #[sea_orm(string_value = "Freelance")]
    Freelance,
    #[sea_orm(string_value = "Business")]
    Business,
    #[sea_orm(string_value = "Investment")]
    Investment,
    #[sea_orm(string_value = "Rental")]
    Rental,
    #[sea_orm(string_value = "Pension")]
    Pension,
    #[sea_orm(string_value = "Other")]
    Other,
}

/// Indian income-tax deduction bucket associated with a source.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum DeductionCategory {
    #[sea_orm(string_value = "Section 80C")]
    #[serde(rename = "Section 80C")]
    Section80C,
    #[sea_orm(string_value = "Section 80D")]
    #[serde(rename = "Section 80D")]
    Section80D,
    #[sea_orm(string_value = "Section 24")]
    #[serde(rename = "Section 24")]
    Section24,
    #[sea_orm(string_value = "HRA")]
    #[serde(rename = "HRA")]
    Hra,
    #[sea_orm(string_value = "LTA")]
    #[serde(rename = "LTA")]
    Lta,
    #[sea_orm(string_value = "Other")]
    Other,
}

/// A named origin of income (employer, client, property, ...).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "income_sources")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub source_type: IncomeSourceType,
    pub deduction_category: Option<DeductionCategory>,
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
    #[sea_orm(has_many = "super::income::Entity")]
    Income,
}

impl Related<super::income::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Income.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
