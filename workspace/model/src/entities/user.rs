use sea_orm::entity::prelude::*;

/// An account holder. Every domain row in the system carries this user's id
/// and is invisible to anyone else.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 PHC-format digest. Never serialized out of the API.
    pub hashed_password: String,
    #[sea_orm(default_value = "true")]
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tax_deduction::Entity")]
    TaxDeduction,
    #[sea_orm(has_many = "super::asset::Entity")]
    Asset,
    #[sea_orm(has_many = "super::expense::Entity")]
    Expense,
    #[sea_orm(has_many = "super::income_source::Entity")]
    IncomeSource,
    #[sea_orm(has_many = "super::income::Entity")]
    Income,
    #[sea_orm(has_many = "super::insurance_policy::Entity")]
    InsurancePolicy,
    #[sea_orm(has_many = "super::investment_asset::Entity")]
    InvestmentAsset,
    #[sea_orm(has_many = "super::investment::Entity")]
    Investment,
    #[sea_orm(has_many = "super::portfolio::Entity")]
    Portfolio,
    #[sea_orm(has_many = "super::investment_goal::Entity")]
    InvestmentGoal,
}

impl ActiveModelBehavior for ActiveModel {}
