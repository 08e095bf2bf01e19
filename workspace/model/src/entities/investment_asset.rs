use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Class of investable asset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(25))")]
pub enum InvestmentAssetType {
    #[sea_orm(string_value = "Mutual Fund")]
    #[serde(rename = "Mutual Fund")]
    MutualFund,
    #[sea_orm(string_value = "Emergency Fund")]
    #[serde(rename = "Emergency Fund")]
    EmergencyFund,
    #[sea_orm(string_value = "Savings Bank Deposit")]
    #[serde(rename = "Savings Bank Deposit")]
    SavingsBankDeposit,
    #[sea_orm(string_value = "Gold")]
    Gold,
    #[sea_orm(string_value = "Stocks")]
    Stocks,
    #[sea_orm(string_value = "Cryptocurrency")]
    Cryptocurrency,
}

/// Declared risk bucket for an asset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum RiskLevel {
    #[sea_orm(string_value = "Low")]
    Low,
    #[sea_orm(string_value = "Moderate")]
    Moderate,
    #[sea_orm(string_value = "High")]
    High,
    #[sea_orm(string_value = "Very High")]
    #[serde(rename = "Very High")]
    VeryHigh,
}

/// An investable asset (fund, stock, deposit, ...). `current_price` is in
/// integer minor units. The trailing optional fields only apply to specific
/// asset types (e.g. `purity` for gold, `exchange` for stocks and crypto).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "investment_assets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub asset_type: InvestmentAssetType,
    pub category: Option<String>,
    pub current_price: i64,
    pub risk_level: RiskLevel,
    #[sea_orm(default_value = "true")]
    pub is_active: bool,
    pub symbol: Option<String>,
    pub fund_house: Option<String>,
    pub scheme_code: Option<String>,
    /// Percentage.
    pub expense_ratio: Option<f64>,
    /// Percentage.
    pub interest_rate: Option<f64>,
    pub maturity_date: Option<DateTimeUtc>,
    pub purity: Option<String>,
    pub exchange: Option<String>,
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
    #[sea_orm(has_many = "super::investment::Entity")]
    Investment,
}

impl Related<super::investment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Investment.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
