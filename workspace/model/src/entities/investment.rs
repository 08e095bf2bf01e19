use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How the money went in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum InvestmentType {
    #[sea_orm(string_value = "SIP")]
    #[serde(rename = "SIP")]
    Sip,
    #[sea_orm(string_value = "Lumpsum")]
    Lumpsum,
    #[sea_orm(string_value = "Recurring Deposit")]
    #[serde(rename = "Recurring Deposit")]
    RecurringDeposit,
    #[sea_orm(string_value = "One-time Purchase")]
    #[serde(rename = "One-time Purchase")]
    OneTimePurchase,
}

/// A holding in an investment asset. `amount` and `purchase_price` are in
/// integer minor units; `units` may be fractional.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "investments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub asset_id: String,
    pub investment_type: InvestmentType,
    pub amount: i64,
    pub units: f64,
    pub purchase_price: i64,
    pub purchase_date: DateTimeUtc,
    /// Day of month a SIP debits, when applicable.
    pub sip_date: Option<i32>,
    pub maturity_date: Option<DateTimeUtc>,
    /// In months.
    pub lock_in_period: Option<i32>,
    #[sea_orm(default_value = "true")]
    pub is_active: bool,
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
    #[sea_orm(
        belongs_to = "super::investment_asset::Entity",
        from = "Column::AssetId",
        to = "super::investment_asset::Column::Id"
    )]
    InvestmentAsset,
    #[sea_orm(has_many = "super::investment_transaction::Entity")]
    InvestmentTransaction,
    #[sea_orm(has_many = "super::portfolio_investment::Entity")]
    PortfolioInvestment,
}

impl Related<super::investment_asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvestmentAsset.def()
    }
}

impl Related<super::investment_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvestmentTransaction.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::portfolio::Entity> for Entity {
    fn to() -> RelationDef {
        super::portfolio_investment::Relation::Portfolio.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::portfolio_investment::Relation::Investment.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
