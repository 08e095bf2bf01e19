use sea_orm::entity::prelude::*;

/// A named grouping of holdings with target allocation weights.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// JSON object describing the intended allocation.
    #[sea_orm(column_type = "Text", nullable)]
    pub target_allocation: Option<String>,
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
    #[sea_orm(has_many = "super::portfolio_investment::Entity")]
    PortfolioInvestment,
}

impl Related<super::investment::Entity> for Entity {
    fn to() -> RelationDef {
        super::portfolio_investment::Relation::Investment.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::portfolio_investment::Relation::Portfolio.def().rev())
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
