use sea_orm::entity::prelude::*;

/// Precomputed rollup of a user's income for one (month, year). Derived
/// data: recomputed in the same transaction as any income mutation so it
/// never drifts from the underlying rows.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "monthly_income_summaries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub month: i32,
    pub year: i32,
    pub total_gross_income: i64,
    pub total_net_income: i64,
    pub total_deductions: i64,
    /// JSON object mapping income source id to its total for the period.
    #[sea_orm(column_type = "Text", nullable)]
    pub income_sources: Option<String>,
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
}

impl ActiveModelBehavior for ActiveModel {}
