use sea_orm::entity::prelude::*;

/// An income entry booked against a source for a given month and year.
/// `amount`, `gross_amount` and `net_amount` are integer minor units.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "incomes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub income_source_id: String,
    pub amount: i64,
    pub gross_amount: Option<i64>,
    pub net_amount: Option<i64>,
    pub date: DateTimeUtc,
    /// 1-12.
    pub month: i32,
    pub year: i32,
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
    #[sea_orm(
        belongs_to = "super::income_source::Entity",
        from = "Column::IncomeSourceId",
        to = "super::income_source::Column::Id"
    )]
    IncomeSource,
}

impl Related<super::income_source::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IncomeSource.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
