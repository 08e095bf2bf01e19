use sea_orm::entity::prelude::*;

/// A single expense. Recurrence fields are descriptive only; nothing in the
/// system materializes future occurrences from them.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub amount: i64,
    pub description: String,
    pub category: String,
    pub date: DateTimeUtc,
    #[sea_orm(default_value = "false")]
    pub is_recurring: bool,
    /// "monthly", "weekly", etc.
    pub recurrence_interval: Option<String>,
    pub next_due_date: Option<DateTimeUtc>,
    pub end_date: Option<DateTimeUtc>,
    /// JSON array of tag strings.
    #[sea_orm(column_type = "Text", nullable)]
    pub tags: Option<String>,
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
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
