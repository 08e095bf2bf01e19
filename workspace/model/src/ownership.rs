//! Owner-scoped access to domain tables.
//!
//! Every domain table carries a `user_id` column, and a row must never be
//! visible or mutable through another user's requests. Rather than repeating
//! the same filter in every query, tables implement [`UserOwned`] and the
//! handlers go through the generic helpers here. A lookup that misses because
//! the row belongs to someone else is indistinguishable from a lookup that
//! misses because the row does not exist.

use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::entities::*;

/// Capability trait for tables whose rows belong to exactly one user.
pub trait UserOwned: EntityTrait {
    /// Opaque primary key column.
    fn id_column() -> Self::Column;
    /// The `user_id` column used as the visibility predicate.
    fn owner_column() -> Self::Column;
    /// Column giving a stable listing order; insertion time by default.
    fn order_column() -> Self::Column;
}

/// List rows owned by `user_id`, bounded by `skip`/`limit`.
pub async fn list_for_user<E, C>(
    db: &C,
    user_id: &str,
    skip: u64,
    limit: u64,
) -> Result<Vec<E::Model>, DbErr>
where
    E: UserOwned,
    C: ConnectionTrait,
{
    E::find()
        .filter(E::owner_column().eq(user_id))
        .order_by_asc(E::order_column())
        .offset(skip)
        .limit(limit)
        .all(db)
        .await
}

/// Fetch one row by id, constrained to the owner. Returns `None` both for a
/// missing row and for a row owned by a different user.
pub async fn find_for_user<E, C>(
    db: &C,
    user_id: &str,
    id: &str,
) -> Result<Option<E::Model>, DbErr>
where
    E: UserOwned,
    C: ConnectionTrait,
{
    E::find()
        .filter(E::id_column().eq(id))
        .filter(E::owner_column().eq(user_id))
        .one(db)
        .await
}

/// Delete one row by id, constrained to the owner. Child rows go with it via
/// `ON DELETE CASCADE`. Returns the number of parent rows removed (0 or 1).
pub async fn delete_for_user<E, C>(db: &C, user_id: &str, id: &str) -> Result<u64, DbErr>
where
    E: UserOwned,
    C: ConnectionTrait,
{
    let result = E::delete_many()
        .filter(E::id_column().eq(id))
        .filter(E::owner_column().eq(user_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

macro_rules! impl_user_owned {
    ($module:ident, $order:ident) => {
        impl UserOwned for $module::Entity {
            fn id_column() -> Self::Column {
                $module::Column::Id
            }
            fn owner_column() -> Self::Column {
                $module::Column::UserId
            }
            fn order_column() -> Self::Column {
                $module::Column::$order
            }
        }
    };
}

impl_user_owned!(tax_deduction, CreatedAt);
impl_user_owned!(document_attachment, UploadDate);
impl_user_owned!(asset, CreatedAt);
impl_user_owned!(asset_document, UploadDate);
impl_user_owned!(maintenance_record, CreatedAt);
impl_user_owned!(maintenance_document, UploadDate);
impl_user_owned!(expense, CreatedAt);
impl_user_owned!(income_source, CreatedAt);
impl_user_owned!(income, CreatedAt);
impl_user_owned!(monthly_income_summary, CreatedAt);
impl_user_owned!(insurance_policy, CreatedAt);
impl_user_owned!(insurance_document, UploadDate);
impl_user_owned!(insurance_claim, CreatedAt);
impl_user_owned!(investment_asset, CreatedAt);
impl_user_owned!(investment, CreatedAt);
impl_user_owned!(investment_transaction, CreatedAt);
impl_user_owned!(portfolio, CreatedAt);
impl_user_owned!(investment_goal, CreatedAt);
