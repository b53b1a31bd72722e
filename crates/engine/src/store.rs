//! Persistence functions for the `expenses` table.
//!
//! Each function issues exactly one statement through the query builder, so
//! values are always bound as parameters. Column order is the model's:
//! `id, amount, title, note, tags`.

use sea_orm::{ActiveValue, ConnectionTrait, QueryOrder, prelude::*};

use crate::{Expense, StoreError, expenses};

/// Insert `expense` and scan the stored row, including the new `id`, back
/// into it.
pub async fn create_expense<C>(db: &C, expense: &mut Expense) -> Result<(), StoreError>
where
    C: ConnectionTrait,
{
    let model = expenses::ActiveModel::from(&*expense).insert(db).await?;
    *expense = model.into();
    Ok(())
}

pub async fn get_expense_by_id<C>(db: &C, id: i64) -> Result<Expense, StoreError>
where
    C: ConnectionTrait,
{
    expenses::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(Expense::from)
        .ok_or(StoreError::NotFound)
}

/// Replace every column of the row `expense.id` and scan the updated row
/// back into `expense`.
pub async fn update_expense<C>(db: &C, expense: &mut Expense) -> Result<(), StoreError>
where
    C: ConnectionTrait,
{
    let mut row = expenses::ActiveModel::from(&*expense);
    row.id = ActiveValue::Unchanged(expense.id);

    let model = row.update(db).await.map_err(|err| match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => StoreError::NotFound,
        other => StoreError::Database(other),
    })?;
    *expense = model.into();
    Ok(())
}

pub async fn list_expenses<C>(db: &C) -> Result<Vec<Expense>, StoreError>
where
    C: ConnectionTrait,
{
    let models = expenses::Entity::find()
        .order_by_asc(expenses::Column::Id)
        .all(db)
        .await?;
    Ok(models.into_iter().map(Expense::from).collect())
}
