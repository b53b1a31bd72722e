//! The module contains `Expense` struct and its table mapping.

use sea_orm::{
    FromJsonQueryResult,
    entity::{ActiveValue, prelude::*},
};
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// A single expense record.
///
/// `id` is `0` until the store assigns one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Expense {
    pub id: i64,
    pub amount: f64,
    pub title: String,
    pub note: String,
    pub tags: Vec<String>,
}

impl Expense {
    pub fn new(amount: f64, title: String, note: String, tags: Vec<String>) -> Self {
        Self {
            id: 0,
            amount,
            title,
            note,
            tags,
        }
    }

    /// Check the expense can be written. Amount is checked before title.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.amount.is_nan() || self.amount <= 0.0 {
            return Err(ValidationError::AmountInvalid);
        }
        if self.title.is_empty() {
            return Err(ValidationError::TitleEmpty);
        }
        Ok(())
    }
}

/// Ordered tag list, bound as a JSON array column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Tags(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub title: String,
    pub note: String,
    #[sea_orm(column_type = "Json")]
    pub tags: Tags,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Row for an insert: the store assigns `id`.
impl From<&Expense> for ActiveModel {
    fn from(value: &Expense) -> Self {
        Self {
            id: ActiveValue::NotSet,
            amount: ActiveValue::Set(value.amount),
            title: ActiveValue::Set(value.title.clone()),
            note: ActiveValue::Set(value.note.clone()),
            tags: ActiveValue::Set(Tags(value.tags.clone())),
        }
    }
}

impl From<Model> for Expense {
    fn from(value: Model) -> Self {
        Self {
            id: value.id,
            amount: value.amount,
            title: value.title,
            note: value.note,
            tags: value.tags.0,
        }
    }
}
