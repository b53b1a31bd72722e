//! The module contains the errors the engine can throw.
//!
//! There are three layers:
//!
//! - [`ValidationError`] thrown by [`Expense::validate`] before any I/O.
//! - [`StoreError`] thrown by the persistence functions, unwrapped.
//! - [`EngineError`] thrown by [`ExpenseService`], tagged by kind and carrying
//!   the operation that failed.
//!
//!  [`Expense::validate`]: super::Expense::validate
//!  [`ExpenseService`]: super::ExpenseService
use sea_orm::DbErr;
use thiserror::Error;

/// Reasons an expense is rejected before it reaches the store.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount must be greater than zero")]
    AmountInvalid,
    #[error("empty title")]
    TitleEmpty,
}

/// Raw errors from the persistence functions.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for StoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NotFound, Self::NotFound) => true,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

/// Service errors.
///
/// `context` names the persistence call and its arguments, e.g.
/// `get_expense_by_id(42)`.
#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("{context}: {source}")]
    NotFound {
        context: String,
        #[source]
        source: StoreError,
    },
    #[error("{context}: {source}")]
    Internal {
        context: String,
        #[source]
        source: StoreError,
    },
}

impl EngineError {
    /// Wrap a persistence error, keeping `NotFound` distinguishable.
    pub(crate) fn wrap(context: String, source: StoreError) -> Self {
        match source {
            StoreError::NotFound => Self::NotFound { context, source },
            StoreError::Database(_) => Self::Internal { context, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn not_found_keeps_inner_message() {
        let err = EngineError::wrap("get_expense_by_id(7)".to_string(), StoreError::NotFound);

        assert!(matches!(err, EngineError::NotFound { .. }));
        assert_eq!(err.to_string(), "get_expense_by_id(7): not found");
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("not found"));
    }

    #[test]
    fn database_error_is_internal() {
        let err = EngineError::wrap(
            "list_expenses()".to_string(),
            StoreError::Database(DbErr::Custom("connection reset".to_string())),
        );

        assert!(matches!(err, EngineError::Internal { .. }));
        assert!(err.to_string().starts_with("list_expenses(): "));
    }
}
