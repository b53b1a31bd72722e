//! Expense API endpoints

use api_types::expense::{Expense, ExpenseNew};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

fn expense_from_request(payload: ExpenseNew) -> engine::Expense {
    engine::Expense::new(payload.amount, payload.title, payload.note, payload.tags)
}

fn expense_view(expense: engine::Expense) -> Expense {
    Expense {
        id: expense.id,
        amount: expense.amount,
        title: expense.title,
        note: expense.note,
        tags: expense.tags,
    }
}

/// Parse and validate a request body.
fn parse_body(
    payload: Result<Json<ExpenseNew>, JsonRejection>,
) -> Result<engine::Expense, ServerError> {
    let Json(payload) = payload.map_err(|err| {
        tracing::debug!("invalid request body: {err}");
        ServerError::InvalidBody
    })?;
    let expense = expense_from_request(payload);
    expense.validate()?;
    Ok(expense)
}

fn parse_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, ServerError> {
    id.map(|Path(id)| id).map_err(|_| ServerError::InvalidParams)
}

/// Handle requests for creating a new expense
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Expense>), ServerError> {
    let expense = parse_body(payload)?;
    let expense = state.service.save(expense).await?;

    tracing::debug!("created expense {}", expense.id);
    Ok((StatusCode::CREATED, Json(expense_view(expense))))
}

/// Handle requests replacing an existing expense
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ExpenseNew>, JsonRejection>,
) -> Result<Json<Expense>, ServerError> {
    let id = parse_id(id)?;
    let mut expense = parse_body(payload)?;
    expense.id = id;

    let expense = state.service.update(expense).await?;
    Ok(Json(expense_view(expense)))
}

pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Expense>, ServerError> {
    let id = parse_id(id)?;
    let expense = state.service.get_by_id(id).await?;
    Ok(Json(expense_view(expense)))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Expense>>, ServerError> {
    let expenses = state.service.list().await?;
    Ok(Json(expenses.into_iter().map(expense_view).collect()))
}
