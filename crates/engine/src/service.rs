use sea_orm::DatabaseConnection;

use crate::{EngineError, Expense, ResultEngine, store};

/// Orchestrates the persistence functions over one injected store handle.
///
/// Every call performs exactly one round trip. The handle is a connection
/// pool, so the service can be shared across tasks.
#[derive(Debug, Clone)]
pub struct ExpenseService {
    database: DatabaseConnection,
}

impl ExpenseService {
    /// Return a builder for `ExpenseService`. Help to build the struct.
    pub fn builder() -> ExpenseServiceBuilder {
        ExpenseServiceBuilder::default()
    }

    /// Store a new expense and return it with its assigned `id`.
    pub async fn save(&self, mut expense: Expense) -> ResultEngine<Expense> {
        expense.validate()?;
        store::create_expense(&self.database, &mut expense)
            .await
            .map_err(|err| EngineError::wrap("create_expense()".to_string(), err))?;
        Ok(expense)
    }

    pub async fn get_by_id(&self, id: i64) -> ResultEngine<Expense> {
        store::get_expense_by_id(&self.database, id)
            .await
            .map_err(|err| EngineError::wrap(format!("get_expense_by_id({id})"), err))
    }

    /// Replace the expense identified by `expense.id` with the given values.
    pub async fn update(&self, mut expense: Expense) -> ResultEngine<Expense> {
        expense.validate()?;
        let id = expense.id;
        store::update_expense(&self.database, &mut expense)
            .await
            .map_err(|err| EngineError::wrap(format!("update_expense({id})"), err))?;
        Ok(expense)
    }

    /// All expenses ordered by `id`.
    pub async fn list(&self) -> ResultEngine<Vec<Expense>> {
        store::list_expenses(&self.database)
            .await
            .map_err(|err| EngineError::wrap("list_expenses()".to_string(), err))
    }
}

/// The builder for `ExpenseService`
#[derive(Default)]
pub struct ExpenseServiceBuilder {
    database: DatabaseConnection,
}

impl ExpenseServiceBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> ExpenseServiceBuilder {
        self.database = db;
        self
    }

    /// Construct `ExpenseService`
    pub fn build(self) -> ExpenseService {
        ExpenseService {
            database: self.database,
        }
    }
}
