pub use error::{EngineError, StoreError, ValidationError};
pub use expenses::{Expense, Tags};
pub use service::{ExpenseService, ExpenseServiceBuilder};

mod error;
pub mod expenses;
mod service;
pub mod store;

type ResultEngine<T> = Result<T, EngineError>;
