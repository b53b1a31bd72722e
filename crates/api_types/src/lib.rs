use serde::{Deserialize, Serialize, Serializer};

pub mod expense {
    use super::*;

    /// Request body for creating or replacing an expense.
    ///
    /// Every field falls back to its zero value when missing, so an absent
    /// `amount` or `title` surfaces as a validation failure instead of a
    /// parse failure.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ExpenseNew {
        pub amount: f64,
        pub title: String,
        pub note: String,
        pub tags: Vec<String>,
    }

    /// An expense as returned by the API.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Expense {
        pub id: i64,
        #[serde(serialize_with = "serialize_amount")]
        pub amount: f64,
        pub title: String,
        pub note: String,
        pub tags: Vec<String>,
    }
}

pub mod error {
    use super::*;

    /// Body of every non-2xx response.
    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ErrorResponse {
        pub code: u16,
        pub message: String,
    }
}

/// Largest integer an `f64` represents exactly (2^53).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Write whole amounts as JSON integers (`75` rather than `75.0`).
fn serialize_amount<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if amount.is_finite() && amount.fract() == 0.0 && amount.abs() <= MAX_EXACT_INT {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}
