//! Profile-related types for the Rust Savings Engine
//!
//! This module defines the ProfileRecord consumed by the engine and the
//! intermediate values it reports back.
//!
//! The serde layout of [`ProfileRecord`] is the contract with whatever stores
//! profiles on disk:
//!
//! ```json
//! {
//!   "salary": 1000,
//!   "salary_type": "fixed",
//!   "saving_level": 2,
//!   "expenses": [{ "name": "Rent", "amount": 450 }]
//! }
//! ```

use super::expense::{non_negative, Expense};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Saving aggressiveness level
///
/// Signed so that out-of-range input such as `0` or `-1` can be represented
/// and rejected by the policy instead of failing at parse time.
pub type SavingLevel = i32;

/// How the salary is paid
///
/// Stored with the profile for display purposes. The savings math treats both
/// variants the same way; no hourly rate conversion happens in this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryType {
    /// Fixed monthly salary
    #[default]
    Fixed,

    /// Hourly wage
    Hourly,
}

/// A user's profile: salary, saving level and expenses
///
/// Deserialization rejects a negative salary and invalid expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Monthly salary (non-negative)
    #[serde(deserialize_with = "non_negative")]
    pub salary: Decimal,

    /// Informational salary tag
    #[serde(default)]
    pub salary_type: SalaryType,

    /// Saving aggressiveness level, 1 to 4 with the current policy
    pub saving_level: SavingLevel,

    /// Expenses in insertion order
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl ProfileRecord {
    /// Create a profile with a fixed salary and no expenses
    pub fn new(salary: Decimal, saving_level: SavingLevel) -> Self {
        ProfileRecord {
            salary,
            salary_type: SalaryType::Fixed,
            saving_level,
            expenses: Vec::new(),
        }
    }

    /// Replace the expense list, builder style
    pub fn with_expenses(mut self, expenses: Vec<Expense>) -> Self {
        self.expenses = expenses;
        self
    }

    /// Set the salary type, builder style
    pub fn with_salary_type(mut self, salary_type: SalaryType) -> Self {
        self.salary_type = salary_type;
        self
    }
}

/// Intermediate values of one savings computation
///
/// `remaining` may be negative; `withdrawal` never is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SavingsBreakdown {
    /// Salary the computation started from
    pub salary: Decimal,

    /// Sum of all expense amounts
    pub total_expenses: Decimal,

    /// Minimal balance kept after expenses for the profile's level
    pub threshold: Decimal,

    /// salary - total_expenses - threshold
    pub remaining: Decimal,

    /// `remaining` rounded down to the denomination, floored at zero
    pub withdrawal: Decimal,
}
