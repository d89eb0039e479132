//! Error types for the Rust Savings Engine
//!
//! This module defines all error types that can occur while resolving a saving
//! level or deriving a withdrawal suggestion from a profile.
//!
//! # Error Categories
//!
//! - **Policy Errors**: Level outside the supported table, invalid custom tables
//! - **Savings Errors**: Expenses above salary, withdrawal below the minimum, missing salary
//! - **Record Errors**: Negative salary or expense amounts, unnamed expenses
//! - **Arithmetic Errors**: Overflow while summing or subtracting amounts
//!
//! Every error is a deterministic domain-rule violation: none of them is retried,
//! and the caller is expected to ask the user for corrected input.

use super::profile::SavingLevel;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the savings engine
///
/// Each variant carries the values needed to explain the failure to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SavingsError {
    /// Saving level is not covered by the active policy
    ///
    /// Levels are never clamped into range.
    #[error("Saving level {level} is out of range: expected {min}..={max}")]
    LevelOutOfRange {
        /// The rejected level
        level: SavingLevel,
        /// Lowest level supported by the policy
        min: SavingLevel,
        /// Highest level supported by the policy
        max: SavingLevel,
    },

    /// Total expenses are above the salary, nothing can be saved
    #[error("Nothing to save: expenses {total} are more than salary {salary}")]
    ExpensesExceedSalary {
        /// Sum of all expense amounts
        total: Decimal,
        /// Salary of the profile
        salary: Decimal,
    },

    /// Computed withdrawal is at or below the minimum actionable amount
    #[error("Withdrawal {withdrawal} is too low: it must be above {minimum}")]
    WithdrawalTooLow {
        /// The rounded withdrawal that was rejected
        withdrawal: Decimal,
        /// The exclusive minimum
        minimum: Decimal,
    },

    /// Salary or expense amount is negative
    #[error("Invalid amount {amount} for {field}: amounts must not be negative")]
    InvalidAmount {
        /// What the amount belongs to, e.g. "salary" or "expense 'Rent'"
        field: String,
        /// The rejected amount
        amount: Decimal,
    },

    /// Expense has an empty name
    #[error("Expense at position {index} has an empty name")]
    EmptyExpenseName {
        /// Position of the expense in the ledger
        index: usize,
    },

    /// Salary is zero, a suggestion cannot be made
    #[error("Salary is required to calculate savings")]
    SalaryRequired,

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Level table or savings configuration is malformed
    #[error("Invalid savings policy: {message}")]
    InvalidPolicy {
        /// Description of the problem
        message: String,
    },
}

impl SavingsError {
    /// Create a LevelOutOfRange error
    pub fn level_out_of_range(level: SavingLevel, min: SavingLevel, max: SavingLevel) -> Self {
        SavingsError::LevelOutOfRange { level, min, max }
    }

    /// Create an ExpensesExceedSalary error
    pub fn expenses_exceed_salary(total: Decimal, salary: Decimal) -> Self {
        SavingsError::ExpensesExceedSalary { total, salary }
    }

    /// Create a WithdrawalTooLow error
    pub fn withdrawal_too_low(withdrawal: Decimal, minimum: Decimal) -> Self {
        SavingsError::WithdrawalTooLow {
            withdrawal,
            minimum,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(field: &str, amount: Decimal) -> Self {
        SavingsError::InvalidAmount {
            field: field.to_string(),
            amount,
        }
    }

    /// Create an EmptyExpenseName error
    pub fn empty_expense_name(index: usize) -> Self {
        SavingsError::EmptyExpenseName { index }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        SavingsError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create an InvalidPolicy error
    pub fn invalid_policy(message: impl Into<String>) -> Self {
        SavingsError::InvalidPolicy {
            message: message.into(),
        }
    }
}
