//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `expense`: Named expense entries
//! - `profile`: Profile record, salary type and savings breakdown
//! - `error`: Error types for the savings engine

pub mod error;
pub mod expense;
pub mod profile;

pub use error::SavingsError;
pub use expense::Expense;
pub use profile::{ProfileRecord, SalaryType, SavingLevel, SavingsBreakdown};
