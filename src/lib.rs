//! Rust Savings Engine Library
//! # Overview
//!
//! This library computes a suggested monthly savings withdrawal from a profile
//! made of a salary, a list of named expenses and a saving level, and provides
//! the expense-ledger edits that keep such a profile up to date.
//!
//! Storage, prompts and rendering belong to the host application: the crate
//! takes a [`ProfileRecord`] and returns either the edited record or a result.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (ProfileRecord, Expense, SavingsError, etc.)
//! - [`config`] - Immutable savings configuration
//! - [`core`] - Business logic components:
//!   - [`core::level_policy`] - Saving level to minimal balance table
//!   - [`core::ledger`] - Expense add/remove/rename/re-amount/delete and totals
//!   - [`core::engine`] - Withdrawal derivation
//! - [`logging`] - Tracing subscriber setup for host binaries
//!
//! # Saving Levels
//!
//! | Level | Minimal balance after expenses |
//! |-------|--------------------------------|
//! | 1     | 190                            |
//! | 2     | 170                            |
//! | 3     | 150                            |
//! | 4     | 100                            |
//!
//! # Withdrawal Rule
//!
//! `floor((salary - expenses - threshold) / 5) * 5`, floored at zero. The
//! suggestion is rejected when expenses exceed the salary or when the result
//! is 10 or less.
//!
//! ```
//! use rust_decimal::Decimal;
//! use rust_savings_engine::{ProfileRecord, SavingsEngine};
//!
//! let mut profile = ProfileRecord::new(Decimal::new(500, 0), 3);
//! profile.add_expense("Rent", Decimal::new(300, 0));
//!
//! let engine = SavingsEngine::new();
//! assert_eq!(engine.compute_savings(&profile), Ok(Decimal::new(50, 0)));
//! ```

// Module declarations
pub mod config;
pub mod core;
pub mod logging;
pub mod types;

pub use crate::config::SavingsConfig;
pub use crate::core::{LevelPolicy, LevelThreshold, PolicyVersion, SavingsEngine, ThresholdPolicy};
pub use crate::types::{Expense, ProfileRecord, SalaryType, SavingLevel, SavingsBreakdown, SavingsError};
