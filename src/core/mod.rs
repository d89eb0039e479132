//! Core business logic module
//!
//! This module contains the savings components:
//! - `traits` - Trait abstraction for interchangeable level tables
//! - `level_policy` - Saving level to minimal balance mapping
//! - `ledger` - Expense list mutations on a profile record
//! - `engine` - Withdrawal derivation

pub mod engine;
pub mod ledger;
pub mod level_policy;
pub mod traits;

pub use engine::SavingsEngine;
pub use level_policy::{LevelPolicy, LevelThreshold, PolicyVersion};
pub use traits::ThresholdPolicy;
