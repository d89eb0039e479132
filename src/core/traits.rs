//! Core traits for threshold resolution
//!
//! This module defines the trait abstraction that lets the savings engine work
//! with any level table: the built-in versions, a table loaded from
//! configuration, or a fixed table in tests.

use crate::types::{SavingLevel, SavingsError};
use rust_decimal::Decimal;

/// Trait for mapping a saving level to a minimal balance
///
/// Implementations must be pure: the same level always resolves to the same
/// threshold, and no state changes between calls.
pub trait ThresholdPolicy {
    /// Resolve the minimal balance to keep after expenses for `level`
    ///
    /// # Errors
    ///
    /// Returns `SavingsError::LevelOutOfRange` if the level is not covered.
    fn resolve_threshold(&self, level: SavingLevel) -> Result<Decimal, SavingsError>;
}

impl<P: ThresholdPolicy + ?Sized> ThresholdPolicy for &P {
    fn resolve_threshold(&self, level: SavingLevel) -> Result<Decimal, SavingsError> {
        (**self).resolve_threshold(level)
    }
}
