//! Saving level policy
//!
//! This module provides the `LevelPolicy` struct, an immutable table mapping
//! each saving level to the minimal balance that must remain after expenses.
//!
//! Higher levels keep a smaller balance, so more of the salary is suggested for
//! withdrawal. The table is a plain value owned by whoever needs it; nothing in
//! the crate holds a global "current threshold".

use crate::core::traits::ThresholdPolicy;
use crate::types::{SavingLevel, SavingsError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Published versions of the level table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyVersion {
    /// First table: three levels (150, 130, 110)
    Legacy,

    /// Current table: four levels (190, 170, 150, 100)
    #[default]
    Current,
}

/// One row of a level table, as found in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelThreshold {
    /// Saving level, starting at 1
    pub level: SavingLevel,

    /// Minimal balance kept after expenses
    pub threshold: Decimal,
}

/// Immutable level → threshold table
///
/// Levels are contiguous and start at 1, so the table is stored as a vector
/// indexed by `level - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LevelThreshold>", into = "Vec<LevelThreshold>")]
pub struct LevelPolicy {
    thresholds: Vec<Decimal>,
}

impl LevelPolicy {
    /// Create the policy for a published version
    pub fn for_version(version: PolicyVersion) -> Self {
        let thresholds = match version {
            PolicyVersion::Legacy => vec![
                Decimal::new(150, 0),
                Decimal::new(130, 0),
                Decimal::new(110, 0),
            ],
            PolicyVersion::Current => vec![
                Decimal::new(190, 0),
                Decimal::new(170, 0),
                Decimal::new(150, 0),
                Decimal::new(100, 0),
            ],
        };
        LevelPolicy { thresholds }
    }

    /// Build a custom table
    ///
    /// Rows may be given in any order.
    ///
    /// # Errors
    ///
    /// Returns `SavingsError::InvalidPolicy` if:
    /// - The table is empty
    /// - A level is repeated, or levels do not run contiguously from 1
    /// - A threshold is negative
    pub fn from_thresholds<I>(rows: I) -> Result<Self, SavingsError>
    where
        I: IntoIterator<Item = LevelThreshold>,
    {
        let mut rows: Vec<LevelThreshold> = rows.into_iter().collect();
        if rows.is_empty() {
            return Err(SavingsError::invalid_policy("level table is empty"));
        }
        rows.sort_by_key(|row| row.level);

        let mut thresholds = Vec::with_capacity(rows.len());
        for (expected, row) in (1..).zip(&rows) {
            if row.level != expected {
                return Err(SavingsError::invalid_policy(format!(
                    "expected level {}, found level {}",
                    expected, row.level
                )));
            }
            if row.threshold < Decimal::ZERO {
                return Err(SavingsError::invalid_policy(format!(
                    "threshold for level {} is negative: {}",
                    row.level, row.threshold
                )));
            }
            thresholds.push(row.threshold);
        }

        Ok(LevelPolicy { thresholds })
    }

    /// Lowest supported level
    pub fn min_level(&self) -> SavingLevel {
        1
    }

    /// Highest supported level
    pub fn max_level(&self) -> SavingLevel {
        // rows were SavingLevel values counted from 1, so the length fits
        self.thresholds.len() as SavingLevel
    }

    /// Iterate over the table in level order
    pub fn iter(&self) -> impl Iterator<Item = LevelThreshold> + '_ {
        (1..).zip(&self.thresholds).map(|(level, &threshold)| LevelThreshold {
            level,
            threshold,
        })
    }
}

impl Default for LevelPolicy {
    fn default() -> Self {
        Self::for_version(PolicyVersion::Current)
    }
}

impl ThresholdPolicy for LevelPolicy {
    fn resolve_threshold(&self, level: SavingLevel) -> Result<Decimal, SavingsError> {
        level
            .checked_sub(1)
            .and_then(|offset| usize::try_from(offset).ok())
            .and_then(|i| self.thresholds.get(i).copied())
            .ok_or_else(|| {
                SavingsError::level_out_of_range(level, self.min_level(), self.max_level())
            })
    }
}

impl TryFrom<Vec<LevelThreshold>> for LevelPolicy {
    type Error = SavingsError;

    fn try_from(rows: Vec<LevelThreshold>) -> Result<Self, Self::Error> {
        Self::from_thresholds(rows)
    }
}

impl From<LevelPolicy> for Vec<LevelThreshold> {
    fn from(policy: LevelPolicy) -> Self {
        policy.iter().collect()
    }
}
