//! Savings configuration
//!
//! `SavingsConfig` gathers every tunable of the withdrawal rule in one
//! immutable value: the level table, the rounding denomination and the
//! minimum amount worth suggesting. The engine receives it at construction
//! and never changes it.

use crate::core::level_policy::{LevelPolicy, PolicyVersion};
use crate::types::SavingsError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default rounding step for withdrawals
pub const DEFAULT_DENOMINATION: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Default exclusive minimum for a withdrawal suggestion
pub const DEFAULT_MINIMUM_WITHDRAWAL: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Tunables for the savings computation
///
/// Every field has a default, so a partial document such as
/// `{"policy": [{"level": 1, "threshold": 200}]}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsConfig {
    /// Level → minimal balance table
    pub policy: LevelPolicy,

    /// Withdrawals are rounded down to a multiple of this amount
    pub denomination: Decimal,

    /// Withdrawals at or below this amount are rejected
    pub minimum_withdrawal: Decimal,
}

impl SavingsConfig {
    /// Create a configuration using a published policy version
    pub fn for_version(version: PolicyVersion) -> Self {
        SavingsConfig {
            policy: LevelPolicy::for_version(version),
            ..Self::default()
        }
    }

    /// Check that the rounding rule can be applied
    ///
    /// # Errors
    ///
    /// Returns `SavingsError::InvalidPolicy` if:
    /// - `denomination` is zero or negative
    /// - `minimum_withdrawal` is negative
    pub fn validate(&self) -> Result<(), SavingsError> {
        if self.denomination <= Decimal::ZERO {
            return Err(SavingsError::invalid_policy(format!(
                "denomination must be positive, got {}",
                self.denomination
            )));
        }
        if self.minimum_withdrawal < Decimal::ZERO {
            return Err(SavingsError::invalid_policy(format!(
                "minimum withdrawal must not be negative, got {}",
                self.minimum_withdrawal
            )));
        }
        Ok(())
    }
}

impl Default for SavingsConfig {
    fn default() -> Self {
        SavingsConfig {
            policy: LevelPolicy::default(),
            denomination: DEFAULT_DENOMINATION,
            minimum_withdrawal: DEFAULT_MINIMUM_WITHDRAWAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::ThresholdPolicy;
    use rstest::rstest;

    #[test]
    fn test_default_values() {
        let config = SavingsConfig::default();

        assert_eq!(config.denomination, Decimal::new(5, 0));
        assert_eq!(config.minimum_withdrawal, Decimal::new(10, 0));
        assert_eq!(config.policy, LevelPolicy::for_version(PolicyVersion::Current));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_for_version_keeps_default_rounding() {
        let config = SavingsConfig::for_version(PolicyVersion::Legacy);

        assert_eq!(config.policy.max_level(), 3);
        assert_eq!(config.policy.resolve_threshold(1), Ok(Decimal::new(150, 0)));
        assert_eq!(config.denomination, DEFAULT_DENOMINATION);
    }

    #[rstest]
    #[case::zero_denomination(Decimal::ZERO, Decimal::new(10, 0))]
    #[case::negative_denomination(Decimal::new(-5, 0), Decimal::new(10, 0))]
    #[case::negative_minimum(Decimal::new(5, 0), Decimal::new(-1, 0))]
    fn test_validate_rejects(#[case] denomination: Decimal, #[case] minimum_withdrawal: Decimal) {
        let config = SavingsConfig {
            denomination,
            minimum_withdrawal,
            ..SavingsConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(SavingsError::InvalidPolicy { .. })
        ));
    }

    #[test]
    fn test_zero_minimum_is_valid() {
        let config = SavingsConfig {
            minimum_withdrawal: Decimal::ZERO,
            ..SavingsConfig::default()
        };

        assert!(config.validate().is_ok());
    }
}
