//! Savings computation engine
//!
//! This module provides the SavingsEngine that derives a suggested monthly
//! withdrawal from a profile by combining the profile's expense ledger with the
//! threshold resolved for its saving level.
//!
//! The engine enforces business rules such as:
//! - The saving level is resolved before anything else is computed
//! - Negative amounts and unnamed expenses are rejected before any arithmetic
//! - Expenses above salary abort the computation
//! - Withdrawals are rounded down to a clean denomination and never negative
//! - Withdrawals at or below the minimum are rejected, the minimum itself included

use crate::config::SavingsConfig;
use crate::core::level_policy::LevelPolicy;
use crate::core::traits::ThresholdPolicy;
use crate::types::{ProfileRecord, SavingLevel, SavingsBreakdown, SavingsError};
use rust_decimal::Decimal;
use tracing::debug;

/// Savings computation engine
///
/// Holds only immutable configuration. Records are borrowed for the duration of
/// a call and never retained.
#[derive(Debug, Clone)]
pub struct SavingsEngine<P = LevelPolicy> {
    policy: P,
    denomination: Decimal,
    minimum_withdrawal: Decimal,
}

impl SavingsEngine<LevelPolicy> {
    /// Create an engine with the current level table and default rounding
    pub fn new() -> Self {
        let config = SavingsConfig::default();
        SavingsEngine {
            policy: config.policy,
            denomination: config.denomination,
            minimum_withdrawal: config.minimum_withdrawal,
        }
    }

    /// Create an engine from a configuration value
    ///
    /// # Errors
    ///
    /// Returns `SavingsError::InvalidPolicy` if the configuration fails
    /// [`SavingsConfig::validate`].
    pub fn with_config(config: SavingsConfig) -> Result<Self, SavingsError> {
        config.validate()?;
        Ok(SavingsEngine {
            policy: config.policy,
            denomination: config.denomination,
            minimum_withdrawal: config.minimum_withdrawal,
        })
    }
}

impl<P: ThresholdPolicy> SavingsEngine<P> {
    /// Create an engine around any threshold policy, with default rounding
    pub fn with_policy(policy: P) -> Self {
        let defaults = SavingsConfig::default();
        SavingsEngine {
            policy,
            denomination: defaults.denomination,
            minimum_withdrawal: defaults.minimum_withdrawal,
        }
    }

    /// The threshold policy in use
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Resolve the minimal balance for a saving level
    ///
    /// # Errors
    ///
    /// Returns `SavingsError::LevelOutOfRange` if the policy does not cover `level`.
    pub fn resolve_threshold(&self, level: SavingLevel) -> Result<Decimal, SavingsError> {
        self.policy.resolve_threshold(level)
    }

    /// Compute every intermediate value of the withdrawal rule
    ///
    /// Steps, in order:
    /// 1. Resolve the threshold for the profile's level
    /// 2. Validate the record (see [`ProfileRecord::validate`])
    /// 3. Sum the expenses
    /// 4. Reject expenses above salary
    /// 5. `remaining = salary - expenses - threshold`
    /// 6. Round `remaining` down to the denomination, floored at zero
    /// 7. Reject withdrawals at or below the minimum
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The saving level is out of range (no totals are computed)
    /// - The salary or an expense amount is negative, or an expense is unnamed
    /// - Summing the expenses overflows
    /// - Total expenses exceed the salary
    /// - The rounded withdrawal is at or below the minimum
    pub fn compute_breakdown(
        &self,
        record: &ProfileRecord,
    ) -> Result<SavingsBreakdown, SavingsError> {
        let threshold = self.policy.resolve_threshold(record.saving_level)?;
        record.validate()?;

        let total_expenses = record.total_expenses()?;
        if total_expenses > record.salary {
            return Err(SavingsError::expenses_exceed_salary(
                total_expenses,
                record.salary,
            ));
        }

        let remaining = record
            .salary
            .checked_sub(total_expenses)
            .and_then(|balance| balance.checked_sub(threshold))
            .ok_or_else(|| SavingsError::arithmetic_overflow("remaining balance"))?;

        let withdrawal = self.round_down(remaining)?.max(Decimal::ZERO);

        debug!(
            level = record.saving_level,
            %threshold,
            %total_expenses,
            %remaining,
            %withdrawal,
            "computed savings breakdown"
        );

        if withdrawal <= self.minimum_withdrawal {
            return Err(SavingsError::withdrawal_too_low(
                withdrawal,
                self.minimum_withdrawal,
            ));
        }

        Ok(SavingsBreakdown {
            salary: record.salary,
            total_expenses,
            threshold,
            remaining,
            withdrawal,
        })
    }

    /// Compute the suggested withdrawal for a profile
    ///
    /// The result is always a positive multiple of the denomination, strictly
    /// above the minimum.
    ///
    /// # Errors
    ///
    /// Same as [`compute_breakdown`](Self::compute_breakdown).
    pub fn compute_savings(&self, record: &ProfileRecord) -> Result<Decimal, SavingsError> {
        self.compute_breakdown(record)
            .map(|breakdown| breakdown.withdrawal)
    }

    /// Compute the suggested withdrawal, requiring a salary first
    ///
    /// # Errors
    ///
    /// Returns `SavingsError::SalaryRequired` if the salary is zero, otherwise
    /// the same errors as [`compute_savings`](Self::compute_savings).
    pub fn suggest_withdrawal(&self, record: &ProfileRecord) -> Result<Decimal, SavingsError> {
        if record.salary.is_zero() {
            return Err(SavingsError::SalaryRequired);
        }
        self.compute_savings(record)
    }

    /// Largest multiple of the denomination that is not above `amount`
    ///
    /// Uses the remainder instead of `floor(amount / denomination)`, because the
    /// quotient is rounded once it needs more than 28 digits and could round up.
    fn round_down(&self, amount: Decimal) -> Result<Decimal, SavingsError> {
        let overflow = || SavingsError::arithmetic_overflow("withdrawal rounding");

        let rem = amount.checked_rem(self.denomination).ok_or_else(overflow)?;
        let rounded = amount.checked_sub(rem).ok_or_else(overflow)?;
        if rem < Decimal::ZERO {
            rounded.checked_sub(self.denomination).ok_or_else(overflow)
        } else {
            Ok(rounded)
        }
    }
}

impl Default for SavingsEngine<LevelPolicy> {
    fn default() -> Self {
        Self::new()
    }
}
