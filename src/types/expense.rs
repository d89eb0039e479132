//! Expense-related types for the Rust Savings Engine
//!
//! This module defines the Expense structure stored in a profile's ledger,
//! along with the field checks applied when records are read from storage.

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};

/// A named monthly expense
///
/// Expenses are identified by name only; names are not required to be unique,
/// so lookups always act on the first matching entry.
///
/// Deserialization rejects empty names and negative amounts. Values built in
/// code are checked by `ProfileRecord::validate` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Display label, e.g. "Rent"
    #[serde(deserialize_with = "non_empty")]
    pub name: String,

    /// Monthly cost, currency-agnostic
    #[serde(deserialize_with = "non_negative")]
    pub amount: Decimal,
}

impl Expense {
    /// Create a new expense
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Expense {
            name: name.into(),
            amount,
        }
    }

    /// Returns true if the name contains `query`, ignoring case
    ///
    /// An empty query matches every expense.
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Deserialize a Decimal that must be zero or more
pub(crate) fn non_negative<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
    if amount < Decimal::ZERO {
        return Err(de::Error::custom(format!(
            "amount must not be negative, got {}",
            amount
        )));
    }
    Ok(amount)
}

fn non_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    if name.trim().is_empty() {
        return Err(de::Error::custom("expense name must not be empty"));
    }
    Ok(name)
}
