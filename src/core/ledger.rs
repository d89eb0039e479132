//! Expense ledger operations
//!
//! This module adds the expense-list mutations to `ProfileRecord`:
//! - Appending expenses (names are not unique)
//! - Removing the first expense whose name contains a query, ignoring case
//! - Renaming, re-amounting and deleting the first exact name match
//! - Summing expense amounts
//! - Validating amounts and names
//!
//! Lookups that find nothing leave the record untouched and return `false`.
//! None of the edits can fail, so a caller never observes a record that was
//! only partly updated. Edits do not check their input either: a negative
//! amount or an empty name is accepted here and rejected by
//! [`ProfileRecord::validate`], which the engine runs before any arithmetic.

use crate::types::{Expense, ProfileRecord, SavingsError};
use rust_decimal::Decimal;
use tracing::debug;

impl ProfileRecord {
    /// Append a new expense
    ///
    /// Never fails; an expense with the same name may already exist.
    pub fn add_expense(&mut self, name: impl Into<String>, amount: Decimal) {
        let expense = Expense::new(name, amount);
        debug!(name = %expense.name, %amount, "adding expense");
        self.expenses.push(expense);
    }

    /// Remove the first expense whose name contains `query`, ignoring case
    ///
    /// Only the first match is removed, so a short query such as "coffee" removes
    /// "Coffee" but leaves a later "Coffee Shop" in place. An empty query matches
    /// the first expense.
    ///
    /// # Returns
    ///
    /// `true` if an expense was removed, `false` if nothing matched
    pub fn remove_expense_by_name(&mut self, query: &str) -> bool {
        match self.expenses.iter().position(|e| e.name_contains(query)) {
            Some(index) => {
                let removed = self.expenses.remove(index);
                debug!(query, name = %removed.name, "removed expense by substring");
                true
            }
            None => {
                debug!(query, "no expense matched removal query");
                false
            }
        }
    }

    /// Rename the first expense named exactly `target`
    ///
    /// # Returns
    ///
    /// `true` if an expense was renamed, `false` if none is named `target`
    pub fn rename_expense(&mut self, target: &str, new_name: impl Into<String>) -> bool {
        match self.find_exact_mut(target) {
            Some(expense) => {
                expense.name = new_name.into();
                debug!(name = target, new_name = %expense.name, "renamed expense");
                true
            }
            None => false,
        }
    }

    /// Change the amount of the first expense named exactly `target`
    ///
    /// # Returns
    ///
    /// `true` if an expense was updated, `false` if none is named `target`
    pub fn reamount_expense(&mut self, target: &str, new_amount: Decimal) -> bool {
        match self.find_exact_mut(target) {
            Some(expense) => {
                debug!(name = target, old = %expense.amount, new = %new_amount, "changed expense amount");
                expense.amount = new_amount;
                true
            }
            None => false,
        }
    }

    /// Delete the first expense named exactly `target`
    ///
    /// Unlike [`remove_expense_by_name`](Self::remove_expense_by_name), the name
    /// must match exactly, including case.
    ///
    /// # Returns
    ///
    /// `true` if an expense was deleted, `false` if none is named `target`
    pub fn delete_expense(&mut self, target: &str) -> bool {
        match self.expenses.iter().position(|e| e.name == target) {
            Some(index) => {
                self.expenses.remove(index);
                debug!(name = target, "deleted expense");
                true
            }
            None => {
                debug!(name = target, "no expense to delete");
                false
            }
        }
    }

    /// Sum of all expense amounts, zero when there are none
    ///
    /// The sum does not depend on the order of the expenses.
    ///
    /// # Errors
    ///
    /// Returns `SavingsError::ArithmeticOverflow` if the sum exceeds the
    /// range of `Decimal`.
    pub fn total_expenses(&self) -> Result<Decimal, SavingsError> {
        self.expenses.iter().try_fold(Decimal::ZERO, |total, e| {
            total
                .checked_add(e.amount)
                .ok_or_else(|| SavingsError::arithmetic_overflow("expense total"))
        })
    }

    /// Check the values the savings rule relies on
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The salary is negative (`SavingsError::InvalidAmount`)
    /// - An expense name is empty or only whitespace (`SavingsError::EmptyExpenseName`)
    /// - An expense amount is negative (`SavingsError::InvalidAmount`)
    pub fn validate(&self) -> Result<(), SavingsError> {
        if self.salary < Decimal::ZERO {
            return Err(SavingsError::invalid_amount("salary", self.salary));
        }

        for (index, expense) in self.expenses.iter().enumerate() {
            if expense.name.trim().is_empty() {
                return Err(SavingsError::empty_expense_name(index));
            }
            if expense.amount < Decimal::ZERO {
                return Err(SavingsError::invalid_amount(
                    &format!("expense '{}'", expense.name),
                    expense.amount,
                ));
            }
        }

        Ok(())
    }

    fn find_exact_mut(&mut self, target: &str) -> Option<&mut Expense> {
        let found = self.expenses.iter_mut().find(|e| e.name == target);
        if found.is_none() {
            debug!(name = target, "no expense with exact name");
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn dec(value: i64) -> Decimal {
        Decimal::new(value, 0)
    }

    #[fixture]
    fn record() -> ProfileRecord {
        ProfileRecord::new(dec(1000), 2).with_expenses(vec![
            Expense::new("Rent", dec(450)),
            Expense::new("Coffee", dec(4)),
            Expense::new("Coffee Shop", dec(6)),
            Expense::new("Internet", dec(30)),
        ])
    }

    fn names(record: &ProfileRecord) -> Vec<&str> {
        record.expenses.iter().map(|e| e.name.as_str()).collect()
    }

    #[rstest]
    fn test_add_expense_appends(mut record: ProfileRecord) {
        record.add_expense("Gym", dec(25));

        assert_eq!(record.expenses.len(), 5);
        assert_eq!(record.expenses[4], Expense::new("Gym", dec(25)));
    }

    #[rstest]
    fn test_add_expense_allows_duplicate_names(mut record: ProfileRecord) {
        record.add_expense("Rent", dec(10));

        assert_eq!(record.expenses.iter().filter(|e| e.name == "Rent").count(), 2);
    }

    #[rstest]
    fn test_remove_by_name_removes_first_match_only(mut record: ProfileRecord) {
        assert!(record.remove_expense_by_name("coffee"));

        assert_eq!(names(&record), vec!["Rent", "Coffee Shop", "Internet"]);
    }

    #[rstest]
    #[case::substring("net", vec!["Rent", "Coffee", "Coffee Shop"])]
    #[case::upper_case("RENT", vec!["Coffee", "Coffee Shop", "Internet"])]
    #[case::later_word("shop", vec!["Rent", "Coffee", "Internet"])]
    fn test_remove_by_name_matches_substring_ignoring_case(
        mut record: ProfileRecord,
        #[case] query: &str,
        #[case] expected: Vec<&str>,
    ) {
        assert!(record.remove_expense_by_name(query));
        assert_eq!(names(&record), expected);
    }

    #[rstest]
    fn test_remove_by_name_miss_is_noop(mut record: ProfileRecord) {
        let before = record.clone();

        assert!(!record.remove_expense_by_name("groceries"));
        assert_eq!(record, before);
    }

    #[rstest]
    fn test_add_then_remove_restores_count(mut record: ProfileRecord) {
        let count = record.expenses.len();

        record.add_expense("Streaming", dec(12));
        assert!(record.remove_expense_by_name("Streaming"));

        assert_eq!(record.expenses.len(), count);
    }

    #[rstest]
    fn test_rename_expense(mut record: ProfileRecord) {
        assert!(record.rename_expense("Coffee", "Espresso"));

        assert_eq!(names(&record), vec!["Rent", "Espresso", "Coffee Shop", "Internet"]);
        assert_eq!(record.expenses[1].amount, dec(4));
    }

    #[rstest]
    fn test_reamount_expense(mut record: ProfileRecord) {
        assert!(record.reamount_expense("Internet", Decimal::new(3499, 2)));

        assert_eq!(record.expenses[3].amount, Decimal::new(3499, 2));
        assert_eq!(record.expenses[3].name, "Internet");
    }

    #[rstest]
    fn test_delete_expense(mut record: ProfileRecord) {
        assert!(record.delete_expense("Coffee Shop"));

        assert_eq!(names(&record), vec!["Rent", "Coffee", "Internet"]);
    }

    #[rstest]
    fn test_exact_operations_act_on_first_duplicate(mut record: ProfileRecord) {
        record.add_expense("Rent", dec(10));

        assert!(record.reamount_expense("Rent", dec(500)));
        assert_eq!(record.expenses[0].amount, dec(500));
        assert_eq!(record.expenses[4].amount, dec(10));

        assert!(record.delete_expense("Rent"));
        assert_eq!(record.expenses.last(), Some(&Expense::new("Rent", dec(10))));
    }

    // exact-match operations do not fall back to substring or case-insensitive matching
    #[rstest]
    #[case::lowercase("rent")]
    #[case::substring("Coff")]
    #[case::missing("Groceries")]
    fn test_exact_operations_miss_is_noop(mut record: ProfileRecord, #[case] target: &str) {
        let before = record.clone();

        assert!(!record.rename_expense(target, "Other"));
        assert!(!record.reamount_expense(target, dec(1)));
        assert!(!record.delete_expense(target));

        assert_eq!(record, before);
    }

    #[rstest]
    fn test_total_expenses(record: ProfileRecord) {
        assert_eq!(record.total_expenses(), Ok(dec(490)));
    }

    #[test]
    fn test_total_expenses_empty_is_zero() {
        let record = ProfileRecord::new(dec(1000), 1);

        assert_eq!(record.total_expenses(), Ok(Decimal::ZERO));
    }

    #[rstest]
    fn test_total_expenses_ignores_order(mut record: ProfileRecord) {
        let total = record.total_expenses();

        record.expenses.reverse();
        assert_eq!(record.total_expenses(), total);

        record.expenses.rotate_left(1);
        assert_eq!(record.total_expenses(), total);
    }

    #[test]
    fn test_total_reports_overflow() {
        let record = ProfileRecord::new(Decimal::MAX, 1).with_expenses(vec![
            Expense::new("Huge", Decimal::MAX),
            Expense::new("Also huge", Decimal::MAX),
        ]);

        assert_eq!(
            record.total_expenses(),
            Err(SavingsError::arithmetic_overflow("expense total"))
        );
    }

    #[rstest]
    fn test_validate_accepts_valid_record(record: ProfileRecord) {
        assert_eq!(record.validate(), Ok(()));
    }

    #[test]
    fn test_validate_accepts_zero_amounts() {
        let record = ProfileRecord::new(Decimal::ZERO, 1)
            .with_expenses(vec![Expense::new("Free trial", Decimal::ZERO)]);

        assert_eq!(record.validate(), Ok(()));
    }

    #[rstest]
    fn test_validate_rejects_negative_salary(mut record: ProfileRecord) {
        record.salary = dec(-50);

        assert_eq!(
            record.validate(),
            Err(SavingsError::invalid_amount("salary", dec(-50)))
        );
    }

    #[rstest]
    fn test_validate_rejects_negative_amount_after_edit(mut record: ProfileRecord) {
        assert!(record.reamount_expense("Internet", dec(-30)));

        assert_eq!(
            record.validate(),
            Err(SavingsError::invalid_amount("expense 'Internet'", dec(-30)))
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    fn test_validate_rejects_empty_name(mut record: ProfileRecord, #[case] name: &str) {
        record.add_expense(name, dec(5));

        assert_eq!(record.validate(), Err(SavingsError::empty_expense_name(4)));
    }

    #[rstest]
    fn test_validate_rejects_name_cleared_by_rename(mut record: ProfileRecord) {
        assert!(record.rename_expense("Rent", ""));

        assert_eq!(record.validate(), Err(SavingsError::empty_expense_name(0)));
    }
}
