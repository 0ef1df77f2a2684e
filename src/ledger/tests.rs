#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{Category, Transaction, TxnKind};

fn txn(date: &str, amount: Decimal) -> Transaction {
    Transaction::new(
        TxnKind::Daily,
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        Category::Misc,
        amount,
        String::new(),
    )
}

fn dates(ledger: &Ledger) -> Vec<String> {
    ledger
        .transactions()
        .iter()
        .map(|t| t.date.format("%Y-%m-%d").to_string())
        .collect()
}

#[test]
fn test_new_ledger_is_empty() {
    let ledger = Ledger::new();
    assert!(ledger.is_empty());
    assert_eq!(ledger.total_expense(), Decimal::ZERO);
    assert_eq!(ledger.monthly_budget(), Decimal::ZERO);
    assert_eq!(ledger.sort_order(), SortOrder::Ascending);
    assert!(!ledger.is_over_budget());
}

#[test]
fn test_add_updates_total() {
    let mut ledger = Ledger::new();
    ledger.add(txn("2024-01-05", dec!(50)));
    assert_eq!(ledger.total_expense(), dec!(50));
    ledger.add(txn("2024-01-01", dec!(500)));
    assert_eq!(ledger.total_expense(), dec!(550));
    assert_eq!(ledger.len(), 2);
}

#[test]
fn test_duplicates_permitted() {
    let mut ledger = Ledger::new();
    ledger.add(txn("2024-01-05", dec!(10)));
    ledger.add(txn("2024-01-05", dec!(10)));
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.total_expense(), dec!(20));
}

#[test]
fn test_remove_shrinks_total_by_removed_amount() {
    let mut ledger = Ledger::new();
    ledger.add(txn("2024-01-05", dec!(50)));
    ledger.add(txn("2024-01-01", dec!(500)));

    // Ascending order puts the 500 entry first.
    let removed = ledger.remove(0).unwrap();
    assert_eq!(removed.amount, dec!(500));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.total_expense(), dec!(50));
}

#[test]
fn test_remove_out_of_range() {
    let mut ledger = Ledger::new();
    ledger.add(txn("2024-01-05", dec!(50)));

    let err = ledger.remove(1).unwrap_err();
    assert_eq!(err, LedgerError::IndexOutOfRange { index: 1, len: 1 });
    // Rejection leaves state untouched.
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.total_expense(), dec!(50));
}

#[test]
fn test_remove_from_empty() {
    let mut ledger = Ledger::new();
    assert!(ledger.remove(0).is_err());
}

#[test]
fn test_total_tracks_any_sequence() {
    let mut ledger = Ledger::new();
    ledger.add(txn("2024-03-01", dec!(1.50)));
    ledger.add(txn("2024-03-02", dec!(2.25)));
    ledger.add(txn("2024-03-03", dec!(3.75)));
    ledger.remove(1).unwrap();
    ledger.add(txn("2024-03-04", dec!(0.01)));
    ledger.remove(0).unwrap();

    let expected: Decimal = ledger.transactions().iter().map(|t| t.amount).sum();
    assert_eq!(ledger.total_expense(), expected);
    assert_eq!(ledger.total_expense(), dec!(3.76));
}

#[test]
fn test_sort_ascending_by_default() {
    let mut ledger = Ledger::new();
    ledger.add(txn("2024-01-05", dec!(1)));
    ledger.add(txn("2024-01-01", dec!(1)));
    ledger.add(txn("2024-01-03", dec!(1)));
    assert_eq!(dates(&ledger), ["2024-01-01", "2024-01-03", "2024-01-05"]);
}

#[test]
fn test_toggle_sort_reverses() {
    let mut ledger = Ledger::new();
    ledger.add(txn("2024-01-05", dec!(1)));
    ledger.add(txn("2024-01-01", dec!(1)));
    ledger.add(txn("2024-01-03", dec!(1)));

    assert_eq!(ledger.toggle_sort(), SortOrder::Descending);
    assert_eq!(dates(&ledger), ["2024-01-05", "2024-01-03", "2024-01-01"]);

    // Toggling twice restores the original order (distinct dates).
    assert_eq!(ledger.toggle_sort(), SortOrder::Ascending);
    assert_eq!(dates(&ledger), ["2024-01-01", "2024-01-03", "2024-01-05"]);
}

#[test]
fn test_sort_is_idempotent() {
    let mut ledger = Ledger::new();
    ledger.add(txn("2024-01-01", dec!(1)));
    ledger.add(txn("2024-01-02", dec!(2)));
    ledger.add(txn("2024-01-03", dec!(3)));

    let before = dates(&ledger);
    // Any mutation re-sorts; a budget change leaves the order alone.
    ledger.set_budget(dec!(10));
    assert_eq!(dates(&ledger), before);
}

#[test]
fn test_equal_dates_keep_insertion_order() {
    let mut ledger = Ledger::new();
    ledger.add(txn("2024-01-01", dec!(1)));
    ledger.add(txn("2024-01-01", dec!(2)));
    ledger.add(txn("2024-01-01", dec!(3)));

    let amounts: Vec<Decimal> = ledger.transactions().iter().map(|t| t.amount).collect();
    assert_eq!(amounts, [dec!(1), dec!(2), dec!(3)]);
}

#[test]
fn test_over_budget_boundary() {
    let mut ledger = Ledger::new();
    ledger.set_budget(dec!(100));
    ledger.add(txn("2024-01-01", dec!(100)));
    // Exactly at the budget is not over it.
    assert!(!ledger.is_over_budget());

    ledger.add(txn("2024-01-02", dec!(0.01)));
    assert!(ledger.is_over_budget());
}

#[test]
fn test_over_budget_clears_after_removal() {
    let mut ledger = Ledger::new();
    ledger.set_budget(dec!(100));
    ledger.add(txn("2024-01-01", dec!(99)));
    ledger.add(txn("2024-01-02", dec!(1.01)));
    assert!(ledger.is_over_budget());

    // Removing the later entry brings the total to 99.00.
    ledger.remove(1).unwrap();
    assert_eq!(ledger.total_expense(), dec!(99));
    assert!(!ledger.is_over_budget());
}

#[test]
fn test_zero_budget_disables_warning() {
    let mut ledger = Ledger::new();
    ledger.add(txn("2024-01-01", dec!(1000)));
    assert!(!ledger.is_over_budget());

    ledger.set_budget(dec!(500));
    assert!(ledger.is_over_budget());

    ledger.set_budget(Decimal::ZERO);
    assert!(!ledger.is_over_budget());
}

#[test]
fn test_end_to_end_scenario() {
    let mut ledger = Ledger::new();
    ledger.add(Transaction::new(
        TxnKind::Daily,
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        Category::Food,
        dec!(50),
        String::new(),
    ));
    ledger.add(Transaction::new(
        TxnKind::OneTime,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        Category::Rent,
        dec!(500),
        String::new(),
    ));

    assert_eq!(ledger.total_expense(), dec!(550.00));
    assert_eq!(ledger.transactions()[0].category, Category::Rent);
    assert_eq!(ledger.transactions()[1].category, Category::Food);

    let removed = ledger.remove(0).unwrap();
    assert_eq!(removed.category, Category::Rent);
    assert_eq!(ledger.total_expense(), dec!(50.00));
}
