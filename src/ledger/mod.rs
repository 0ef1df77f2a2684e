use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::Transaction;

#[cfg(test)]
mod tests;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum LedgerError {
    #[error("No transaction at position {index} (history has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Direction the history is sorted in, by transaction date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub(crate) fn toggled(self) -> SortOrder {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "Ascending"),
            Self::Descending => write!(f, "Descending"),
        }
    }
}

/// Sole source of truth for one session: the ordered transaction history,
/// the monthly budget, and the totals derived from them.
///
/// Every mutating method ends with a single [`Ledger::refresh`] pass that
/// re-sorts the history and recomputes the total from scratch, so the
/// derived state can never drift from the transactions, and a mutation can
/// never re-trigger itself through the sort.
pub(crate) struct Ledger {
    transactions: Vec<Transaction>,
    monthly_budget: Decimal,
    total_expense: Decimal,
    sort_order: SortOrder,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self {
            transactions: Vec::new(),
            monthly_budget: Decimal::ZERO,
            total_expense: Decimal::ZERO,
            sort_order: SortOrder::Ascending,
        }
    }

    /// Append a transaction. Repeated identical entries are allowed.
    pub(crate) fn add(&mut self, txn: Transaction) {
        self.transactions.push(txn);
        self.refresh();
    }

    /// Remove the entry at `index` in the current displayed order.
    pub(crate) fn remove(&mut self, index: usize) -> Result<Transaction, LedgerError> {
        if index >= self.transactions.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: self.transactions.len(),
            });
        }
        let removed = self.transactions.remove(index);
        self.refresh();
        Ok(removed)
    }

    /// Replace the monthly budget. Zero means "unset" and disables the
    /// budget-exceeded warning.
    pub(crate) fn set_budget(&mut self, amount: Decimal) {
        self.monthly_budget = amount;
        self.refresh();
    }

    pub(crate) fn toggle_sort(&mut self) -> SortOrder {
        self.sort_order = self.sort_order.toggled();
        self.refresh();
        self.sort_order
    }

    /// Transactions in display order.
    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn total_expense(&self) -> Decimal {
        self.total_expense
    }

    pub(crate) fn monthly_budget(&self) -> Decimal {
        self.monthly_budget
    }

    pub(crate) fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// True when a budget is set and the running total exceeds it.
    pub(crate) fn is_over_budget(&self) -> bool {
        self.monthly_budget > Decimal::ZERO && self.total_expense > self.monthly_budget
    }

    /// One coalesced pass per mutation: re-sort, then recompute the total.
    /// The stable sort keeps equal dates in insertion order.
    fn refresh(&mut self) {
        match self.sort_order {
            SortOrder::Ascending => self.transactions.sort_by(|a, b| a.date.cmp(&b.date)),
            SortOrder::Descending => self.transactions.sort_by(|a, b| b.date.cmp(&a.date)),
        }
        self.total_expense = self.transactions.iter().map(|t| t.amount).sum();
    }
}
