use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{Category, TxnKind};

/// One recorded expense. Immutable once it enters the ledger; the amount is
/// strictly positive by the time validation has let it through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub kind: TxnKind,
    pub date: NaiveDate,
    pub category: Category,
    pub amount: Decimal,
    pub comment: String,
}

impl Transaction {
    pub fn new(
        kind: TxnKind,
        date: NaiveDate,
        category: Category,
        amount: Decimal,
        comment: String,
    ) -> Self {
        Self {
            kind,
            date,
            category,
            amount,
            comment,
        }
    }
}
