use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Category, Transaction, TxnKind};


/// Rejection reasons for raw form input. The messages are what the warning
/// line shows, so they are phrased for the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum InputError {
    #[error("Please enter a valid positive number.")]
    InvalidAmount,
    #[error("Invalid budget. Please enter a valid positive number.")]
    InvalidBudget,
    #[error("Invalid date. Use YYYY-MM-DD.")]
    InvalidDate,
}

/// Parse a transaction amount. Fails on anything non-numeric or ≤ 0.
pub(crate) fn amount(raw: &str) -> Result<Decimal, InputError> {
    match Decimal::from_str(raw.trim()) {
        Ok(value) if value > Decimal::ZERO => Ok(value),
        _ => Err(InputError::InvalidAmount),
    }
}

/// Parse a monthly budget. Same rule as amounts, different rejection.
pub(crate) fn budget(raw: &str) -> Result<Decimal, InputError> {
    match Decimal::from_str(raw.trim()) {
        Ok(value) if value > Decimal::ZERO => Ok(value),
        _ => Err(InputError::InvalidBudget),
    }
}

pub(crate) fn date(raw: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| InputError::InvalidDate)
}

/// Validate a whole transaction form. Kind and category come from select
/// fields and are already typed; only date and amount can fail.
pub(crate) fn transaction(
    kind: TxnKind,
    date_raw: &str,
    category: Category,
    amount_raw: &str,
    comment: &str,
) -> Result<Transaction, InputError> {
    let date = date(date_raw)?;
    let amount = amount(amount_raw)?;
    Ok(Transaction::new(
        kind,
        date,
        category,
        amount,
        comment.trim().to_string(),
    ))
}
