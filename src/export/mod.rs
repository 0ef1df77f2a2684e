use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::ledger::Ledger;


/// Fixed base filename for the exported document.
pub(crate) const SUMMARY_BASENAME: &str = "expense_summary.txt";

/// Lines of content per page of the exported document.
const PAGE_LINES: usize = 40;

/// Render the summary document: total and budget lines, then the
/// transaction history in display order, one line per entry, split into
/// fixed-height pages with a footer on each.
pub(crate) fn render_summary(ledger: &Ledger) -> String {
    let mut lines: Vec<String> = vec![
        format!("Total Expense: ₹{:.2}", ledger.total_expense()),
        format!("Monthly Budget: ₹{:.2}", ledger.monthly_budget()),
        String::new(),
        "Transaction History:".to_string(),
    ];

    for txn in ledger.transactions() {
        lines.push(format!(
            "{}  {}  {}  ₹{:.2}",
            txn.date.format("%Y-%m-%d"),
            txn.kind.as_str(),
            txn.category.as_str(),
            txn.amount,
        ));
    }

    let total_pages = lines.len().div_ceil(PAGE_LINES).max(1);
    let mut out = String::new();
    for (page, chunk) in lines.chunks(PAGE_LINES).enumerate() {
        for line in chunk {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&format!("[page {} of {total_pages}]\n", page + 1));
        if page + 1 < total_pages {
            out.push('\n');
        }
    }
    out
}

/// Write the summary under its fixed name in `dir`, overwriting any
/// previous export. Returns the full path written.
pub(crate) fn write_summary(ledger: &Ledger, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(SUMMARY_BASENAME);
    std::fs::write(&path, render_summary(ledger))
        .with_context(|| format!("Failed to write summary to {}", path.display()))?;
    Ok(path)
}

/// Where exports land: the user's home directory, falling back to the
/// current directory.
pub(crate) fn default_export_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|d| d.home_dir().to_path_buf())
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
