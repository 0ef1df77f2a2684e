mod export;
mod ledger;
mod models;
mod run;
mod ui;
mod validate;

use anyhow::Result;

fn main() -> Result<()> {
    run::as_tui()
}
