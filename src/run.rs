use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::export;
use crate::ledger::Ledger;
use crate::ui::app::{App, FormField, InputMode, PendingAction, TxnForm};
use crate::ui::util::{format_amount, scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};
use crate::validate;

pub(crate) fn as_tui() -> Result<()> {
    let mut app = App::new();
    let mut ledger = Ledger::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &mut ledger);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    ledger: &mut Ledger,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // Rows left for the history table after the header, warning,
            // bars, borders, and table header.
            let content_height = f.area().height.saturating_sub(11) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app, ledger);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, ledger)?,
                InputMode::Form => handle_form_input(key, app, ledger),
                InputMode::Budget => handle_budget_input(key, app, ledger),
                InputMode::Confirm => handle_confirm_input(key, app, ledger),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    match key.code {
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('a') => {
            // Re-entering the form keeps rejected input so it can be
            // corrected; a successful submit already reset it.
            app.form.field = FormField::Kind;
            app.input_mode = InputMode::Form;
        }
        KeyCode::Char('b') => {
            app.input_mode = InputMode::Budget;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let page = app.visible_rows.max(1);
            scroll_down(
                &mut app.history_index,
                &mut app.history_scroll,
                ledger.len(),
                page,
            );
        }
        KeyCode::Char('k') | KeyCode::Up => {
            scroll_up(&mut app.history_index, &mut app.history_scroll);
        }
        KeyCode::Char('g') => scroll_to_top(&mut app.history_index, &mut app.history_scroll),
        KeyCode::Char('G') => {
            let page = app.visible_rows.max(1);
            scroll_to_bottom(
                &mut app.history_index,
                &mut app.history_scroll,
                ledger.len(),
                page,
            );
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let page = app.visible_rows.max(1);
            for _ in 0..app.visible_rows / 2 {
                scroll_down(
                    &mut app.history_index,
                    &mut app.history_scroll,
                    ledger.len(),
                    page,
                );
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                scroll_up(&mut app.history_index, &mut app.history_scroll);
            }
        }
        KeyCode::Char('s') => {
            let order = ledger.toggle_sort();
            // The cursor stays at the same position, now over a different
            // entry; removal always targets what is displayed.
            app.sync_budget_warning(ledger);
            app.set_status(format!("Sort order: {order}"));
        }
        KeyCode::Char('D') | KeyCode::Char('d') => request_remove(app, ledger),
        KeyCode::Char('x') => {
            app.dismiss_warning();
        }
        KeyCode::Char('e') => export_summary(app, ledger),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.status_message.clear();
        }
        _ => {}
    }
    Ok(())
}

fn handle_form_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.set_status("Add cancelled");
        }
        KeyCode::Enter => {
            if app.form.field.is_last() {
                submit_transaction(app, ledger);
            } else {
                app.form.field = app.form.field.next();
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form.field = app.form.field.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.field = app.form.field.prev();
        }
        KeyCode::Left => app.form.cycle(-1),
        KeyCode::Right => app.form.cycle(1),
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Char(c) => app.form.push_char(c),
        _ => {}
    }
}

fn handle_budget_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    match key.code {
        KeyCode::Enter => submit_budget(app, ledger),
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.set_status("Budget unchanged");
        }
        KeyCode::Backspace => {
            app.budget_input.pop();
        }
        KeyCode::Char(c) => {
            app.budget_input.push(c);
        }
        _ => {}
    }
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(PendingAction::RemoveTransaction { index, label }) =
                app.pending_action.take()
            {
                match ledger.remove(index) {
                    Ok(_) => {
                        app.clamp_history_cursor(ledger.len());
                        app.sync_budget_warning(ledger);
                        app.set_status(format!("Removed {label}"));
                    }
                    // Stale index: the store rejects rather than corrupt
                    // state, and the session stays usable.
                    Err(e) => app.warn(e.to_string()),
                }
            }
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
        }
        _ => {
            app.pending_action = None;
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Cancelled");
        }
    }
}

// ── Actions ──────────────────────────────────────────────────

fn submit_transaction(app: &mut App, ledger: &mut Ledger) {
    app.dismiss_warning();

    match validate::transaction(
        app.form.kind(),
        &app.form.date,
        app.form.category(),
        &app.form.amount,
        &app.form.comment,
    ) {
        Ok(txn) => {
            let desc = format!("{} {}", txn.category, format_amount(txn.amount));
            ledger.add(txn);
            app.form = TxnForm::new();
            app.input_mode = InputMode::Normal;
            app.sync_budget_warning(ledger);
            app.set_status(format!("Added {desc}"));
        }
        // Rejected input stays in the form for correction.
        Err(e) => app.warn(e.to_string()),
    }
}

fn submit_budget(app: &mut App, ledger: &mut Ledger) {
    app.dismiss_warning();

    match validate::budget(&app.budget_input) {
        Ok(amount) => {
            ledger.set_budget(amount);
            app.budget_input.clear();
            app.input_mode = InputMode::Normal;
            app.sync_budget_warning(ledger);
            app.set_status(format!("Monthly budget set to {}", format_amount(amount)));
        }
        Err(e) => app.warn(e.to_string()),
    }
}

fn request_remove(app: &mut App, ledger: &Ledger) {
    if ledger.is_empty() {
        app.set_status("No transactions to remove");
        return;
    }

    if let Some(txn) = ledger.transactions().get(app.history_index) {
        let label = format!(
            "{} {} {}",
            txn.date.format("%Y-%m-%d"),
            txn.category,
            format_amount(txn.amount)
        );
        app.confirm_message = format!("Remove {label}?");
        app.pending_action = Some(PendingAction::RemoveTransaction {
            index: app.history_index,
            label,
        });
        app.input_mode = InputMode::Confirm;
    }
}

fn export_summary(app: &mut App, ledger: &Ledger) {
    match export::write_summary(ledger, &export::default_export_dir()) {
        Ok(path) => app.set_status(format!("Summary written to {}", path.display())),
        Err(e) => app.warn(format!("Export failed: {e}")),
    }
}
