use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use super::app::{App, FormField, InputMode};
use super::theme;
use super::util::{format_amount, truncate};
use crate::ledger::Ledger;
use crate::models::{Category, TxnKind};

pub(crate) fn render(f: &mut Frame, app: &App, ledger: &Ledger) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Expense header
            Constraint::Length(1), // Warning line
            Constraint::Min(8),    // Forms + history
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Message bar
        ])
        .split(f.area());

    render_header(f, chunks[0], ledger);
    render_warning(f, chunks[1], app);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(40)])
        .split(chunks[2]);

    let forms = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Add transaction
            Constraint::Length(4), // Set budget
            Constraint::Min(0),
        ])
        .split(main[0]);

    render_txn_form(f, forms[0], app);
    render_budget_form(f, forms[1], app, ledger);
    render_history(f, main[1], app, ledger);

    render_status_bar(f, chunks[3], app, ledger);
    render_message_bar(f, chunks[4], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect, ledger: &Ledger) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(" MY WALLET ", theme::header_style()));

    let budget_text = if ledger.monthly_budget() > rust_decimal::Decimal::ZERO {
        format!("Budget: {}", format_amount(ledger.monthly_budget()))
    } else {
        "Budget: not set".to_string()
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("EXPENSE  ", theme::dim_style()),
            Span::styled(
                format_amount(ledger.total_expense()),
                Style::default()
                    .fg(if ledger.is_over_budget() {
                        theme::RED
                    } else {
                        theme::GREEN
                    })
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(budget_text, theme::normal_style())),
        Line::from(Span::styled(
            format!("Sort: {}", ledger.sort_order()),
            theme::dim_style(),
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_warning(f: &mut Frame, area: Rect, app: &App) {
    let line = match &app.warning {
        Some(msg) => Line::from(vec![
            Span::styled(format!(" {msg}"), theme::warning_style()),
            Span::styled("  [x] dismiss", theme::dim_style()),
        ]),
        None => Line::from(""),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn form_value(app: &App, field: FormField) -> String {
    match field {
        FormField::Kind => format!("< {} >", app.form.kind()),
        FormField::Category => format!("< {} >", app.form.category()),
        FormField::Date => app.form.date.clone(),
        FormField::Amount => app.form.amount.clone(),
        FormField::Comment => truncate(&app.form.comment, 20),
    }
}

fn render_txn_form(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Form;

    let mut lines: Vec<Line> = FormField::all()
        .iter()
        .map(|field| {
            let focused = editing && app.form.field == *field;
            let value = form_value(app, *field);
            let value_style = if focused {
                theme::selected_style()
            } else {
                theme::normal_style()
            };
            Line::from(vec![
                Span::styled(format!(" {:<9}", field.label()), theme::dim_style()),
                Span::styled(value, value_style),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        if editing {
            " Enter next field, Esc cancel"
        } else {
            " Press a to add a transaction"
        },
        theme::dim_style(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if editing {
            theme::ACCENT
        } else {
            theme::OVERLAY
        }))
        .title(Span::styled(
            " Add a new transaction ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_budget_form(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    let editing = app.input_mode == InputMode::Budget;

    let value_line = if editing {
        Line::from(vec![
            Span::styled(" ₹", theme::dim_style()),
            Span::styled(app.budget_input.clone(), theme::selected_style()),
        ])
    } else if ledger.monthly_budget() > rust_decimal::Decimal::ZERO {
        Line::from(Span::styled(
            format!(" {}", format_amount(ledger.monthly_budget())),
            theme::normal_style(),
        ))
    } else {
        Line::from(Span::styled(" Press b to set", theme::dim_style()))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if editing {
            theme::ACCENT
        } else {
            theme::OVERLAY
        }))
        .title(Span::styled(
            " Set a monthly budget ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    f.render_widget(Paragraph::new(vec![value_line]).block(block), area);
}

fn render_history(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    let title = format!(
        " Transaction History ({})  Sort: {} ",
        ledger.len(),
        ledger.sort_order()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    if ledger.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No transactions yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press a to add the first one",
                theme::dim_style(),
            )),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Type", "Category", "Amount", "Comment"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = ledger
        .transactions()
        .iter()
        .enumerate()
        .skip(app.history_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let style = if i == app.history_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(txn.date.format("%Y-%m-%d").to_string()),
                Cell::from(txn.kind.to_string()),
                Cell::from(txn.category.to_string()),
                Cell::from(format_amount(txn.amount)),
                Cell::from(truncate(&txn.comment, 24)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(16),
        Constraint::Length(14),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        InputMode::Form | InputMode::Budget => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::GREEN)
            .add_modifier(Modifier::BOLD),
        InputMode::Confirm => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::RED)
            .add_modifier(Modifier::BOLD),
    };

    let info = format!(
        " {} txns | total {}",
        ledger.len(),
        format_amount(ledger.total_expense())
    );

    let right = match app.input_mode {
        InputMode::Normal => " a add | b budget | s sort | D remove | e export | ? help ",
        InputMode::Form => " Tab/Enter next | arrows cycle | Esc cancel ",
        InputMode::Budget => " Enter set | Esc cancel ",
        InputMode::Confirm => " y confirm | any other key cancels ",
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.len() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_message_bar(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Confirm => Line::from(vec![
            Span::styled(&app.confirm_message, Style::default().fg(theme::YELLOW)),
            Span::styled(" [y/N] ", Style::default().fg(theme::RED)),
        ]),
        _ => {
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press a to add, b for budget, ? for help",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(&app.status_message, theme::command_bar_style()))
            }
        }
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let kinds: Vec<String> = TxnKind::all().iter().map(ToString::to_string).collect();
    let categories: Vec<String> = Category::all().iter().map(ToString::to_string).collect();

    let help_text = vec![
        Line::from(Span::styled(
            " My Wallet Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Actions",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  a    Add a transaction        b    Set the monthly budget",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  s    Toggle sort order        D    Remove selected entry",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  e    Export summary document  x    Dismiss the warning",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  q    Quit (also Ctrl-q)",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Navigation",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  j/k or Up/Down   Move cursor    g/G        Top/Bottom",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Ctrl-d/u         Half page up/down",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Form",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  Tab/Enter   Next field         Shift-Tab  Previous field",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Left/Right  Cycle type or category        Esc  Cancel",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" Types: {}", kinds.join(", ")),
            theme::dim_style(),
        )),
        Line::from(Span::styled(
            format!(" Categories: {}", truncate(&categories.join(", "), 66)),
            theme::dim_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Press any key to close ",
            Style::default().fg(theme::TEXT_DIM),
        )),
    ];

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
