use chrono::Local;

use crate::ledger::Ledger;
use crate::models::{Category, TxnKind};

/// Warning text raised whenever the running total exceeds a set budget.
pub(crate) const BUDGET_WARNING: &str = "Warning: You have exceeded your monthly budget!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Form,
    Budget,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Form => write!(f, "FORM"),
            Self::Budget => write!(f, "BUDGET"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Field focus within the add-transaction form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Kind,
    Date,
    Category,
    Amount,
    Comment,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[
            Self::Kind,
            Self::Date,
            Self::Category,
            Self::Amount,
            Self::Comment,
        ]
    }

    pub(crate) fn next(self) -> FormField {
        let fields = Self::all();
        let idx = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(idx + 1) % fields.len()]
    }

    pub(crate) fn prev(self) -> FormField {
        let fields = Self::all();
        let idx = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(idx + fields.len() - 1) % fields.len()]
    }

    pub(crate) fn is_last(self) -> bool {
        self == Self::Comment
    }

    /// Select fields cycle options instead of taking typed text.
    pub(crate) fn is_select(self) -> bool {
        matches!(self, Self::Kind | Self::Category)
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Kind => "Type",
            Self::Date => "Date",
            Self::Category => "Category",
            Self::Amount => "Amount",
            Self::Comment => "Comment",
        }
    }
}

/// Raw add-transaction form state. Text fields stay raw strings until the
/// validator accepts them; select fields are indices into the fixed option
/// lists.
#[derive(Debug, Clone)]
pub(crate) struct TxnForm {
    pub(crate) field: FormField,
    pub(crate) kind_index: usize,
    pub(crate) date: String,
    pub(crate) category_index: usize,
    pub(crate) amount: String,
    pub(crate) comment: String,
}

impl TxnForm {
    pub(crate) fn new() -> Self {
        Self {
            field: FormField::Kind,
            kind_index: 0,
            date: Local::now().format("%Y-%m-%d").to_string(),
            category_index: 0,
            amount: String::new(),
            comment: String::new(),
        }
    }

    pub(crate) fn kind(&self) -> TxnKind {
        TxnKind::all()[self.kind_index % TxnKind::all().len()]
    }

    pub(crate) fn category(&self) -> Category {
        Category::all()[self.category_index % Category::all().len()]
    }

    /// Cycle the focused select field by `delta` steps, wrapping.
    pub(crate) fn cycle(&mut self, delta: i32) {
        let (index, len) = match self.field {
            FormField::Kind => (&mut self.kind_index, TxnKind::all().len()),
            FormField::Category => (&mut self.category_index, Category::all().len()),
            _ => return,
        };
        let len = len as i32;
        *index = ((*index as i32 + delta).rem_euclid(len)) as usize;
    }

    pub(crate) fn push_char(&mut self, c: char) {
        match self.field {
            FormField::Date => self.date.push(c),
            FormField::Amount => self.amount.push(c),
            FormField::Comment => self.comment.push(c),
            _ => {}
        }
    }

    pub(crate) fn backspace(&mut self) {
        match self.field {
            FormField::Date => {
                self.date.pop();
            }
            FormField::Amount => {
                self.amount.pop();
            }
            FormField::Comment => {
                self.comment.pop();
            }
            _ => {}
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    RemoveTransaction { index: usize, label: String },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) show_help: bool,

    /// Validation or budget warning shown under the expense header,
    /// dismissible with `x`.
    pub(crate) warning: Option<String>,
    pub(crate) status_message: String,

    // Forms
    pub(crate) form: TxnForm,
    pub(crate) budget_input: String,

    // History list
    pub(crate) history_index: usize,
    pub(crate) history_scroll: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            show_help: false,

            warning: None,
            status_message: String::new(),

            form: TxnForm::new(),
            budget_input: String::new(),

            history_index: 0,
            history_scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn warn(&mut self, msg: impl Into<String>) {
        self.warning = Some(msg.into());
    }

    /// Manual dismissal is transient: the next ledger mutation re-raises
    /// the budget warning if the condition still holds.
    pub(crate) fn dismiss_warning(&mut self) {
        self.warning = None;
    }

    /// Re-derive the budget warning after a ledger mutation. Raises it on
    /// an exceeded budget; clears it (and only it, not validation
    /// warnings) once the condition no longer holds.
    pub(crate) fn sync_budget_warning(&mut self, ledger: &Ledger) {
        if ledger.is_over_budget() {
            self.warning = Some(BUDGET_WARNING.to_string());
        } else if self.warning.as_deref() == Some(BUDGET_WARNING) {
            self.warning = None;
        }
    }

    /// Keep the history cursor inside the list after removals or re-sorts.
    pub(crate) fn clamp_history_cursor(&mut self, len: usize) {
        if len == 0 {
            self.history_index = 0;
            self.history_scroll = 0;
        } else if self.history_index >= len {
            self.history_index = len - 1;
        }
        if self.history_index < self.history_scroll {
            self.history_scroll = self.history_index;
        }
    }
}
