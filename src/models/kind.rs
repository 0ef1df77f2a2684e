/// How often the expense recurs, as chosen in the transaction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnKind {
    Daily,
    Weekly,
    Monthly,
    OneTime,
}

impl TxnKind {
    pub fn all() -> &'static [TxnKind] {
        &[Self::Daily, Self::Weekly, Self::Monthly, Self::OneTime]
    }

    /// Stable lowercase token, used in the exported summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::OneTime => "onetime",
        }
    }

}

impl std::fmt::Display for TxnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daily => write!(f, "Daily"),
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::OneTime => write!(f, "One time"),
        }
    }
}
