/// Fixed spending categories offered by the transaction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Education,
    Food,
    Rent,
    Transportation,
    Health,
    Clothing,
    Social,
    Entertainment,
    Misc,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Self::Education,
            Self::Food,
            Self::Rent,
            Self::Transportation,
            Self::Health,
            Self::Clothing,
            Self::Social,
            Self::Entertainment,
            Self::Misc,
        ]
    }

    /// Stable lowercase token, used in the exported summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Food => "food",
            Self::Rent => "rent",
            Self::Transportation => "transportation",
            Self::Health => "health",
            Self::Clothing => "clothing",
            Self::Social => "social",
            Self::Entertainment => "entertainment",
            Self::Misc => "misc",
        }
    }

}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Education => write!(f, "Education"),
            Self::Food => write!(f, "Food"),
            Self::Rent => write!(f, "Rent"),
            Self::Transportation => write!(f, "Transportation"),
            Self::Health => write!(f, "Health"),
            Self::Clothing => write!(f, "Clothing"),
            Self::Social => write!(f, "Social"),
            Self::Entertainment => write!(f, "Entertainment"),
            Self::Misc => write!(f, "Miscellaneous"),
        }
    }
}
