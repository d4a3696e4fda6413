//! Ellipsis markers inserted where rows or columns were dropped

use serde::{Deserialize, Serialize};

/// Sentinel occupying one cell or one name slot of a truncated table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ellipsis {
    /// Columns omitted to the side: `⋯`
    Horizontal,
    /// Rows omitted below: `⋮`
    Vertical,
    /// Both omitted, at the crossing of the two marker lines: `⋱`
    Diagonal,
}

impl Ellipsis {
    /// All markers, in the order factor levels are extended with them
    pub const ALL: [Ellipsis; 3] = [Ellipsis::Horizontal, Ellipsis::Vertical, Ellipsis::Diagonal];

    /// The printed symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Ellipsis::Horizontal => "\u{22EF}",
            Ellipsis::Vertical => "\u{22EE}",
            Ellipsis::Diagonal => "\u{22F1}",
        }
    }
}

impl std::fmt::Display for Ellipsis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_distinct() {
        assert_eq!(Ellipsis::Horizontal.symbol(), "⋯");
        assert_eq!(Ellipsis::Vertical.symbol(), "⋮");
        assert_eq!(Ellipsis::Diagonal.symbol(), "⋱");
        assert_eq!(Ellipsis::Vertical.to_string(), "⋮");
    }
}
