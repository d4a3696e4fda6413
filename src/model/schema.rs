//! Column kinds and their capabilities

use indexmap::IndexSet;

use super::marker::Ellipsis;

/// Declared type of a column
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColumnKind {
    #[default]
    Logical,
    Integer,
    Double,
    Character,
    /// Closed enumeration; cells hold indices into `levels`
    Factor { levels: IndexSet<String> },
    Date,
    DateTime,
}

/// How a column kind accommodates ellipsis markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSupport {
    /// Markers can be stored as-is
    Direct,
    /// The allowed value set must be extended with the marker symbols first
    ExtendLevels,
    /// The column must be converted to its string form first
    CoerceToString,
}

impl ColumnKind {
    /// Widen the kind to accommodate another kind
    pub fn widen(self, other: ColumnKind) -> ColumnKind {
        if self == other {
            return self;
        }

        match (self, other) {
            (ColumnKind::Integer, ColumnKind::Double) | (ColumnKind::Double, ColumnKind::Integer) => {
                ColumnKind::Double
            }
            (ColumnKind::Date, ColumnKind::DateTime) | (ColumnKind::DateTime, ColumnKind::Date) => {
                ColumnKind::DateTime
            }
            _ => ColumnKind::Character,
        }
    }

    /// Capability queried by the truncator before inserting markers
    pub fn marker_support(&self) -> MarkerSupport {
        match self {
            ColumnKind::Factor { .. } => MarkerSupport::ExtendLevels,
            ColumnKind::Date | ColumnKind::DateTime => MarkerSupport::CoerceToString,
            _ => MarkerSupport::Direct,
        }
    }

    /// Whether values of this kind read as numbers (right-aligned in text output)
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Double)
    }

    /// Factor levels, if this is a factor
    pub fn levels(&self) -> Option<&IndexSet<String>> {
        match self {
            ColumnKind::Factor { levels } => Some(levels),
            _ => None,
        }
    }

    /// Append the marker symbols to a factor's levels; other kinds are unchanged
    pub fn extend_levels_with_markers(&mut self) {
        if let ColumnKind::Factor { levels } = self {
            for marker in Ellipsis::ALL {
                levels.insert(marker.symbol().to_string());
            }
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Logical => write!(f, "logical"),
            ColumnKind::Integer => write!(f, "integer"),
            ColumnKind::Double => write!(f, "double"),
            ColumnKind::Character => write!(f, "character"),
            ColumnKind::Factor { levels } => write!(f, "factor({} levels)", levels.len()),
            ColumnKind::Date => write!(f, "date"),
            ColumnKind::DateTime => write!(f, "datetime"),
        }
    }
}
