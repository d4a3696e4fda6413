//! Configuration handling for tabrepr

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ReprError, Result};

/// Default maximum number of rows shown before truncating
pub const DEFAULT_MAX_ROWS: usize = 60;
/// Default maximum number of columns shown before truncating
pub const DEFAULT_MAX_COLS: usize = 20;

/// LaTeX tabular column specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColSpec {
    /// Alignment token repeated once per data column
    pub col: String,
    /// Alignment token for the row-name column
    pub row_head: String,
    /// Appended after the column tokens
    pub end: String,
}

impl Default for ColSpec {
    fn default() -> Self {
        Self {
            col: "l".to_string(),
            row_head: "r|".to_string(),
            end: String::new(),
        }
    }
}

impl ColSpec {
    /// Create a column spec from its three tokens
    pub fn new(col: impl Into<String>, row_head: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            col: col.into(),
            row_head: row_head.into(),
            end: end.into(),
        }
    }

    /// The `\begin{tabular}{...}` argument for `ncol` data columns
    pub fn preamble(&self, ncol: usize, has_row_names: bool) -> String {
        let mut preamble = String::new();
        if has_row_names {
            preamble.push_str(&self.row_head);
        }
        preamble.push_str(&self.col.repeat(ncol));
        preamble.push_str(&self.end);
        preamble
    }
}

/// Configuration threaded into every render call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReprConfig {
    /// Rows shown before truncating (at least 2)
    pub max_rows: usize,
    /// Columns shown before truncating (at least 2)
    pub max_cols: usize,
    /// Column spec used by LaTeX output when none is given explicitly
    pub latex_colspec: ColSpec,
}

impl Default for ReprConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            max_cols: DEFAULT_MAX_COLS,
            latex_colspec: ColSpec::default(),
        }
    }
}

impl ReprConfig {
    /// Parse a JSON configuration document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| ReprError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the display limits
    pub fn validate(&self) -> Result<()> {
        if self.max_rows < 2 || self.max_cols < 2 {
            return Err(ReprError::InvalidLimits {
                max_rows: self.max_rows,
                max_cols: self.max_cols,
            });
        }
        Ok(())
    }

    /// Set the row limit
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Set the column limit
    pub fn with_max_cols(mut self, max_cols: usize) -> Self {
        self.max_cols = max_cols;
        self
    }

    /// Set the default LaTeX column spec
    pub fn with_latex_colspec(mut self, colspec: ColSpec) -> Self {
        self.latex_colspec = colspec;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReprConfig::default();
        assert_eq!(config.max_rows, 60);
        assert_eq!(config.max_cols, 20);
        assert_eq!(config.latex_colspec, ColSpec::new("l", "r|", ""));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ReprConfig::from_json_str(r#"{"max_rows": 10, "latex_colspec": {"col": "c"}}"#).unwrap();
        assert_eq!(config.max_rows, 10);
        assert_eq!(config.max_cols, 20);
        assert_eq!(config.latex_colspec.col, "c");
        assert_eq!(config.latex_colspec.row_head, "r|");
    }

    #[test]
    fn test_json_limits_validated() {
        let err = ReprConfig::from_json_str(r#"{"max_cols": 1}"#).unwrap_err();
        assert!(matches!(err, ReprError::InvalidLimits { max_cols: 1, .. }));
        assert!(matches!(
            ReprConfig::from_json_str("{not json"),
            Err(ReprError::Config(_))
        ));
    }

    #[test]
    fn test_preamble() {
        let spec = ColSpec::default();
        assert_eq!(spec.preamble(3, false), "lll");
        assert_eq!(spec.preamble(2, true), "r|ll");
        assert_eq!(ColSpec::new("c", "l", "|").preamble(1, true), "lc|");
    }
}
