//! Parser layer for loading tabular files into a [`Table`]

mod csv;
mod excel;
mod json;

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::model::Table;

pub use self::csv::CsvParser;
pub use self::excel::ExcelParser;
pub use self::json::JsonParser;

/// Options controlling how a file is turned into a table
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// For Excel files: which sheet to read
    pub sheet_name: Option<String>,
    /// Use the first column as row names
    pub row_names: bool,
    /// Character columns to convert to factors
    pub factor_columns: Vec<String>,
}

impl LoadOptions {
    /// Set the Excel sheet name
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = Some(name.into());
        self
    }

    /// Take row names from the first column
    pub fn with_row_names(mut self, row_names: bool) -> Self {
        self.row_names = row_names;
        self
    }

    /// Set the columns converted to factors
    pub fn with_factor_columns(mut self, columns: Vec<String>) -> Self {
        self.factor_columns = columns;
        self
    }

    /// Apply the row-name and factor options to a freshly parsed table
    pub fn apply(&self, mut table: Table) -> Result<Table> {
        if self.row_names {
            let (column, _) = table
                .remove_column(0)
                .context("Cannot take row names from a table without columns")?;
            let names: Vec<String> = column.format_cells();
            table = table.with_row_names(names)?;
        }

        for name in &self.factor_columns {
            let Some(index) = table.column_index(name) else {
                bail!("No column named '{}' to convert to a factor", name);
            };
            let factor = table.columns()[index].to_factor();
            table.replace_column(index, factor)?;
        }

        Ok(table)
    }
}

/// Trait for parsing tabular data files
pub trait Parser: Send + Sync {
    /// Parse a file and return a Table
    fn parse(&self, path: &Path, options: &LoadOptions) -> Result<Table>;

    /// Check if this parser can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool;
}

/// Factory for creating parsers based on file extension
pub struct ParserFactory {
    parsers: Vec<Box<dyn Parser>>,
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserFactory {
    /// Create a new parser factory with all supported parsers
    pub fn new() -> Self {
        Self {
            parsers: vec![Box::new(CsvParser), Box::new(ExcelParser), Box::new(JsonParser)],
        }
    }

    /// Get a parser for the given file path
    pub fn get_parser(&self, path: &Path) -> Result<&dyn Parser> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        for parser in &self.parsers {
            if parser.supports_extension(&ext) {
                return Ok(parser.as_ref());
            }
        }

        bail!(
            "Unsupported file format: {}",
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
        )
    }

    /// Parse a file using the appropriate parser and apply the load options
    pub fn parse(&self, path: &Path, options: &LoadOptions) -> Result<Table> {
        let parser = self.get_parser(path)?;
        let table = parser.parse(path, options)?;
        debug!(
            path = %path.display(),
            rows = table.nrow(),
            cols = table.ncol(),
            "parsed table"
        );
        options.apply(table)
    }
}

/// Build a table from a header and padded row-major cells
fn assemble(header: Vec<String>, rows: Vec<Vec<crate::model::CellValue>>) -> Result<Table> {
    let table = if rows.is_empty() {
        let columns = header
            .iter()
            .map(|_| crate::model::Column::default())
            .collect();
        Table::new(columns)?
    } else {
        Table::from_rows(rows)?
    };
    Ok(table.with_col_names(header)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellValue, ColumnKind};

    fn sample() -> Table {
        assemble(
            vec!["id".into(), "group".into()],
            vec![
                vec![CellValue::from("a"), CellValue::from("x")],
                vec![CellValue::from("b"), CellValue::from("y")],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_row_names_from_first_column() {
        let table = LoadOptions::default().with_row_names(true).apply(sample()).unwrap();
        assert_eq!(table.ncol(), 1);
        assert_eq!(table.row_names().unwrap(), &["a".to_string(), "b".to_string()]);
        assert_eq!(table.col_names().unwrap(), &["group".to_string()]);
    }

    #[test]
    fn test_factor_columns() {
        let options = LoadOptions::default().with_factor_columns(vec!["group".into()]);
        let table = options.apply(sample()).unwrap();
        assert!(matches!(table.columns()[1].kind, ColumnKind::Factor { .. }));

        let missing = LoadOptions::default().with_factor_columns(vec!["nope".into()]);
        assert!(missing.apply(sample()).is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let factory = ParserFactory::new();
        assert!(factory.get_parser(Path::new("data.parquet")).is_err());
        assert!(factory.get_parser(Path::new("data.CSV")).is_ok());
        assert!(factory.get_parser(Path::new("book.xlsx")).is_ok());
    }

    #[test]
    fn test_assemble_empty_body() {
        let table = assemble(vec!["a".into(), "b".into()], Vec::new()).unwrap();
        assert_eq!(table.nrow(), 0);
        assert_eq!(table.ncol(), 2);
    }
}
