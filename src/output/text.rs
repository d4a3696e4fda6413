//! Plain-text table output

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Padding, Style};
use tracing::debug;

use crate::config::ReprConfig;
use crate::error::Result;
use crate::model::Table;
use crate::truncate::truncate;

/// Render `source` as aligned plain text
///
/// The truncated table is printed as is, so row and column names synthesized
/// during truncation appear as positions. Numeric columns are right-aligned.
pub fn render_text(source: &Table, config: &ReprConfig) -> Result<String> {
    let table = truncate(source, config.max_rows, config.max_cols)?;
    let row_names = table.row_names();
    if table.ncol() == 0 && row_names.is_none() {
        return Ok(String::new());
    }

    let offset = usize::from(row_names.is_some());
    let mut builder = Builder::default();

    if let Some(names) = table.col_names() {
        let corner = row_names.map(|_| String::new());
        builder.push_record(corner.into_iter().chain(names.iter().cloned()));
    }

    let columns = table.format_columns();
    for r in 0..table.nrow() {
        let name = row_names.map(|n| n[r].clone());
        builder.push_record(name.into_iter().chain(columns.iter().map(|c| c[r].clone())));
    }

    let mut printed = builder.build();
    printed.with(Style::empty()).with(Padding::new(0, 1, 0, 0));
    for (i, column) in table.columns().iter().enumerate() {
        if column.kind.is_numeric() {
            printed.modify(Columns::single(i + offset), Alignment::right());
        }
    }

    debug!(rows = table.nrow(), cols = table.ncol(), "rendering text table");

    let mut out = String::new();
    for line in printed.to_string().lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;
    use pretty_assertions::assert_eq;

    fn words(line: &str) -> Vec<&str> {
        line.split_whitespace().collect()
    }

    #[test]
    fn test_names_and_cells() {
        let table = Table::from_rows(vec![
            vec![CellValue::Int(1), CellValue::from("x")],
            vec![CellValue::Int(20), CellValue::from("yy")],
        ])
        .unwrap()
        .with_col_names(["n", "s"])
        .unwrap()
        .with_row_names(["a", "b"])
        .unwrap();

        let text = render_text(&table, &ReprConfig::default()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(words(lines[0]), vec!["n", "s"]);
        assert_eq!(words(lines[1]), vec!["a", "1", "x"]);
        assert_eq!(words(lines[2]), vec!["b", "20", "yy"]);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_numeric_columns_right_aligned() {
        let table = Table::from_rows(vec![vec![CellValue::Int(5)], vec![CellValue::Int(500)]]).unwrap();
        let text = render_text(&table, &ReprConfig::default()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["  5", "500"]);
    }

    #[test]
    fn test_truncated_print_shows_positions() {
        let rows = (1..=30).map(|i| vec![CellValue::Int(i), CellValue::Int(i * 2)]).collect();
        let table = Table::from_rows(rows).unwrap();
        let config = ReprConfig::default().with_max_rows(4);
        let text = render_text(&table, &config).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(words(lines[0]), vec!["1", "1", "2"]);
        assert_eq!(words(lines[2]), vec!["⋮", "⋮", "⋮"]);
        assert_eq!(words(lines[4]), vec!["30", "30", "60"]);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(render_text(&Table::default(), &ReprConfig::default()).unwrap(), "");
    }
}
