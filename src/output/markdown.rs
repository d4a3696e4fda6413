//! Markdown pipe-table output

use std::borrow::Cow;

use tracing::trace;

use crate::config::ReprConfig;
use crate::error::Result;
use crate::model::Table;
use crate::truncate::truncated_shape;

use super::template::{render_generic, CellTemplate, Template, TemplateBundle};

/// Templates for a pipe table whose header has `header_cells` cells
pub fn bundle(header_cells: usize) -> TemplateBundle {
    trace!(header_cells, "building markdown bundle");
    TemplateBundle {
        wrap: Template::new("%s%s"),
        header_wrap: Template::owned(format!("|%s\n{}|\n", "|---".repeat(header_cells))),
        corner: CellTemplate::new("<!---->|"),
        head: CellTemplate::new("%s|"),
        body_wrap: Template::new("%s"),
        row_wrap: Template::new("|%s\n"),
        row_head: CellTemplate::new("%s|"),
        cell: CellTemplate::new("%s|"),
        escape: markdown_escape,
    }
}

/// Render `source` as a GitHub-flavoured Markdown table
///
/// Pipe tables need a header, so a source without column names gets empty ones.
pub fn render_markdown(source: &Table, config: &ReprConfig) -> Result<String> {
    let source = if source.col_names().is_some() {
        Cow::Borrowed(source)
    } else {
        Cow::Owned(source.clone().with_col_names(vec![String::new(); source.ncol()])?)
    };

    let (_, ncol) = truncated_shape(source.nrow(), source.ncol(), config.max_rows, config.max_cols);
    let header_cells = ncol + usize::from(source.row_names().is_some());
    render_generic(&source, &bundle(header_cells), config)
}

fn markdown_escape(s: &str) -> String {
    s.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_named_table() {
        let table = Table::from_rows(vec![vec![CellValue::Int(1), CellValue::Int(2)]])
            .unwrap()
            .with_col_names(["a", "b"])
            .unwrap()
            .with_row_names(["r1"])
            .unwrap();

        let md = render_markdown(&table, &ReprConfig::default()).unwrap();
        assert_eq!(md, "|<!---->|a|b|\n|---|---|---|\n|r1|1|2|\n");
    }

    #[test]
    fn test_unnamed_table_gets_empty_header() {
        let table = Table::from_rows(vec![vec![CellValue::from("a|b")]]).unwrap();
        let md = render_markdown(&table, &ReprConfig::default()).unwrap();
        assert_eq!(md, "||\n|---|\n|a\\|b|\n");
    }

    #[test]
    fn test_truncated_header_matches_columns() {
        let row: Vec<CellValue> = (0..6).map(CellValue::Int).collect();
        let table = Table::from_rows(vec![row]).unwrap();
        let config = ReprConfig::default().with_max_cols(2);
        let md = render_markdown(&table, &config).unwrap();
        assert_eq!(md, "||⋯||\n|---|---|---|\n|0|⋯|5|\n");
    }
}
