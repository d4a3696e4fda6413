//! Table, Column, and Cell data structures

use std::borrow::Cow;
use std::ops::Range;

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexSet;

use crate::error::{ReprError, Result};

use super::marker::Ellipsis;
use super::schema::{ColumnKind, MarkerSupport};

/// Significant digits used when formatting doubles
const SIGNIFICANT_DIGITS: i32 = 7;

/// A cell value
#[derive(Debug, Clone)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(Cow<'static, str>),
    /// Index into the owning factor column's levels
    Level(usize),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Ellipsis(Ellipsis),
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => true,
            (CellValue::Bool(a), CellValue::Bool(b)) => a == b,
            (CellValue::Int(a), CellValue::Int(b)) => a == b,
            (CellValue::Float(a), CellValue::Float(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (CellValue::String(a), CellValue::String(b)) => a == b,
            (CellValue::Level(a), CellValue::Level(b)) => a == b,
            (CellValue::Date(a), CellValue::Date(b)) => a == b,
            (CellValue::DateTime(a), CellValue::DateTime(b)) => a == b,
            (CellValue::Ellipsis(a), CellValue::Ellipsis(b)) => a == b,
            _ => false,
        }
    }
}

impl CellValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Check if the value is an ellipsis marker
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, CellValue::Ellipsis(_))
    }

    /// Kind a single value would be inferred as
    pub fn kind(&self) -> Option<ColumnKind> {
        match self {
            CellValue::Null | CellValue::Ellipsis(_) | CellValue::Level(_) => None,
            CellValue::Bool(_) => Some(ColumnKind::Logical),
            CellValue::Int(_) => Some(ColumnKind::Integer),
            CellValue::Float(_) => Some(ColumnKind::Double),
            CellValue::String(_) => Some(ColumnKind::Character),
            CellValue::Date(_) => Some(ColumnKind::Date),
            CellValue::DateTime(_) => Some(ColumnKind::DateTime),
        }
    }

    /// Convert to a display string, without column context
    ///
    /// Doubles use their shortest representation and factor levels show their
    /// index; use [`Column::format_cells`] for column-consistent output.
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            CellValue::Null => Cow::Borrowed("NA"),
            CellValue::Bool(true) => Cow::Borrowed("TRUE"),
            CellValue::Bool(false) => Cow::Borrowed("FALSE"),
            CellValue::Int(i) => Cow::Owned(i.to_string()),
            CellValue::Float(f) => Cow::Owned(format_double(*f, None)),
            CellValue::String(s) => Cow::Borrowed(s.as_ref()),
            CellValue::Level(i) => Cow::Owned(format!("level {}", i)),
            CellValue::Date(d) => Cow::Owned(d.format("%Y-%m-%d").to_string()),
            CellValue::DateTime(dt) => Cow::Owned(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
            CellValue::Ellipsis(e) => Cow::Borrowed(e.symbol()),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(Cow::Owned(s.to_string()))
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(Cow::Owned(s))
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<Ellipsis> for CellValue {
    fn from(e: Ellipsis) -> Self {
        CellValue::Ellipsis(e)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

/// Decimals needed to show `f` with the configured significant digits
fn decimals_needed(f: f64) -> usize {
    if !f.is_finite() || f == 0.0 {
        return 0;
    }
    let magnitude = f.abs().log10().floor() as i32;
    let decimals = (SIGNIFICANT_DIGITS - 1 - magnitude).max(0) as usize;
    let rendered = format!("{:.*}", decimals, f);
    match rendered.split_once('.') {
        Some((_, frac)) => frac.trim_end_matches('0').len(),
        None => 0,
    }
}

/// Format a double with a fixed number of decimals, or its own minimum if `None`
fn format_double(f: f64, decimals: Option<usize>) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }
    let decimals = decimals.unwrap_or_else(|| decimals_needed(f));
    format!("{:.*}", decimals, f)
}

/// A single typed column
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Column {
    /// Declared kind
    pub kind: ColumnKind,
    /// Cell values in row order
    pub cells: Vec<CellValue>,
}

impl Column {
    /// Create a column with an explicit kind
    pub fn new(kind: ColumnKind, cells: Vec<CellValue>) -> Self {
        Self { kind, cells }
    }

    /// Create a column, inferring its kind from the values
    ///
    /// Integers mixed with doubles become doubles, dates mixed with date-times
    /// become date-times and anything else mixed becomes character.
    pub fn from_cells(cells: Vec<CellValue>) -> Self {
        let kind = cells
            .iter()
            .filter_map(CellValue::kind)
            .reduce(ColumnKind::widen)
            .unwrap_or_default();

        let cells = match kind {
            ColumnKind::Double => cells
                .into_iter()
                .map(|c| match c {
                    CellValue::Int(i) => CellValue::Float(i as f64),
                    other => other,
                })
                .collect(),
            ColumnKind::DateTime => cells
                .into_iter()
                .map(|c| match c {
                    CellValue::Date(d) => CellValue::DateTime(d.and_time(chrono::NaiveTime::MIN)),
                    other => other,
                })
                .collect(),
            ColumnKind::Character => cells
                .into_iter()
                .map(|c| match c {
                    CellValue::Null | CellValue::String(_) | CellValue::Ellipsis(_) => c,
                    other => CellValue::from(other.display().into_owned()),
                })
                .collect(),
            _ => cells,
        };

        Self { kind, cells }
    }

    /// Create a factor column; levels are taken in first-seen order
    pub fn factor<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let mut levels = IndexSet::new();
        let cells = values
            .into_iter()
            .map(|v| match v {
                Some(s) => CellValue::Level(levels.insert_full(s.into()).0),
                None => CellValue::Null,
            })
            .collect();
        Self {
            kind: ColumnKind::Factor { levels },
            cells,
        }
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the column has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Display string of one cell, resolving factor levels
    pub fn display_cell(&self, index: usize) -> Cow<'_, str> {
        match (&self.kind, self.cells.get(index)) {
            (_, None) => Cow::Borrowed(""),
            (ColumnKind::Factor { levels }, Some(CellValue::Level(i))) => levels
                .get_index(*i)
                .map(|s| Cow::Borrowed(s.as_str()))
                .unwrap_or(Cow::Borrowed("NA")),
            (_, Some(cell)) => cell.display(),
        }
    }

    /// Display strings of all cells, formatted consistently across the column
    ///
    /// Doubles share the largest number of decimals any finite value needs.
    pub fn format_cells(&self) -> Vec<String> {
        let decimals = if self.kind == ColumnKind::Double {
            self.cells
                .iter()
                .filter_map(|c| match c {
                    CellValue::Float(f) => Some(decimals_needed(*f)),
                    _ => None,
                })
                .max()
        } else {
            None
        };

        (0..self.len())
            .map(|i| match &self.cells[i] {
                CellValue::Float(f) => format_double(*f, decimals),
                _ => self.display_cell(i).into_owned(),
            })
            .collect()
    }

    /// Convert into a character column holding the formatted display strings
    pub fn to_character(&self) -> Column {
        let cells = self
            .format_cells()
            .into_iter()
            .zip(&self.cells)
            .map(|(s, c)| match c {
                CellValue::Null => CellValue::Null,
                CellValue::Ellipsis(e) => CellValue::Ellipsis(*e),
                _ => CellValue::from(s),
            })
            .collect();
        Column::new(ColumnKind::Character, cells)
    }

    /// Convert a character column into a factor; other kinds are returned unchanged
    pub fn to_factor(&self) -> Column {
        if self.kind != ColumnKind::Character {
            return self.clone();
        }
        Column::factor(self.cells.iter().map(|c| match c {
            CellValue::Null => None,
            other => Some(other.display().into_owned()),
        }))
    }

    /// Prepare the column so ellipsis markers can be written into it
    pub fn accommodate_markers(&self) -> Column {
        match self.kind.marker_support() {
            MarkerSupport::Direct => self.clone(),
            MarkerSupport::ExtendLevels => {
                let mut column = self.clone();
                column.kind.extend_levels_with_markers();
                column
            }
            MarkerSupport::CoerceToString => self.to_character(),
        }
    }

    /// The value representing `marker` in this column
    pub fn marker(&self, marker: Ellipsis) -> CellValue {
        match self.kind.levels().and_then(|l| l.get_index_of(marker.symbol())) {
            Some(index) => CellValue::Level(index),
            None => CellValue::Ellipsis(marker),
        }
    }

    /// A column of `len` copies of `marker`
    pub fn markers(marker: Ellipsis, len: usize) -> Column {
        Column::new(ColumnKind::Character, vec![CellValue::Ellipsis(marker); len])
    }

    /// Copy out a range of rows
    pub fn slice(&self, rows: Range<usize>) -> Column {
        Column::new(self.kind.clone(), self.cells[rows].to_vec())
    }
}

/// A rectangular, column-major table with optional row and column names
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    nrow: usize,
    row_names: Option<Vec<String>>,
    col_names: Option<Vec<String>>,
}

impl Table {
    /// Create a table from columns of equal length
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let nrow = columns.first().map(Column::len).unwrap_or(0);
        if let Some((i, col)) = columns.iter().enumerate().find(|(_, c)| c.len() != nrow) {
            return Err(ReprError::Shape(format!(
                "column {} has {} cells, expected {}",
                i + 1,
                col.len(),
                nrow
            )));
        }
        Ok(Self {
            columns,
            nrow,
            row_names: None,
            col_names: None,
        })
    }

    /// Create a table with `nrow` rows and no columns
    pub fn with_rows(nrow: usize) -> Self {
        Self {
            nrow,
            ..Default::default()
        }
    }

    /// Create a table from row-major cells, inferring each column's kind
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Result<Self> {
        let ncol = rows.first().map(Vec::len).unwrap_or(0);
        let nrow = rows.len();
        let mut columns: Vec<Vec<CellValue>> = (0..ncol).map(|_| Vec::with_capacity(nrow)).collect();

        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != ncol {
                return Err(ReprError::Shape(format!(
                    "row {} has {} cells, expected {}",
                    r + 1,
                    row.len(),
                    ncol
                )));
            }
            for (column, cell) in columns.iter_mut().zip(row) {
                column.push(cell);
            }
        }

        let mut table = Self::new(columns.into_iter().map(Column::from_cells).collect())?;
        table.nrow = nrow;
        Ok(table)
    }

    /// Attach row names
    pub fn with_row_names<I, S>(mut self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if self.columns.is_empty() && self.nrow == 0 {
            self.nrow = names.len();
        }
        if names.len() != self.nrow {
            return Err(ReprError::Shape(format!(
                "{} row names for {} rows",
                names.len(),
                self.nrow
            )));
        }
        self.row_names = Some(names);
        Ok(self)
    }

    /// Attach column names
    pub fn with_col_names<I, S>(mut self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != self.columns.len() {
            return Err(ReprError::Shape(format!(
                "{} column names for {} columns",
                names.len(),
                self.columns.len()
            )));
        }
        self.col_names = Some(names);
        Ok(self)
    }

    /// Replace or drop the row names without validation (lengths are the caller's invariant)
    pub(crate) fn set_row_names(&mut self, names: Option<Vec<String>>) {
        debug_assert!(names.as_ref().map_or(true, |n| n.len() == self.nrow));
        self.row_names = names;
    }

    /// Replace or drop the column names without validation
    pub(crate) fn set_col_names(&mut self, names: Option<Vec<String>>) {
        debug_assert!(names.as_ref().map_or(true, |n| n.len() == self.columns.len()));
        self.col_names = names;
    }

    /// Number of rows
    pub fn nrow(&self) -> usize {
        self.nrow
    }

    /// Number of columns
    pub fn ncol(&self) -> usize {
        self.columns.len()
    }

    /// All columns
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column by position
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Column position by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.col_names.as_ref()?.iter().position(|n| n == name)
    }

    /// Cell by position
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.columns.get(col)?.cells.get(row)
    }

    /// Row names, if any
    pub fn row_names(&self) -> Option<&[String]> {
        self.row_names.as_deref()
    }

    /// Column names, if any
    pub fn col_names(&self) -> Option<&[String]> {
        self.col_names.as_deref()
    }

    /// Copy out a range of rows, keeping the matching row names
    pub fn select_rows(&self, rows: Range<usize>) -> Table {
        Table {
            columns: self.columns.iter().map(|c| c.slice(rows.clone())).collect(),
            nrow: rows.len(),
            row_names: self.row_names.as_ref().map(|n| n[rows].to_vec()),
            col_names: self.col_names.clone(),
        }
    }

    /// Copy out a range of columns, keeping the matching column names
    pub fn select_columns(&self, cols: Range<usize>) -> Table {
        Table {
            columns: self.columns[cols.clone()].to_vec(),
            nrow: self.nrow,
            row_names: self.row_names.clone(),
            col_names: self.col_names.as_ref().map(|n| n[cols].to_vec()),
        }
    }

    /// Stack tables vertically; kinds and column names come from the first part
    ///
    /// Row names survive only if every part has them.
    pub fn vstack(parts: &[Table]) -> Result<Table> {
        let Some(first) = parts.first() else {
            return Ok(Table::default());
        };
        if let Some(bad) = parts.iter().find(|p| p.ncol() != first.ncol()) {
            return Err(ReprError::Shape(format!(
                "cannot stack {} columns onto {}",
                bad.ncol(),
                first.ncol()
            )));
        }

        let columns = (0..first.ncol())
            .map(|c| {
                let cells = parts
                    .iter()
                    .flat_map(|p| p.columns[c].cells.iter().cloned())
                    .collect();
                Column::new(first.columns[c].kind.clone(), cells)
            })
            .collect();
        let row_names = parts
            .iter()
            .map(|p| p.row_names.clone())
            .collect::<Option<Vec<_>>>()
            .map(|n| n.concat());

        Ok(Table {
            columns,
            nrow: parts.iter().map(Table::nrow).sum(),
            row_names,
            col_names: first.col_names.clone(),
        })
    }

    /// Place tables side by side; row names come from the first part
    ///
    /// Column names survive only if every part has them.
    pub fn hstack(parts: &[Table]) -> Result<Table> {
        let Some(first) = parts.first() else {
            return Ok(Table::default());
        };
        if let Some(bad) = parts.iter().find(|p| p.nrow() != first.nrow()) {
            return Err(ReprError::Shape(format!(
                "cannot join {} rows beside {}",
                bad.nrow(),
                first.nrow()
            )));
        }

        let col_names = parts
            .iter()
            .map(|p| p.col_names.clone())
            .collect::<Option<Vec<_>>>()
            .map(|n| n.concat());

        Ok(Table {
            columns: parts.iter().flat_map(|p| p.columns.iter().cloned()).collect(),
            nrow: first.nrow,
            row_names: first.row_names.clone(),
            col_names,
        })
    }

    /// Apply `f` to the display string of every cell
    ///
    /// Always returns a table of the same shape with the same names; every
    /// column becomes a character column.
    pub fn map_cells<F>(&self, f: F) -> Table
    where
        F: Fn(&str) -> String,
    {
        let columns = self
            .columns
            .iter()
            .map(|col| {
                let cells = col
                    .format_cells()
                    .iter()
                    .map(|s| CellValue::from(f(s)))
                    .collect();
                Column::new(ColumnKind::Character, cells)
            })
            .collect();
        Table {
            columns,
            nrow: self.nrow,
            row_names: self.row_names.clone(),
            col_names: self.col_names.clone(),
        }
    }

    /// Formatted display strings, column-major
    pub fn format_columns(&self) -> Vec<Vec<String>> {
        self.columns.iter().map(Column::format_cells).collect()
    }

    /// Replace one column, keeping its name
    pub fn replace_column(&mut self, index: usize, column: Column) -> Result<()> {
        if column.len() != self.nrow {
            return Err(ReprError::Shape(format!(
                "replacement column has {} cells, expected {}",
                column.len(),
                self.nrow
            )));
        }
        match self.columns.get_mut(index) {
            Some(slot) => {
                *slot = column;
                Ok(())
            }
            None => Err(ReprError::Shape(format!("no column at position {}", index + 1))),
        }
    }

    /// Remove a column and return it together with its name
    pub fn remove_column(&mut self, index: usize) -> Option<(Column, Option<String>)> {
        if index >= self.columns.len() {
            return None;
        }
        let column = self.columns.remove(index);
        let name = self.col_names.as_mut().map(|n| n.remove(index));
        Some((column, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_rows(vec![
            vec![CellValue::Int(1), CellValue::from("x")],
            vec![CellValue::Int(2), CellValue::from("y")],
            vec![CellValue::Int(3), CellValue::from("z")],
        ])
        .unwrap()
        .with_col_names(["n", "s"])
        .unwrap()
    }

    #[test]
    fn test_from_rows_infers_kinds() {
        let table = sample();
        assert_eq!(table.nrow(), 3);
        assert_eq!(table.ncol(), 2);
        assert_eq!(table.columns()[0].kind, ColumnKind::Integer);
        assert_eq!(table.columns()[1].kind, ColumnKind::Character);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = Table::from_rows(vec![vec![CellValue::Int(1)], vec![]]);
        assert!(matches!(result, Err(ReprError::Shape(_))));
    }

    #[test]
    fn test_name_length_checked() {
        assert!(sample().with_row_names(["a", "b"]).is_err());
        assert!(sample().with_col_names(["a"]).is_err());
    }

    #[test]
    fn test_mixed_int_float_widens() {
        let col = Column::from_cells(vec![CellValue::Int(1), CellValue::Float(2.5), CellValue::Null]);
        assert_eq!(col.kind, ColumnKind::Double);
        assert_eq!(col.format_cells(), vec!["1.0", "2.5", "NA"]);
    }

    #[test]
    fn test_mixed_kinds_become_character() {
        let col = Column::from_cells(vec![CellValue::Int(1), CellValue::from("a"), CellValue::Bool(true)]);
        assert_eq!(col.kind, ColumnKind::Character);
        assert_eq!(col.format_cells(), vec!["1", "a", "TRUE"]);
    }

    #[test]
    fn test_double_formatting() {
        let col = Column::from_cells(vec![
            CellValue::Float(0.1 + 0.2),
            CellValue::Float(10.0),
            CellValue::Float(f64::NAN),
            CellValue::Float(f64::NEG_INFINITY),
        ]);
        assert_eq!(col.format_cells(), vec!["0.3", "10.0", "NaN", "-Inf"]);

        let whole = Column::from_cells(vec![CellValue::Float(1.0), CellValue::Float(20.0)]);
        assert_eq!(whole.format_cells(), vec!["1", "20"]);
    }

    #[test]
    fn test_factor_levels_first_seen() {
        let col = Column::factor([Some("b"), Some("a"), None, Some("b")]);
        assert_eq!(col.cells[0], CellValue::Level(0));
        assert_eq!(col.cells[3], CellValue::Level(0));
        assert_eq!(col.format_cells(), vec!["b", "a", "NA", "b"]);
    }

    #[test]
    fn test_accommodate_factor_markers() {
        let col = Column::factor([Some("lo"), Some("hi")]).accommodate_markers();
        let marker = col.marker(Ellipsis::Vertical);
        assert_eq!(marker, CellValue::Level(3));

        let mut cells = col.cells.clone();
        cells.push(marker);
        let extended = Column::new(col.kind.clone(), cells);
        assert_eq!(extended.format_cells(), vec!["lo", "hi", "⋮"]);
    }

    #[test]
    fn test_accommodate_dates_coerces_to_string() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let col = Column::from_cells(vec![CellValue::Date(date), CellValue::Null]);
        let prepared = col.accommodate_markers();
        assert_eq!(prepared.kind, ColumnKind::Character);
        assert_eq!(prepared.cells[0], CellValue::from("2024-02-29"));
        assert!(prepared.cells[1].is_null());
    }

    #[test]
    fn test_select_and_stack() {
        let table = sample().with_row_names(["r1", "r2", "r3"]).unwrap();
        let top = table.select_rows(0..1);
        let bottom = table.select_rows(2..3);
        let stacked = Table::vstack(&[top, bottom]).unwrap();
        assert_eq!(stacked.nrow(), 2);
        assert_eq!(stacked.row_names().unwrap(), &["r1".to_string(), "r3".to_string()]);

        let left = table.select_columns(0..1);
        let right = table.select_columns(1..2);
        let joined = Table::hstack(&[left, right]).unwrap();
        assert_eq!(joined, table);
    }

    #[test]
    fn test_hstack_drops_partial_col_names() {
        let table = sample();
        let markers = Table::new(vec![Column::markers(Ellipsis::Horizontal, 3)]).unwrap();
        let joined = Table::hstack(&[table.select_columns(0..1), markers]).unwrap();
        assert!(joined.col_names().is_none());
        assert_eq!(joined.ncol(), 2);
    }

    #[test]
    fn test_map_cells_keeps_shape_for_single_row() {
        let table = Table::from_rows(vec![vec![CellValue::from("a_b"), CellValue::Float(1.5)]])
            .unwrap()
            .with_row_names(["only"])
            .unwrap();
        let mapped = table.map_cells(|s| s.replace('_', "-"));
        assert_eq!(mapped.nrow(), 1);
        assert_eq!(mapped.ncol(), 2);
        assert_eq!(mapped.row_names().unwrap(), &["only".to_string()]);
        assert_eq!(mapped.cell(0, 0), Some(&CellValue::from("a-b")));
        assert_eq!(mapped.cell(0, 1), Some(&CellValue::from("1.5")));
    }

    #[test]
    fn test_remove_column() {
        let mut table = sample();
        let (col, name) = table.remove_column(0).unwrap();
        assert_eq!(name.as_deref(), Some("n"));
        assert_eq!(col.len(), 3);
        assert_eq!(table.ncol(), 1);
        assert_eq!(table.col_names().unwrap(), &["s".to_string()]);
    }
}
