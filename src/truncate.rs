//! Ellipsis-based truncation of oversized tables
//!
//! A table larger than the display limits keeps its first and last rows
//! and columns; the dropped middle is replaced by a single row of `⋮`
//! and/or a single column of `⋯`, with `⋱` where the two cross.

use tracing::debug;

use crate::error::{ReprError, Result};
use crate::model::{Column, Ellipsis, MarkerSupport, Table};

/// How many leading and trailing entries of one dimension are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Split {
    head: usize,
    tail: usize,
}

impl Split {
    fn new(limit: usize) -> Self {
        Self {
            head: limit.div_ceil(2),
            tail: limit / 2,
        }
    }
}

/// Shape of an `nrow` × `ncol` table after truncation to the given limits
pub fn truncated_shape(nrow: usize, ncol: usize, max_rows: usize, max_cols: usize) -> (usize, usize) {
    let rows = if nrow > max_rows { max_rows + 1 } else { nrow };
    let cols = if ncol > max_cols { max_cols + 1 } else { ncol };
    (rows, cols)
}

/// Limit `source` to `max_rows` × `max_cols`, inserting ellipsis markers
///
/// Returns an equal copy if the table already fits or has no rows or no
/// columns. Truncated dimensions
/// come out one longer than their limit (the marker line), and their name
/// sequences gain a marker in the slot after the head block; missing names
/// are synthesized from 1-based positions.
pub fn truncate(source: &Table, max_rows: usize, max_cols: usize) -> Result<Table> {
    if max_rows < 2 || max_cols < 2 {
        return Err(ReprError::InvalidLimits { max_rows, max_cols });
    }

    let (nrow, ncol) = (source.nrow(), source.ncol());
    let rows_over = nrow > max_rows;
    let cols_over = ncol > max_cols;
    let rows = Split::new(max_rows);
    let cols = Split::new(max_cols);

    let mut result = match (rows_over, cols_over) {
        (false, false) => return Ok(source.clone()),
        // No cells to elide and no marker line to hold
        _ if nrow == 0 || ncol == 0 => return Ok(source.clone()),
        (true, true) => {
            let prepared = accommodate_markers(source)?;
            let top = prepared.select_rows(0..rows.head);
            let bottom = prepared.select_rows(nrow - rows.tail..nrow);
            Table::vstack(&[
                elide_columns(&top, cols)?,
                marker_row(&prepared, cols)?,
                elide_columns(&bottom, cols)?,
            ])?
        }
        (true, false) => {
            let prepared = accommodate_markers(source)?;
            Table::vstack(&[
                prepared.select_rows(0..rows.head),
                vertical_markers(&prepared)?,
                prepared.select_rows(nrow - rows.tail..nrow),
            ])?
        }
        (false, true) => elide_columns(&accommodate_markers(source)?, cols)?,
    };

    result.set_row_names(if rows_over {
        Some(repair_names(source.row_names(), nrow, rows, Ellipsis::Vertical))
    } else {
        source.row_names().map(<[String]>::to_vec)
    });
    result.set_col_names(if cols_over {
        Some(repair_names(source.col_names(), ncol, cols, Ellipsis::Horizontal))
    } else {
        source.col_names().map(<[String]>::to_vec)
    });

    debug!(
        from_rows = nrow,
        from_cols = ncol,
        to_rows = result.nrow(),
        to_cols = result.ncol(),
        "truncated table"
    );

    Ok(result)
}

/// Copy `source` with every column able to hold markers
fn accommodate_markers(source: &Table) -> Result<Table> {
    let mut prepared = source.clone();
    for (i, column) in source.columns().iter().enumerate() {
        if column.kind.marker_support() != MarkerSupport::Direct {
            prepared.replace_column(i, column.accommodate_markers())?;
        }
    }
    Ok(prepared)
}

/// Keep the head and tail columns of `band` with a `⋯` column between them
fn elide_columns(band: &Table, cols: Split) -> Result<Table> {
    let ncol = band.ncol();
    let markers = Table::new(vec![Column::markers(Ellipsis::Horizontal, band.nrow())])?;
    Table::hstack(&[
        band.select_columns(0..cols.head),
        markers,
        band.select_columns(ncol - cols.tail..ncol),
    ])
}

/// One row of `⋮`, typed per column of `table`
fn vertical_markers(table: &Table) -> Result<Table> {
    Table::new(
        table
            .columns()
            .iter()
            .map(|c| Column::new(c.kind.clone(), vec![c.marker(Ellipsis::Vertical)]))
            .collect(),
    )
}

/// The middle band when both dimensions are truncated: `⋮ … ⋱ … ⋮`
fn marker_row(table: &Table, cols: Split) -> Result<Table> {
    let ncol = table.ncol();
    let markers = vertical_markers(table)?;
    Table::hstack(&[
        markers.select_columns(0..cols.head),
        Table::new(vec![Column::markers(Ellipsis::Diagonal, 1)])?,
        markers.select_columns(ncol - cols.tail..ncol),
    ])
}

/// Name sequence of a truncated dimension of original length `len`
fn repair_names(names: Option<&[String]>, len: usize, split: Split, marker: Ellipsis) -> Vec<String> {
    let (head, tail): (Vec<String>, Vec<String>) = match names {
        Some(names) => (names[..split.head].to_vec(), names[len - split.tail..].to_vec()),
        None => (
            (1..=split.head).map(|i| i.to_string()).collect(),
            (len - split.tail + 1..=len).map(|i| i.to_string()).collect(),
        ),
    };

    head.into_iter()
        .chain(std::iter::once(marker.symbol().to_string()))
        .chain(tail)
        .collect()
}
