//! Data model for tabular data representation

mod marker;
mod schema;
mod table;

pub use marker::Ellipsis;
pub use schema::{ColumnKind, MarkerSupport};
pub use table::{CellValue, Column, Table};
