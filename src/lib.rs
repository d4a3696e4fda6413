//! tabrepr - Display representations of tabular data
//!
//! Renders matrices and data tables as HTML, LaTeX, Markdown or plain text
//! for notebook and REPL frontends. Oversized tables are truncated to the
//! configured limits, with ellipsis markers standing in for the dropped rows
//! and columns.

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod truncate;

pub use config::{ColSpec, ReprConfig};
pub use error::{ReprError, Result};
pub use model::{CellValue, Column, ColumnKind, Ellipsis, Table};
pub use output::{render_html, render_latex, render_markdown, render_text, RenderTarget};
pub use truncate::truncate;
