//! Template bundles and the generic table renderer

use std::borrow::Cow;

use tracing::debug;

use crate::config::ReprConfig;
use crate::error::Result;
use crate::model::Table;
use crate::truncate::truncate;

/// A format string with positional `%s` slots; `%%` is a literal percent sign
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template(Cow<'static, str>);

impl Template {
    /// Template from a static string
    pub const fn new(format: &'static str) -> Self {
        Self(Cow::Borrowed(format))
    }

    /// Template from a computed string
    pub fn owned(format: String) -> Self {
        Self(Cow::Owned(format))
    }

    /// Substitute `args` into the `%s` slots in order; missing args are empty
    pub fn fill(&self, args: &[&str]) -> String {
        let mut out = String::with_capacity(self.0.len() + args.iter().map(|a| a.len()).sum::<usize>());
        let mut args = args.iter();
        let mut chars = self.0.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.peek() {
                Some('s') => {
                    chars.next();
                    out.push_str(args.next().copied().unwrap_or(""));
                }
                Some('%') => {
                    chars.next();
                    out.push('%');
                }
                _ => out.push('%'),
            }
        }

        out
    }
}

/// Escape `%` so arbitrary text can be embedded in a template literally
pub fn literal(text: &str) -> String {
    text.replace('%', "%%")
}

/// Template for one in-line element, with an optional variant for the last element of a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellTemplate {
    pub template: Template,
    pub last: Option<Template>,
}

impl CellTemplate {
    /// Same template everywhere in the line
    pub const fn new(format: &'static str) -> Self {
        Self {
            template: Template::new(format),
            last: None,
        }
    }

    /// Distinct template for the last element of the line
    pub const fn with_last(format: &'static str, last: &'static str) -> Self {
        Self {
            template: Template::new(format),
            last: Some(Template::new(last)),
        }
    }

    /// Format `value`, choosing the last-element template when `is_last`
    pub fn fill(&self, value: &str, is_last: bool) -> String {
        match (&self.last, is_last) {
            (Some(last), true) => last.fill(&[value]),
            _ => self.template.fill(&[value]),
        }
    }
}

/// Per-medium templates, one per structural slot
#[derive(Debug, Clone)]
pub struct TemplateBundle {
    /// Whole table; two slots: header, body
    pub wrap: Template,
    /// Header line; one slot: the joined header cells
    pub header_wrap: Template,
    /// Header cell above the row names; no slot
    pub corner: CellTemplate,
    /// Column header cell
    pub head: CellTemplate,
    /// Body; one slot: the joined rows
    pub body_wrap: Template,
    /// One row; one slot: the joined cells
    pub row_wrap: Template,
    /// Row name cell
    pub row_head: CellTemplate,
    /// Data cell
    pub cell: CellTemplate,
    /// Applied to every name and cell string before templating
    pub escape: fn(&str) -> String,
}

/// Pass-through escape
pub fn no_escape(s: &str) -> String {
    s.to_string()
}

/// Render `source` with `bundle`, truncating it to the configured limits first
///
/// Header cells and row headers are emitted only if the source itself has
/// column and row names; names synthesized during truncation are not shown.
pub fn render_generic(source: &Table, bundle: &TemplateBundle, config: &ReprConfig) -> Result<String> {
    let table = truncate(source, config.max_rows, config.max_cols)?;
    Ok(render_truncated(&table, NamePresence::of(source), bundle))
}

/// Which names the table had before truncation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamePresence {
    pub rows: bool,
    pub cols: bool,
}

impl NamePresence {
    /// Names present on `table`
    pub fn of(table: &Table) -> Self {
        Self {
            rows: table.row_names().is_some(),
            cols: table.col_names().is_some(),
        }
    }
}

/// Render a table that has already been truncated
pub fn render_truncated(table: &Table, names: NamePresence, bundle: &TemplateBundle) -> String {
    let NamePresence {
        rows: has_row_names,
        cols: has_col_names,
    } = names;
    let escape = bundle.escape;

    debug!(
        rows = table.nrow(),
        cols = table.ncol(),
        has_row_names,
        has_col_names,
        "rendering table"
    );

    let header = match table.col_names().filter(|_| has_col_names) {
        Some(names) => {
            let total = names.len() + usize::from(has_row_names);
            let mut line = String::new();
            if has_row_names {
                line.push_str(&bundle.corner.fill("", total == 1));
            }
            let offset = usize::from(has_row_names);
            for (i, name) in names.iter().enumerate() {
                line.push_str(&bundle.head.fill(&escape(name), offset + i + 1 == total));
            }
            bundle.header_wrap.fill(&[&line])
        }
        None => String::new(),
    };

    let columns = table.format_columns();
    let row_names = table.row_names().filter(|_| has_row_names);
    let ncol = table.ncol();

    let rows: String = (0..table.nrow())
        .map(|r| {
            let mut line = String::new();
            if let Some(names) = row_names {
                line.push_str(&bundle.row_head.fill(&escape(&names[r]), ncol == 0));
            }
            for (c, column) in columns.iter().enumerate() {
                line.push_str(&bundle.cell.fill(&escape(&column[r]), c + 1 == ncol));
            }
            bundle.row_wrap.fill(&[&line])
        })
        .collect();

    let body = bundle.body_wrap.fill(&[&rows]);
    bundle.wrap.fill(&[&header, &body])
}
