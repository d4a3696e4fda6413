//! LaTeX tabular output

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::config::{ColSpec, ReprConfig};
use crate::error::Result;
use crate::model::Table;
use crate::truncate::truncate;

use super::template::{literal, no_escape, render_truncated, CellTemplate, NamePresence, Template, TemplateBundle};

/// Escaping of LaTeX special characters
pub trait LatexEscaper {
    /// Escape every special character in `s`
    fn escape(&self, s: &str) -> String;

    /// Whether any string in `column` contains a special character
    fn has_specials(&self, column: &[String]) -> bool;
}

/// Escapes `\ { } # $ % & _ ^ ~ | < >`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLatexEscaper;

impl DefaultLatexEscaper {
    fn replacement(c: char) -> Option<&'static str> {
        Some(match c {
            '\\' => "\\textbackslash{}",
            '{' => "\\{",
            '}' => "\\}",
            '#' => "\\#",
            '$' => "\\$",
            '%' => "\\%",
            '&' => "\\&",
            '_' => "\\_",
            '^' => "\\textasciicircum{}",
            '~' => "\\textasciitilde{}",
            '|' => "\\textbar{}",
            '<' => "\\textless{}",
            '>' => "\\textgreater{}",
            _ => return None,
        })
    }
}

impl LatexEscaper for DefaultLatexEscaper {
    fn escape(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match Self::replacement(c) {
                Some(r) => out.push_str(r),
                None => out.push(c),
            }
        }
        out
    }

    fn has_specials(&self, column: &[String]) -> bool {
        column
            .iter()
            .any(|s| s.chars().any(|c| Self::replacement(c).is_some()))
    }
}

/// Templates for a `tabular` environment with the given preamble
pub fn bundle(preamble: &str) -> TemplateBundle {
    trace!(preamble, "building latex bundle");
    TemplateBundle {
        wrap: Template::owned(format!(
            "\\begin{{tabular}}{{{}}}\n%s%s\\end{{tabular}}\n",
            literal(preamble)
        )),
        header_wrap: Template::new("%s\\\\\n\\hline\n"),
        corner: CellTemplate::with_last("  &", " "),
        head: CellTemplate::with_last(" %s &", " %s"),
        body_wrap: Template::new("%s"),
        row_wrap: Template::new("\t%s\\\\\n"),
        row_head: CellTemplate::with_last("%s &", "%s"),
        cell: CellTemplate::with_last(" %s &", " %s"),
        escape: no_escape,
    }
}

/// Escape every cell if any column contains a special character
///
/// Row and column names are kept as they are.
pub fn escape_if_needed<'a>(source: &'a Table, escaper: &dyn LatexEscaper) -> Cow<'a, Table> {
    let needs_escape = source
        .columns()
        .iter()
        .any(|c| escaper.has_specials(&c.format_cells()));
    debug!(needs_escape, "latex escape gate");

    if needs_escape {
        Cow::Owned(source.map_cells(|s| escaper.escape(s)))
    } else {
        Cow::Borrowed(source)
    }
}

/// Truncate `source`, escape what is kept and fill the templates from `make_bundle`
fn render_escaped(
    source: &Table,
    colspec: &ColSpec,
    config: &ReprConfig,
    escaper: &dyn LatexEscaper,
    make_bundle: fn(&str) -> TemplateBundle,
) -> Result<String> {
    let names = NamePresence::of(source);
    let truncated = truncate(source, config.max_rows, config.max_cols)?;
    let escaped = escape_if_needed(&truncated, escaper);
    let preamble = colspec.preamble(escaped.ncol(), names.rows);
    Ok(render_truncated(&escaped, names, &make_bundle(&preamble)))
}

/// Render `source` as a LaTeX tabular
///
/// Uses `colspec` if given, otherwise the one in `config`.
pub fn render_latex(source: &Table, colspec: Option<&ColSpec>, config: &ReprConfig) -> Result<String> {
    render_latex_with(source, colspec, config, &DefaultLatexEscaper)
}

/// Render `source` as a LaTeX tabular with a custom escaper
pub fn render_latex_with(
    source: &Table,
    colspec: Option<&ColSpec>,
    config: &ReprConfig,
    escaper: &dyn LatexEscaper,
) -> Result<String> {
    config.validate()?;
    let colspec = colspec.unwrap_or(&config.latex_colspec);
    render_escaped(source, colspec, config, escaper, bundle)
}
