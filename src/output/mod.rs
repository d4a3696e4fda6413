//! Output formatting for tables

mod html;
mod latex;
mod markdown;
pub mod template;
mod text;

use std::io::Write;

use anyhow::Result;

use crate::config::{ColSpec, ReprConfig};
use crate::error::ReprError;
use crate::model::Table;

pub use html::render_html;
pub use latex::{escape_if_needed, render_latex, render_latex_with, DefaultLatexEscaper, LatexEscaper};
pub use markdown::render_markdown;
pub use template::{render_generic, render_truncated, CellTemplate, NamePresence, Template, TemplateBundle};
pub use text::render_text;

/// Output medium for a table representation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RenderTarget {
    #[default]
    Text,
    Html,
    /// LaTeX tabular; `None` uses the column spec from the configuration
    Latex(Option<ColSpec>),
    Markdown,
}

impl std::str::FromStr for RenderTarget {
    type Err = ReprError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(RenderTarget::Text),
            "html" => Ok(RenderTarget::Html),
            "latex" | "tex" => Ok(RenderTarget::Latex(None)),
            "markdown" | "md" => Ok(RenderTarget::Markdown),
            _ => Err(ReprError::UnknownTarget(s.to_string())),
        }
    }
}

impl std::fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderTarget::Text => write!(f, "text"),
            RenderTarget::Html => write!(f, "html"),
            RenderTarget::Latex(_) => write!(f, "latex"),
            RenderTarget::Markdown => write!(f, "markdown"),
        }
    }
}

impl RenderTarget {
    /// Render `table` for this medium
    pub fn render(&self, table: &Table, config: &ReprConfig) -> crate::error::Result<String> {
        tracing::debug!(target_format = %self, "render");
        match self {
            RenderTarget::Text => render_text(table, config),
            RenderTarget::Html => render_html(table, config),
            RenderTarget::Latex(colspec) => render_latex(table, colspec.as_ref(), config),
            RenderTarget::Markdown => render_markdown(table, config),
        }
    }
}

/// Render `table` and write it to `writer`
pub fn render_to_writer(
    table: &Table,
    target: &RenderTarget,
    config: &ReprConfig,
    writer: &mut dyn Write,
) -> Result<()> {
    let rendered = target.render(table, config)?;
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Render `table` to stdout
pub fn render_to_stdout(table: &Table, target: &RenderTarget, config: &ReprConfig) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    render_to_writer(table, target, config, &mut stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;

    #[test]
    fn test_target_from_str() {
        assert_eq!("HTML".parse::<RenderTarget>().unwrap(), RenderTarget::Html);
        assert_eq!("tex".parse::<RenderTarget>().unwrap(), RenderTarget::Latex(None));
        assert_eq!("md".parse::<RenderTarget>().unwrap(), RenderTarget::Markdown);
        assert!(matches!(
            "rtf".parse::<RenderTarget>(),
            Err(ReprError::UnknownTarget(name)) if name == "rtf"
        ));
    }

    #[test]
    fn test_render_to_writer() {
        let table = Table::from_rows(vec![vec![CellValue::Int(7)]]).unwrap();
        let mut buf = Vec::new();
        render_to_writer(&table, &RenderTarget::Html, &ReprConfig::default(), &mut buf).unwrap();
        let html = String::from_utf8(buf).unwrap();
        assert_eq!(html, "<table>\n<tbody>\n\t<tr><td>7</td></tr>\n</tbody>\n</table>\n");
    }

    #[test]
    fn test_latex_target_carries_colspec() {
        let table = Table::from_rows(vec![vec![CellValue::Int(7)]]).unwrap();
        let target = RenderTarget::Latex(Some(ColSpec::new("c", "l", "")));
        let latex = target.render(&table, &ReprConfig::default()).unwrap();
        assert!(latex.starts_with("\\begin{tabular}{c}\n"));
    }
}
