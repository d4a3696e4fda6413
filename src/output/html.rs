//! HTML table output

use tracing::trace;

use crate::config::ReprConfig;
use crate::error::Result;
use crate::model::Table;

use super::template::{render_generic, CellTemplate, Template, TemplateBundle};

/// Templates producing a bare `<table>` element
pub fn bundle() -> TemplateBundle {
    trace!("building html bundle");
    TemplateBundle {
        wrap: Template::new("<table>\n%s%s</table>\n"),
        header_wrap: Template::new("<thead><tr>%s</tr></thead>\n"),
        corner: CellTemplate::new("<th></th>"),
        head: CellTemplate::new("<th scope=col>%s</th>"),
        body_wrap: Template::new("<tbody>\n%s</tbody>\n"),
        row_wrap: Template::new("\t<tr>%s</tr>\n"),
        row_head: CellTemplate::new("<th scope=row>%s</th>"),
        cell: CellTemplate::new("<td>%s</td>"),
        escape: html_escape,
    }
}

/// Render `source` as an HTML table
pub fn render_html(source: &Table, config: &ReprConfig) -> Result<String> {
    render_generic(source, &bundle(), config)
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
