//! # HTML Export
//!
//! Writes the results panel as a standalone HTML page. Highlighted regions are
//! embedded as markup; plain regions are escaped so they display as text.

use crate::repl::models::RegionContent;
use crate::repl::utils::escape_html;
use crate::repl::view_models::ViewModel;
use anyhow::{Context, Result};
use std::fmt::{self, Write as _};
use std::path::Path;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2rem; }
pre { background: #f6f8fa; padding: 1rem; overflow-x: auto; }
.tab-button { border: 1px solid #ccc; background: #eee; padding: 0.4rem 0.8rem; }
.tab-button.active { background: #fff; font-weight: bold; }
.error { color: #b00020; }
.json-key { color: #0451a5; }
.json-string { color: #0b7a0b; }
.json-number { color: #c75b00; }
.json-boolean { color: #a626a4; }
.json-null { color: #808080; }
";

/// Render the current results as an HTML document
pub fn render_html_page(view_model: &ViewModel) -> Result<String, fmt::Error> {
    let mut html = String::new();
    let category = escape_html(view_model.form().category());

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html>\n<head>\n<meta charset=\"utf-8\">")?;
    writeln!(html, "<title>Keywords: {category}</title>")?;
    writeln!(html, "<style>\n{STYLE}</style>\n</head>\n<body>")?;
    writeln!(html, "<h1>{category}</h1>")?;

    if let Some(message) = view_model.error_message() {
        writeln!(html, "<div id=\"error\" class=\"error\">{}</div>", escape_html(message))?;
    }

    let display = |visible: bool| if visible { "block" } else { "none" };

    writeln!(
        html,
        "<div id=\"results\" style=\"display: {}\">",
        display(view_model.is_results_visible())
    )?;

    writeln!(html, "<div class=\"tabs\">")?;
    for tab in view_model.tabs().tabs() {
        let class = if tab.is_button_active() {
            "tab-button active"
        } else {
            "tab-button"
        };
        writeln!(
            html,
            "<button class=\"{class}\" data-tab=\"{}\">{}</button>",
            escape_html(tab.id().as_str()),
            escape_html(tab.label())
        )?;
    }
    writeln!(html, "</div>")?;

    for tab in view_model.tabs().tabs() {
        let body = match tab.content() {
            RegionContent::Empty => String::new(),
            RegionContent::Highlighted(markup) => markup.clone(),
            RegionContent::Plain(text) => escape_html(text),
        };
        writeln!(
            html,
            "<div id=\"{}\" class=\"tab-content\" style=\"display: {}\"><pre id=\"{}-content\">{body}</pre></div>",
            escape_html(tab.id().as_str()),
            display(tab.is_content_visible()),
            escape_html(tab.id().as_str()),
        )?;
    }

    writeln!(html, "</div>\n</body>\n</html>")?;
    Ok(html)
}

/// Write the page to `path`
pub fn export_html(view_model: &ViewModel, path: &Path) -> Result<()> {
    let html = render_html_page(view_model)?;
    std::fs::write(path, html)
        .with_context(|| format!("Failed to write export to '{}'", path.display()))?;
    tracing::info!("Exported results to {}", path.display());
    Ok(())
}
