//! # Terminal Renderer
//!
//! Maps ViewModel state onto the terminal, one full frame at a time:
//!
//! ```text
//! seedline  profile: default  backend: http://localhost:8000
//! ────────────────────────────────────────────────
//!  Category: running shoes
//!  Platform: (any)
//! ────────────────────────────────────────────────
//!  Loading: generating keywords...        <- loading indicator
//!  Error: API Error: 500                  <- error banner
//!  [Seed Keywords]  Competitor Gaps  ...  <- tab bar
//!  { ...active tab content... }
//! ────────────────────────────────────────────────
//!  status message | HTTP 200 (123 ms)
//! >
//! ```

use crate::repl::events::ViewEvent;
use crate::repl::io::RenderStream;
use crate::repl::models::RegionContent;
use crate::repl::utils::{parse_markup, unescape_html, Segment, TokenClass};
use crate::repl::view_models::ViewModel;
use crate::repl::views::ansi_escape_codes as ansi;
use anyhow::Result;
use std::io::Write;

const PROMPT: &str = "> ";

/// Backend text with control characters other than newline and tab replaced,
/// so it cannot inject terminal escape sequences
fn printable(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() && c != '\n' && c != '\t' {
                char::REPLACEMENT_CHARACTER
            } else {
                c
            }
        })
        .collect()
}

/// Trait for rendering views
pub trait ViewRenderer {
    /// Prepare the output for rendering
    fn initialize(&mut self) -> Result<()>;

    /// Render the full application state
    fn render_full(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render only the status bar
    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Print the outcome of a one-shot run: active tab content or nothing
    fn render_summary(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Handle view events
    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()>;

    /// Restore the output on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// Renderer writing ANSI-styled frames to a [`RenderStream`]
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    use_color: bool,
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    pub fn with_render_stream(render_stream: RS) -> Self {
        Self {
            render_stream,
            use_color: true,
        }
    }

    pub fn set_use_color(&mut self, use_color: bool) {
        self.use_color = use_color;
    }

    pub fn render_stream(&self) -> &RS {
        &self.render_stream
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.use_color {
            format!("{style}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn separator(&self) -> String {
        let (width, _) = self.render_stream.get_size().unwrap_or((80, 24));
        let width = usize::from(width.clamp(20, 120));
        self.paint(ansi::DIM, &"─".repeat(width))
    }

    fn token_style(class: TokenClass) -> &'static str {
        match class {
            TokenClass::Key => ansi::JSON_KEY,
            TokenClass::String => ansi::JSON_STRING,
            TokenClass::Number => ansi::JSON_NUMBER,
            TokenClass::Boolean => ansi::JSON_BOOLEAN,
            TokenClass::Null => ansi::JSON_NULL,
        }
    }

    /// Convert highlighted markup into terminal text
    pub fn markup_to_terminal(&self, markup: &str) -> String {
        parse_markup(markup)
            .into_iter()
            .map(|segment| match segment {
                Segment::Plain(text) => unescape_html(text),
                Segment::Token(class, text) => {
                    self.paint(Self::token_style(class), &unescape_html(text))
                }
            })
            .collect()
    }

    fn region_text(&self, content: &RegionContent) -> String {
        match content {
            RegionContent::Empty => self.paint(ansi::DIM, "(empty)"),
            RegionContent::Highlighted(markup) => self.markup_to_terminal(markup),
            RegionContent::Plain(text) => printable(text),
        }
    }

    fn status_text(&self, view_model: &ViewModel) -> String {
        let status_line = view_model.status_line();
        let mut parts = Vec::new();

        if let Some(message) = status_line.status_message() {
            parts.push(message.to_string());
        }
        if let Some(status) = status_line.http_status() {
            parts.push(format!(
                "HTTP {} ({} ms)",
                status.status_code, status.duration_ms
            ));
        }
        if parts.is_empty() {
            parts.push("type 'help' for commands".to_string());
        }

        parts.join(" | ")
    }

    fn frame(&self, view_model: &ViewModel) -> String {
        let mut lines = Vec::new();
        let status_line = view_model.status_line();
        let form = view_model.form();

        lines.push(format!(
            "{}  profile: {}  backend: {}",
            self.paint(&format!("{}{}", ansi::BOLD, ansi::HEADER), "seedline"),
            status_line.profile_name(),
            status_line.base_url()
        ));
        lines.push(self.separator());
        lines.push(format!(" Category: {}", form.category()));
        let platform = if form.platform().trim().is_empty() {
            self.paint(ansi::DIM, "(any)")
        } else {
            form.platform().to_string()
        };
        lines.push(format!(" Platform: {platform}"));
        lines.push(self.separator());

        let visibility = view_model.visibility();
        if visibility.loading {
            let action = status_line
                .executing()
                .map(|action| action.label())
                .unwrap_or("request");
            lines.push(self.paint(
                ansi::LOADING,
                &format!(" Loading: generating {action}..."),
            ));
        }
        if let Some(message) = view_model.error_message() {
            lines.push(self.paint(ansi::ERROR_BANNER, &format!(" Error: {}", printable(message))));
        }
        if visibility.results {
            let tab_bar: Vec<String> = view_model
                .tabs()
                .tabs()
                .iter()
                .map(|tab| {
                    if tab.is_button_active() {
                        if self.use_color {
                            self.paint(ansi::REVERSE, &format!(" {} ", tab.label()))
                        } else {
                            format!("[{}]", tab.label())
                        }
                    } else {
                        format!(" {} ", tab.label())
                    }
                })
                .collect();
            lines.push(format!(" {}", tab_bar.join(" ")));

            for tab in view_model
                .tabs()
                .tabs()
                .iter()
                .filter(|tab| tab.is_content_visible())
            {
                lines.push(self.region_text(tab.content()));
            }
        }

        lines.push(self.separator());
        lines.push(format!(" {}", self.status_text(view_model)));
        lines.join("\n")
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.clear_screen()?;
        self.render_stream.move_cursor(0, 0)
    }

    fn render_full(&mut self, view_model: &ViewModel) -> Result<()> {
        let frame = self.frame(view_model);
        self.render_stream.clear_screen()?;
        self.render_stream.move_cursor(0, 0)?;
        write!(self.render_stream, "{frame}\n{PROMPT}")?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()> {
        let status = self.status_text(view_model);
        write!(self.render_stream, "\n {status}\n{PROMPT}")?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_summary(&mut self, view_model: &ViewModel) -> Result<()> {
        if view_model.error_message().is_some() || !view_model.is_results_visible() {
            return Ok(());
        }
        let Some(active) = view_model.active_tab() else {
            return Ok(());
        };
        if let Some(content) = view_model.tabs().content(active) {
            let text = self.region_text(content);
            writeln!(self.render_stream, "{text}")?;
            self.render_stream.flush()?;
        }
        Ok(())
    }

    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()> {
        match event {
            ViewEvent::FullRedrawRequired => self.render_full(view_model),
            ViewEvent::StatusBarUpdateRequired => self.render_status_bar(view_model),
        }
    }

    fn cleanup(&mut self) -> Result<()> {
        writeln!(self.render_stream)?;
        self.render_stream.flush()?;
        Ok(())
    }
}
