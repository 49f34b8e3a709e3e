//! Terminal output.

use crate::diagnostic::Diagnostic;
use crate::query::QueryResult;
use anstyle::{AnsiColor, Color, Style};
use std::io::{self, Write};

const PLUGIN_STYLE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlue)));
const ELEMENT_STYLE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));

/// Receives what the tool has to say.
pub trait Sink {
    fn diagnostic(&mut self, diagnostic: &Diagnostic) -> io::Result<()>;
    fn paths(&mut self, result: &QueryResult) -> io::Result<()>;
}

/// Writes to a terminal or pipe. Diagnostics are dropped unless verbose.
pub struct Terminal<W> {
    out: W,
    verbose: bool,
    color: bool,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W, verbose: bool, color: bool) -> Self {
        Self {
            out,
            verbose,
            color,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn styled(&self, style: Style, text: &str) -> String {
        if self.color {
            format!("{}{text}{}", style.render(), style.render_reset())
        } else {
            text.to_string()
        }
    }

    fn plugin(&self, name: &str) -> String {
        self.styled(PLUGIN_STYLE, name)
    }

    fn element(&self, name: &str) -> String {
        self.styled(ELEMENT_STYLE, name)
    }

    fn line(&self, diagnostic: &Diagnostic) -> String {
        match diagnostic {
            Diagnostic::NullPlugin => "Plugin is missing from the registry".to_string(),
            Diagnostic::MissingPluginInfo { name: Some(name) } => {
                format!("Can not find info about plugin {}", self.plugin(name))
            }
            Diagnostic::MissingPluginInfo { name: None } => {
                "Can not find info about plugin".to_string()
            }
            Diagnostic::ListingPlugin { plugin } => {
                format!("Listing {} elements:", self.plugin(plugin))
            }
            Diagnostic::ListedElement { element } => element.clone(),
            Diagnostic::ElementNotFound { element } => format!("Element {element} not found!"),
            Diagnostic::ElementFound {
                element,
                plugin,
                path,
            } => format!(
                "Found element {} in plugin {} at {path}",
                self.element(element),
                self.plugin(plugin)
            ),
            Diagnostic::PluginNotFound { plugin } => format!("Plugin {plugin} not found!"),
            Diagnostic::PluginFound { plugin, path } => {
                format!("Found plugin {} under path {path}", self.plugin(plugin))
            }
        }
    }
}

impl<W: Write> Sink for Terminal<W> {
    fn diagnostic(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        if !self.verbose {
            return Ok(());
        }
        let line = self.line(diagnostic);
        writeln!(self.out, "{line}")
    }

    fn paths(&mut self, result: &QueryResult) -> io::Result<()> {
        if let Some(line) = result.to_line() {
            self.out.write_all(line.as_bytes())?;
        }
        self.out.flush()
    }
}
