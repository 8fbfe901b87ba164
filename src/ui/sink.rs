//! Console event sink
//!
//! Prints one indented progress line per generate event.

use std::path::{Path, PathBuf};

use crossterm::style::Stylize;

use agentic_repo::domain::ports::{GenerateEvent, GenerateEventSink};

use crate::ui::primitives::icon::Icon;
use crate::ui::theme;

pub struct ConsoleEventSink {
    root: PathBuf,
    color: bool,
    unicode: bool,
}

impl ConsoleEventSink {
    pub fn new(root: impl Into<PathBuf>, color: bool, unicode: bool) -> Self {
        Self {
            root: root.into(),
            color,
            unicode,
        }
    }

    fn display<'p>(&self, path: &'p Path) -> std::borrow::Cow<'p, str> {
        match path.strip_prefix(&self.root) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.to_string_lossy(),
            _ => path.to_string_lossy(),
        }
    }

    fn label(&self, text: &str, color: crossterm::style::Color) -> String {
        if self.color {
            format!("{}", text.with(color))
        } else {
            text.to_string()
        }
    }

    pub fn render(&self, event: &GenerateEvent) -> String {
        let icon = |i: Icon| i.colored(self.color, self.unicode);
        match event {
            GenerateEvent::Created { path } => format!(
                "   {} {} {}",
                icon(Icon::Success),
                self.label("Created:", theme::colors::SUCCESS),
                self.display(path)
            ),
            GenerateEvent::WouldCreate { path } => format!(
                "   {} {} {}",
                icon(Icon::File),
                self.label("Would create:", theme::colors::INFO),
                self.display(path)
            ),
            GenerateEvent::Skipped { path } => format!(
                "   {} {} {} (exists)",
                icon(Icon::Skip),
                self.label("Skipping", theme::colors::WARNING),
                self.display(path)
            ),
            GenerateEvent::LegacyPresent { path } => format!(
                "   {} {} {}",
                icon(Icon::Skip),
                self.label("Legacy file already exists:", theme::colors::WARNING),
                self.display(path)
            ),
            GenerateEvent::Migrated { from, to } => format!(
                "   {} {} {} {} {}",
                icon(Icon::Package),
                self.label("Migrated:", theme::colors::INFO),
                self.display(from),
                icon(Icon::Arrow),
                self.display(to)
            ),
            GenerateEvent::WouldMigrate { from, to } => format!(
                "   {} {} {} {} {}",
                icon(Icon::Package),
                self.label("Would migrate:", theme::colors::INFO),
                self.display(from),
                icon(Icon::Arrow),
                self.display(to)
            ),
        }
    }
}

impl GenerateEventSink for ConsoleEventSink {
    fn on_event(&self, event: GenerateEvent) {
        println!("{}", self.render(&event));
    }
}
