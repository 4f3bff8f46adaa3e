use std::io::{self, IsTerminal};

use crate::app::{CleanOutcome, RankedText};
use crate::listing::{ListedTodo, TodoListing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Success,
    Failure,
    Warning,
    Info,
    Muted,
}

impl Emphasis {
    fn color_code(self) -> &'static str {
        match self {
            Emphasis::Success => "32",
            Emphasis::Failure => "31",
            Emphasis::Warning => "33",
            Emphasis::Info => "36",
            Emphasis::Muted => "90",
        }
    }
}

pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn auto() -> Self {
        Self::new(std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal())
    }

    pub fn emphasize(&self, text: &str, kind: Emphasis) -> String {
        if self.enabled {
            format!("\x1b[{}m{text}\x1b[0m", kind.color_code())
        } else {
            text.to_string()
        }
    }
}

pub fn added_line(todo: &RankedText, palette: &Palette) -> String {
    format!(
        "{} Todo #{}: {}",
        palette.emphasize("[Added]", Emphasis::Success),
        todo.rank,
        todo.text
    )
}

pub fn completed_line(todo: &RankedText, palette: &Palette) -> String {
    format!(
        "{} Todo #{}: {}",
        palette.emphasize("[Completed]", Emphasis::Success),
        todo.rank,
        todo.text
    )
}

pub fn removed_line(todo: &RankedText, palette: &Palette) -> String {
    format!(
        "{} Todo #{}: {}",
        palette.emphasize("[Removed]", Emphasis::Failure),
        todo.rank,
        todo.text
    )
}

pub fn removed_completed_line(todo: &RankedText, palette: &Palette) -> String {
    format!(
        "{} Completed todo #{}: {}",
        palette.emphasize("[Removed]", Emphasis::Failure),
        todo.rank,
        todo.text
    )
}

pub fn clean_line(outcome: CleanOutcome, palette: &Palette) -> String {
    match outcome {
        CleanOutcome::Removed(count) => format!(
            "{} Removed {} completed todo(s)",
            palette.emphasize("[Cleaned]", Emphasis::Success),
            count
        ),
        CleanOutcome::NothingToClean => "No completed todos to clean".to_string(),
    }
}

/// Renders `godo list`: the active section always, the completed section only
/// when it was requested and has entries.
pub fn list_lines(listing: &TodoListing, palette: &Palette) -> Vec<String> {
    if listing.is_empty() {
        return vec!["No todos yet. Add one with: godo add <text>".to_string()];
    }

    let mut lines = Vec::new();
    if listing.active.is_empty() {
        lines.push(palette.emphasize("No active todos.", Emphasis::Muted));
    } else {
        lines.push(palette.emphasize("Active Todos:", Emphasis::Info));
        lines.extend(listing.active.iter().map(|row| active_row(row, palette)));
    }

    if let Some(completed) = listing.completed.as_deref().filter(|rows| !rows.is_empty()) {
        lines.push(String::new());
        lines.push(palette.emphasize("Completed Todos:", Emphasis::Muted));
        lines.extend(completed.iter().map(|row| completed_row(row, palette)));
    }
    lines
}

pub fn show_lines(listing: &TodoListing, palette: &Palette) -> Vec<String> {
    if listing.active.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![palette.emphasize("Todos:", Emphasis::Info)];
    lines.extend(listing.active.iter().map(|row| active_row(row, palette)));
    lines
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

fn active_row(row: &ListedTodo, palette: &Palette) -> String {
    format!(
        "  {} {}",
        palette.emphasize(&format!("[{}]", row.rank), Emphasis::Warning),
        row.text
    )
}

fn completed_row(row: &ListedTodo, palette: &Palette) -> String {
    format!(
        "  {} {}",
        palette.emphasize(&format!("[{}]", row.rank), Emphasis::Muted),
        palette.emphasize(&row.text, Emphasis::Muted)
    )
}

#[cfg(test)]
#[path = "ui_tests_ext.rs"]
mod tests;
