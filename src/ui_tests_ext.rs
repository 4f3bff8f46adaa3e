use super::{
    added_line, clean_line, completed_line, list_lines, removed_completed_line, removed_line,
    show_lines, Emphasis, Palette,
};
use crate::app::{CleanOutcome, RankedText};
use crate::domain::todo::{Todo, TodoList};
use crate::listing::TodoListing;

fn plain() -> Palette {
    Palette { enabled: false }
}

fn ranked(rank: usize, text: &str) -> RankedText {
    RankedText {
        rank,
        text: text.to_string(),
    }
}

fn list_of(entries: &[(&str, bool)]) -> TodoList {
    TodoList::new(
        entries
            .iter()
            .map(|(text, completed)| {
                let mut todo = Todo::new(*text);
                if *completed {
                    todo.complete();
                }
                todo
            })
            .collect(),
    )
}

#[test]
fn emphasize_wraps_only_when_enabled() {
    let enabled = Palette { enabled: true };
    assert_eq!(enabled.emphasize("ok", Emphasis::Success), "\u{1b}[32mok\u{1b}[0m");
    assert_eq!(enabled.emphasize("no", Emphasis::Failure), "\u{1b}[31mno\u{1b}[0m");
    assert!(enabled
        .emphasize("w", Emphasis::Warning)
        .contains("\u{1b}[33m"));
    assert!(enabled.emphasize("i", Emphasis::Info).contains("\u{1b}[36m"));
    assert!(enabled.emphasize("m", Emphasis::Muted).contains("\u{1b}[90m"));
    assert_eq!(plain().emphasize("ok", Emphasis::Success), "ok");
}

#[test]
fn confirmation_lines_name_rank_and_text() {
    let palette = plain();
    assert_eq!(added_line(&ranked(2, "B"), &palette), "[Added] Todo #2: B");
    assert_eq!(
        completed_line(&ranked(1, "A"), &palette),
        "[Completed] Todo #1: A"
    );
    assert_eq!(removed_line(&ranked(3, "C"), &palette), "[Removed] Todo #3: C");
    assert_eq!(
        removed_completed_line(&ranked(1, "A"), &palette),
        "[Removed] Completed todo #1: A"
    );
}

#[test]
fn clean_line_covers_count_and_noop() {
    let palette = plain();
    assert_eq!(
        clean_line(CleanOutcome::Removed(2), &palette),
        "[Cleaned] Removed 2 completed todo(s)"
    );
    assert_eq!(
        clean_line(CleanOutcome::NothingToClean, &palette),
        "No completed todos to clean"
    );
}

#[test]
fn list_lines_for_empty_store() {
    let listing = TodoListing::build(&TodoList::default(), true);
    assert_eq!(
        list_lines(&listing, &plain()),
        vec!["No todos yet. Add one with: godo add <text>".to_string()]
    );
}

#[test]
fn list_lines_show_active_then_completed_when_requested() {
    let list = list_of(&[("A", true), ("B", false), ("C", false)]);

    let active_only = list_lines(&TodoListing::build(&list, false), &plain());
    assert_eq!(active_only, vec!["Active Todos:", "  [1] B", "  [2] C"]);

    let all = list_lines(&TodoListing::build(&list, true), &plain());
    assert_eq!(
        all,
        vec![
            "Active Todos:",
            "  [1] B",
            "  [2] C",
            "",
            "Completed Todos:",
            "  [1] A"
        ]
    );
}

#[test]
fn list_lines_note_when_only_completed_remain() {
    let list = list_of(&[("A", true)]);
    assert_eq!(
        list_lines(&TodoListing::build(&list, false), &plain()),
        vec!["No active todos."]
    );
    assert_eq!(
        list_lines(&TodoListing::build(&list, true), &plain()),
        vec!["No active todos.", "", "Completed Todos:", "  [1] A"]
    );
}

#[test]
fn list_lines_skip_empty_completed_section() {
    let list = list_of(&[("A", false)]);
    assert_eq!(
        list_lines(&TodoListing::build(&list, true), &plain()),
        vec!["Active Todos:", "  [1] A"]
    );
}

#[test]
fn show_lines_are_empty_without_active_todos() {
    let list = list_of(&[("A", true)]);
    assert!(show_lines(&TodoListing::build(&list, false), &plain()).is_empty());

    let list = list_of(&[("A", true), ("B", false)]);
    assert_eq!(
        show_lines(&TodoListing::build(&list, false), &plain()),
        vec!["Todos:", "  [1] B"]
    );
}
