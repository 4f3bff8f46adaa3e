use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One entry in a directory's todo list.
///
/// Text and creation time are fixed once the record exists; the only mutation
/// is [`Todo::complete`], which cannot be undone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    text: String,
    completed: bool,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
}

impl Todo {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_created_at(text, OffsetDateTime::now_utc())
    }

    pub fn with_created_at(text: impl Into<String>, created_at: OffsetDateTime) -> Self {
        Self {
            text: text.into(),
            completed: false,
            created_at,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }

    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    pub fn complete(&mut self) {
        self.completed = true;
    }
}

/// Ordered todo collection as persisted in `.godo.json`.
///
/// Insertion order is the only ordering; nothing here sorts or dedups.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoList {
    #[serde(default, deserialize_with = "null_as_empty")]
    todos: Vec<Todo>,
}

impl TodoList {
    #[allow(dead_code)]
    pub fn new(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn push(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Todo> {
        self.todos.get_mut(index)
    }

    pub fn remove(&mut self, index: usize) -> Todo {
        self.todos.remove(index)
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.is_active()).count()
    }

    /// Drops every completed todo and returns how many were removed.
    pub fn remove_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(Todo::is_active);
        before - self.todos.len()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Todo>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Todo>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::{Todo, TodoList};
    use time::macros::datetime;

    fn list(entries: &[(&str, bool)]) -> TodoList {
        let todos = entries
            .iter()
            .map(|(text, completed)| {
                let mut todo = Todo::with_created_at(*text, datetime!(2026-10-16 09:00:00 UTC));
                if *completed {
                    todo.complete();
                }
                todo
            })
            .collect();
        TodoList::new(todos)
    }

    #[test]
    fn new_todo_starts_active() {
        let todo = Todo::new("write docs");
        assert_eq!(todo.text(), "write docs");
        assert!(todo.is_active());
        assert!(!todo.is_completed());
    }

    #[test]
    fn complete_is_idempotent() {
        let mut todo = Todo::new("ship");
        todo.complete();
        todo.complete();
        assert!(todo.is_completed());
    }

    #[test]
    fn active_count_ignores_completed() {
        let todos = list(&[("a", false), ("b", true), ("c", false)]);
        assert_eq!(todos.active_count(), 2);
        assert_eq!(todos.len(), 3);
    }

    #[test]
    fn remove_completed_keeps_active_order() {
        let mut todos = list(&[("a", true), ("b", false), ("c", true), ("d", false)]);
        assert_eq!(todos.remove_completed(), 2);
        let texts: Vec<&str> = todos.todos().iter().map(Todo::text).collect();
        assert_eq!(texts, vec!["b", "d"]);
    }

    #[test]
    fn remove_completed_on_all_active_is_zero() {
        let mut todos = list(&[("a", false)]);
        assert_eq!(todos.remove_completed(), 0);
        assert_eq!(todos.len(), 1);
    }

    #[test]
    fn deserializes_missing_or_null_todos_as_empty() {
        let missing: TodoList = serde_json::from_str("{}").expect("empty object should parse");
        assert!(missing.is_empty());
        let null: TodoList =
            serde_json::from_str(r#"{"todos": null}"#).expect("null todos should parse");
        assert!(null.is_empty());
    }

    #[test]
    fn serializes_expected_field_names() {
        let todos = list(&[("a", true)]);
        let value = serde_json::to_value(&todos).expect("list should serialize");
        let first = &value["todos"][0];
        assert_eq!(first["text"], "a");
        assert_eq!(first["completed"], true);
        assert_eq!(first["created_at"], "2026-10-16T09:00:00Z");
    }

    #[test]
    fn accepts_offset_timestamps_with_nanoseconds() {
        let raw = r#"{"todos":[{"text":"x","completed":false,"created_at":"2025-01-02T03:04:05.123456789+08:00"}]}"#;
        let parsed: TodoList = serde_json::from_str(raw).expect("offset timestamp should parse");
        let created = parsed.todos()[0].created_at();
        assert_eq!(created.nanosecond(), 123_456_789);
        assert_eq!(created.offset().whole_hours(), 8);
    }
}
