use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::todo::TodoList;
use crate::domain::view::{RankedTodo, View};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ListedTodo {
    pub rank: usize,
    pub text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<RankedTodo<'_>> for ListedTodo {
    fn from(row: RankedTodo<'_>) -> Self {
        Self {
            rank: row.rank,
            text: row.todo.text().to_string(),
            created_at: row.todo.created_at(),
        }
    }
}

/// Snapshot of both views as one invocation sees them.
///
/// `completed` is only populated when the caller asked for it, but
/// `completed_count` is always known so renderers can tell "nothing at all"
/// apart from "nothing active".
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TodoListing {
    pub active: Vec<ListedTodo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<Vec<ListedTodo>>,
    #[serde(skip)]
    pub completed_count: usize,
}

impl TodoListing {
    pub fn build(list: &TodoList, include_completed: bool) -> Self {
        let todos = list.todos();
        let active = View::Active.iter(todos).map(ListedTodo::from).collect();
        let completed_count = View::Completed.iter(todos).count();
        let completed = include_completed
            .then(|| View::Completed.iter(todos).map(ListedTodo::from).collect());
        Self {
            active,
            completed,
            completed_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.completed_count == 0
    }
}
