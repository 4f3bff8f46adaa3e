//! Rank addressing over filtered views of a todo list.
//!
//! Users never see storage indexes. They address a todo by its 1-based rank
//! among the active todos, or among the completed todos, and that rank is
//! recomputed from the current list on every invocation. Completing or
//! removing a todo therefore renumbers everything after it in the same view.

use std::error::Error;
use std::fmt;

use super::todo::Todo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Active,
    Completed,
}

impl View {
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            View::Active => todo.is_active(),
            View::Completed => todo.is_completed(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Active => "active",
            View::Completed => "completed",
        }
    }

    pub fn iter(self, todos: &[Todo]) -> impl Iterator<Item = RankedTodo<'_>> {
        filtered_view(todos, move |todo| self.matches(todo))
    }

    pub fn resolve(self, todos: &[Todo], rank: usize) -> Result<usize, RankNotFound> {
        resolve_rank(todos, |todo| self.matches(todo), rank)
            .ok_or(RankNotFound { view: self, rank })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedTodo<'a> {
    pub rank: usize,
    pub index: usize,
    pub todo: &'a Todo,
}

/// Lazily yields the todos matching `predicate`, in list order, numbered from 1.
pub fn filtered_view<'a, P>(
    todos: &'a [Todo],
    predicate: P,
) -> impl Iterator<Item = RankedTodo<'a>>
where
    P: Fn(&Todo) -> bool,
{
    todos
        .iter()
        .enumerate()
        .filter(move |(_, todo)| predicate(*todo))
        .enumerate()
        .map(|(position, (index, todo))| RankedTodo {
            rank: position + 1,
            index,
            todo,
        })
}

/// Maps a 1-based rank within the filtered view to an index into `todos`.
///
/// Shares its numbering with [`filtered_view`], so a rank printed by a listing
/// always resolves to the same record. Rank 0 never matches.
pub fn resolve_rank<P>(todos: &[Todo], predicate: P, rank: usize) -> Option<usize>
where
    P: Fn(&Todo) -> bool,
{
    filtered_view(todos, predicate)
        .find(|row| row.rank == rank)
        .map(|row| row.index)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankNotFound {
    pub view: View,
    pub rank: usize,
}

impl fmt::Display for RankNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.view {
            View::Active => write!(f, "todo #{} not found", self.rank),
            View::Completed => write!(f, "completed todo #{} not found", self.rank),
        }
    }
}

impl Error for RankNotFound {}
