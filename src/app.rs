use std::error::Error;
use std::fmt;

use tracing::debug;

use crate::domain::todo::{Todo, TodoList};
use crate::domain::view::{RankNotFound, View};
use crate::listing::TodoListing;
use crate::store::{StoreError, TodoStore};

/// Command layer over one todo file.
///
/// Each operation is a single load, mutate, save cycle. Ranks are validated
/// before the store is touched and resolved against the freshly loaded list.
pub struct App {
    store: TodoStore,
}

/// A todo addressed by rank, as reported back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedText {
    pub rank: usize,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    Removed(usize),
    NothingToClean,
}

impl App {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    pub fn add(&self, words: &[String]) -> Result<RankedText, AppError> {
        let text = words.join(" ").trim().to_string();
        if text.is_empty() {
            return Err(AppError::InvalidArgument(
                "please provide todo text (usage: godo add <text>)".to_string(),
            ));
        }

        let mut list = self.store.load()?;
        list.push(Todo::new(text.clone()));
        self.store.save(&list)?;

        let rank = list.active_count();
        debug!(rank, "added todo");
        Ok(RankedText { rank, text })
    }

    pub fn list(&self, include_completed: bool) -> Result<TodoListing, AppError> {
        let list = self.store.load()?;
        Ok(TodoListing::build(&list, include_completed))
    }

    pub fn done(&self, raw_rank: &str) -> Result<RankedText, AppError> {
        let rank = parse_rank(raw_rank)?;
        let mut list = self.store.load()?;
        let index = View::Active.resolve(list.todos(), rank)?;
        let todo = list
            .get_mut(index)
            .ok_or(AppError::NotFound(RankNotFound {
                view: View::Active,
                rank,
            }))?;
        todo.complete();
        let text = todo.text().to_string();
        self.store.save(&list)?;

        debug!(rank, index, "completed todo");
        Ok(RankedText { rank, text })
    }

    pub fn remove(&self, raw_rank: &str) -> Result<RankedText, AppError> {
        self.remove_from_view(View::Active, raw_rank)
    }

    pub fn clean(&self) -> Result<CleanOutcome, AppError> {
        let mut list = self.store.load()?;
        let removed = list.remove_completed();
        if removed == 0 {
            return Ok(CleanOutcome::NothingToClean);
        }
        self.store.save(&list)?;

        debug!(removed, "cleaned completed todos");
        Ok(CleanOutcome::Removed(removed))
    }

    pub fn clean_rank(&self, raw_rank: &str) -> Result<RankedText, AppError> {
        self.remove_from_view(View::Completed, raw_rank)
    }

    /// Best-effort active listing for prompt hooks.
    ///
    /// Load failures and an empty active view both yield `None`; callers print
    /// nothing in either case.
    pub fn show(&self) -> Option<TodoListing> {
        let list = match self.store.load() {
            Ok(list) => list,
            Err(err) => {
                debug!(error = %err, "show suppressed load failure");
                return None;
            }
        };
        let listing = TodoListing::build(&list, false);
        if listing.active.is_empty() {
            None
        } else {
            Some(listing)
        }
    }

    fn remove_from_view(&self, view: View, raw_rank: &str) -> Result<RankedText, AppError> {
        let rank = parse_rank(raw_rank)?;
        let mut list: TodoList = self.store.load()?;
        let index = view.resolve(list.todos(), rank)?;
        let removed = list.remove(index);
        self.store.save(&list)?;

        debug!(rank, index, view = view.label(), "removed todo");
        Ok(RankedText {
            rank,
            text: removed.text().to_string(),
        })
    }
}

/// Parses a user-supplied rank, rejecting non-numeric and sub-1 values.
pub fn parse_rank(raw: &str) -> Result<usize, AppError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidArgument(format!("invalid todo rank '{raw}'")))?;
    if value < 1 {
        return Err(AppError::InvalidRank(value));
    }
    // Ranks past usize::MAX cannot resolve anyway.
    Ok(usize::try_from(value).unwrap_or(usize::MAX))
}

#[derive(Debug)]
pub enum AppError {
    InvalidArgument(String),
    InvalidRank(i64),
    NotFound(RankNotFound),
    Store(StoreError),
    Render(serde_json::Error),
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidArgument(message) => write!(f, "{}", message),
            AppError::InvalidRank(value) => {
                write!(f, "todo rank must be 1 or greater, got {}", value)
            }
            AppError::NotFound(err) => write!(f, "{}", err),
            AppError::Store(err) => write!(f, "{}", err),
            AppError::Render(err) => write!(f, "could not render JSON output: {}", err),
            AppError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::InvalidArgument(_) => None,
            AppError::InvalidRank(_) => None,
            AppError::NotFound(err) => Some(err),
            AppError::Store(err) => Some(err),
            AppError::Render(err) => Some(err),
            AppError::Io(err) => Some(err),
        }
    }
}

impl From<RankNotFound> for AppError {
    fn from(value: RankNotFound) -> Self {
        AppError::NotFound(value)
    }
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        AppError::Store(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::Render(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

#[cfg(test)]
mod tests_error_paths;
