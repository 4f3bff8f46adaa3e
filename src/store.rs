use std::error::Error;
use std::fmt;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::todo::TodoList;

pub const DEFAULT_TODO_FILE: &str = ".godo.json";

#[derive(Debug)]
pub enum StoreError {
    CorruptData {
        path: PathBuf,
        source: serde_json::Error,
    },
    PersistenceFailure {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::CorruptData { path, source } => {
                write!(f, "todo file {} is corrupt: {}", path.display(), source)
            }
            StoreError::PersistenceFailure { path, source } => {
                write!(f, "could not access {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::CorruptData { source, .. } => Some(source),
            StoreError::PersistenceFailure { source, .. } => Some(source),
        }
    }
}

/// JSON-file persistence for one directory's todo list.
///
/// Every load reads the whole document and every save replaces it. There is
/// no locking; concurrent writers race and the last rename wins.
#[derive(Debug, Clone)]
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<TodoList, StoreError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "todo file absent, starting empty");
                return Ok(TodoList::default());
            }
            Err(err) => return Err(self.persistence_failure(err)),
        };

        let list: TodoList =
            serde_json::from_slice(&raw).map_err(|source| StoreError::CorruptData {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), todos = list.len(), "loaded todo file");
        Ok(list)
    }

    /// Replaces the document in place. A symlinked path is followed so the
    /// link survives and its target receives the new content, and an existing
    /// file keeps its permissions.
    pub fn save(&self, list: &TodoList) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(list)
            .map_err(|err| self.persistence_failure(std::io::Error::other(err)))?;

        let target = self.write_target();
        let temp_path = temp_path_for(&target);
        if let Err(err) = write_synced(&temp_path, json.as_bytes())
            .and_then(|()| copy_permissions(&target, &temp_path))
        {
            let _ = fs::remove_file(&temp_path);
            return Err(self.persistence_failure(err));
        }
        if let Err(err) = fs::rename(&temp_path, &target) {
            let _ = fs::remove_file(&temp_path);
            return Err(self.persistence_failure(err));
        }

        debug!(
            path = %self.path.display(),
            target = %target.display(),
            todos = list.len(),
            "saved todo file"
        );
        Ok(())
    }

    fn write_target(&self) -> PathBuf {
        match fs::canonicalize(&self.path) {
            Ok(resolved) => resolved,
            Err(_) => self.path.clone(),
        }
    }

    fn persistence_failure(&self, source: std::io::Error) -> StoreError {
        StoreError::PersistenceFailure {
            path: self.path.clone(),
            source,
        }
    }
}

fn temp_path_for(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_TODO_FILE.to_string());
    target.with_file_name(format!("{name}.tmp.{}", std::process::id()))
}

fn copy_permissions(from: &Path, to: &Path) -> std::io::Result<()> {
    match fs::metadata(from) {
        Ok(meta) => fs::set_permissions(to, meta.permissions()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
