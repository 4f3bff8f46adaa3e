use super::{parse_rank, App, AppError};
use crate::domain::view::View;
use crate::store::{StoreError, TodoStore};
use std::path::PathBuf;
use uuid::Uuid;

fn unique_workspace() -> PathBuf {
    let root = std::env::temp_dir().join(format!("godo-app-err-test-{}", Uuid::now_v7()));
    std::fs::create_dir_all(&root).expect("temp workspace should be creatable");
    root
}

fn corrupt_workspace() -> (PathBuf, App) {
    let root = unique_workspace();
    let path = root.join(".godo.json");
    std::fs::write(&path, "{\"todos\": [").expect("fixture should be writable");
    let app = App::new(TodoStore::new(path));
    (root, app)
}

#[test]
fn parse_rank_accepts_positive_integers() {
    assert_eq!(parse_rank("1").expect("1 is valid"), 1);
    assert_eq!(parse_rank(" 42 ").expect("padded 42 is valid"), 42);
}

#[test]
fn parse_rank_rejects_zero_and_negative_as_invalid_rank() {
    for raw in ["0", "-1", "-100"] {
        let err = parse_rank(raw).expect_err("sub-1 rank should fail");
        assert!(matches!(err, AppError::InvalidRank(_)), "{raw}: {err:?}");
        assert!(err.to_string().contains("1 or greater"));
    }
}

#[test]
fn parse_rank_rejects_non_numeric_as_invalid_argument() {
    for raw in ["abc", "", "1.5", "one"] {
        let err = parse_rank(raw).expect_err("non-numeric rank should fail");
        assert!(matches!(err, AppError::InvalidArgument(_)), "{raw}: {err:?}");
    }
    let err = parse_rank("abc").expect_err("non-numeric rank should fail");
    assert_eq!(err.to_string(), "invalid todo rank 'abc'");
}

#[test]
fn invalid_ranks_are_rejected_before_loading_for_every_command() {
    // A corrupt store would surface as a Store error if it were loaded first.
    let (root, app) = corrupt_workspace();
    for raw in ["0", "-2", "x"] {
        for result in [app.done(raw), app.remove(raw), app.clean_rank(raw)] {
            let err = result.expect_err("invalid rank should fail");
            assert!(
                matches!(err, AppError::InvalidRank(_) | AppError::InvalidArgument(_)),
                "{raw}: {err:?}"
            );
        }
    }
    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn empty_text_is_invalid_argument() {
    let root = unique_workspace();
    let app = App::new(TodoStore::new(root.join(".godo.json")));
    for input in [vec![], vec!["   ".to_string()], vec![String::new(), String::new()]] {
        let err = app.add(&input).expect_err("blank text should fail");
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }
    assert!(!root.join(".godo.json").exists());
    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn remove_on_empty_store_is_not_found_and_writes_nothing() {
    let root = unique_workspace();
    let path = root.join(".godo.json");
    let app = App::new(TodoStore::new(&path));

    let err = app.remove("1").expect_err("empty store has no rank 1");
    match err {
        AppError::NotFound(ref missing) => {
            assert_eq!(missing.view, View::Active);
            assert_eq!(missing.rank, 1);
        }
        ref other => panic!("expected NotFound, got {other:?}"),
    }
    assert_eq!(err.to_string(), "todo #1 not found");
    assert!(!path.exists());
    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn done_past_active_view_is_not_found() {
    let root = unique_workspace();
    let app = App::new(TodoStore::new(root.join(".godo.json")));
    app.add(&["a".to_string()]).expect("add");
    app.done("1").expect("done");

    let err = app.done("1").expect_err("no active todos remain");
    assert!(matches!(err, AppError::NotFound(_)));
    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn clean_rank_without_completed_is_not_found() {
    let root = unique_workspace();
    let app = App::new(TodoStore::new(root.join(".godo.json")));
    app.add(&["a".to_string()]).expect("add");

    let err = app.clean_rank("1").expect_err("no completed todos");
    assert_eq!(err.to_string(), "completed todo #1 not found");
    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn corrupt_store_fails_every_command_except_show() {
    let (root, app) = corrupt_workspace();

    let errors = [
        app.add(&["x".to_string()]).map(|_| ()),
        app.list(true).map(|_| ()),
        app.done("1").map(|_| ()),
        app.remove("1").map(|_| ()),
        app.clean().map(|_| ()),
        app.clean_rank("1").map(|_| ()),
    ];
    for result in errors {
        let err = result.expect_err("corrupt store should fail");
        assert!(
            matches!(err, AppError::Store(StoreError::CorruptData { .. })),
            "{err:?}"
        );
    }

    assert!(app.show().is_none());
    let raw = std::fs::read_to_string(root.join(".godo.json")).expect("fixture readable");
    assert_eq!(raw, "{\"todos\": [");
    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn unreadable_store_is_persistence_failure() {
    let root = unique_workspace();
    let path = root.join(".godo.json");
    std::fs::create_dir_all(&path).expect("fixture dir should be creatable");
    let app = App::new(TodoStore::new(&path));

    let err = app.list(false).expect_err("directory cannot be loaded");
    assert!(matches!(
        err,
        AppError::Store(StoreError::PersistenceFailure { .. })
    ));
    assert!(app.show().is_none());
    let _ = std::fs::remove_dir_all(root);
}
