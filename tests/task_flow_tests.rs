use std::fs;

use tempfile::TempDir;

use tuido::core::action::{Action, Effect, update};
use tuido::core::state::App;
use tuido::core::store::TaskStore;
use tuido::core::task::TaskList;

// ============================================================================
// Helper Functions
// ============================================================================

/// A store pointing into a throwaway directory.
fn store_in(dir: &TempDir) -> TaskStore {
    TaskStore::new(dir.path().join("tasks.json"))
}

/// Simulates process startup: read the store, build the session state.
fn boot(store: &TaskStore) -> App {
    App::new(TaskList::from_texts(store.load()))
}

/// Drives one user action and runs its persistence effect the way the
/// event loop does.
fn dispatch(app: &mut App, store: &TaskStore, action: Action) -> Effect {
    let effect = update(app, action);
    if effect == Effect::Save {
        store.save(&app.tasks).unwrap();
    }
    effect
}

fn texts(app: &App) -> Vec<String> {
    app.tasks
        .tasks()
        .iter()
        .map(|t| t.text().to_string())
        .collect()
}

// ============================================================================
// Startup Tests
// ============================================================================

#[test]
fn test_first_boot_is_empty_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let app = boot(&store);

    assert!(app.tasks.is_empty());
    assert!(
        !store.path().exists(),
        "Startup must not create the store file"
    );
}

#[test]
fn test_tasks_survive_restart() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut app = boot(&store);
    dispatch(&mut app, &store, Action::Submit("Buy milk".to_string()));
    dispatch(&mut app, &store, Action::Submit("Call Sam".to_string()));
    drop(app);

    let restarted = boot(&store);
    assert_eq!(texts(&restarted), vec!["Buy milk", "Call Sam"]);
}

#[test]
fn test_removal_survives_restart() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut app = boot(&store);
    for t in ["a", "b", "c"] {
        dispatch(&mut app, &store, Action::Submit(t.to_string()));
    }
    dispatch(&mut app, &store, Action::Remove(1));
    drop(app);

    let restarted = boot(&store);
    assert_eq!(texts(&restarted), vec!["a", "c"]);
}

#[test]
fn test_malformed_store_degrades_to_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "not json at all {{{").unwrap();

    let app = boot(&store);

    assert!(app.tasks.is_empty());
    // Loading only reads; the broken file stays until the next save.
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "not json at all {{{"
    );
}

#[test]
fn test_wrong_json_shape_degrades_to_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), r#"{"tasks": ["a"]}"#).unwrap();

    let app = boot(&store);
    assert!(app.tasks.is_empty());
}

#[test]
fn test_first_save_replaces_malformed_store() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "garbage").unwrap();

    let mut app = boot(&store);
    dispatch(&mut app, &store, Action::Submit("fresh start".to_string()));

    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        r#"["fresh start"]"#
    );
}

#[test]
fn test_blank_stored_entries_are_dropped_on_load() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), r#"["a","   ",""]"#).unwrap();

    let app = boot(&store);
    assert_eq!(texts(&app), vec!["a"]);
}

// ============================================================================
// Mutation Tests
// ============================================================================

#[test]
fn test_add_persists_immediately() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut app = boot(&store);
    let effect = dispatch(&mut app, &store, Action::Submit("Buy milk".to_string()));

    assert_eq!(effect, Effect::Save);
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        r#"["Buy milk"]"#,
        "The stored state is a bare JSON array of strings"
    );
}

#[test]
fn test_every_mutation_rewrites_the_whole_file() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut app = boot(&store);
    dispatch(&mut app, &store, Action::Submit("a".to_string()));
    dispatch(&mut app, &store, Action::Submit("b".to_string()));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), r#"["a","b"]"#);

    dispatch(&mut app, &store, Action::Remove(0));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), r#"["b"]"#);
}

#[test]
fn test_submitted_text_is_trimmed_before_storing() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut app = boot(&store);
    dispatch(&mut app, &store, Action::Submit("  Water plants  ".to_string()));

    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        r#"["Water plants"]"#
    );
}

#[test]
fn test_duplicate_texts_are_distinct_rows() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut app = boot(&store);
    dispatch(&mut app, &store, Action::Submit("x".to_string()));
    dispatch(&mut app, &store, Action::Submit("x".to_string()));
    assert_eq!(texts(&app), vec!["x", "x"]);

    // Removing row 0 takes exactly one of them.
    dispatch(&mut app, &store, Action::Remove(0));
    assert_eq!(texts(&app), vec!["x"]);

    let restarted = boot(&store);
    assert_eq!(texts(&restarted), vec!["x"]);
}

#[test]
fn test_remove_out_of_range_changes_nothing_on_disk() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut app = boot(&store);
    dispatch(&mut app, &store, Action::Submit("only".to_string()));
    let before = fs::read_to_string(store.path()).unwrap();

    let effect = dispatch(&mut app, &store, Action::Remove(5));
    assert_eq!(effect, Effect::None);
    assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
}

// ============================================================================
// Warning Flow Tests
// ============================================================================

#[test]
fn test_blank_submit_warns_and_never_touches_store() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut app = boot(&store);
    let effect = dispatch(&mut app, &store, Action::Submit("   ".to_string()));

    assert_eq!(effect, Effect::None);
    assert!(app.warning.is_some());
    assert!(!store.path().exists());
}

#[test]
fn test_session_continues_after_dismissed_warning() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut app = boot(&store);
    dispatch(&mut app, &store, Action::Submit(String::new()));
    assert!(app.warning.is_some());

    dispatch(&mut app, &store, Action::DismissWarning);
    assert!(app.warning.is_none());

    dispatch(&mut app, &store, Action::Submit("recovered".to_string()));
    assert_eq!(texts(&app), vec!["recovered"]);
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        r#"["recovered"]"#
    );
}
