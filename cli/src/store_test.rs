use leads::{Session, SessionState};

use super::*;

fn temp_store() -> (tempfile::TempDir, FileTokenStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileTokenStore::new(dir.path().join("nested").join(TOKEN_FILE));
    (dir, store)
}

#[test]
fn missing_file_means_no_token() {
    let (_dir, store) = temp_store();
    assert_eq!(store.token(), None);
}

#[test]
fn store_creates_parent_dirs_and_round_trips() {
    let (_dir, mut store) = temp_store();
    store.store("abc");
    assert!(store.take_error().is_none());
    assert_eq!(store.token(), Some("abc".to_owned()));
}

#[test]
fn blank_file_counts_as_absent() {
    let (_dir, mut store) = temp_store();
    store.store("  \n");
    assert_eq!(store.token(), None);
}

#[test]
fn clear_is_idempotent() {
    let (_dir, mut store) = temp_store();
    store.clear();
    assert!(store.take_error().is_none());
    store.store("abc");
    store.clear();
    store.clear();
    assert!(store.take_error().is_none());
    assert_eq!(store.token(), None);
}

#[test]
fn session_over_file_store_follows_token() {
    let (_dir, store) = temp_store();
    let mut session = Session::new(store);
    assert_eq!(session.state(), SessionState::Anonymous);
    assert_eq!(session.login("tok"), SessionState::Authenticated);
    assert_eq!(session.token(), Some("tok".to_owned()));
    assert_eq!(session.access_denied(), SessionState::Anonymous);
    assert_eq!(session.store_mut().token(), None);
}
