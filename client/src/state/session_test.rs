use super::*;

// =============================================================
// SessionView defaults
// =============================================================

#[test]
fn session_view_default_is_unchecked_anonymous() {
    let view = SessionView::default();
    assert_eq!(view.state, SessionState::Anonymous);
    assert!(!view.checked);
}

// =============================================================
// SessionContext outside the browser
// =============================================================

#[test]
fn refresh_without_storage_marks_checked_anonymous() {
    let session = SessionContext::new();
    session.refresh();
    let view = session.view.get_untracked();
    assert!(view.checked);
    assert_eq!(view.state, SessionState::Anonymous);
}

#[test]
fn login_publishes_authenticated_state() {
    let session = SessionContext::new();
    session.login("tok");
    assert!(session.view.get_untracked().state.is_authenticated());
}

#[test]
fn access_denied_publishes_anonymous_state() {
    let session = SessionContext::new();
    session.login("tok");
    session.access_denied();
    assert_eq!(session.view.get_untracked().state, SessionState::Anonymous);
}
