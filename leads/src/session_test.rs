use super::*;

#[test]
fn from_token_requires_non_empty_value() {
    assert_eq!(SessionState::from_token(None), SessionState::Anonymous);
    assert_eq!(SessionState::from_token(Some("")), SessionState::Anonymous);
    assert_eq!(SessionState::from_token(Some("abc")), SessionState::Authenticated);
}

#[test]
fn transitions_follow_two_state_machine() {
    use SessionEvent::*;
    use SessionState::*;
    assert_eq!(Anonymous.transition(LoginSucceeded), Authenticated);
    assert_eq!(Authenticated.transition(LoginSucceeded), Authenticated);
    assert_eq!(Authenticated.transition(LoggedOut), Anonymous);
    assert_eq!(Authenticated.transition(AccessDenied), Anonymous);
    assert_eq!(Anonymous.transition(AccessDenied), Anonymous);
}

#[test]
fn new_session_derives_state_from_store() {
    assert!(Session::new(MemoryTokenStore::with_token("t")).state().is_authenticated());
    assert!(!Session::new(MemoryTokenStore::default()).state().is_authenticated());
}

#[test]
fn login_persists_token() {
    let mut session = Session::new(MemoryTokenStore::default());
    assert_eq!(session.login("tok-1"), SessionState::Authenticated);
    assert_eq!(session.token().as_deref(), Some("tok-1"));
}

#[test]
fn logout_clears_token() {
    let mut session = Session::new(MemoryTokenStore::with_token("tok-1"));
    assert_eq!(session.logout(), SessionState::Anonymous);
    assert_eq!(session.token(), None);
    assert_eq!(session.store_mut().token(), None);
}

#[test]
fn access_denied_clears_token() {
    let mut session = Session::new(MemoryTokenStore::with_token("tok-1"));
    assert_eq!(session.access_denied(), SessionState::Anonymous);
    assert_eq!(session.token(), None);
}

#[test]
fn refresh_picks_up_external_store_changes() {
    let mut session = Session::new(MemoryTokenStore::with_token("tok-1"));
    session.store.clear();
    assert_eq!(session.refresh(), SessionState::Anonymous);
    session.store.store("tok-2");
    assert_eq!(session.refresh(), SessionState::Authenticated);
}

#[test]
fn empty_stored_token_is_not_sent() {
    let session = Session::new(MemoryTokenStore::with_token(""));
    assert_eq!(session.token(), None);
    assert!(!session.state().is_authenticated());
}
