use super::*;
use leads::SessionState;

#[test]
fn should_redirect_unauth_when_checked_and_anonymous() {
    let view = SessionView { state: SessionState::Anonymous, checked: true };
    assert!(should_redirect_unauth(&view));
}

#[test]
fn should_not_redirect_before_token_is_read() {
    let view = SessionView { state: SessionState::Anonymous, checked: false };
    assert!(!should_redirect_unauth(&view));
}

#[test]
fn should_not_redirect_when_authenticated() {
    let view = SessionView { state: SessionState::Authenticated, checked: true };
    assert!(!should_redirect_unauth(&view));
}
