use std::cell::Cell;

use leads::SubmitStatus;

use super::*;

fn ready_form(token: Option<&str>) -> ContactFormState {
    let contact = ContactFormState::new();
    contact.state.update(|s| {
        s.form.name = "Ana".to_owned();
        s.form.email = "ana@x.com".to_owned();
        s.form.message = "hola".to_owned();
        s.accepted_terms = true;
        s.verification_token = token.map(str::to_owned);
    });
    contact
}

fn verified_gating() -> ContactGating {
    ContactGating::new(true, Some("site-key"))
}

#[test]
fn failed_send_resets_widget_and_allows_retry_after_new_token() {
    let gating = verified_gating();
    let contact = ready_form(Some("tok-1"));
    let resets = Cell::new(0);

    contact.submit(&gating);
    assert_eq!(contact.state.get_untracked().status, SubmitStatus::Sending);
    contact.finish(&gating, Err(ApiError::Rejected { status: 500 }), || resets.set(resets.get() + 1));

    assert_eq!(resets.get(), 1);
    let state = contact.state.get_untracked();
    assert_eq!(state.status, SubmitStatus::Error);
    assert_eq!(state.verification_token, None);
    assert_eq!(state.form.name, "Ana");

    // The reset widget issues a fresh token, which unblocks the retry.
    contact.set_verification_token(Some("tok-2".to_owned()));
    contact.submit(&gating);
    assert_eq!(contact.state.get_untracked().status, SubmitStatus::Sending);
}

#[test]
fn successful_send_resets_widget() {
    let gating = verified_gating();
    let contact = ready_form(Some("tok-1"));
    let resets = Cell::new(0);

    contact.submit(&gating);
    contact.finish(&gating, Ok(()), || resets.set(resets.get() + 1));

    assert_eq!(resets.get(), 1);
    assert_eq!(contact.state.get_untracked().status, SubmitStatus::Success);
}

#[test]
fn no_widget_reset_without_verification() {
    let gating = ContactGating::new(true, None);
    let contact = ready_form(None);
    let resets = Cell::new(0);

    contact.submit(&gating);
    contact.finish(&gating, Ok(()), || resets.set(resets.get() + 1));

    assert_eq!(resets.get(), 0);
}
