use super::*;

#[test]
fn submit_label_tracks_sending() {
    assert_eq!(submit_label(SubmitStatus::Sending), "Enviando...");
    assert_eq!(submit_label(SubmitStatus::Idle), "Enviar");
    assert_eq!(submit_label(SubmitStatus::Error), "Enviar");
}

#[test]
fn notice_class_reflects_outcome() {
    assert!(notice_class(SubmitStatus::Success).ends_with("--success"));
    assert!(notice_class(SubmitStatus::Error).ends_with("--error"));
    assert_eq!(notice_class(SubmitStatus::Idle), "contact-notice");
}

#[test]
fn contact_fields_are_all_required() {
    let state = RwSignal::new(ContactState::default());
    let html = view! { <ContactFields state=state/> }.to_html();
    assert_eq!(html.matches("required").count(), 3, "{html}");
    assert!(html.contains("type=\"email\""));
}
