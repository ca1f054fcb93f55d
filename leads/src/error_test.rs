use super::*;

#[test]
fn from_status_maps_403_to_auth_denied() {
    assert_eq!(ApiError::from_status(403), ApiError::AuthDenied);
    assert!(ApiError::from_status(403).is_auth_denied());
}

#[test]
fn from_status_keeps_other_statuses_generic() {
    for status in [400, 401, 404, 500, 502] {
        let err = ApiError::from_status(status);
        assert_eq!(err, ApiError::Rejected { status });
        assert!(!err.is_auth_denied());
    }
}

#[test]
fn check_status_accepts_2xx() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(201), Ok(()));
    assert_eq!(check_status(204), Ok(()));
}

#[test]
fn check_status_rejects_non_2xx() {
    assert_eq!(check_status(403), Err(ApiError::AuthDenied));
    assert_eq!(check_status(302), Err(ApiError::Rejected { status: 302 }));
}

#[test]
fn validation_message_is_shown_verbatim() {
    let err = ApiError::Validation("Debes aceptar los términos y condiciones.".to_owned());
    assert_eq!(err.user_message(), "Debes aceptar los términos y condiciones.");
}

#[test]
fn transport_and_malformed_share_generic_message() {
    assert_eq!(
        ApiError::Transport("dns".to_owned()).user_message(),
        ApiError::Malformed("not an array".to_owned()).user_message()
    );
}
