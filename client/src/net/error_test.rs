use super::*;

const FALLBACK: &str = "Login failed";
const NETWORK: &str = "Something went wrong. Please try again.";

#[test]
fn rejected_with_message_surfaces_server_text() {
    let err = ApiError::Rejected { status: 401, message: Some("bad credentials".to_owned()) };
    assert_eq!(err.user_message(FALLBACK, NETWORK), "bad credentials");
}

#[test]
fn rejected_without_message_uses_fallback() {
    let err = ApiError::Rejected { status: 400, message: None };
    assert_eq!(err.user_message(FALLBACK, NETWORK), FALLBACK);
}

#[test]
fn rejected_with_empty_message_uses_fallback() {
    let err = ApiError::Rejected { status: 400, message: Some(String::new()) };
    assert_eq!(err.user_message(FALLBACK, NETWORK), FALLBACK);
}

#[test]
fn non_rejections_use_network_message() {
    for err in [
        ApiError::Transport("connection refused".to_owned()),
        ApiError::Decode("missing field `token`".to_owned()),
        ApiError::Unavailable,
    ] {
        assert_eq!(err.user_message(FALLBACK, NETWORK), NETWORK, "for {err:?}");
    }
}

#[test]
fn display_includes_status() {
    let err = ApiError::Rejected { status: 503, message: None };
    assert_eq!(err.to_string(), "request rejected: status 503");
}
