use super::*;

#[test]
fn display_renders_bare_message() {
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "offline");
    assert_eq!(
        ApiError::Rejected("title is required".to_owned()).to_string(),
        "title is required"
    );
}

#[test]
fn message_matches_display_for_both_kinds() {
    let network = ApiError::Network("failed to fetch tasks".to_owned());
    let rejected = ApiError::Rejected("invalid status".to_owned());
    assert_eq!(network.message(), "failed to fetch tasks");
    assert_eq!(rejected.message(), "invalid status");
}

#[test]
fn kinds_with_same_message_are_distinct() {
    assert_ne!(
        ApiError::Network("x".to_owned()),
        ApiError::Rejected("x".to_owned())
    );
}
