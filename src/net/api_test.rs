use super::*;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn tasks_endpoint_appends_path() {
    assert_eq!(tasks_endpoint("http://localhost:8080"), "http://localhost:8080/tasks");
}

#[test]
fn tasks_endpoint_tolerates_trailing_slash() {
    assert_eq!(tasks_endpoint("http://localhost:8080/"), "http://localhost:8080/tasks");
}

#[test]
fn task_endpoint_formats_id() {
    assert_eq!(
        task_endpoint("http://localhost:8080", 42),
        "http://localhost:8080/tasks/42"
    );
}

#[test]
fn api_base_defaults_to_localhost() {
    // KANBAN_API_URL is not set in the test environment.
    assert_eq!(api_base(), DEFAULT_API_BASE);
}

// =============================================================
// Failure classification
// =============================================================

#[test]
fn failure_with_body_is_rejected_with_body_text() {
    assert_eq!(
        failure_from_body("title is required", CREATE_FALLBACK),
        ApiError::Rejected("title is required".to_owned())
    );
}

#[test]
fn failure_with_empty_body_falls_back_to_network() {
    assert_eq!(
        failure_from_body("", DELETE_FALLBACK),
        ApiError::Network("failed to delete".to_owned())
    );
}

#[test]
fn failure_with_whitespace_body_falls_back_to_network() {
    assert_eq!(
        failure_from_body("  \n", UPDATE_FALLBACK),
        ApiError::Network("failed to update".to_owned())
    );
}

#[test]
fn fallback_messages_match_operation_names() {
    assert_eq!(FETCH_FALLBACK, "failed to fetch tasks");
    assert_eq!(CREATE_FALLBACK, "failed to create");
    assert_eq!(UPDATE_FALLBACK, "failed to update");
    assert_eq!(DELETE_FALLBACK, "failed to delete");
}
