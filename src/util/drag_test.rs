use super::*;

fn task(id: i64, status: &str) -> Task {
    Task {
        id,
        title: format!("task {id}"),
        description: String::new(),
        status: status.to_owned(),
    }
}

// =============================================================
// Encode / decode
// =============================================================

#[test]
fn encode_then_decode_round_trips() {
    assert_eq!(decode_task_id(&encode_task_id(42)), Some(42));
}

#[test]
fn decode_tolerates_surrounding_whitespace() {
    assert_eq!(decode_task_id(" 7 "), Some(7));
}

#[test]
fn decode_rejects_garbage() {
    assert_eq!(decode_task_id(""), None);
    assert_eq!(decode_task_id("abc"), None);
    assert_eq!(decode_task_id("12abc"), None);
}

// =============================================================
// Drop resolution
// =============================================================

#[test]
fn drop_on_other_column_resolves_task() {
    let tasks = vec![task(1, "todo"), task(2, "done")];
    let resolved = drop_action(&tasks, "1", Status::Done).unwrap();
    assert_eq!(resolved.id, 1);
    assert_eq!(resolved.status, "todo");
}

#[test]
fn drop_on_own_column_is_a_no_op() {
    let tasks = vec![task(1, "todo")];
    assert_eq!(drop_action(&tasks, "1", Status::Todo), None);
}

#[test]
fn drop_with_unknown_id_is_a_no_op() {
    let tasks = vec![task(1, "todo")];
    assert_eq!(drop_action(&tasks, "99", Status::Done), None);
}

#[test]
fn drop_with_garbage_payload_is_a_no_op() {
    let tasks = vec![task(1, "todo")];
    assert_eq!(drop_action(&tasks, "not-an-id", Status::Done), None);
}
