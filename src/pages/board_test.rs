use super::*;

fn task(id: i64, title: &str, status: &str) -> Task {
    Task {
        id,
        title: title.to_owned(),
        description: String::new(),
        status: status.to_owned(),
    }
}

// =============================================================
// Edit merge
// =============================================================

#[test]
fn merged_for_edit_keeps_id_and_takes_draft_fields() {
    let current = task(3, "old", "in_progress");
    let draft = NewTask {
        title: "new title".to_owned(),
        description: "new desc".to_owned(),
        status: Some("in_progress".to_owned()),
    };
    let merged = merged_for_edit(&current, &draft);
    assert_eq!(merged.id, 3);
    assert_eq!(merged.title, "new title");
    assert_eq!(merged.description, "new desc");
    assert_eq!(merged.status, "in_progress");
}

#[test]
fn merged_for_edit_falls_back_to_current_status() {
    let current = task(1, "A", "done");
    let draft = NewTask {
        title: "A".to_owned(),
        description: String::new(),
        status: None,
    };
    assert_eq!(merged_for_edit(&current, &draft).status, "done");
}

// =============================================================
// Move
// =============================================================

#[test]
fn moved_substitutes_only_the_status() {
    let original = Task {
        id: 1,
        title: "A".to_owned(),
        description: "d".to_owned(),
        status: "todo".to_owned(),
    };
    let after = moved(&original, Status::Done);
    assert_eq!(after.id, 1);
    assert_eq!(after.title, "A");
    assert_eq!(after.description, "d");
    assert_eq!(after.status, "done");
}

#[test]
fn same_column_move_is_guarded() {
    let t = task(1, "A", "done");
    assert!(is_same_column(&t, Status::Done));
    assert!(!is_same_column(&t, Status::Todo));
}

#[test]
fn unknown_status_task_is_never_same_column() {
    // A task with an out-of-enum token can still be moved into a real column.
    let t = task(1, "A", "archived");
    for target in Status::ALL {
        assert!(!is_same_column(&t, target));
    }
}

// =============================================================
// User-facing strings
// =============================================================

#[test]
fn toast_and_confirm_messages() {
    assert_eq!(TASK_CREATED, "Tarefa criada");
    assert_eq!(TASK_UPDATED, "Tarefa atualizada");
    assert_eq!(TASK_DELETED, "Tarefa excluída");
    assert_eq!(CONFIRM_DELETE, "Excluir tarefa?");
}

#[test]
fn confirm_declines_off_browser() {
    // Without a window there is nothing to confirm; delete must abort.
    assert!(!confirm_delete());
}
