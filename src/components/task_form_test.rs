use super::*;

// =============================================================
// build_draft validation
// =============================================================

#[test]
fn empty_title_yields_no_draft() {
    assert_eq!(build_draft("", "notes", None), None);
}

#[test]
fn whitespace_only_title_yields_no_draft() {
    assert_eq!(build_draft("   \t", "notes", None), None);
}

#[test]
fn draft_trims_title_and_description() {
    let draft = build_draft("  Comprar café  ", "  moído  ", None).unwrap();
    assert_eq!(draft.title, "Comprar café");
    assert_eq!(draft.description, "moído");
}

#[test]
fn create_mode_draft_leaves_status_unset() {
    let draft = build_draft("A", "", None).unwrap();
    assert_eq!(draft.status, None);
}

#[test]
fn edit_mode_draft_passes_status_through() {
    let draft = build_draft("A", "", Some("in_progress")).unwrap();
    assert_eq!(draft.status.as_deref(), Some("in_progress"));
}

#[test]
fn validation_message_text() {
    assert_eq!(TITLE_REQUIRED, "Título é obrigatório");
}
