use super::cleaner::{clean, OPEN_MARKER};

#[test]
fn strips_both_markers_and_trims() {
    let raw = "<<SYS>>The answer is 4.<</SYS>>";
    assert_eq!(clean(raw), "The answer is 4.");
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(clean("  \n hello there \n"), "hello there");
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(clean(""), "");
    assert_eq!(clean("   "), "");
}

#[test]
fn opening_marker_never_survives() {
    let raw = "<<SYS>> one <<SYS>> two";
    assert!(!clean(raw).contains(OPEN_MARKER));
}

#[test]
fn already_clean_text_is_unchanged() {
    let cleaned = clean("The llama is a domesticated camelid.");
    assert_eq!(clean(&cleaned), cleaned);
}

#[test]
fn plain_text_passes_through() {
    assert_eq!(clean("short and simple"), "short and simple");
}
