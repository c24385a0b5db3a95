use super::*;

#[test]
fn test_parse_selection_empty_keeps_defaults() {
    assert_eq!(parse_selection("", 5), SelectionInput::KeepDefaults);
    assert_eq!(parse_selection("  \n", 5), SelectionInput::KeepDefaults);
}

#[test]
fn test_parse_selection_all() {
    assert_eq!(parse_selection("a", 3), SelectionInput::All);
    assert_eq!(parse_selection("ALL\n", 3), SelectionInput::All);
}

#[test]
fn test_parse_selection_mixed_separators() {
    assert_eq!(
        parse_selection("3, 1 2\n", 4),
        SelectionInput::Indices(vec![0, 1, 2])
    );
}

#[test]
fn test_parse_selection_deduplicates() {
    assert_eq!(parse_selection("2,2,2", 4), SelectionInput::Indices(vec![1]));
}

#[test]
fn test_parse_selection_rejects_out_of_range() {
    assert_eq!(parse_selection("0", 4), SelectionInput::Invalid);
    assert_eq!(parse_selection("5", 4), SelectionInput::Invalid);
    assert_eq!(parse_selection("button", 4), SelectionInput::Invalid);
}

#[test]
fn test_parse_selection_only_separators_is_empty() {
    assert_eq!(parse_selection(",,", 4), SelectionInput::Indices(vec![]));
}

#[test]
fn test_wait_for_line_returns_answer() {
    let (tx, rx) = std::sync::mpsc::channel();
    tx.send(Ok("y\n".to_string())).unwrap();
    assert_eq!(wait_for_line(&rx, || false), Some("y\n".to_string()));
}

#[test]
fn test_wait_for_line_cancelled_by_interrupt() {
    let (tx, rx) = std::sync::mpsc::channel::<std::io::Result<String>>();
    // the reader is still blocked; nothing was sent
    assert_eq!(wait_for_line(&rx, || true), None);
    drop(tx);
}

#[test]
fn test_wait_for_line_interrupt_during_wait() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let (_tx, rx) = std::sync::mpsc::channel::<std::io::Result<String>>();
    let polls = AtomicUsize::new(0);
    let answer = wait_for_line(&rx, || polls.fetch_add(1, Ordering::SeqCst) >= 2);
    assert_eq!(answer, None);
    assert_eq!(polls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_wait_for_line_end_of_input() {
    let (tx, rx) = std::sync::mpsc::channel();
    tx.send(Ok(String::new())).unwrap();
    assert_eq!(wait_for_line(&rx, || false), None);
}

#[test]
fn test_wait_for_line_read_error() {
    let (tx, rx) = std::sync::mpsc::channel();
    tx.send(Err(std::io::Error::other("closed"))).unwrap();
    assert_eq!(wait_for_line(&rx, || false), None);
}

#[test]
fn test_wait_for_line_reader_gone() {
    let (tx, rx) = std::sync::mpsc::channel::<std::io::Result<String>>();
    drop(tx);
    assert_eq!(wait_for_line(&rx, || false), None);
}
