//! Shared helpers for the corpus suite under `tests/`.
//!
//! Each corpus set is a text document plus an `.expected` file holding the
//! exact ordered sequence of literals the scanner must report for it.

use sixgrep_engine::{scan, validate_whole};

/// Expected-match files carry one literal per line; blank lines are padding.
pub fn checklist(raw: &str) -> Vec<&str> {
    raw.lines().filter(|line| !line.is_empty()).collect()
}

/// The document pass: scanning `text` must yield exactly the expected
/// sequence, in order.
pub fn assert_scan_sequence(text: &str, expected: &[&str]) {
    let found: Vec<String> = scan(text).into_iter().map(|m| m.text).collect();
    assert_eq!(
        found, expected,
        "scan produced {} matches, expected {}",
        found.len(),
        expected.len()
    );
}

/// The against-itself pass: every checklist entry must also hold up as a
/// standalone whole-string literal covering its full span.
pub fn assert_self_matching(entries: &[&str]) {
    for entry in entries {
        let m = validate_whole(entry)
            .unwrap_or_else(|| panic!("unable to match '{entry}' against itself"));
        assert_eq!(m.text, *entry);
        assert_eq!((m.start, m.end), (0, entry.len()));
    }
}
