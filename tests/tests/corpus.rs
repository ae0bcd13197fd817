//! Corpus suite carried over from the firewall's IPv6 parser tester.
//!
//! Aeron's valid/invalid address lists are published at
//! <http://home.deds.nl/~aeron/regex/>; the assorted and mixed documents
//! exercise literals buried in prose, comment markers, prefix-length
//! suffixes, and back-to-back runs.

use sixgrep_integration_tests::{assert_scan_sequence, assert_self_matching, checklist};
use sixgrep_engine::{Notation, scan, validate_whole};

const AERON_VALID: &str = include_str!("../data/aeron_valid.txt");
const AERON_VALID_EXPECTED: &str = include_str!("../data/aeron_valid.expected");
const AERON_INVALID: &str = include_str!("../data/aeron_invalid.txt");
const AERON_INVALID_EXPECTED: &str = include_str!("../data/aeron_invalid.expected");
const ASSORTED_VALID: &str = include_str!("../data/assorted_valid.txt");
const ASSORTED_VALID_EXPECTED: &str = include_str!("../data/assorted_valid.expected");
const ASSORTED_INVALID: &str = include_str!("../data/assorted_invalid.txt");
const MIXED_DOCUMENT: &str = include_str!("../data/mixed_document.txt");
const MIXED_DOCUMENT_EXPECTED: &str = include_str!("../data/mixed_document.expected");

#[test]
fn aeron_valid_text_matches_its_checklist() {
    assert_scan_sequence(AERON_VALID, &checklist(AERON_VALID_EXPECTED));
}

#[test]
fn aeron_valid_entries_match_themselves() {
    assert_self_matching(&checklist(AERON_VALID_EXPECTED));
}

/// The invalid document still contains four real `::` markers, sitting at
/// the end of prose comment lines; nothing else in it may match.
#[test]
fn aeron_invalid_text_yields_only_the_comment_markers() {
    let expected = checklist(AERON_INVALID_EXPECTED);
    assert_eq!(expected, ["::", "::", "::", "::"]);
    assert_scan_sequence(AERON_INVALID, &expected);
}

#[test]
fn assorted_valid_text_matches_its_checklist() {
    assert_scan_sequence(ASSORTED_VALID, &checklist(ASSORTED_VALID_EXPECTED));
}

#[test]
fn assorted_valid_entries_match_themselves() {
    assert_self_matching(&checklist(ASSORTED_VALID_EXPECTED));
}

#[test]
fn assorted_invalid_text_yields_nothing() {
    assert_scan_sequence(ASSORTED_INVALID, &[]);
}

#[test]
fn mixed_document_matches_its_checklist() {
    assert_scan_sequence(MIXED_DOCUMENT, &checklist(MIXED_DOCUMENT_EXPECTED));
}

#[test]
fn mixed_document_entries_match_themselves() {
    assert_self_matching(&checklist(MIXED_DOCUMENT_EXPECTED));
}

/// Every dual-notation entry in the corpus is classified as IPv6+IPv4 and
/// every other one as plain IPv6.
#[test]
fn corpus_entries_are_classified_by_their_quad() {
    for list in [
        AERON_VALID_EXPECTED,
        ASSORTED_VALID_EXPECTED,
        MIXED_DOCUMENT_EXPECTED,
    ] {
        for entry in checklist(list) {
            let m = validate_whole(entry).unwrap();
            let expected = if entry.contains('.') {
                Notation::Ipv6WithIpv4
            } else {
                Notation::Ipv6Only
            };
            assert_eq!(m.notation, expected, "misclassified '{entry}'");
        }
    }
}

/// Joining a document's matches with single spaces and rescanning must
/// reproduce the same sequence.
#[test]
fn corpus_matches_rescan_to_themselves() {
    for text in [AERON_VALID, ASSORTED_VALID, MIXED_DOCUMENT] {
        let first: Vec<String> = scan(text).into_iter().map(|m| m.text).collect();
        let joined = first.join(" ");
        let second: Vec<String> = scan(&joined).into_iter().map(|m| m.text).collect();
        assert_eq!(first, second);
    }
}
