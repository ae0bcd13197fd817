//! Free-text scanning for IPv6 literals.
//!
//! The scanner walks the input once, left to right. Every maximal run of
//! characters from `[0-9A-Fa-f:.]` is a candidate; a candidate either
//! parses as one whole literal or yields nothing. A valid literal glued to
//! further address characters is part of a larger, invalid candidate and is
//! never reported: `::` between words matches, the `::` inside `:::` or
//! `8888:` does not.

use tracing::trace;

use crate::grammar::{Literal, Notation};

/// One recognized literal in the scanned text.
///
/// Offsets are byte offsets into the input and `end` is exclusive, so
/// `&text[m.start..m.end] == m.text`. The record owns its text and keeps no
/// reference into the scanned buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub notation: Notation,
}

/// True for characters that may appear inside an IPv6 literal.
fn is_candidate_char(c: char) -> bool {
    c.is_ascii_hexdigit() || c == ':' || c == '.'
}

/// Finds every IPv6 literal in `text`, in order of appearance.
///
/// Matches never overlap, and each call is independent: the scanner keeps
/// no state between scans.
pub fn scan(text: &str) -> Vec<Match> {
    let mut matches = Vec::new();
    let mut cursor = 0;

    while cursor < text.len() {
        let Some(offset) = text[cursor..].find(is_candidate_char) else {
            break;
        };
        let start = cursor + offset;
        let len = text[start..]
            .find(|c| !is_candidate_char(c))
            .unwrap_or(text.len() - start);
        let end = start + len;

        let candidate = &text[start..end];
        match candidate.parse::<Literal>() {
            Ok(literal) => matches.push(Match {
                text: candidate.to_owned(),
                start,
                end,
                notation: literal.notation(),
            }),
            Err(_) => trace!(candidate, "rejected candidate"),
        }

        cursor = end;
    }

    matches
}

/// Accepts `text` only if the entire input is a single valid literal.
pub fn validate_whole(text: &str) -> Option<Match> {
    let literal: Literal = text.parse().ok()?;
    Some(Match {
        text: text.to_owned(),
        start: 0,
        end: text.len(),
        notation: literal.notation(),
    })
}
