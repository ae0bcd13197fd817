//! # IPv6 Literal Grammar
//!
//! Decides whether a candidate string is a syntactically valid IPv6
//! literal, and in which notation it is written.
//!
//! Accepted forms:
//! * Eight colon-separated hextets (e.g., `1111:2222:3333:4444:5555:6666:7777:8888`).
//! * Any form with a single `::` marker standing for a run of omitted zero
//!   groups, including the bare `::` unspecified address.
//! * Either of the above ending in an embedded dotted-decimal IPv4 quad
//!   (e.g., `::ffff:192.168.0.1`), which takes the place of the last two
//!   hextets.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Total number of 16-bit groups in an IPv6 address.
const TOTAL_GROUPS: u8 = 8;

/// An embedded IPv4 quad occupies the last 32 bits, i.e. two groups.
const QUAD_GROUPS: u8 = 2;

/// The candidate span violates the literal grammar.
///
/// An ordinary outcome of scanning, not a fault: the scanner rejects most
/// of the tokens it inspects with this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not a valid IPv6 literal")]
pub struct InvalidLiteral;

/// Notation class of a recognized literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Hextets only.
    Ipv6Only,
    /// Ends in an embedded dotted-decimal IPv4 quad.
    Ipv6WithIpv4,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Ipv6Only => write!(f, "IPv6"),
            Notation::Ipv6WithIpv4 => write!(f, "IPv6+IPv4"),
        }
    }
}

/// The validated shape of one IPv6 literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal {
    /// Hextet-equivalents written out explicitly; an IPv4 quad counts as 2.
    pub groups: u8,
    /// Whether a `::` marker is present.
    pub compressed: bool,
    /// Whether the literal ends in an embedded IPv4 quad.
    pub embedded_ipv4: bool,
}

impl Literal {
    pub fn notation(&self) -> Notation {
        if self.embedded_ipv4 {
            Notation::Ipv6WithIpv4
        } else {
            Notation::Ipv6Only
        }
    }
}

impl FromStr for Literal {
    type Err = InvalidLiteral;

    /// Parses a candidate span into the shape of an IPv6 literal.
    ///
    /// Group arithmetic: without a `::` marker the explicit groups must sum
    /// to exactly 8; with one, to at most 7, so the marker stands for at
    /// least one omitted zero group. `1:2:3:4:5:6:7:8::` is rejected while
    /// `1:2:3:4:5:6:7::` is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidLiteral);
        }

        match s.find("::") {
            Some(at) => {
                let (head, tail) = (&s[..at], &s[at + 2..]);
                if tail.contains("::") {
                    return Err(InvalidLiteral);
                }

                let head_groups = leading_groups(head)?;
                let (tail_groups, embedded_ipv4) = trailing_groups(tail)?;

                let groups = head_groups + tail_groups;
                if groups >= TOTAL_GROUPS {
                    return Err(InvalidLiteral);
                }

                Ok(Literal {
                    groups,
                    compressed: true,
                    embedded_ipv4,
                })
            }
            None => {
                let (groups, embedded_ipv4) = trailing_groups(s)?;
                if groups != TOTAL_GROUPS {
                    return Err(InvalidLiteral);
                }

                Ok(Literal {
                    groups,
                    compressed: false,
                    embedded_ipv4,
                })
            }
        }
    }
}

/// Counts the groups before a `::` marker.
///
/// Hextets only: an embedded IPv4 quad can only close an address, never
/// precede a marker. An empty head (the address starts with `::`) is fine;
/// an empty group inside it is not.
fn leading_groups(head: &str) -> Result<u8, InvalidLiteral> {
    if head.is_empty() {
        return Ok(0);
    }

    let mut groups: u8 = 0;
    for group in head.split(':') {
        if !is_hextet(group) {
            return Err(InvalidLiteral);
        }
        groups += 1;
        if groups > TOTAL_GROUPS {
            return Err(InvalidLiteral);
        }
    }

    Ok(groups)
}

/// Counts the groups after a `::` marker, or of a whole uncompressed
/// candidate. Only the final group may be an embedded IPv4 quad.
fn trailing_groups(tail: &str) -> Result<(u8, bool), InvalidLiteral> {
    if tail.is_empty() {
        return Ok((0, false));
    }

    let mut groups: u8 = 0;
    let last = match tail.rsplit_once(':') {
        Some((init, last)) => {
            for group in init.split(':') {
                if !is_hextet(group) {
                    return Err(InvalidLiteral);
                }
                groups += 1;
                if groups > TOTAL_GROUPS {
                    return Err(InvalidLiteral);
                }
            }
            last
        }
        None => tail,
    };

    if last.contains('.') {
        if !is_ipv4_quad(last) {
            return Err(InvalidLiteral);
        }
        Ok((groups + QUAD_GROUPS, true))
    } else {
        if !is_hextet(last) {
            return Err(InvalidLiteral);
        }
        Ok((groups + 1, false))
    }
}

/// 1-4 hex digits, either case.
fn is_hextet(group: &str) -> bool {
    (1..=4).contains(&group.len()) && group.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Exactly four dot-separated decimal octets.
fn is_ipv4_quad(quad: &str) -> bool {
    let mut octets = 0;
    for octet in quad.split('.') {
        if !is_octet(octet) {
            return false;
        }
        octets += 1;
    }
    octets == 4
}

/// `0`, or 1-255 written without a leading zero.
fn is_octet(octet: &str) -> bool {
    if octet.is_empty() || !octet.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if octet.len() > 1 && octet.starts_with('0') {
        return false;
    }
    octet.parse::<u8>().is_ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
