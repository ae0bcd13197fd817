//! # sixgrep-engine
//!
//! Recognition engine for IPv6 literals embedded in free-form text.
//!
//! Text goes in, an ordered list of non-overlapping [`Match`]es comes out;
//! nothing is normalized or expanded, and no state survives a scan. The
//! grammar lives in [`grammar`], the text walk in [`scan`].

pub mod grammar;
pub mod scan;

pub use grammar::{InvalidLiteral, Literal, Notation};
pub use scan::{Match, scan, validate_whole};
