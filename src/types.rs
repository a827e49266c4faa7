// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core types shared across the index pipeline.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **SuffixRecord**: `pos <= text.len()`. The record with `pos == text.len()`
//!   is the terminal sentinel entry and always carries `Origin::Separator`.
//!
//! - **Origin**: the persisted encoding maps `Separator` to `-1` and
//!   `Line(n)` to `n`. No other negative value is valid, and the loader
//!   rejects one.

use std::fmt;

/// Separator byte inserted between consecutive sequences.
///
/// ASCII unit separator. Trimmed input lines cannot contain it, so content
/// never collides with the separator and `$` stays an ordinary symbol. The
/// encoded domain shifts it to 0x20, above the sentinel and below every
/// printable symbol.
pub const SEPARATOR: u8 = 0x1f;

/// Where a text position came from: a sequence line or a separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Zero-based index of the originating input line.
    Line(usize),
    /// A separator byte, or the terminal sentinel entry.
    Separator,
}

impl Origin {
    /// Persisted form: the line number, or `-1` for separators.
    pub fn to_i64(self) -> i64 {
        match self {
            Origin::Line(line) => line as i64,
            Origin::Separator => -1,
        }
    }

    /// Parse the persisted form. Only `-1` and non-negative values are valid.
    pub fn from_i64(value: i64) -> Option<Origin> {
        match value {
            -1 => Some(Origin::Separator),
            line if line >= 0 => Some(Origin::Line(line as usize)),
            _ => None,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_i64())
    }
}

/// One annotated suffix-array entry: suffix start position, originating line,
/// and the longest common prefix with the preceding entry in suffix order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRecord {
    pub pos: usize,
    pub origin: Origin,
    pub lcp: usize,
}
