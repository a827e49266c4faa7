//! Text assembly: sequence lines in, one searchable buffer out.
//!
//! Input files carry one sequence per line. The assembler trims each line,
//! drops empty ones, and concatenates the rest into a single byte buffer with
//! exactly one [`SEPARATOR`] byte between consecutive sequences. A parallel
//! origin vector maps every buffer position back to the line it came from, so
//! query results can be reported per sequence.

use crate::types::{Origin, SEPARATOR};

/// Concatenated sequence text plus the per-position origin vector.
///
/// Both buffers are built once and read-only afterwards; every downstream
/// structure (suffix array, LCP, trie scan) borrows from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceText {
    text: Vec<u8>,
    origins: Vec<Origin>,
}

impl SequenceText {
    /// Assemble the text buffer from input lines.
    ///
    /// Lines that are empty after trimming surrounding whitespace are
    /// discarded; the rest are appended in order, joined by a single
    /// separator byte. No separator is placed before the first or after the
    /// last sequence. Fails if a retained line contains the separator byte
    /// itself, which would make origin tracking ambiguous.
    pub fn from_lines<I, S>(lines: I) -> Result<SequenceText, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = Vec::new();
        let mut origins = Vec::new();
        let mut line = 0usize;

        for raw in lines {
            let trimmed = raw.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.bytes().any(|b| b == SEPARATOR) {
                return Err(format!(
                    "sequence {} contains the reserved separator byte 0x{:02x}",
                    line, SEPARATOR
                ));
            }
            if line > 0 {
                text.push(SEPARATOR);
                origins.push(Origin::Separator);
            }
            text.extend_from_slice(trimmed.as_bytes());
            origins.extend(std::iter::repeat(Origin::Line(line)).take(trimmed.len()));
            line += 1;
        }

        Ok(SequenceText { text, origins })
    }

    /// The assembled text buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    /// Length of the assembled text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Origin of every text position, parallel to [`Self::as_bytes`].
    pub fn origins(&self) -> &[Origin] {
        &self.origins
    }

    /// Origin of one position. Positions past the end (the terminal sentinel
    /// entry of the suffix array) report [`Origin::Separator`].
    pub fn origin_at(&self, pos: usize) -> Origin {
        self.origins.get(pos).copied().unwrap_or(Origin::Separator)
    }
}
