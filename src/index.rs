//! Annotated index construction and line-oriented persistence.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **RECORDS_SORTED**: records follow suffix-array order; the suffix at
//!    `records[i].pos` precedes the suffix at `records[i + 1].pos`.
//! 2. **RECORDS_COMPLETE**: one record per text position plus the terminal
//!    sentinel entry, `records.len() == text.len() + 1`.
//! 3. **ORIGIN_CONSISTENT**: `records[i].origin` equals the origin vector at
//!    `records[i].pos`, with the sentinel entry mapped to the separator
//!    marker.
//!
//! The persisted file does not carry the text itself; the loader re-binds an
//! index to freshly assembled text and checks a CRC32 fingerprint plus the
//! text length, so a stale index cannot silently search the wrong input.

use crate::alphabet;
use crate::lcp;
use crate::sais;
use crate::search;
use crate::text::SequenceText;
use crate::types::{Origin, SuffixRecord};

use std::fs;
use std::io;
use std::path::Path;

/// Version of the persisted index format.
const FORMAT_VERSION: u32 = 1;

/// The complete queryable index: assembled text plus annotated suffix records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceIndex {
    text: SequenceText,
    records: Vec<SuffixRecord>,
}

impl SequenceIndex {
    /// Build the annotated index: encode the text, run SA-IS, run Kasai, then
    /// zip suffix array, origin vector, and LCP array into records.
    pub fn build(text: SequenceText) -> SequenceIndex {
        let (encoded, alphabet_size) = alphabet::encode(text.as_bytes());
        let sa = sais::suffix_array(&encoded, alphabet_size);
        let lcp = lcp::lcp_array(text.as_bytes(), &sa);

        let records = sa
            .iter()
            .zip(&lcp)
            .map(|(&pos, &lcp)| SuffixRecord {
                pos,
                origin: text.origin_at(pos),
                lcp,
            })
            .collect();

        SequenceIndex { text, records }
    }

    pub fn text(&self) -> &SequenceText {
        &self.text
    }

    /// Annotated records in suffix-sorted order.
    pub fn records(&self) -> &[SuffixRecord] {
        &self.records
    }

    /// Every record whose suffix starts with `pattern`; see [`search::locate`].
    pub fn locate(&self, pattern: &[u8]) -> &[SuffixRecord] {
        search::locate(self.text.as_bytes(), &self.records, pattern)
    }

    /// CRC32 fingerprint of the assembled text.
    pub fn fingerprint(&self) -> u32 {
        fingerprint(self.text.as_bytes())
    }
}

/// CRC32 of the assembled text. Persisted alongside the records so the
/// loader can refuse an index built over different input.
pub fn fingerprint(text: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(text);
    hasher.finalize()
}

/// Persist the index: a fingerprint header followed by one
/// `position line lcp` record per line, `-1` marking separator entries.
pub fn save_index(path: &Path, index: &SequenceIndex) -> io::Result<()> {
    let mut content = String::with_capacity(16 + index.records.len() * 12);
    content.push_str(&format!(
        "# seqidx {} {:08x} {}\n",
        FORMAT_VERSION,
        index.fingerprint(),
        index.text.len()
    ));
    for record in &index.records {
        content.push_str(&format!(
            "{} {} {}\n",
            record.pos, record.origin, record.lcp
        ));
    }
    fs::write(path, content)
}

/// Load a persisted index and bind it to `text`.
///
/// Strict on every axis: the header must be present and well formed, every
/// record line must parse as exactly three integers, the record count must be
/// `text.len() + 1`, and the fingerprint and text length in the header must
/// match the supplied text. Any violation is `ErrorKind::InvalidData`.
pub fn load_index(path: &Path, text: SequenceText) -> io::Result<SequenceIndex> {
    let content = fs::read_to_string(path)?;
    let mut lines = content.lines();

    let header = lines.next().ok_or_else(|| invalid("missing index header"))?;
    let (crc, text_len) = parse_header(header)?;

    if text_len != text.len() {
        return Err(invalid(format!(
            "index covers {} text bytes but the input assembles to {}",
            text_len,
            text.len()
        )));
    }
    let actual = fingerprint(text.as_bytes());
    if crc != actual {
        return Err(invalid(format!(
            "text fingerprint mismatch: index has {:08x}, input has {:08x}",
            crc, actual
        )));
    }

    let mut records = Vec::with_capacity(text.len() + 1);
    for (lineno, line) in lines.enumerate() {
        let record = parse_record(line)
            .map_err(|reason| invalid(format!("record on line {}: {}", lineno + 2, reason)))?;
        records.push(record);
    }
    if records.len() != text.len() + 1 {
        return Err(invalid(format!(
            "expected {} records, found {}",
            text.len() + 1,
            records.len()
        )));
    }

    Ok(SequenceIndex { text, records })
}

/// Parse the `# seqidx <version> <crc32> <len>` header line.
fn parse_header(line: &str) -> io::Result<(u32, usize)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 5 || fields[0] != "#" || fields[1] != "seqidx" {
        return Err(invalid("malformed index header"));
    }
    let version: u32 = fields[2]
        .parse()
        .map_err(|_| invalid("malformed index version"))?;
    if version != FORMAT_VERSION {
        return Err(invalid(format!("unsupported index version {}", version)));
    }
    let crc = u32::from_str_radix(fields[3], 16)
        .map_err(|_| invalid("malformed index fingerprint"))?;
    let text_len: usize = fields[4]
        .parse()
        .map_err(|_| invalid("malformed index text length"))?;
    Ok((crc, text_len))
}

/// Parse one `position line lcp` record line.
fn parse_record(line: &str) -> Result<SuffixRecord, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(format!("expected 3 fields, found {}", fields.len()));
    }
    let pos = fields[0]
        .parse::<usize>()
        .map_err(|e| format!("position: {}", e))?;
    let line_value = fields[1]
        .parse::<i64>()
        .map_err(|e| format!("line: {}", e))?;
    let origin = Origin::from_i64(line_value)
        .ok_or_else(|| format!("line value {} out of range", line_value))?;
    let lcp = fields[2]
        .parse::<usize>()
        .map_err(|e| format!("lcp: {}", e))?;
    Ok(SuffixRecord { pos, origin, lcp })
}

fn invalid(reason: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, reason.into())
}
