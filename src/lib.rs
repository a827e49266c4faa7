//! Suffix-array indexing and multi-pattern search over line-oriented
//! sequence files.
//!
//! The crate assembles one text buffer from a file of sequences (one per
//! line), builds a suffix array with SA-IS and an LCP array with Kasai's
//! algorithm, and answers two kinds of queries: single-pattern substring
//! location by binary search, and simultaneous multi-pattern location by
//! walking a trie over every starting position. Every hit is annotated with
//! the line it originated from.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐   ┌─────────────┐   ┌─────────┐   ┌──────────┐
//! │ text.rs  │──▶│ alphabet.rs │──▶│ sais.rs │──▶│  lcp.rs  │
//! │(assemble)│   │  (encode)   │   │  (SA)   │   │ (Kasai)  │
//! └──────────┘   └─────────────┘   └─────────┘   └──────────┘
//!       │                               │              │
//!       ▼                               ▼              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │                        index.rs                            │
//! │  (SuffixRecord zip, fingerprinted line-oriented persist)   │
//! └────────────────────────────────────────────────────────────┘
//!       │                                          │
//!       ▼                                          ▼
//! ┌─────────────┐                           ┌─────────────┐
//! │  search.rs  │                           │   trie.rs   │
//! │  (binary    │                           │  (multi-    │
//! │   search)   │                           │   pattern)  │
//! └─────────────┘                           └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use seqidx::{SequenceIndex, SequenceText};
//!
//! let text = SequenceText::from_lines(["ACGT", "TGCA"]).unwrap();
//! let index = SequenceIndex::build(text);
//!
//! let hits = index.locate(b"CG");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].pos, 1);
//! ```

pub mod alphabet;
mod index;
pub mod lcp;
pub mod sais;
mod search;
mod text;
mod trie;
mod types;

pub use index::{fingerprint, load_index, save_index, SequenceIndex};
pub use search::locate;
pub use text::SequenceText;
pub use trie::PatternTrie;
pub use types::{Origin, SuffixRecord, SEPARATOR};
