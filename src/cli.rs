// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the seqidx command-line interface.
//!
//! One mode per invocation: `-m` builds and persists the index, `-s` runs a
//! single suffix-array search, `-t` trie-scans the text for every pattern in
//! a file. `-f` points all three at the input sequence file. The modes are
//! mutually exclusive; with none of them the tool prints usage.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "seqidx",
    about = "Suffix-array index and multi-pattern scanner for line-oriented sequence files",
    version,
    group(ArgGroup::new("mode").args(["build", "search", "patterns"]))
)]
pub struct Cli {
    /// Index mode: build the suffix array index and persist it
    #[arg(short = 'm')]
    pub build: bool,

    /// Search mode: locate a single sequence through the persisted index
    #[arg(short = 's', value_name = "PATTERN")]
    pub search: Option<String>,

    /// Trie mode: scan for every pattern listed in FILE, one per line
    #[arg(short = 't', value_name = "FILE")]
    pub patterns: Option<PathBuf>,

    /// Input sequence file, one sequence per line
    #[arg(short = 'f', value_name = "PATH", default_value = "genoma.txt")]
    pub file: PathBuf,
}

/// What the user asked for, after flag validation.
#[derive(Debug)]
pub enum Mode {
    Build,
    Search(String),
    Scan(PathBuf),
    /// No mode flag given.
    Usage,
}

impl Cli {
    pub fn mode(self) -> Mode {
        if self.build {
            Mode::Build
        } else if let Some(pattern) = self.search {
            Mode::Search(pattern)
        } else if let Some(file) = self.patterns {
            Mode::Scan(file)
        } else {
            Mode::Usage
        }
    }
}
