// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! seqidx CLI: build, persist, and query sequence indexes.
//!
//! ```bash
//! # Build the index over a sequence file and persist it to sa.idx
//! seqidx -m -f genoma.txt
//!
//! # Locate one pattern through the persisted index
//! seqidx -s ACGT -f genoma.txt
//!
//! # Scan the text for every pattern in patterns.txt in one pass
//! seqidx -t patterns.txt -f genoma.txt
//! ```

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;
use std::time::Duration;

use seqidx::{load_index, save_index, PatternTrie, SequenceIndex, SequenceText};

mod cli;
use cli::{Cli, Mode};

/// Where the persisted index lives.
const INDEX_PATH: &str = "sa.idx";

fn main() {
    let cli = Cli::parse();
    let input = cli.file.clone();

    let result = match cli.mode() {
        Mode::Build => run_build(&input),
        Mode::Search(pattern) => run_search(&input, &pattern),
        Mode::Scan(patterns) => run_scan(&input, &patterns),
        Mode::Usage => {
            let _ = Cli::command().print_help();
            return;
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Read the input file and assemble the searchable text buffer.
fn assemble(input: &Path) -> Result<SequenceText, String> {
    let data = fs::read_to_string(input)
        .map_err(|e| format!("failed to read {}: {}", input.display(), e))?;
    SequenceText::from_lines(data.lines())
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn run_build(input: &Path) -> Result<(), String> {
    let text = assemble(input)?;

    let pb = spinner("Building suffix array index (SA-IS + Kasai)...");
    let index = SequenceIndex::build(text);
    pb.finish_with_message(format!(
        "Indexed {} text bytes ({} suffix records)",
        index.text().len(),
        index.records().len()
    ));

    save_index(Path::new(INDEX_PATH), &index)
        .map_err(|e| format!("failed to write {}: {}", INDEX_PATH, e))?;
    println!("Index built and saved to {}", INDEX_PATH);
    Ok(())
}

fn run_search(input: &Path, pattern: &str) -> Result<(), String> {
    let text = assemble(input)?;
    let index = load_index(Path::new(INDEX_PATH), text)
        .map_err(|e| format!("failed to load {}: {}", INDEX_PATH, e))?;

    println!("Searching for sequence: {}", pattern);
    let hits = index.locate(pattern.as_bytes());
    if hits.is_empty() {
        println!("Sequence not found.");
        return Ok(());
    }

    println!("Sequence found at positions (global position, line):");
    let tuples: Vec<String> = hits
        .iter()
        .map(|record| format!("({}, {})", record.pos, record.origin))
        .collect();
    println!("{}", tuples.join(" "));
    Ok(())
}

fn run_scan(input: &Path, patterns_path: &Path) -> Result<(), String> {
    let text = assemble(input)?;
    let data = fs::read_to_string(patterns_path)
        .map_err(|e| format!("failed to read {}: {}", patterns_path.display(), e))?;

    let mut trie = PatternTrie::new();
    for line in data.lines() {
        let pattern = line.trim();
        if !pattern.is_empty() {
            trie.insert(pattern);
        }
    }

    let hits = trie.scan(text.as_bytes());
    for (id, pattern) in trie.patterns().iter().enumerate() {
        let positions = &hits[id];
        if positions.is_empty() {
            continue;
        }
        let tuples: Vec<String> = positions
            .iter()
            .map(|&pos| format!("({}, line {})", pos, text.origin_at(pos)))
            .collect();
        println!(
            "Pattern \"{}\" found at positions: {}",
            pattern,
            tuples.join(" ")
        );
    }
    Ok(())
}
