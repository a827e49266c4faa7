//! Multi-pattern trie and text scanner.
//!
//! All patterns go into one trie; the scanner then walks the trie from every
//! starting position of the text, so a single pass over the text locates
//! every pattern at once. Nodes live in a flat arena and terminal nodes store
//! a compact pattern id rather than a copy of the pattern string.

use std::collections::HashMap;

/// Index of the root node in the arena.
const ROOT: usize = 0;

#[derive(Debug, Default)]
struct Node {
    /// Child edges, one per distinct next byte.
    children: HashMap<u8, usize>,
    /// Pattern id, set on terminal nodes only.
    pattern: Option<usize>,
}

/// Trie over a finite pattern set, scanned from every text position.
#[derive(Debug)]
pub struct PatternTrie {
    nodes: Vec<Node>,
    patterns: Vec<String>,
}

impl Default for PatternTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternTrie {
    pub fn new() -> PatternTrie {
        PatternTrie {
            nodes: vec![Node::default()],
            patterns: Vec::new(),
        }
    }

    /// Insert `pattern` and return its id. Re-inserting an existing pattern
    /// is a no-op that returns the id assigned the first time.
    pub fn insert(&mut self, pattern: &str) -> usize {
        let mut current = ROOT;
        for &byte in pattern.as_bytes() {
            current = match self.nodes[current].children.get(&byte) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[current].children.insert(byte, child);
                    child
                }
            };
        }
        match self.nodes[current].pattern {
            Some(id) => id,
            None => {
                let id = self.patterns.len();
                self.patterns.push(pattern.to_string());
                self.nodes[current].pattern = Some(id);
                id
            }
        }
    }

    /// The inserted patterns in insertion order, indexed by pattern id.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Number of distinct patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Scan `text`, returning one ascending hit list per pattern id.
    ///
    /// From every starting position the walk consumes bytes until it reaches
    /// a node with no matching edge or the end of the text, recording the
    /// start position for every terminal node it passes through. Hits are raw
    /// text positions; mapping them to originating lines happens at the
    /// output layer.
    pub fn scan(&self, text: &[u8]) -> Vec<Vec<usize>> {
        let mut hits = vec![Vec::new(); self.patterns.len()];
        for start in 0..text.len() {
            let mut current = ROOT;
            for &byte in &text[start..] {
                match self.nodes[current].children.get(&byte) {
                    Some(&child) => current = child,
                    None => break,
                }
                if let Some(id) = self.nodes[current].pattern {
                    hits[id].push(start);
                }
            }
        }
        hits
    }
}
