//! Letter classification tree
//!
//! For every ordered pair of dictionary words (the second one earlier in the
//! dictionary than the first), the first word is graded against the second and
//! the five classifications are threaded through a tree, one level per
//! position. Each node counts the pairs that passed through it.

use crate::core::{Feedback, FeedbackSymbol, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt::Write;

const ROOT: usize = 0;

#[derive(Debug, Clone)]
struct Node {
    /// `None` only for the root
    branch: Option<(u8, FeedbackSymbol)>,
    depth: usize,
    count: u32,
    children: Vec<usize>,
}

/// Arena-allocated tree of `(depth, letter, classification)` nodes
#[derive(Debug, Clone)]
pub struct LetterTree {
    nodes: Vec<Node>,
    index: FxHashMap<(usize, u8, FeedbackSymbol), usize>,
}

impl LetterTree {
    /// Grow the tree from every pair of `words`
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::commands::tree::LetterTree;
    /// use wordle_helper::core::Word;
    ///
    /// let words = [Word::new("crane").unwrap(), Word::new("trace").unwrap()];
    /// let tree = LetterTree::build(&words);
    ///
    /// assert_eq!(tree.pair_count(), 1);
    /// assert!(tree.render(Some(1)).ends_with(".1_t_GRAY : 1\n"));
    /// ```
    #[must_use]
    pub fn build(words: &[Word]) -> Self {
        let mut tree = Self {
            nodes: vec![Node {
                branch: None,
                depth: 0,
                count: 0,
                children: Vec::new(),
            }],
            index: FxHashMap::default(),
        };

        for (i, word) in words.iter().enumerate() {
            for earlier in &words[..i] {
                tree.insert(word, &Feedback::grade(word, earlier));
            }
        }

        log::debug!(
            "tree over {} words: {} nodes",
            words.len(),
            tree.nodes.len()
        );
        tree
    }

    fn insert(&mut self, word: &Word, feedback: &Feedback) {
        let mut current = ROOT;
        let branches = word.chars().iter().zip(feedback.symbols());
        for (depth, (&letter, &symbol)) in (1..).zip(branches) {
            current = self.child(current, letter, symbol, depth);
            self.nodes[current].count += 1;
        }
    }

    /// Existing child of `parent`, or a new one with a zero count
    fn child(&mut self, parent: usize, letter: u8, symbol: FeedbackSymbol, depth: usize) -> usize {
        if let Some(&id) = self.index.get(&(parent, letter, symbol)) {
            return id;
        }

        let id = self.nodes.len();
        self.nodes.push(Node {
            branch: Some((letter, symbol)),
            depth,
            count: 0,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        self.index.insert((parent, letter, symbol), id);
        id
    }

    /// Number of nodes, root included
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of word pairs the tree was grown from
    #[must_use]
    pub fn pair_count(&self) -> u32 {
        self.nodes[ROOT]
            .children
            .iter()
            .map(|&id| self.nodes[id].count)
            .sum()
    }

    /// Depth-first listing, children in insertion order
    ///
    /// Each line is `<dots><depth>_<letter>_<CLASS> : <count>` with one dot per
    /// level. Nodes deeper than `max_depth` are left out.
    #[must_use]
    pub fn render(&self, max_depth: Option<usize>) -> String {
        let max_depth = max_depth.unwrap_or(WORD_LENGTH);
        let mut out = String::new();
        let mut stack = vec![ROOT];

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            out.push_str(&".".repeat(node.depth));
            // Writing to a String cannot fail
            let _ = match node.branch {
                None => writeln!(out, "0_root_ROOT : {}", node.count),
                Some((letter, symbol)) => writeln!(
                    out,
                    "{}_{}_{} : {}",
                    node.depth,
                    char::from(letter),
                    class_name(symbol),
                    node.count
                ),
            };

            if node.depth < max_depth {
                stack.extend(node.children.iter().rev());
            }
        }
        out
    }
}

const fn class_name(symbol: FeedbackSymbol) -> &'static str {
    match symbol {
        FeedbackSymbol::Green => "GREEN",
        FeedbackSymbol::Yellow => "YELLOW",
        FeedbackSymbol::Gray => "GRAY",
    }
}
