//! # Parsing
//!
//! Markdown source to document [`Tree`].
//!
//! Block structure is recognized line by line (`blocks`), and each paragraph
//! runs through the inline parser (`inline`) when it closes. Every node gets
//! its id from the [`IdGenerator`] passed in, so callers choose between real
//! timestamp ids and deterministic ones.

pub mod blocks;
pub mod bytes;
pub mod inline;
pub mod rope;


use xi_rope::Rope;

use crate::ast::{IdGenerator, Tree};
use blocks::{BlockBuilder, MarkdownLineClassifier};
use rope::{lines_with_spans, truncate_to};

/// Parser switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Recognize bare `www.` domains as links.
    pub gfm_autolink: bool,
    /// Recognize `<scheme:...>` and `<local@domain>` as links.
    pub autolink: bool,
    /// Inputs longer than this are cut at the nearest char boundary below it.
    pub max_input_bytes: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            gfm_autolink: true,
            autolink: true,
            max_input_bytes: None,
        }
    }
}

/// Parses a whole document held in a rope.
pub fn parse_document(rope: &Rope, options: &ParseOptions, ids: &mut dyn IdGenerator) -> Tree {
    if let Some(max) = options.max_input_bytes
        && let Some(cut) = truncate_to(rope, max)
    {
        log::warn!("input of {} bytes truncated to {}", rope.len(), cut.len());
        return build(&cut, options, ids);
    }
    build(rope, options, ids)
}

/// Convenience wrapper over [`parse_document`] for plain strings.
pub fn parse(text: &str, options: &ParseOptions, ids: &mut dyn IdGenerator) -> Tree {
    parse_document(&Rope::from(text), options, ids)
}

fn build(rope: &Rope, options: &ParseOptions, ids: &mut dyn IdGenerator) -> Tree {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new(options.clone(), ids);

    let mut lines = 0;
    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
        lines += 1;
    }

    let tree = builder.finish();
    log::debug!(
        "parsed {lines} lines into {} nodes",
        tree.reachable().len()
    );
    tree
}
