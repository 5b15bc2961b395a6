use super::{
    autolink::{scan_email_autolink, scan_scheme_autolink, scan_www_autolink},
    cursor::Cursor,
    kinds::{Caret, CodeSpan},
    types::InlineNode,
};
use crate::parsing::{ParseOptions, bytes::LESS};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Precedence
/// 1. The caret glyph, everywhere.
/// 2. Code spans, which suppress everything but the caret inside them.
/// 3. `<...>` autolinks: email first, then scheme.
///
/// Plain-text runs between these constructs go through the `www.` scanner
/// when GFM autolinks are enabled. Adjacent text nodes are merged.
pub fn parse_inline(s: &str, options: &ParseOptions) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    while !cur.eof() {
        let start = cur.pos();
        let nodes = if cur.starts_with(Caret::GLYPH.as_bytes()) {
            cur.bump_n(Caret::GLYPH.len());
            Some(vec![InlineNode::Caret])
        } else if cur.peek() == Some(CodeSpan::TICK) {
            let parsed = try_parse_code_span(&mut cur);
            if parsed.is_none() {
                // An unmatched backtick run is literal as a whole
                while cur.peek() == Some(CodeSpan::TICK) {
                    cur.bump();
                }
            }
            parsed
        } else if options.autolink && cur.peek() == Some(LESS) {
            scan_email_autolink(&mut cur)
                .or_else(|| scan_scheme_autolink(&mut cur))
                .map(|n| vec![n])
        } else {
            None
        };

        match nodes {
            Some(nodes) => {
                flush_text(&mut out, cur.slice(text_start, start), options);
                for node in nodes {
                    push(&mut out, node);
                }
                text_start = cur.pos();
            }
            None if cur.pos() == start => {
                cur.bump();
            }
            None => {}
        }
    }

    flush_text(&mut out, cur.slice(text_start, cur.pos()), options);
    out
}

/// Splits a plain-text run into text and `www.` autolinks.
pub fn expand_www_autolinks(text: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(text);
    let mut out = vec![];
    while !cur.eof() {
        match scan_www_autolink(&mut cur) {
            Some(node) => push(&mut out, node),
            None => {
                push(&mut out, InlineNode::Text(cur.slice(cur.pos(), text.len()).to_string()));
                break;
            }
        }
    }
    out
}

fn flush_text(out: &mut Vec<InlineNode>, text: &str, options: &ParseOptions) {
    if text.is_empty() {
        return;
    }
    if options.gfm_autolink {
        for node in expand_www_autolinks(text) {
            push(out, node);
        }
    } else {
        push(out, InlineNode::Text(text.to_string()));
    }
}

/// Appends a node, merging it into a preceding text node when both are text.
fn push(out: &mut Vec<InlineNode>, node: InlineNode) {
    if let InlineNode::Text(s) = &node
        && let Some(InlineNode::Text(prev)) = out.last_mut()
    {
        prev.push_str(s);
        return;
    }
    out.push(node);
}

/// Attempts to parse a code span starting at the current position.
///
/// The closing run must have exactly as many backticks as the opening one.
/// A caret inside the span splits it into code, caret, code.
/// Returns `None` and restores the cursor if the span isn't closed.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<Vec<InlineNode>> {
    let saved = cur.clone();
    let mut ticks = 0;
    while cur.peek() == Some(CodeSpan::TICK) {
        cur.bump();
        ticks += 1;
    }
    let inner_start = cur.pos();

    let mut inner_end = None;
    while !cur.eof() {
        if cur.peek() != Some(CodeSpan::TICK) {
            cur.bump();
            continue;
        }
        let run_start = cur.pos();
        let mut run = 0;
        while cur.peek() == Some(CodeSpan::TICK) {
            cur.bump();
            run += 1;
        }
        if run == ticks {
            inner_end = Some(run_start);
            break;
        }
    }

    let Some(inner_end) = inner_end else {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    };

    let code = CodeSpan::strip(cur.slice(inner_start, inner_end)).replace('\n', " ");
    let mut nodes = vec![];
    for (i, piece) in code.split(Caret::GLYPH).enumerate() {
        if i > 0 {
            nodes.push(InlineNode::Caret);
        }
        if !piece.is_empty() {
            nodes.push(InlineNode::CodeSpan(piece.to_string()));
        }
    }
    Some(nodes)
}
