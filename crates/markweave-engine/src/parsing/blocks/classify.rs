use crate::parsing::rope::{lines::LineRef, span::Span};

/// Columns a tab advances to when expanding leading indentation.
pub const TAB_STOP: usize = 4;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Line text without its line ending, leading tabs expanded to spaces.
    pub text: String,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let trimmed = lr.text.trim_end_matches(['\r', '\n']);
        LineClass {
            line: lr.span,
            is_blank: trimmed.trim().is_empty(),
            text: expand_leading_tabs(trimmed),
        }
    }
}

/// Replaces tabs in the leading whitespace with spaces up to the next tab
/// stop, so indentation can be measured and sliced in bytes.
fn expand_leading_tabs(s: &str) -> String {
    let lead = s.len() - s.trim_start_matches([' ', '\t']).len();
    if !s[..lead].contains('\t') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + TAB_STOP);
    for ch in s[..lead].chars() {
        if ch == '\t' {
            let pad = TAB_STOP - out.len() % TAB_STOP;
            out.push_str(&" ".repeat(pad));
        } else {
            out.push(ch);
        }
    }
    out.push_str(&s[lead..]);
    out
}
