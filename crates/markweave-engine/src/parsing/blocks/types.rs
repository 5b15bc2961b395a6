use crate::ast::{ListType, NodeId, NodeIndex};

use super::kinds::FenceSig;

/// A frame in the container stack representing a nesting level.
///
/// Containers wrap leaf blocks (paragraphs, code blocks) and can nest arbitrarily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerFrame {
    /// The document root; always at the bottom of the stack.
    Document,
    /// A blockquote container; continues on lines with a `>` prefix.
    BlockQuote,
    /// A list; continues as long as its items do or a sibling item opens.
    List { list_type: ListType },
    /// A list item; continues on blank lines and lines indented past the marker.
    ListItem { content_indent: usize },
}

/// An open container: its frame and the tree node it builds.
#[derive(Debug, Clone)]
pub struct OpenContainer {
    pub frame: ContainerFrame,
    pub node: NodeIndex,
    pub start: usize,
    pub last_line_end: usize,
}

/// The leaf block currently accumulating lines, if any.
///
/// Leaves take their id when they open so ids follow document order.
#[derive(Debug, Clone)]
pub enum LeafState {
    None,
    Paragraph {
        id: NodeId,
        lines: Vec<String>,
        start: usize,
        last_line_end: usize,
    },
    Fence {
        id: NodeId,
        sig: FenceSig,
        lines: Vec<String>,
        start: usize,
        last_line_end: usize,
    },
}
