use crate::ast::{IdGenerator, NodeIndex, NodeKind, Tree};

/// An owned inline fragment produced by the inline parser and the scanners.
///
/// Fragments are materialized into the document [`Tree`](crate::ast::Tree)
/// once a paragraph closes, at which point each node receives its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// A code span (backtick-delimited). Content has its padding stripped.
    CodeSpan(String),
    /// A link with its rendered children (always a single `Text` for autolinks).
    Link {
        destination: String,
        title: Option<String>,
        children: Vec<InlineNode>,
    },
    /// The editor caret.
    Caret,
}

impl InlineNode {
    /// Builds the `Link` + `Text` pair every autolink scanner produces.
    pub fn autolink(destination: String, text: impl Into<String>) -> Self {
        InlineNode::Link {
            destination,
            title: None,
            children: vec![InlineNode::Text(text.into())],
        }
    }

    /// Appends this fragment (and its children) under `parent`, drawing a
    /// fresh id for every node.
    pub fn append_to(self, tree: &mut Tree, parent: NodeIndex, ids: &mut dyn IdGenerator) {
        let (kind, children) = match self {
            InlineNode::Text(s) => (NodeKind::Text(s), vec![]),
            InlineNode::CodeSpan(s) => (NodeKind::CodeSpan(s), vec![]),
            InlineNode::Caret => (NodeKind::Caret, vec![]),
            InlineNode::Link {
                destination,
                title,
                children,
            } => (NodeKind::Link { destination, title }, children),
        };
        let node = tree.append_new(parent, kind, ids.next_id());
        for child in children {
            child.append_to(tree, node, ids);
        }
    }
}
