//! # Document Tree
//!
//! Arena-backed AST shared by the parser and the list-command engine.
//!
//! Nodes live in a `Vec` and refer to each other by [`NodeIndex`]. The parent
//! link is a plain index used for traversal only; ownership is the arena's.
//! A node detached from its parent stays in the arena but is no longer
//! reachable from the root, so it drops out of every traversal and of the
//! output document. [`Tree::compact`] drops such nodes from the arena; it
//! renumbers every [`NodeIndex`], while [`NodeId`]s are untouched.
//!
//! ## Modules
//!
//! - **`ids`**: [`NodeId`] and the injectable [`IdGenerator`] strategies
//! - **`outline`**: stable textual dump used by tests and the CLI

pub mod ids;
pub mod outline;

#[cfg(test)]
pub(crate) mod invariants;

pub use ids::{
    FixedIdGenerator, IdGenerator, NodeId, SequentialIdGenerator, TESTING_ID,
    TimestampIdGenerator,
};
pub use outline::format_outline;

use crate::parsing::rope::span::Span;

/// Text of the placeholder paragraph synthesized to keep a block well-formed.
pub const ZWSP: &str = "\u{200b}";

/// Position of a node inside its [`Tree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

/// Numbering style of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListType {
    /// `-`, `+` or `*`.
    Bullet { symbol: u8 },
    /// `1.` or `1)`.
    Ordered { start: u32, delimiter: u8 },
}

impl ListType {
    /// Marker glyph for the item at `position` (0-based) in a list of this type.
    pub fn marker_for(self, position: usize) -> String {
        match self {
            ListType::Bullet { symbol } => (symbol as char).to_string(),
            ListType::Ordered { start, delimiter } => {
                format!("{}{}", start as usize + position, delimiter as char)
            }
        }
    }
}

/// Closed set of node kinds with their kind-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    BlockQuote,
    List { list_type: ListType, tight: bool },
    ListItem { marker: String },
    Paragraph,
    CodeBlock { info: String, literal: String },
    Text(String),
    CodeSpan(String),
    Link {
        destination: String,
        title: Option<String>,
    },
    /// Editor caret. Never rendered; commands locate their target through it.
    Caret,
}

impl NodeKind {
    /// Block-level kinds may appear as children of documents, quotes and items.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            NodeKind::Document
                | NodeKind::BlockQuote
                | NodeKind::List { .. }
                | NodeKind::ListItem { .. }
                | NodeKind::Paragraph
                | NodeKind::CodeBlock { .. }
        )
    }

    pub fn is_list(&self) -> bool {
        matches!(self, NodeKind::List { .. })
    }

    pub fn is_list_item(&self) -> bool {
        matches!(self, NodeKind::ListItem { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::BlockQuote => "BlockQuote",
            NodeKind::List { .. } => "List",
            NodeKind::ListItem { .. } => "ListItem",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::CodeBlock { .. } => "CodeBlock",
            NodeKind::Text(_) => "Text",
            NodeKind::CodeSpan(_) => "CodeSpan",
            NodeKind::Link { .. } => "Link",
            NodeKind::Caret => "Caret",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    pub id: NodeId,
    pub kind: NodeKind,
    /// Source span for parsed blocks; `None` for inline and synthesized nodes.
    pub span: Option<Span>,
    parent: Option<NodeIndex>,
    children: Vec<NodeIndex>,
}

/// A document tree rooted at a [`NodeKind::Document`] node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<NodeData>,
    root: NodeIndex,
}

impl Tree {
    /// Creates a tree holding only an empty document root.
    pub fn new(root_id: NodeId) -> Self {
        let mut tree = Self {
            nodes: vec![],
            root: NodeIndex(0),
        };
        tree.root = tree.create(NodeKind::Document, root_id);
        tree
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn node(&self, ix: NodeIndex) -> &NodeData {
        &self.nodes[ix.0]
    }

    pub fn kind(&self, ix: NodeIndex) -> &NodeKind {
        &self.nodes[ix.0].kind
    }

    pub fn kind_mut(&mut self, ix: NodeIndex) -> &mut NodeKind {
        &mut self.nodes[ix.0].kind
    }

    pub fn id(&self, ix: NodeIndex) -> &NodeId {
        &self.nodes[ix.0].id
    }

    pub fn parent(&self, ix: NodeIndex) -> Option<NodeIndex> {
        self.nodes[ix.0].parent
    }

    pub fn children(&self, ix: NodeIndex) -> &[NodeIndex] {
        &self.nodes[ix.0].children
    }

    pub fn first_child(&self, ix: NodeIndex) -> Option<NodeIndex> {
        self.children(ix).first().copied()
    }

    pub fn last_child(&self, ix: NodeIndex) -> Option<NodeIndex> {
        self.children(ix).last().copied()
    }

    /// Allocates a detached node. Attach it with [`Tree::append_child`] or
    /// [`Tree::insert_child`].
    pub fn create(&mut self, kind: NodeKind, id: NodeId) -> NodeIndex {
        let ix = NodeIndex(self.nodes.len());
        self.nodes.push(NodeData {
            id,
            kind,
            span: None,
            parent: None,
            children: vec![],
        });
        ix
    }

    pub fn set_span(&mut self, ix: NodeIndex, span: Span) {
        self.nodes[ix.0].span = Some(span);
    }

    /// Creates a node with a fresh id and appends it to `parent`.
    pub fn append_new(
        &mut self,
        parent: NodeIndex,
        kind: NodeKind,
        id: NodeId,
    ) -> NodeIndex {
        let ix = self.create(kind, id);
        self.append_child(parent, ix);
        ix
    }

    /// Appends a detached node as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeIndex, child: NodeIndex) {
        let at = self.children(parent).len();
        self.insert_child(parent, at, child);
    }

    /// Inserts a detached node at `position` among the children of `parent`.
    pub fn insert_child(&mut self, parent: NodeIndex, position: usize, child: NodeIndex) {
        debug_assert!(self.nodes[child.0].parent.is_none(), "node already attached");
        debug_assert!(child != self.root, "root cannot be re-parented");
        self.nodes[parent.0].children.insert(position, child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Inserts a detached node right after `sibling`.
    pub fn insert_after(&mut self, sibling: NodeIndex, node: NodeIndex) {
        let (Some(parent), Some(at)) = (self.parent(sibling), self.index_in_parent(sibling))
        else {
            debug_assert!(false, "insert_after requires an attached sibling");
            return;
        };
        self.insert_child(parent, at + 1, node);
    }

    /// Unlinks a node from its parent. The subtree below it stays intact.
    pub fn detach(&mut self, ix: NodeIndex) {
        if let Some(parent) = self.nodes[ix.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != ix);
        }
    }

    /// Detaches `node` and appends it to `new_parent`, keeping its id.
    pub fn move_to(&mut self, node: NodeIndex, new_parent: NodeIndex) {
        self.detach(node);
        self.append_child(new_parent, node);
    }

    pub fn index_in_parent(&self, ix: NodeIndex) -> Option<usize> {
        let parent = self.parent(ix)?;
        self.children(parent).iter().position(|c| *c == ix)
    }

    pub fn previous_sibling(&self, ix: NodeIndex) -> Option<NodeIndex> {
        let parent = self.parent(ix)?;
        let at = self.index_in_parent(ix)?;
        at.checked_sub(1).map(|p| self.children(parent)[p])
    }

    /// Siblings after `ix`, in document order.
    pub fn following_siblings(&self, ix: NodeIndex) -> Vec<NodeIndex> {
        match (self.parent(ix), self.index_in_parent(ix)) {
            (Some(parent), Some(at)) => self.children(parent)[at + 1..].to_vec(),
            _ => vec![],
        }
    }

    /// Walks from `ix` up to the root, starting with `ix` itself.
    pub fn ancestors(&self, ix: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        std::iter::successors(Some(ix), move |n| self.parent(*n))
    }

    /// Pre-order traversal of the subtree rooted at `ix`.
    pub fn descendants(&self, ix: NodeIndex) -> Vec<NodeIndex> {
        let mut out = vec![];
        let mut stack = vec![ix];
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.children(n).iter().rev());
        }
        out
    }

    /// Every node reachable from the root, in document order.
    pub fn reachable(&self) -> Vec<NodeIndex> {
        self.descendants(self.root)
    }

    pub fn find_by_id(&self, id: &str) -> Option<NodeIndex> {
        self.reachable()
            .into_iter()
            .find(|ix| self.id(*ix).as_str() == id)
    }

    pub fn find_all(&self, pred: impl Fn(&NodeKind) -> bool) -> Vec<NodeIndex> {
        self.reachable()
            .into_iter()
            .filter(|ix| pred(self.kind(*ix)))
            .collect()
    }

    /// Number of nodes held by the arena, detached ones included.
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    /// Rebuilds the arena from the reachable nodes only, in document order.
    ///
    /// Every previously handed out [`NodeIndex`] is invalid afterwards.
    pub fn compact(&mut self) {
        let order = self.reachable();
        if order.len() == self.nodes.len() {
            return;
        }
        let mut remap = vec![None; self.nodes.len()];
        for (new, old) in order.iter().enumerate() {
            remap[old.0] = Some(NodeIndex(new));
        }
        let mut old_nodes: Vec<Option<NodeData>> =
            std::mem::take(&mut self.nodes).into_iter().map(Some).collect();
        self.nodes = order
            .iter()
            .filter_map(|old| old_nodes[old.0].take())
            .map(|mut data| {
                data.parent = data.parent.and_then(|p| remap[p.0]);
                data.children = data.children.iter().filter_map(|c| remap[c.0]).collect();
                data
            })
            .collect();
        self.root = NodeIndex(0);
        log::debug!("compacted tree arena to {} nodes", self.nodes.len());
    }

    /// Concatenated text of every `Text`, `CodeSpan` and `CodeBlock` below `ix`.
    pub fn text_content(&self, ix: NodeIndex) -> String {
        let mut out = String::new();
        for n in self.descendants(ix) {
            match self.kind(n) {
                NodeKind::Text(s) | NodeKind::CodeSpan(s) => out.push_str(s),
                NodeKind::CodeBlock { literal, .. } => out.push_str(literal),
                _ => {}
            }
        }
        out
    }
}
