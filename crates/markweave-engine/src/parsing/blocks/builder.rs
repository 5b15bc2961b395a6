use crate::{
    ast::{IdGenerator, NodeId, NodeIndex, NodeKind, Tree},
    parsing::{ParseOptions, inline::parse_inline, rope::span::Span},
};

use super::{
    classify::LineClass,
    kinds::{BlockQuote, CodeFence, ListMarker, MarkerMatch},
    open::{ContainerOpen, try_open_container},
    types::{ContainerFrame, LeafState, OpenContainer},
};

/// Builds a document [`Tree`] one classified line at a time.
///
/// Keeps a stack of open containers (document, block quotes, lists, list
/// items) and at most one open leaf. Each line first tries to continue the
/// open containers, then may open new ones, then feeds the leaf.
pub struct BlockBuilder<'a> {
    tree: Tree,
    ids: &'a mut dyn IdGenerator,
    options: ParseOptions,
    open: Vec<OpenContainer>,
    leaf: LeafState,
    prev_blank: bool,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(options: ParseOptions, ids: &'a mut dyn IdGenerator) -> Self {
        let tree = Tree::new(ids.next_id());
        let root = OpenContainer {
            frame: ContainerFrame::Document,
            node: tree.root(),
            start: 0,
            last_line_end: 0,
        };
        Self {
            tree,
            ids,
            options,
            open: vec![root],
            leaf: LeafState::None,
            prev_blank: false,
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        self.push_line(c);
        for container in &mut self.open {
            container.last_line_end = c.line.end;
        }
    }

    pub fn finish(mut self) -> Tree {
        // EOF flush
        self.close_leaf();
        while self.open.len() > 1 {
            self.close_container();
        }
        let root = &self.open[0];
        self.tree.set_span(
            root.node,
            Span {
                start: root.start,
                end: root.last_line_end,
            },
        );
        self.tree
    }

    fn push_line(&mut self, c: &LineClass) {
        let mut rest = c.text.as_str();
        let mut matched = 1;

        for container in &self.open[1..] {
            match container.frame {
                ContainerFrame::BlockQuote => match BlockQuote::strip_one(rest) {
                    Some(n) => rest = &rest[n..],
                    None => break,
                },
                ContainerFrame::ListItem { content_indent } => {
                    if c.is_blank || is_blank(rest) {
                        rest = "";
                    } else if indent_of(rest) >= content_indent {
                        rest = &rest[content_indent..];
                    } else {
                        break;
                    }
                }
                ContainerFrame::List { .. } | ContainerFrame::Document => {}
            }
            matched += 1;
        }
        let all_matched = matched == self.open.len();

        if let LeafState::Fence { sig, lines, .. } = &mut self.leaf {
            if all_matched {
                if CodeFence::closes(sig, rest) {
                    self.extend_leaf(c.line.end);
                    self.close_leaf();
                } else {
                    let strip = indent_of(rest).min(sig.indent);
                    lines.push(rest[strip..].to_string());
                    self.extend_leaf(c.line.end);
                }
                self.prev_blank = false;
                return;
            }
            // Unterminated fence ends with its container
            self.close_leaf();
        }

        let paragraph_open = matches!(self.leaf, LeafState::Paragraph { .. });
        let mut opens: Vec<ContainerOpen> = vec![];
        loop {
            let interrupting = paragraph_open && all_matched && opens.is_empty();
            match try_open_container(rest, interrupting) {
                Some(ContainerOpen::BlockQuote { consumed }) => {
                    rest = &rest[consumed..];
                    opens.push(ContainerOpen::BlockQuote { consumed });
                }
                Some(ContainerOpen::ListItem(m)) => {
                    rest = if m.empty { "" } else { &rest[m.content_indent..] };
                    opens.push(ContainerOpen::ListItem(m));
                }
                None => break,
            }
        }

        // Lazy continuation: a plain line keeps an open paragraph going even
        // when its containers did not match.
        if opens.is_empty()
            && !all_matched
            && paragraph_open
            && !is_blank(rest)
            && CodeFence::open(rest).is_none()
        {
            self.extend_paragraph(rest, c.line.end);
            self.prev_blank = false;
            return;
        }

        // A list whose item did not continue stays open only for a sibling item.
        if let ContainerFrame::List { list_type } = self.open[matched - 1].frame {
            let sibling = matches!(
                opens.first(),
                Some(ContainerOpen::ListItem(m)) if ListMarker::same_list(list_type, m.list_type)
            );
            if !sibling {
                matched -= 1;
            }
        }

        if matched < self.open.len() || !opens.is_empty() {
            self.close_leaf();
        }
        while self.open.len() > matched {
            self.close_container();
        }

        let opened_any = !opens.is_empty();
        for open in opens {
            match open {
                ContainerOpen::BlockQuote { .. } => {
                    self.note_block_start();
                    self.open_container(ContainerFrame::BlockQuote, NodeKind::BlockQuote, c);
                }
                ContainerOpen::ListItem(m) => self.open_list_item(m, c),
            }
        }

        if is_blank(rest) {
            self.close_leaf();
            self.prev_blank = !opened_any;
            return;
        }

        if let Some(sig) = CodeFence::open(rest) {
            self.close_leaf();
            self.note_block_start();
            self.leaf = LeafState::Fence {
                id: self.ids.next_id(),
                sig,
                lines: vec![],
                start: c.line.start,
                last_line_end: c.line.end,
            };
        } else if matches!(self.leaf, LeafState::Paragraph { .. }) {
            self.extend_paragraph(rest, c.line.end);
        } else {
            self.note_block_start();
            self.leaf = LeafState::Paragraph {
                id: self.ids.next_id(),
                lines: vec![rest.trim_start().to_string()],
                start: c.line.start,
                last_line_end: c.line.end,
            };
        }
        self.prev_blank = false;
    }

    fn open_list_item(&mut self, m: MarkerMatch, c: &LineClass) {
        let top = self.top();
        let reuse = matches!(
            top.frame,
            ContainerFrame::List { list_type } if ListMarker::same_list(list_type, m.list_type)
        );
        if reuse {
            if self.prev_blank {
                self.mark_loose(top.node);
            }
        } else {
            self.note_block_start();
            self.open_container(
                ContainerFrame::List {
                    list_type: m.list_type,
                },
                NodeKind::List {
                    list_type: m.list_type,
                    tight: true,
                },
                c,
            );
        }
        self.open_container(
            ContainerFrame::ListItem {
                content_indent: m.content_indent,
            },
            NodeKind::ListItem { marker: m.marker },
            c,
        );
    }

    fn open_container(&mut self, frame: ContainerFrame, kind: NodeKind, c: &LineClass) {
        let parent = self.top().node;
        let node = self.tree.append_new(parent, kind, self.ids.next_id());
        self.open.push(OpenContainer {
            frame,
            node,
            start: c.line.start,
            last_line_end: c.line.end,
        });
    }

    fn close_container(&mut self) {
        self.close_leaf();
        if let Some(container) = self.open.pop() {
            self.tree.set_span(
                container.node,
                Span {
                    start: container.start,
                    end: container.last_line_end,
                },
            );
        }
    }

    /// A block after a blank line inside a list item that already has
    /// content makes the item's list loose.
    fn note_block_start(&mut self) {
        if !self.prev_blank || self.open.len() < 2 {
            return;
        }
        let top = self.top();
        if matches!(top.frame, ContainerFrame::ListItem { .. })
            && !self.tree.children(top.node).is_empty()
        {
            let list = self.open[self.open.len() - 2].node;
            self.mark_loose(list);
        }
    }

    fn mark_loose(&mut self, list: NodeIndex) {
        if let NodeKind::List { tight, .. } = self.tree.kind_mut(list) {
            *tight = false;
        }
    }

    fn top(&self) -> OpenContainer {
        // The document frame is never popped
        self.open[self.open.len() - 1].clone()
    }

    fn extend_paragraph(&mut self, rest: &str, line_end: usize) {
        if let LeafState::Paragraph { lines, .. } = &mut self.leaf {
            lines.push(rest.trim_start().to_string());
        }
        self.extend_leaf(line_end);
    }

    fn extend_leaf(&mut self, line_end: usize) {
        match &mut self.leaf {
            LeafState::Paragraph { last_line_end, .. } | LeafState::Fence { last_line_end, .. } => {
                *last_line_end = line_end;
            }
            LeafState::None => {}
        }
    }

    fn close_leaf(&mut self) {
        let parent = self.top().node;
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::Paragraph {
                id,
                lines,
                start,
                last_line_end,
            } => {
                let para = self.append_leaf(parent, NodeKind::Paragraph, id, start, last_line_end);
                let content = lines.join("\n");
                for node in parse_inline(content.trim_end(), &self.options) {
                    node.append_to(&mut self.tree, para, &mut *self.ids);
                }
            }
            LeafState::Fence {
                id,
                sig,
                lines,
                start,
                last_line_end,
            } => {
                let literal = lines.iter().map(|l| format!("{l}\n")).collect();
                let kind = NodeKind::CodeBlock {
                    info: sig.info,
                    literal,
                };
                self.append_leaf(parent, kind, id, start, last_line_end);
            }
            LeafState::None => {}
        }
    }

    fn append_leaf(
        &mut self,
        parent: NodeIndex,
        kind: NodeKind,
        id: NodeId,
        start: usize,
        end: usize,
    ) -> NodeIndex {
        let node = self.tree.append_new(parent, kind, id);
        self.tree.set_span(node, Span { start, end });
        node
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn indent_of(s: &str) -> usize {
    s.bytes().take_while(|b| *b == b' ').count()
}
