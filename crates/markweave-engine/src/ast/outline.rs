use std::fmt::Write;

use super::{ListType, NodeIndex, NodeKind, Tree};

/// Renders the reachable tree as one line per node, children indented by two
/// spaces. With `show_ids` every line ends in ` #<id>`.
///
/// ```text
/// Document
///   List * tight
///     ListItem *
///       Paragraph
///         Text "foo"
/// ```
pub fn format_outline(tree: &Tree, show_ids: bool) -> String {
    let mut out = String::new();
    write_node(tree, tree.root(), 0, show_ids, &mut out);
    out
}

fn write_node(tree: &Tree, ix: NodeIndex, depth: usize, show_ids: bool, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(&describe(tree.kind(ix)));
    if show_ids {
        let _ = write!(out, " #{}", tree.id(ix));
    }
    out.push('\n');
    for child in tree.children(ix) {
        write_node(tree, *child, depth + 1, show_ids, out);
    }
}

fn describe(kind: &NodeKind) -> String {
    match kind {
        NodeKind::List { list_type, tight } => {
            let marker = match list_type {
                ListType::Bullet { symbol } => (*symbol as char).to_string(),
                ListType::Ordered { start, delimiter } => {
                    format!("{start}{}", *delimiter as char)
                }
            };
            let spacing = if *tight { "tight" } else { "loose" };
            format!("List {marker} {spacing}")
        }
        NodeKind::ListItem { marker } => format!("ListItem {marker}"),
        NodeKind::CodeBlock { info, literal } => format!("CodeBlock {info:?} {literal:?}"),
        NodeKind::Text(s) => format!("Text {s:?}"),
        NodeKind::CodeSpan(s) => format!("CodeSpan {s:?}"),
        NodeKind::Link { destination, title } => match title {
            Some(t) => format!("Link {destination:?} {t:?}"),
            None => format!("Link {destination:?}"),
        },
        other => other.name().to_string(),
    }
}
