use super::kinds::{BlockQuote, ListMarker, MarkerMatch};

/// A container opener found at the start of a line's remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerOpen {
    /// `>` prefix; `consumed` bytes belong to the prefix.
    BlockQuote { consumed: usize },
    /// A list item marker.
    ListItem(MarkerMatch),
}

/// Tries to open a container at the start of `rest`.
///
/// Blockquotes win over list items. When `interrupting` a paragraph, an
/// empty list item does not count, so `-` alone under a paragraph line
/// stays paragraph text.
pub fn try_open_container(rest: &str, interrupting: bool) -> Option<ContainerOpen> {
    if let Some(consumed) = BlockQuote::strip_one(rest) {
        return Some(ContainerOpen::BlockQuote { consumed });
    }
    match ListMarker::parse(rest) {
        Some(m) if !(interrupting && m.empty) => Some(ContainerOpen::ListItem(m)),
        _ => None,
    }
}
