use crate::ast::NodeId;

/// Whether a command changed the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Applied,
    /// The command makes no sense at the caret; the tree is untouched.
    NotApplicable,
}

/// Result of applying a list command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub status: CommandStatus,
    /// Lists whose children changed and that are still part of the document.
    pub changed_lists: Vec<NodeId>,
    /// The block now holding the caret.
    pub caret_block: Option<NodeId>,
}

impl Patch {
    pub fn not_applicable() -> Self {
        Self {
            status: CommandStatus::NotApplicable,
            changed_lists: vec![],
            caret_block: None,
        }
    }

    pub fn is_applied(&self) -> bool {
        self.status == CommandStatus::Applied
    }
}
