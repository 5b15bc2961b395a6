use thiserror::Error;

/// Preconditions a tree must meet before a list command can run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("No caret found in the document")]
    NoCaret,
    #[error("Expected exactly one caret, found {count}")]
    MultipleCarets { count: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown list command '{name}' (expected tab, stab or enter)")]
pub struct ParseCommandError {
    pub name: String,
}
