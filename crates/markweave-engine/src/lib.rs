pub mod ast;
pub mod editing;
pub mod parsing;

// Re-export key types for easier usage
pub use ast::{IdGenerator, NodeId, NodeIndex, NodeKind, Tree, format_outline};
pub use editing::{CommandError, CommandStatus, ListCommand, Patch, apply_list_command};
pub use parsing::{ParseOptions, parse, parse_document};
