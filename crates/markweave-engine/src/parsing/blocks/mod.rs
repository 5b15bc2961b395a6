//! # Block Parsing
//!
//! Two-phase block parsing over a container stack.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    holding local facts (span, blank status, tab-expanded text)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps the stack of
//!    open containers and writes nodes into the document `Tree` as blocks
//!    open and close
//!
//! ## Modules
//!
//! - **`types`**: builder state (`ContainerFrame`, `OpenContainer`, `LeafState`)
//! - **`kinds`**: block-specific types with owned delimiters (BlockQuote, CodeFence, ListMarker)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open_container` detection of container openers
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Nesting depth is unbounded (lists in blockquotes in lists, etc.)
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Every block node carries the byte span of the lines it was built from

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::ContainerFrame;
