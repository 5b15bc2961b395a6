pub mod block_quote;
pub mod code_fence;
pub mod list_marker;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use list_marker::{ListMarker, MarkerMatch};
