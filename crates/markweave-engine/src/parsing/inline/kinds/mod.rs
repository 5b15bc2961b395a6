//! # Inline Kinds
//!
//! Marker types holding the delimiters and limits of each inline construct.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Autolink`**: `www.` prefix, `http://`/`mailto:` schemes, length limits
//! - **`Caret`**: the `‸` glyph editors use to mark the cursor
//!
//! Scanners in `autolink.rs` and `parser.rs` read their delimiters and limits
//! from these types.

pub mod autolink;
pub mod caret;
pub mod code_span;

pub use autolink::Autolink;
pub use caret::Caret;
pub use code_span::CodeSpan;
