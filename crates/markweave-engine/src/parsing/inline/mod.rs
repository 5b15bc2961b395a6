//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the joined
//! content of each paragraph once the paragraph closes.
//!
//! The parser walks a [`Cursor`](cursor::Cursor) and tries constructs in
//! precedence order:
//! - The caret glyph `‸` becomes a `Caret` node wherever it appears
//! - Code spans suppress all other inline parsing inside them
//! - `<...>` is tried as an email autolink, then as a scheme autolink
//! - Plain text runs are scanned for GFM `www.` autolinks
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, CodeSpan, Link, Caret)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`autolink`**: the three autolink scanners
//! - **`domain`**: GFM valid-domain check used by the `www.` scanner
//! - **`encode`**: link destination percent-encoding
//! - **`parser`**: `parse_inline()` main entry point
//!
//! ## Failure Model
//!
//! Scanners never fail hard. A rejected construct leaves the cursor where it
//! was and the text falls through as plain text.

pub mod autolink;
pub mod cursor;
pub mod domain;
pub mod encode;
pub mod kinds;
pub mod parser;
pub mod types;

pub use autolink::{scan_email_autolink, scan_scheme_autolink, scan_www_autolink};
pub use cursor::Cursor;
pub use domain::is_valid_domain;
pub use encode::encode_destination;
pub use parser::{expand_www_autolinks, parse_inline};
pub use types::InlineNode;
