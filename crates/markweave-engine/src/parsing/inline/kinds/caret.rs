/// The editor caret as written in source text.
///
/// The glyph is recognized before every other inline construct, including
/// inside code spans, so a caret never ends up buried in literal text.
pub struct Caret;

impl Caret {
    /// U+2038 CARET.
    pub const GLYPH: &'static str = "\u{2038}";
}
