/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: the caret is the only thing recognized inside
/// them, every other inline construct is left as literal code.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Strips one leading and one trailing space when both are present and
    /// the content is not made of spaces only.
    pub fn strip(content: &str) -> &str {
        let b = content.as_bytes();
        if b.len() >= 2 && b[0] == b' ' && b[b.len() - 1] == b' ' && b.iter().any(|c| *c != b' ') {
            &content[1..content.len() - 1]
        } else {
            content
        }
    }
}
