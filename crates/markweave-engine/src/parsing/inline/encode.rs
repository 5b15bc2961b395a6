/// ASCII punctuation that passes through destination encoding untouched:
/// URI reserved characters plus the unreserved marks.
const PASS_THROUGH: &[u8] = b";/?:@&=+$,-_.!~*'()#";

/// Percent-encodes a link destination.
///
/// ASCII letters, digits, [`PASS_THROUGH`] punctuation and already-formed
/// `%XX` escapes are kept; every other character is encoded as UTF-8 bytes.
/// Running it over its own output changes nothing.
pub fn encode_destination(dest: &str) -> String {
    let bytes = dest.as_bytes();
    let mut out = String::with_capacity(dest.len());
    let mut buf = [0u8; 4];

    for (i, ch) in dest.char_indices() {
        if ch == '%' {
            if is_escape(bytes, i) {
                out.push('%');
            } else {
                out.push_str("%25");
            }
            continue;
        }
        if ch.is_ascii_alphanumeric() || (ch.is_ascii() && PASS_THROUGH.contains(&(ch as u8))) {
            out.push(ch);
        } else {
            out.push_str(&urlencoding::encode(ch.encode_utf8(&mut buf)));
        }
    }
    out
}

fn is_escape(bytes: &[u8], percent_at: usize) -> bool {
    matches!(
        bytes.get(percent_at + 1..percent_at + 3),
        Some([a, b]) if a.is_ascii_hexdigit() && b.is_ascii_hexdigit()
    )
}
