//! Single-byte predicates shared by the block and inline scanners.

pub const SPACE: u8 = b' ';
pub const LESS: u8 = b'<';
pub const GREATER: u8 = b'>';
pub const SLASH: u8 = b'/';
pub const DOT: u8 = b'.';
pub const COLON: u8 = b':';
pub const AT: u8 = b'@';
pub const UNDERSCORE: u8 = b'_';
pub const HYPHEN: u8 = b'-';

/// Space, tab, newline, vertical tab, form feed or carriage return.
#[must_use]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

#[must_use]
pub fn is_ascii_punct(b: u8) -> bool {
    b.is_ascii_punctuation()
}

#[must_use]
pub fn is_letter_num_hyphen(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == HYPHEN
}

/// Bytes allowed in the local part of an email autolink besides
/// letters, digits and hyphens.
pub const EMAIL_LOCAL_PUNCT: &[u8] = b".!#$%&'*+/=?^_`{|}~";

#[must_use]
pub fn is_email_local_byte(b: u8) -> bool {
    is_letter_num_hyphen(b) || EMAIL_LOCAL_PUNCT.contains(&b)
}

#[must_use]
pub fn is_email_domain_byte(b: u8) -> bool {
    is_letter_num_hyphen(b) || b == DOT
}
