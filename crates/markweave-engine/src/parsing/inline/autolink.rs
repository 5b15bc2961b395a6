//! Autolink recognizers.
//!
//! Each scanner is a single-pass recognizer over a [`Cursor`]. `None` means
//! "no match" and leaves the cursor where it was; `Some` always comes with
//! the cursor advanced past exactly the bytes the returned node covers.

use crate::parsing::bytes::{
    AT, COLON, GREATER, LESS, SLASH, SPACE, is_ascii_punct, is_email_domain_byte,
    is_email_local_byte, is_whitespace,
};

use super::{
    cursor::Cursor, domain::is_valid_domain, encode::encode_destination, kinds::Autolink,
    types::InlineNode,
};

/// Scans a GFM bare-domain autolink (`www.example.com/path`).
///
/// - No `www.` anywhere in the remaining input: `None`.
/// - `www.` further ahead: the text before it, cursor moved up to `www.`.
/// - Candidate with an invalid domain: the whole candidate as text, consumed.
/// - Otherwise a link to `http://` + domain + path. One trailing ASCII
///   punctuation byte of a non-empty path is left unconsumed.
pub fn scan_www_autolink(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let rest = cur.rest();
    let start = cur.pos();
    let index = rest
        .windows(Autolink::WWW.len())
        .position(|w| w == Autolink::WWW)?;

    if index > 0 {
        cur.bump_n(index);
        return Some(InlineNode::Text(cur.slice(start, start + index).to_string()));
    }

    let end = rest
        .iter()
        .position(|b| is_whitespace(*b) || *b == LESS)
        .unwrap_or(rest.len());
    let url = &rest[..end];
    let slash = url.iter().position(|b| *b == SLASH).unwrap_or(url.len());
    let (domain, mut path) = url.split_at(slash);

    if !is_valid_domain(domain) {
        cur.bump_n(end);
        return Some(InlineNode::Text(cur.slice(start, start + end).to_string()));
    }

    if let Some(last) = path.last()
        && is_ascii_punct(*last)
    {
        path = &path[..path.len() - 1];
    }

    let consumed = domain.len() + path.len();
    let domain_path = cur.slice(start, start + consumed);
    let destination = encode_destination(&format!("{}{domain_path}", Autolink::HTTP));
    cur.bump_n(consumed);
    Some(InlineNode::autolink(destination, domain_path))
}

/// Scans `<local@domain>` with the cursor on the `<`.
pub fn scan_email_autolink(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let rest = cur.rest();
    if rest.first() != Some(&LESS) {
        return None;
    }
    let body = &rest[1..];

    let at = body.iter().position(|b| !is_email_local_byte(*b))?;
    if body[at] != AT || at == 0 {
        return None;
    }

    let domain = &body[at + 1..];
    let close = domain.iter().position(|b| !is_email_domain_byte(*b))?;
    if domain[close] != GREATER || close == 0 || close > Autolink::MAX_EMAIL_DOMAIN_LEN {
        return None;
    }

    let start = cur.pos() + 1;
    let address = cur.slice(start, start + at + 1 + close);
    let destination = format!("{}{address}", Autolink::MAILTO);
    let node = InlineNode::autolink(destination, address);
    // `<` + address + `>`
    cur.bump_n(address.len() + 2);
    Some(node)
}

/// Scans `<scheme:rest>` with the cursor on the `<`.
///
/// The scheme is everything before the first `:` and must be at least
/// [`Autolink::MIN_SCHEME_LEN`] bytes. A space anywhere before the closing
/// `>` rejects the whole construct.
pub fn scan_scheme_autolink(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let rest = cur.rest();
    if rest.first() != Some(&LESS) {
        return None;
    }
    let body = &rest[1..];

    let close = body.iter().position(|b| *b == GREATER || *b == SPACE)?;
    if body[close] != GREATER {
        return None;
    }

    let scheme_len = body[..close].iter().position(|b| *b == COLON)?;
    if scheme_len < Autolink::MIN_SCHEME_LEN {
        return None;
    }

    let start = cur.pos() + 1;
    let literal = cur.slice(start, start + close);
    let node = InlineNode::autolink(encode_destination(literal), literal);
    cur.bump_n(close + 2);
    Some(node)
}
