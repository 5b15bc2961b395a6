use crate::parsing::bytes::{DOT, UNDERSCORE, is_letter_num_hyphen};

/// Checks a candidate domain against the GFM "valid domain" rule.
///
/// The domain must have at least two `.`-separated segments made of ASCII
/// letters, digits and hyphens. The underscore check on the last two
/// segments (indices above 2) is kept alongside the byte rule.
///
/// <https://github.github.com/gfm/#valid-domain>
pub fn is_valid_domain(domain: &[u8]) -> bool {
    let segments: Vec<&[u8]> = domain.split(|b| *b == DOT).collect();
    let n = segments.len();
    if n < 2 {
        return false;
    }

    for (i, segment) in segments.iter().enumerate() {
        let top_two = i == n - 2 || i == n - 1;
        for b in segment.iter().copied() {
            if !is_letter_num_hyphen(b) {
                return false;
            }
            if i > 2 && top_two && b == UNDERSCORE {
                return false;
            }
        }
    }
    true
}
