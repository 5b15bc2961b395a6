/// Which character a fence is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// An opening fence line: kind, run length, indentation and info string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    pub len: usize,
    pub indent: usize,
    pub info: String,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: u8 = b'`';
    pub const TILDE: u8 = b'~';
    pub const MIN_LEN: usize = 3;

    /// Recognizes an opening fence: up to three spaces, then at least three
    /// backticks or tildes. A backtick fence's info string may not contain
    /// a backtick.
    pub fn open(line: &str) -> Option<FenceSig> {
        let (indent, kind, len) = Self::run(line)?;
        let info = line[indent + len..].trim();
        if kind == FenceKind::Backticks && info.as_bytes().contains(&Self::BACKTICK) {
            return None;
        }
        Some(FenceSig {
            kind,
            len,
            indent,
            info: info.to_string(),
        })
    }

    /// True if `line` closes the fence opened by `open`: same character, a
    /// run at least as long, nothing but whitespace after it.
    pub fn closes(open: &FenceSig, line: &str) -> bool {
        match Self::run(line) {
            Some((indent, kind, len)) => {
                kind == open.kind && len >= open.len && line[indent + len..].trim().is_empty()
            }
            None => false,
        }
    }

    fn run(line: &str) -> Option<(usize, FenceKind, usize)> {
        let b = line.as_bytes();
        let indent = b.iter().take_while(|c| **c == b' ').count();
        if indent > 3 {
            return None;
        }
        let kind = match b.get(indent)? {
            &Self::BACKTICK => FenceKind::Backticks,
            &Self::TILDE => FenceKind::Tildes,
            _ => return None,
        };
        let ch = b[indent];
        let len = b[indent..].iter().take_while(|c| **c == ch).count();
        (len >= Self::MIN_LEN).then_some((indent, kind, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        let sig = CodeFence::open("```rust").unwrap();
        assert_eq!(sig.kind, FenceKind::Backticks);
        assert_eq!(sig.len, 3);
        assert_eq!(sig.info, "rust");
    }

    #[test]
    fn detect_tilde_fence() {
        let sig = CodeFence::open("  ~~~~").unwrap();
        assert_eq!(sig.kind, FenceKind::Tildes);
        assert_eq!(sig.len, 4);
        assert_eq!(sig.indent, 2);
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::open("hello"), None);
        assert_eq!(CodeFence::open("``"), None);
        assert_eq!(CodeFence::open("``` a`b"), None);
        assert_eq!(CodeFence::open("    ```"), None);
    }

    #[test]
    fn closes_matching_fence() {
        let sig = CodeFence::open("````").unwrap();
        assert!(CodeFence::closes(&sig, "`````"));
        assert!(CodeFence::closes(&sig, "````  "));
        assert!(!CodeFence::closes(&sig, "```"));
        assert!(!CodeFence::closes(&sig, "```` x"));
    }

    #[test]
    fn does_not_close_mismatched_fence() {
        let sig = CodeFence::open("```").unwrap();
        assert!(!CodeFence::closes(&sig, "~~~"));
    }
}
