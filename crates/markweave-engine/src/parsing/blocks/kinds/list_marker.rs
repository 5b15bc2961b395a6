use crate::ast::ListType;

/// A list item opener found at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatch {
    pub list_type: ListType,
    /// The glyph as written: `-`, `*`, `+`, `1.`, `12)`.
    pub marker: String,
    /// Columns from the start of the line to the item's content.
    pub content_indent: usize,
    /// True when nothing follows the marker on this line.
    pub empty: bool,
}

/// List item markers: bullets `-`, `+`, `*` and ordered `1.` / `1)`.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: &'static [u8] = b"-+*";
    pub const ORDERED_DELIMITERS: &'static [u8] = b".)";
    pub const MAX_ORDINAL_DIGITS: usize = 9;

    /// Recognizes a list marker after at most three spaces of indentation.
    ///
    /// The marker must be followed by a space or the end of the line. One to
    /// four spaces after the marker belong to the marker; five or more mean
    /// the content starts one column after it.
    pub fn parse(line: &str) -> Option<MarkerMatch> {
        let b = line.as_bytes();
        let indent = b.iter().take_while(|c| **c == b' ').count();
        if indent > 3 {
            return None;
        }

        let (list_type, marker_end) = match b.get(indent)? {
            c if Self::BULLETS.contains(c) => (ListType::Bullet { symbol: *c }, indent + 1),
            c if c.is_ascii_digit() => {
                let digits = b[indent..].iter().take_while(|c| c.is_ascii_digit()).count();
                if digits > Self::MAX_ORDINAL_DIGITS {
                    return None;
                }
                let delimiter = *b.get(indent + digits)?;
                if !Self::ORDERED_DELIMITERS.contains(&delimiter) {
                    return None;
                }
                let start = line[indent..indent + digits].parse().ok()?;
                (ListType::Ordered { start, delimiter }, indent + digits + 1)
            }
            _ => return None,
        };

        let spaces = b[marker_end..].iter().take_while(|c| **c == b' ').count();
        let empty = marker_end + spaces == b.len();
        if spaces == 0 && !empty {
            return None;
        }
        let content_indent = if empty || spaces > 4 {
            marker_end + 1
        } else {
            marker_end + spaces
        };

        Some(MarkerMatch {
            list_type,
            marker: line[indent..marker_end].to_string(),
            content_indent,
            empty,
        })
    }

    /// Items continue a list only when they use the same bullet symbol or the
    /// same ordered delimiter.
    pub fn same_list(a: ListType, b: ListType) -> bool {
        match (a, b) {
            (ListType::Bullet { symbol: x }, ListType::Bullet { symbol: y }) => x == y,
            (
                ListType::Ordered { delimiter: x, .. },
                ListType::Ordered { delimiter: y, .. },
            ) => x == y,
            _ => false,
        }
    }
}
