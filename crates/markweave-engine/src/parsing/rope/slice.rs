use xi_rope::Rope;

/// Cuts the rope to at most `max` bytes, backing off to the nearest char
/// boundary below `max`. Returns `None` when the rope already fits.
pub fn truncate_to(rope: &Rope, max: usize) -> Option<Rope> {
    if rope.len() <= max {
        return None;
    }
    let text = rope.slice_to_cow(0..rope.len());
    let mut cut = max;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    Some(Rope::from(&text[..cut]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitting_rope_is_left_alone() {
        assert!(truncate_to(&Rope::from("abc"), 3).is_none());
    }

    #[test]
    fn cut_backs_off_to_char_boundary() {
        // "é" is two bytes, so a cut at 2 would split it
        let cut = truncate_to(&Rope::from("aéb"), 2).map(|r| r.slice_to_cow(0..r.len()).into_owned());
        assert_eq!(cut.as_deref(), Some("a"));
    }

    #[test]
    fn cut_on_boundary_is_exact() {
        let cut = truncate_to(&Rope::from("hello world"), 5).map(|r| r.slice_to_cow(0..r.len()).into_owned());
        assert_eq!(cut.as_deref(), Some("hello"));
    }
}
