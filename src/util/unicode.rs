use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells <= 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Keep the rightmost part of `s` that fits in `max_cells`, so the end of
/// the text (where typing happens) stays visible.
pub fn tail_to_width(s: &str, max_cells: usize) -> &str {
    let mut width = 0;
    let mut start = s.len();
    for (i, grapheme) in s.grapheme_indices(true).rev() {
        let gw = display_width(grapheme);
        if width + gw > max_cells {
            break;
        }
        width += gw;
        start = i;
    }
    &s[start..]
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    if let Some((i, _)) = s[byte_offset..].grapheme_indices(true).nth(1) {
        return Some(byte_offset + i);
    }
    Some(s.len())
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// Display column of a byte offset
pub fn byte_offset_to_display_col(s: &str, byte_offset: usize) -> usize {
    display_width(&s[..byte_offset.min(s.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("Socks"), 5);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Passport", 20), "Passport");
        assert_eq!(truncate_to_width("Passport", 5), "Pass\u{2026}");
        assert_eq!(truncate_to_width("Passport", 1), "\u{2026}");
        assert_eq!(truncate_to_width("Passport", 0), "");
        // Wide chars are never split
        assert_eq!(truncate_to_width("日本語", 4), "日\u{2026}");
    }

    #[test]
    fn test_tail_to_width() {
        assert_eq!(tail_to_width("sunscreen", 4), "reen");
        assert_eq!(tail_to_width("hat", 10), "hat");
        assert_eq!(tail_to_width("日本語", 5), "本語");
        assert_eq!(tail_to_width("hat", 0), "");
    }

    #[test]
    fn test_grapheme_boundaries() {
        let s = "ae\u{301}b"; // a, e + combining acute, b
        assert_eq!(next_grapheme_boundary(s, 0), Some(1));
        assert_eq!(next_grapheme_boundary(s, 1), Some(4));
        assert_eq!(next_grapheme_boundary(s, 4), Some(5));
        assert_eq!(next_grapheme_boundary(s, 5), None);
        assert_eq!(prev_grapheme_boundary(s, 5), Some(4));
        assert_eq!(prev_grapheme_boundary(s, 4), Some(1));
        assert_eq!(prev_grapheme_boundary(s, 0), None);
    }

    #[test]
    fn test_byte_offset_to_display_col() {
        assert_eq!(byte_offset_to_display_col("日本", 3), 2);
        assert_eq!(byte_offset_to_display_col("abc", 10), 3);
    }
}
