use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` so it fits in `width` terminal cells, marking the cut with "…".
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if s.width() <= width {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut used = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width + 1 > width {
            break;
        }
        used += char_width;
        result.push(c);
    }
    result.push('…');
    result
}

/// Keep the tail of `s` that fits in `width` cells; used for inputs longer than their box.
pub fn tail_to_width(s: &str, width: usize) -> &str {
    if s.width() <= width {
        return s;
    }

    let mut used = 0;
    for (index, c) in s.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > width {
            return &s[index + c.len_utf8()..];
        }
    }
    s
}
