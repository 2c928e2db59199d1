use unicode_width::UnicodeWidthChar;

/// Walk visible characters, skipping SGR escape sequences.
fn visible_chars(s: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    let mut in_escape = false;
    s.char_indices().filter(move |&(_, ch)| {
        if ch == '\x1b' {
            in_escape = true;
            false
        } else if in_escape {
            if ch == 'm' {
                in_escape = false;
            }
            false
        } else {
            true
        }
    })
}

/// Display width excluding ANSI escape codes. CJK glyphs count as two columns.
#[inline]
pub(super) fn display_width(s: &str) -> usize {
    visible_chars(s)
        .map(|(_, ch)| UnicodeWidthChar::width(ch).unwrap_or(0))
        .sum()
}

/// Cut a string to at most `max_width` visible columns, keeping escape codes.
pub(super) fn truncate_display(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let mut width = 0usize;
    let mut cut = s.len();
    for (idx, ch) in visible_chars(s) {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width {
            cut = idx;
            break;
        }
        width += ch_width;
    }
    let mut result = s[..cut].to_string();
    if cut < s.len() && result.contains("\x1b[") && !result.ends_with("\x1b[0m") {
        result.push_str("\x1b[0m");
    }
    result
}

/// Pad with spaces (or truncate) to exactly `width` visible columns.
pub(super) fn pad_display(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current > width {
        let truncated = truncate_display(s, width);
        let short = width.saturating_sub(display_width(&truncated));
        return truncated + &" ".repeat(short);
    }
    let mut result = String::with_capacity(s.len() + width - current);
    result.push_str(s);
    result.push_str(&" ".repeat(width - current));
    result
}
