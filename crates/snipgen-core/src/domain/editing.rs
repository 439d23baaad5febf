//! Text insertion at a cursor/selection, and the position arithmetic the
//! interactive body tools need.

/// Result of [`insert_at_cursor`]: the new text and where the cursor lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub value: String,
    pub cursor: usize,
}

/// Replace the selection `[start, end)` of `value` with `text`.
///
/// Offsets are byte offsets. They are clamped to `value.len()` and moved back
/// to the nearest char boundary; a reversed selection is swapped. The cursor
/// is placed immediately after the inserted text.
pub fn insert_at_cursor(value: &str, start: usize, end: usize, text: &str) -> Insertion {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let start = floor_boundary(value, start);
    let end = floor_boundary(value, end);

    let mut out = String::with_capacity(value.len() - (end - start) + text.len());
    out.push_str(&value[..start]);
    out.push_str(text);
    out.push_str(&value[end..]);

    Insertion {
        value: out,
        cursor: start + text.len(),
    }
}

/// Byte offset of a 1-based `line` and `column`, the column counted in chars.
///
/// A line past the end clamps to the end of the text, a column past the end
/// of its line clamps to the end of that line (before any `\r`). Zero counts
/// as one.
pub fn offset_of(value: &str, line: usize, column: usize) -> usize {
    let mut start = 0;
    for _ in 1..line.max(1) {
        match value[start..].find('\n') {
            Some(i) => start += i + 1,
            None => return value.len(),
        }
    }

    let rest = &value[start..];
    let line_text = rest.split('\n').next().unwrap_or_default();
    let line_text = line_text.strip_suffix('\r').unwrap_or(line_text);
    line_text
        .char_indices()
        .nth(column.max(1) - 1)
        .map_or(start + line_text.len(), |(i, _)| start + i)
}

/// 1-based line and char column of a byte offset. Inverse of [`offset_of`].
pub fn position_of(value: &str, offset: usize) -> (usize, usize) {
    let before = &value[..floor_boundary(value, offset)];
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    (
        before.matches('\n').count() + 1,
        before[line_start..].chars().count() + 1,
    )
}

/// The tab stop after the highest `$N` / `${N` in `value`. `$0` is the final
/// cursor position and does not count.
pub fn next_tab_stop(value: &str) -> u32 {
    let mut highest = 0u32;
    let mut rest = value;
    while let Some(i) = rest.find('$') {
        rest = &rest[i + 1..];
        let digits = rest.strip_prefix('{').unwrap_or(rest);
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        if let Ok(n) = digits[..end].parse::<u32>() {
            highest = highest.max(n);
        }
    }
    highest.saturating_add(1)
}

fn floor_boundary(s: &str, idx: usize) -> usize {
    let mut idx = idx.min(s.len());
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_at_collapsed_cursor() {
        let ins = insert_at_cursor("console.log()", 12, 12, "$1");
        assert_eq!(ins.value, "console.log($1)");
        assert_eq!(ins.cursor, 14);
    }

    #[test]
    fn replaces_selection() {
        let ins = insert_at_cursor("let x = 1;", 4, 5, "${1:name}");
        assert_eq!(ins.value, "let ${1:name} = 1;");
        assert_eq!(ins.cursor, 13);
    }

    #[test]
    fn clamps_out_of_range_offsets() {
        let ins = insert_at_cursor("abc", 10, 20, "$0");
        assert_eq!(ins.value, "abc$0");
        assert_eq!(ins.cursor, 5);
    }

    #[test]
    fn swaps_reversed_selection() {
        let ins = insert_at_cursor("abcdef", 4, 2, "X");
        assert_eq!(ins.value, "abXef");
        assert_eq!(ins.cursor, 3);
    }

    #[test]
    fn offset_of_counts_lines_and_chars() {
        let body = "const a = 1;\nlet é = $1;\n$0";
        assert_eq!(offset_of(body, 1, 1), 0);
        assert_eq!(offset_of(body, 2, 5), 17);
        assert_eq!(offset_of(body, 2, 6), 19);
        assert_eq!(offset_of(body, 3, 1), body.len() - 2);
    }

    #[test]
    fn offset_of_clamps() {
        let body = "ab\r\ncd";
        assert_eq!(offset_of(body, 1, 99), 2);
        assert_eq!(offset_of(body, 9, 1), body.len());
        assert_eq!(offset_of(body, 0, 0), 0);
        assert_eq!(offset_of("", 1, 1), 0);
    }

    #[test]
    fn position_of_inverts_offset_of() {
        let body = "const a = 1;\nlet é = $1;\n$0";
        for (line, column) in [(1, 1), (1, 7), (2, 5), (2, 6), (3, 3)] {
            assert_eq!(position_of(body, offset_of(body, line, column)), (line, column));
        }
        assert_eq!(position_of(body, 999), (3, 3));
    }

    #[test]
    fn next_tab_stop_follows_highest() {
        assert_eq!(next_tab_stop(""), 1);
        assert_eq!(next_tab_stop("console.log($0)"), 1);
        assert_eq!(next_tab_stop("f($1, ${3:b}, $2)"), 4);
        assert_eq!(next_tab_stop("$ not a stop ${x}"), 1);
        assert_eq!(next_tab_stop("$99999999999"), 1);
    }

    #[test]
    fn respects_char_boundaries() {
        // 'é' is two bytes; offset 2 falls inside it
        let ins = insert_at_cursor("aé", 2, 2, "!");
        assert_eq!(ins.value, "a!é");
        assert_eq!(ins.cursor, 2);
    }
}
