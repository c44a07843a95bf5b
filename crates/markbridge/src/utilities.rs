//! Indentation helpers for line-oriented Markdown processing.
//!
//! An indentation level is a group of four leading whitespace characters.

/// Width of one indentation level, in characters
pub const INDENT_WIDTH: usize = 4;

/// Remove one indentation level, if present
pub fn remove_indent(line: &str) -> &str {
    let mut chars = line.char_indices();
    for _ in 0..INDENT_WIDTH {
        match chars.next() {
            Some((_, c)) if c.is_whitespace() => {}
            _ => return line,
        }
    }
    match chars.next() {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}

/// Count complete indentation levels at the start of a line
pub fn indent_level(line: &str) -> usize {
    let mut level = 0;
    let mut rest = line;
    loop {
        let stripped = remove_indent(rest);
        if stripped.len() == rest.len() {
            return level;
        }
        level += 1;
        rest = stripped;
    }
}

/// Strip all leading whitespace, then indent by exactly `level` levels
pub fn reduce_indent_to(line: &str, level: usize) -> String {
    let content = line.trim_start();
    let mut result = String::with_capacity(content.len() + level * INDENT_WIDTH);
    for _ in 0..level * INDENT_WIDTH {
        result.push(' ');
    }
    result.push_str(content);
    result
}

/// Check whether a line ends with an explicit break marker
pub fn has_break_marker(line: &str) -> bool {
    line.trim_end().ends_with('\\')
}

/// Remove a trailing break marker and surrounding whitespace
pub fn strip_break_marker(line: &str) -> &str {
    let trimmed = line.trim();
    trimmed.strip_suffix('\\').unwrap_or(trimmed).trim_end()
}
