//! Continuation merging: fold soft-wrapped lines back into the line they
//! continue, so block classification sees one logical line per block start.

use tracing::trace;

use super::syntax::{is_header, is_quote, list_marker, starts_block, strip_quote};
use crate::utilities::{has_break_marker, indent_level, reduce_indent_to, remove_indent};

/// Repeatedly fold continuation lines into their predecessor until a pass
/// leaves the line count unchanged
pub(super) fn merge_continuations(mut lines: Vec<String>) -> Vec<String> {
    loop {
        let before = lines.len();
        lines = merge_pass(lines);
        trace!(before, after = lines.len(), "continuation merge pass");
        if lines.len() == before {
            return lines;
        }
    }
}

fn merge_pass(lines: Vec<String>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        if let Some(last) = merged.last_mut() {
            if let Some(joined) = merge(last, &line) {
                *last = joined;
                continue;
            }
        }
        merged.push(line);
    }
    merged
}

/// Merge `second` into `first` if it continues it
pub(super) fn merge(first: &str, second: &str) -> Option<String> {
    let first_level = indent_level(first);
    let second_level = indent_level(second);
    let shared = first_level.min(second_level);

    let first = reduce_indent_to(first, first_level - shared);
    let second = reduce_indent_to(second, second_level - shared);

    merge_normalized(&first, &second).map(|merged| reduce_indent_to(&merged, shared))
}

fn merge_normalized(first: &str, second: &str) -> Option<String> {
    if indent_level(first) > 0 || is_header(first) {
        return None;
    }

    if is_quote(first) && is_quote(second) {
        return merge(strip_quote(first), strip_quote(second)).map(|merged| format!("> {merged}"));
    }

    if let Some((_, marker)) = list_marker(first) {
        let content = &first[marker.end()..];
        return merge(content, remove_indent(second))
            .map(|merged| format!("{}{merged}", marker.as_str()));
    }

    if first.trim().is_empty()
        || second.trim().is_empty()
        || starts_block(second)
        || indent_level(second) > 0
        || has_break_marker(first)
    {
        return None;
    }

    Some(format!("{} {}", first.trim(), second.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_merge_plain_continuation() {
        assert_eq!(merge("first part", "second part").as_deref(), Some("first part second part"));
    }

    #[test]
    fn test_no_merge_across_blocks() {
        assert_eq!(merge("text", ""), None);
        assert_eq!(merge("", "text"), None);
        assert_eq!(merge("# Title", "text"), None);
        assert_eq!(merge("text", "- item"), None);
        assert_eq!(merge("text", "> quote"), None);
        assert_eq!(merge("text", "## Sub"), None);
        assert_eq!(merge("text", "    indented"), None);
    }

    #[test]
    fn test_no_merge_after_break_marker() {
        assert_eq!(merge("line \\", "next"), None);
    }

    #[test]
    fn test_merge_quote_lines() {
        assert_eq!(merge("> a", "> b").as_deref(), Some("> a b"));
        assert_eq!(merge("> a", ">"), None);
        assert_eq!(merge("> > a", "> > b").as_deref(), Some("> > a b"));
    }

    #[test]
    fn test_merge_list_continuation() {
        assert_eq!(merge("- a", "    b").as_deref(), Some("- a b"));
        assert_eq!(merge("12. a", "    b").as_deref(), Some("12. a b"));
        assert_eq!(merge("- a", "- b"), None);
        assert_eq!(merge("- a", "    - b"), None);
    }

    #[test]
    fn test_merge_keeps_shared_indent() {
        assert_eq!(merge("    - b", "        c").as_deref(), Some("    - b c"));
        assert_eq!(merge("    a", "    b").as_deref(), Some("    a b"));
    }

    #[test]
    fn test_merge_continuations_reaches_fixed_point() {
        let merged = merge_continuations(lines(
            "# Title\n\nOne\ntwo\nthree\n\n- item\n    wrapped\n- next\n\n> q1\n> q2",
        ));
        assert_eq!(
            merged,
            vec!["# Title", "", "One two three", "", "- item wrapped", "- next", "", "> q1 q2"]
        );
    }
}
