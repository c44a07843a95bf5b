//! Line-level Markdown syntax shared by continuation merging and block
//! classification.

use markbridge_core::ListType;
use once_cell::sync::Lazy;
use regex::{Match, Regex};

static ORDERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+").unwrap());
static UNORDERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*]\s+").unwrap());
static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#+)\s+(.*)$").unwrap());
static QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^>(?:\s|$)").unwrap());
static QUOTE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^>\s?").unwrap());

/// List marker at the start of a line, including its trailing whitespace
pub(super) fn list_marker(line: &str) -> Option<(ListType, Match<'_>)> {
    if let Some(marker) = ORDERED.find(line) {
        return Some((ListType::Ordered, marker));
    }
    UNORDERED
        .find(line)
        .map(|marker| (ListType::Unordered, marker))
}

/// Header level and trimmed text
pub(super) fn header(line: &str) -> Option<(usize, &str)> {
    let caps = HEADER.captures(line)?;
    let level = caps.get(1).map_or(0, |m| m.len());
    let text = caps.get(2).map_or("", |m| m.as_str());
    Some((level, text.trim()))
}

pub(super) fn is_header(line: &str) -> bool {
    HEADER.is_match(line)
}

pub(super) fn is_quote(line: &str) -> bool {
    QUOTE.is_match(line)
}

/// Line content with the `>` prefix and one following space removed
pub(super) fn strip_quote(line: &str) -> &str {
    let prefix = QUOTE_PREFIX.find(line).map_or(0, |m| m.end());
    &line[prefix..]
}

/// Whether a line opens a header, list item or blockquote
pub(super) fn starts_block(line: &str) -> bool {
    list_marker(line).is_some() || is_header(line) || is_quote(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_marker() {
        let (list_type, marker) = list_marker("12. a").unwrap();
        assert_eq!(list_type, ListType::Ordered);
        assert_eq!(marker.as_str(), "12. ");

        let (list_type, marker) = list_marker("*   a").unwrap();
        assert_eq!(list_type, ListType::Unordered);
        assert_eq!(marker.as_str(), "*   ");

        assert!(list_marker("1.5 is a number").is_none());
        assert!(list_marker("**bold**").is_none());
    }

    #[test]
    fn test_header() {
        assert_eq!(header("### Deep "), Some((3, "Deep")));
        assert_eq!(header("# "), Some((1, "")));
        assert_eq!(header("#tag"), None);
    }

    #[test]
    fn test_quote() {
        assert!(is_quote("> a"));
        assert!(is_quote(">"));
        assert!(!is_quote(">a"));
        assert_eq!(strip_quote("> a"), "a");
        assert_eq!(strip_quote(">  a"), " a");
        assert_eq!(strip_quote(">"), "");
    }

    #[test]
    fn test_starts_block() {
        assert!(starts_block("- a"));
        assert!(starts_block("* a"));
        assert!(starts_block("3. a"));
        assert!(starts_block("# a"));
        assert!(starts_block(">"));
        assert!(!starts_block("1.5 is a number"));
        assert!(!starts_block("#tag"));
        assert!(!starts_block("**bold**"));
    }
}
