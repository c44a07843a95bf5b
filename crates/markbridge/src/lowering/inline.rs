//! Inline segmentation: find strong, emphasis and delete spans in
//! paragraph text and build the inline node tree.
//!
//! Spans are resolved innermost-first. Each resolved span is replaced by a
//! placeholder token, recorded in a span map, and expanded again when the
//! line is split into nodes.

use indexmap::IndexMap;
use markbridge_core::Node;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

use crate::{ConvertError, Result};

static STRONG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*|__(.+?)__").unwrap());
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*|_(.+?)_").unwrap());
static DELETE: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.+?)~~").unwrap());
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new("\u{E000}\\d+\u{E001}").unwrap());

const PLACEHOLDER_OPEN: char = '\u{E000}';
const PLACEHOLDER_CLOSE: char = '\u{E001}';

/// One line of paragraph content
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ParagraphLine {
    Text(String),
    Break,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Strong,
    Emphasis,
    Delete,
}

impl Family {
    /// Tie-break order when interiors have equal length
    const ALL: [Family; 3] = [Family::Strong, Family::Emphasis, Family::Delete];

    fn pattern(self) -> &'static Regex {
        match self {
            Family::Strong => &STRONG,
            Family::Emphasis => &EMPHASIS,
            Family::Delete => &DELETE,
        }
    }

    fn node(self) -> Node {
        match self {
            Family::Strong => Node::strong(),
            Family::Emphasis => Node::emphasis(),
            Family::Delete => Node::deleted(),
        }
    }
}

#[derive(Debug, Clone)]
struct Span {
    family: Family,
    interior: String,
}

type SpanMap = IndexMap<String, Span>;

/// Build a paragraph node from its lines
pub(super) fn segment_inline(lines: &[ParagraphLine]) -> Result<Node> {
    let mut children = Vec::new();
    for line in lines {
        match line {
            ParagraphLine::Break => children.push(Node::LineBreak),
            ParagraphLine::Text(text) => {
                // placeholder delimiters are reserved for span tokens
                let text: String = text
                    .chars()
                    .filter(|c| !matches!(*c, PLACEHOLDER_OPEN | PLACEHOLDER_CLOSE))
                    .collect();
                let mut spans = SpanMap::new();
                let resolved = resolve(&text, &mut spans)?;
                children.extend(split(&resolved, &mut spans)?);
            }
        }
    }
    Ok(Node::paragraph().with_children(children)?)
}

fn interior<'t>(caps: &Captures<'t>) -> &'t str {
    caps.iter()
        .skip(1)
        .flatten()
        .next()
        .map_or("", |m| m.as_str())
}

/// Pick the span to resolve next: the first match of each family, shortest
/// interior wins
fn next_span(text: &str) -> Option<(Family, std::ops::Range<usize>, String)> {
    let mut best: Option<(Family, std::ops::Range<usize>, &str)> = None;
    for family in Family::ALL {
        let Some(caps) = family.pattern().captures(text) else {
            continue;
        };
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let inner = interior(&caps);
        if best.as_ref().map_or(true, |(_, _, b)| inner.len() < b.len()) {
            best = Some((family, whole.range(), inner));
        }
    }
    best.map(|(family, range, inner)| (family, range, inner.to_string()))
}

fn delimiter_count(text: &str) -> usize {
    text.chars().filter(|c| matches!(c, '*' | '_' | '~')).count()
}

/// Replace every span in `text` with a placeholder, innermost first
fn resolve(text: &str, spans: &mut SpanMap) -> Result<String> {
    let mut line = text.to_string();
    while let Some((family, range, interior)) = next_span(&line) {
        let token = format!("{PLACEHOLDER_OPEN}{}{PLACEHOLDER_CLOSE}", spans.len());
        let replaced = format!("{}{}{}", &line[..range.start], token, &line[range.end..]);

        if delimiter_count(&replaced) >= delimiter_count(&line) {
            return Err(ConvertError::Internal(format!(
                "inline span resolution made no progress on {line:?}"
            )));
        }

        trace!(?family, %interior, "inline span resolved");
        spans.insert(token, Span { family, interior });
        line = replaced;
    }
    Ok(line)
}

/// Split a resolved line on placeholders, expanding each span recursively
fn split(line: &str, spans: &mut SpanMap) -> Result<Vec<Node>> {
    let mut nodes = Vec::new();
    let mut last = 0;

    for token in PLACEHOLDER.find_iter(line) {
        push_text(&mut nodes, &line[last..token.start()]);
        last = token.end();

        let span = spans.get(token.as_str()).cloned().ok_or_else(|| {
            ConvertError::Internal(format!("unknown inline placeholder {:?}", token.as_str()))
        })?;
        let inner = resolve(&span.interior, spans)?;
        nodes.push(span.family.node().with_children(split(&inner, spans)?)?);
    }
    push_text(&mut nodes, &line[last..]);

    Ok(nodes)
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if !text.is_empty() {
        nodes.push(Node::text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn inline(text: &str) -> Vec<Node> {
        match segment_inline(&[ParagraphLine::Text(text.to_string())]).unwrap() {
            Node::Paragraph(children) => children,
            other => panic!("expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(inline("just words"), vec![Node::text("just words")]);
    }

    #[test]
    fn test_each_family() {
        assert_eq!(
            inline("a **b** c"),
            vec![
                Node::text("a "),
                Node::Strong(vec![Node::text("b")]),
                Node::text(" c"),
            ]
        );
        assert_eq!(inline("_b_"), vec![Node::Emphasis(vec![Node::text("b")])]);
        assert_eq!(inline("~~b~~"), vec![Node::Deleted(vec![Node::text("b")])]);
    }

    #[test]
    fn test_strong_containing_emphasis() {
        assert_eq!(
            inline("__a *b* c__"),
            vec![Node::Strong(vec![
                Node::text("a "),
                Node::Emphasis(vec![Node::text("b")]),
                Node::text(" c"),
            ])]
        );
    }

    #[test]
    fn test_emphasis_containing_strong() {
        assert_eq!(
            inline("_a **b** c_"),
            vec![Node::Emphasis(vec![
                Node::text("a "),
                Node::Strong(vec![Node::text("b")]),
                Node::text(" c"),
            ])]
        );
    }

    #[test]
    fn test_interior_with_unresolved_markup() {
        assert_eq!(
            inline("__*x*__"),
            vec![Node::Strong(vec![Node::Emphasis(vec![Node::text("x")])])]
        );
    }

    #[test]
    fn test_delete_wrapping_strong() {
        assert_eq!(
            inline("~~gone **now**~~"),
            vec![Node::Deleted(vec![
                Node::text("gone "),
                Node::Strong(vec![Node::text("now")]),
            ])]
        );
    }

    #[test]
    fn test_whitespace_interior() {
        assert_eq!(
            inline("a ** **"),
            vec![Node::text("a "), Node::Strong(vec![Node::text(" ")])]
        );
    }

    #[test]
    fn test_placeholder_characters_in_input_are_dropped() {
        assert_eq!(
            inline("a\u{E000}0\u{E001}b **c**"),
            vec![Node::text("a0b "), Node::Strong(vec![Node::text("c")])]
        );
    }

    #[test]
    fn test_unmatched_delimiters_stay_text() {
        assert_eq!(inline("2 * 3 = 6"), vec![Node::text("2 * 3 = 6")]);
    }

    #[test]
    fn test_break_lines() {
        let node = segment_inline(&[
            ParagraphLine::Text("one".into()),
            ParagraphLine::Break,
            ParagraphLine::Text("two".into()),
        ])
        .unwrap();
        assert_eq!(
            node,
            Node::Paragraph(vec![Node::text("one"), Node::LineBreak, Node::text("two")])
        );
    }

    #[test]
    fn test_shortest_interior_wins() {
        let (family, range, interior) = next_span("~~long deleted~~ and _e_").unwrap();
        assert_eq!(family, Family::Emphasis);
        assert_eq!(interior, "e");
        assert_eq!(range, 21..24);

        let (family, _, interior) = next_span("**ab** ~~cd~~").unwrap();
        assert_eq!(family, Family::Strong);
        assert_eq!(interior, "ab");
    }
}
