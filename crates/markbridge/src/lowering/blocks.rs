//! Block segmentation: classify merged lines and group them into blocks.

use markbridge_core::{ListType, Node, MAX_HEADER_LEVEL};
use tracing::debug;

use super::inline::{segment_inline, ParagraphLine};
use super::syntax::{header, is_quote, list_marker, starts_block, strip_quote};
use crate::utilities::{has_break_marker, indent_level, remove_indent, strip_break_marker};
use crate::Result;

/// A single line, classified by the block it can open or continue
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineKind<'a> {
    Blank,
    /// Content with one indentation level removed
    Indented(&'a str),
    ListItem {
        list_type: ListType,
        content: &'a str,
    },
    Header {
        level: usize,
        text: &'a str,
    },
    /// Content with the `>` prefix removed
    Quote(&'a str),
    Text {
        text: &'a str,
        line_break: bool,
    },
}

fn classify(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if indent_level(line) > 0 {
        return LineKind::Indented(remove_indent(line));
    }
    if let Some((list_type, marker)) = list_marker(line) {
        return LineKind::ListItem {
            list_type,
            content: &line[marker.end()..],
        };
    }
    if let Some((level, text)) = header(line) {
        return LineKind::Header { level, text };
    }
    if is_quote(line) {
        return LineKind::Quote(strip_quote(line));
    }
    LineKind::Text {
        text: strip_break_marker(line),
        line_break: has_break_marker(line),
    }
}

/// Block under construction
#[derive(Debug, Default)]
enum Block {
    #[default]
    Empty,
    Header {
        level: usize,
        text: String,
    },
    Blockquote(Vec<String>),
    ListItem {
        list_type: ListType,
        lines: Vec<String>,
    },
    Paragraph {
        lines: Vec<ParagraphLine>,
        /// The previous line ended with a break marker
        open: bool,
    },
}

/// Outcome of offering a line to the current block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Append,
    FlushAndRetry,
}

impl Block {
    fn transition(&mut self, line: &LineKind<'_>) -> Transition {
        if let Block::Empty = self {
            *self = Block::open(line);
            return Transition::Append;
        }

        match (self, line) {
            (Block::ListItem { lines, .. }, LineKind::Indented(content)) => {
                lines.push((*content).to_string());
                Transition::Append
            }

            (Block::Paragraph { lines, open }, LineKind::Indented(content))
                if !starts_block(content.trim_start()) =>
            {
                let content = content.trim();
                push_paragraph_text(
                    lines,
                    open,
                    strip_break_marker(content),
                    has_break_marker(content),
                );
                Transition::Append
            }

            (Block::Paragraph { lines, open }, LineKind::Text { text, line_break }) if *open => {
                push_paragraph_text(lines, open, text, *line_break);
                Transition::Append
            }

            (Block::Blockquote(lines), LineKind::Quote(content)) => {
                lines.push((*content).to_string());
                Transition::Append
            }

            _ => Transition::FlushAndRetry,
        }
    }

    /// Start a block from its first line
    fn open(line: &LineKind<'_>) -> Block {
        match line {
            LineKind::Blank => Block::Empty,
            LineKind::ListItem { list_type, content } => Block::ListItem {
                list_type: *list_type,
                lines: vec![(*content).to_string()],
            },
            LineKind::Header { level, text } => Block::Header {
                level: *level,
                text: (*text).to_string(),
            },
            LineKind::Quote(content) => Block::Blockquote(vec![(*content).to_string()]),
            LineKind::Indented(content) => Block::open(&classify(content.trim_start())),
            LineKind::Text { text, line_break } => paragraph(text, *line_break),
        }
    }

    fn is_list_item(&self) -> bool {
        matches!(self, Block::ListItem { .. })
    }

    fn finish(self) -> Result<Option<Node>> {
        let node = match self {
            Block::Empty => return Ok(None),
            Block::Header { level, text } => {
                if level > usize::from(MAX_HEADER_LEVEL) {
                    debug!(level, "header level clamped");
                }
                Node::header(level, text)
            }
            Block::Blockquote(lines) => Node::blockquote().with_children(segment_blocks(&lines)?)?,
            Block::ListItem { list_type, lines } => {
                Node::list_item(list_type).with_children(segment_blocks(&lines)?)?
            }
            Block::Paragraph { lines, .. } => segment_inline(&lines)?,
        };
        Ok(Some(node))
    }
}

fn paragraph(text: &str, line_break: bool) -> Block {
    let mut lines = Vec::new();
    let mut open = false;
    push_paragraph_text(&mut lines, &mut open, text, line_break);
    Block::Paragraph { lines, open }
}

/// Add text to a paragraph; a closed paragraph joins it onto its last line
fn push_paragraph_text(
    lines: &mut Vec<ParagraphLine>,
    open: &mut bool,
    text: &str,
    line_break: bool,
) {
    match lines.last_mut() {
        Some(ParagraphLine::Text(last)) if !*open && !text.is_empty() => {
            last.push(' ');
            last.push_str(text);
        }
        _ if !text.is_empty() => lines.push(ParagraphLine::Text(text.to_string())),
        _ => {}
    }
    if line_break {
        lines.push(ParagraphLine::Break);
    }
    *open = line_break;
}

fn next_content_is_indented(rest: &[String]) -> bool {
    rest.iter()
        .find(|line| !line.trim().is_empty())
        .is_some_and(|line| indent_level(line) > 0)
}

/// Segment merged lines into block nodes
pub(super) fn segment_blocks(lines: &[String]) -> Result<Vec<Node>> {
    let mut nodes = Vec::new();
    let mut block = Block::Empty;

    for (index, line) in lines.iter().enumerate() {
        let kind = classify(line);

        if kind == LineKind::Blank {
            if block.is_list_item() && next_content_is_indented(&lines[index + 1..]) {
                if let Block::ListItem { lines, .. } = &mut block {
                    lines.push(String::new());
                }
            } else {
                nodes.extend(std::mem::take(&mut block).finish()?);
            }
            continue;
        }

        if block.transition(&kind) == Transition::FlushAndRetry {
            nodes.extend(std::mem::take(&mut block).finish()?);
            block.transition(&kind);
        }
    }
    nodes.extend(block.finish()?);

    Ok(nodes)
}
