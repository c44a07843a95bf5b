//! Markdown serialization
//!
//! Converts the standardized tree into Markdown text. Paragraphs are
//! re-wrapped to the configured column budget, list item continuation lines
//! are indented and quoted lines are prefixed.

use crate::ast::{Document, ListType, Node};
use crate::options::Options;

/// Serialize a document to Markdown
pub fn to_markdown(document: &Document, options: &Options) -> String {
    let mut output = String::with_capacity(4096);
    serialize_sequence(document.nodes(), options, &mut output);
    if !output.is_empty() {
        output.push('\n');
    }
    output
}

/// Collapse every whitespace run (line breaks included) into one space
pub fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_whitespace = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_was_whitespace {
                result.push(' ');
                prev_was_whitespace = true;
            }
        } else {
            result.push(c);
            prev_was_whitespace = false;
        }
    }

    result
}

/// Shape of a rendered block, used to pick the separator before the next one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Text,
    ListItem,
    Other,
}

fn serialize_sequence(nodes: &[Node], options: &Options, out: &mut String) {
    let mut previous: Option<Shape> = None;
    let mut rest = nodes;

    while let Some(first) = rest.first() {
        let (shape, consumed) = if first.is_inline() {
            (Shape::Text, rest.iter().take_while(|n| n.is_inline()).count())
        } else {
            let shape = match first {
                Node::Paragraph(_) => Shape::Text,
                Node::ListItem { .. } => Shape::ListItem,
                _ => Shape::Other,
            };
            (shape, 1)
        };

        let separator_start = out.len();
        if let Some(prev) = previous {
            // a list may follow text or another item without a blank line
            if shape == Shape::ListItem && prev != Shape::Other {
                out.push('\n');
            } else {
                out.push_str("\n\n");
            }
        }

        let body_start = out.len();
        if first.is_inline() {
            serialize_paragraph(&rest[..consumed], options, out);
        } else {
            serialize_block(first, options, out);
        }

        if out.len() == body_start {
            out.truncate(separator_start);
        } else {
            previous = Some(shape);
        }
        rest = &rest[consumed..];
    }
}

fn serialize_block(node: &Node, options: &Options, out: &mut String) {
    match node {
        Node::Header { level, text } => {
            let text = collapse_whitespace(text);
            let text = text.trim();
            if text.is_empty() {
                return;
            }
            for _ in 0..*level {
                out.push('#');
            }
            out.push(' ');
            out.push_str(text);
        }

        Node::Paragraph(inlines) => serialize_paragraph(inlines, options, out),

        Node::ListItem {
            list_type,
            children,
        } => serialize_list_item(*list_type, children, options, out),

        Node::Blockquote(children) => {
            let start = out.len();
            serialize_sequence(children, options, out);
            let content = out[start..].to_string();
            out.truncate(start);

            for (i, line) in content.lines().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push('>');
                if !line.is_empty() {
                    out.push(' ');
                    out.push_str(line);
                }
            }
        }

        inline => serialize_paragraph(std::slice::from_ref(inline), options, out),
    }
}

fn serialize_list_item(list_type: ListType, children: &[Node], options: &Options, out: &mut String) {
    let start = out.len();
    serialize_sequence(children, options, out);
    let content = out[start..].to_string();
    out.truncate(start);

    match list_type {
        ListType::Ordered => out.push_str(&options.ordered_list_marker),
        ListType::Unordered => out.push(options.bullet_list_marker),
    }
    out.push(' ');

    for (i, line) in content.lines().enumerate() {
        if i > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(&options.list_indent);
            }
        }
        out.push_str(line);
    }
}

/// Render inline content as wrapped lines; each explicit break ends a line with `\`
fn serialize_paragraph(inlines: &[Node], options: &Options, out: &mut String) {
    let mut lines: Vec<String> = Vec::new();
    let mut segment = String::new();

    for inline in inlines {
        if let Node::LineBreak = inline {
            let mut wrapped = wrap(&segment, options.line_width);
            match wrapped.last_mut() {
                Some(last) => last.push('\\'),
                None => wrapped.push("\\".to_string()),
            }
            lines.append(&mut wrapped);
            segment.clear();
        } else {
            serialize_inline(inline, options, None, &mut segment);
        }
    }
    lines.extend(wrap(&segment, options.line_width));

    out.push_str(&lines.join("\n"));
}

fn serialize_inlines(inlines: &[Node], options: &Options, enclosing: Option<char>, out: &mut String) {
    for inline in inlines {
        serialize_inline(inline, options, enclosing, out);
    }
}

fn serialize_inline(inline: &Node, options: &Options, enclosing: Option<char>, out: &mut String) {
    match inline {
        Node::Text(text) => out.push_str(&collapse_whitespace(text)),

        Node::LineBreak => out.push_str("\\\n"),

        Node::Strong(content) => {
            let token = options.emphasis_token(enclosing);
            serialize_span(content, options, token, 2, out);
        }

        Node::Emphasis(content) => {
            let token = options.emphasis_token(enclosing);
            serialize_span(content, options, token, 1, out);
        }

        Node::Deleted(content) => {
            let start = out.len();
            serialize_inlines(content, options, enclosing, out);
            if out.len() > start {
                out.insert_str(start, "~~");
                out.push_str("~~");
            }
        }

        block => {
            let mut nested = String::new();
            serialize_block(block, options, &mut nested);
            out.push_str(&collapse_whitespace(&nested));
        }
    }
}

/// Wrap rendered children in `count` copies of `token`; empty spans vanish
fn serialize_span(content: &[Node], options: &Options, token: char, count: usize, out: &mut String) {
    let start = out.len();
    serialize_inlines(content, options, Some(token), out);
    if out.len() == start {
        return;
    }

    let delimiter: String = std::iter::repeat(token).take(count).collect();
    out.insert_str(start, &delimiter);
    out.push_str(&delimiter);
}

/// Greedy word wrap; never breaks inside a word
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_len = 0;

    for word in attach_punctuation(text) {
        let word_len = word.chars().count();

        if !current.is_empty() && current_len + 1 + word_len > width {
            // a block marker must not open a continuation line
            let mut next = Vec::new();
            if starts_block(&word) && current.len() > 1 {
                next.extend(current.pop());
            }
            lines.push(std::mem::replace(&mut current, next).join(" "));
            current_len = current.iter().map(|w| w.chars().count()).sum();
        }

        if !current.is_empty() {
            current_len += 1;
        }
        current_len += word_len;
        current.push(word);
    }

    if !current.is_empty() {
        lines.push(current.join(" "));
    }
    lines
}

/// Split on whitespace, gluing lone sentence punctuation to the preceding word
fn attach_punctuation(text: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();

    for word in text.split_whitespace() {
        match words.last_mut() {
            Some(previous) if matches!(word, "." | "!" | "?") => previous.push_str(word),
            _ => words.push(word.to_string()),
        }
    }

    words
}

fn starts_block(word: &str) -> bool {
    matches!(word, "-" | "*" | ">")
        || word.chars().all(|c| c == '#')
        || word
            .strip_suffix('.')
            .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}
