//! Configuration options for serialization

/// Options for Markdown and HTML serialization
#[derive(Debug, Clone)]
pub struct Options {
    /// Column budget for wrapped paragraph lines
    pub line_width: usize,

    /// Bullet list marker (`-` or `*` keep the output re-readable)
    pub bullet_list_marker: char,

    /// Ordered list marker, without the trailing space
    pub ordered_list_marker: String,

    /// Indentation of list item continuation lines
    pub list_indent: String,

    /// Emphasis delimiter used at the outermost level
    pub em_delimiter: char,

    /// Emphasis delimiter used directly inside an `em_delimiter` span
    pub alternate_em_delimiter: char,

    /// Optional element wrapped around the whole HTML output
    pub html_root_tag: Option<String>,
}

impl Options {
    /// Pick the delimiter for an emphasis nested inside `enclosing`
    pub fn emphasis_token(&self, enclosing: Option<char>) -> char {
        if enclosing == Some(self.em_delimiter) {
            self.alternate_em_delimiter
        } else {
            self.em_delimiter
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            line_width: 75,
            bullet_list_marker: '-',
            ordered_list_marker: "1.".to_string(),
            list_indent: "    ".to_string(),
            em_delimiter: '_',
            alternate_em_delimiter: '*',
            html_root_tag: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasis_token_alternates() {
        let options = Options::default();
        assert_eq!(options.emphasis_token(None), '_');
        assert_eq!(options.emphasis_token(Some('_')), '*');
        assert_eq!(options.emphasis_token(Some('*')), '_');
    }
}
