//! Document format identifiers

use std::fmt;
use std::str::FromStr;

/// Error for an identifier that names no known format
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format identifier: {0:?}")]
pub struct UnknownFormat(pub String);

/// A notation that can be lowered into, or raised from, the document tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Markdown-like source text
    Markdown,
    /// HTML5 markup
    Html5,
}

impl Format {
    pub const MARKDOWN: &'static str = "md";
    pub const HTML5: &'static str = "html5";

    /// Order in which lowering paths are tried against unknown input
    pub const DETECTION_ORDER: [Self; 2] = [Self::Html5, Self::Markdown];

    pub const fn id(&self) -> &'static str {
        match self {
            Self::Markdown => Self::MARKDOWN,
            Self::Html5 => Self::HTML5,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::MARKDOWN => Ok(Self::Markdown),
            Self::HTML5 => Ok(Self::Html5),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identifiers() {
        assert_eq!("md".parse::<Format>(), Ok(Format::Markdown));
        assert_eq!("html5".parse::<Format>(), Ok(Format::Html5));
        assert_eq!(
            "docx".parse::<Format>(),
            Err(UnknownFormat("docx".to_string()))
        );
    }

    #[test]
    fn test_html_is_tried_first() {
        assert_eq!(Format::DETECTION_ORDER[0], Format::Html5);
        assert_eq!(Format::Html5.to_string(), "html5");
    }
}
