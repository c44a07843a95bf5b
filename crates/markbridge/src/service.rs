//! Converter - the main entry point for format conversion.

use markbridge_core::{to_html, to_markdown, Document, Format, Options};
use tracing::debug;

use crate::lowering::{standardize, Source};
use crate::node::{DomNode, Node};
use crate::Result;

/// The main service for converting between Markdown and HTML
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: Options,
}

impl Converter {
    /// Create a new Converter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Converter with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Get the options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Detect the notation of `input` and render it as `target`
    pub fn convert(&self, input: &str, target: Format) -> Result<String> {
        let document = self.standardize::<Node>(&Source::Text(input))?;
        Ok(self.render(&document, target))
    }

    /// Lower an element tree and render it as `target`
    pub fn convert_dom<D: DomNode>(&self, root: &D, target: Format) -> Result<String> {
        let document = self.standardize(&Source::Dom(root))?;
        Ok(self.render(&document, target))
    }

    /// Lower input into the document tree
    pub fn standardize<D: DomNode>(&self, source: &Source<'_, D>) -> Result<Document> {
        standardize(source)
    }

    /// Render a document tree in the given format
    pub fn render(&self, document: &Document, target: Format) -> String {
        debug!(%target, nodes = document.nodes().len(), "rendering document");
        match target {
            Format::Markdown => to_markdown(document, &self.options),
            Format::Html5 => to_html(document, &self.options),
        }
    }
}
