//! Read-only element tree adapter.
//!
//! `SourceElement` is the extension point for markup front ends. The core
//! only needs tag names, attributes, source spans and children, so any
//! HTML/XML parser can be adapted without touching the checker.
//! [`ElementNode`] is an owned implementation that front ends may produce
//! directly through [`MarkupParser`].

use crate::error::DocumentError;
use crate::types::ElementSpan;

/// Narrow read-only view of one parsed element.
pub trait SourceElement {
    /// Tag name; `None` for nodes that are not elements (document roots,
    /// text, comments).
    fn tag_name(&self) -> Option<&str>;

    /// Attributes as `(name, value)` pairs in source order.
    fn attributes(&self) -> Vec<(&str, &str)>;

    /// Source span of the whole element, if known.
    fn span(&self) -> Option<ElementSpan>;

    /// Child nodes in document order.
    fn children(&self) -> Vec<&dyn SourceElement>;

    /// Value of the first attribute with the given name.
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }
}

/// A single attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Attribute value, unquoted.
    pub value: String,
}

/// Owned element tree node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementNode {
    /// Tag name, `None` for the document root.
    pub tag_name: Option<String>,
    /// Attributes in source order.
    pub attributes: Vec<Attribute>,
    /// Source span.
    pub span: Option<ElementSpan>,
    /// Child elements in document order.
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    /// Creates a tag-less document root holding the given children.
    #[must_use]
    pub fn document(children: Vec<ElementNode>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    /// Creates an element with the given tag name.
    #[must_use]
    pub fn element(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: Some(tag_name.into()),
            ..Self::default()
        }
    }

    /// Adds an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Adds a `class` attribute.
    #[must_use]
    pub fn with_class(self, value: impl Into<String>) -> Self {
        self.with_attribute("class", value)
    }

    /// Sets the source span.
    #[must_use]
    pub fn with_span(mut self, span: ElementSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }
}

impl SourceElement for ElementNode {
    fn tag_name(&self) -> Option<&str> {
        self.tag_name.as_deref()
    }

    fn attributes(&self) -> Vec<(&str, &str)> {
        self.attributes
            .iter()
            .map(|a| (a.name.as_str(), a.value.as_str()))
            .collect()
    }

    fn span(&self) -> Option<ElementSpan> {
        self.span
    }

    fn children(&self) -> Vec<&dyn SourceElement> {
        self.children
            .iter()
            .map(|c| c as &dyn SourceElement)
            .collect()
    }
}

/// Error from a markup front end.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    /// Human-readable reason.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ParseError> for DocumentError {
    fn from(err: ParseError) -> Self {
        Self::Parse {
            message: err.message,
        }
    }
}

/// Trait for markup front ends producing an element tree.
pub trait MarkupParser: Send + Sync {
    /// Language identifier (e.g., `"html"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this parser handles (e.g., `&[".html", ".htm"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Parses source text into a tag-less document root.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser cannot produce a tree.
    fn parse(&self, source: &str) -> Result<ElementNode, ParseError>;
}

fn find_child<'a>(parent: &'a dyn SourceElement, tag: &str) -> Option<&'a dyn SourceElement> {
    parent
        .children()
        .into_iter()
        .find(|c| c.tag_name().is_some_and(|t| t.eq_ignore_ascii_case(tag)))
}

/// Finds the `body` element: the `html` child of the document root, then
/// its `body` child.
///
/// # Errors
///
/// Returns [`DocumentError::MissingHtml`] or [`DocumentError::MissingBody`].
pub fn locate_body(root: &dyn SourceElement) -> Result<&dyn SourceElement, DocumentError> {
    let html = find_child(root, "html").ok_or(DocumentError::MissingHtml)?;
    find_child(html, "body").ok_or(DocumentError::MissingBody)
}
