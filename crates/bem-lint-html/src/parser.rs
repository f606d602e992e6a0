//! HTML front end using Tree-sitter.

use bem_lint_core::{ElementNode, ElementSpan, MarkupParser, ParseError};
use tracing::debug;
use tree_sitter::{Language, Node, Parser};

/// Elements that HTML5 places in `head` when they precede body content.
const METADATA_TAGS: &[&str] = &[
    "base", "link", "meta", "noscript", "script", "style", "template", "title",
];

/// Parses HTML into an [`ElementNode`] document tree.
///
/// Elements, `<script>` and `<style>` become nodes. Text, comments and the
/// doctype are dropped. Optional `<html>`, `<head>` and `<body>` tags that
/// the source leaves out are filled in as HTML5 tree construction does, so
/// every parsed document has `html > body`.
pub struct HtmlParser {
    language: Language,
}

impl HtmlParser {
    /// Creates a new HTML parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_html::LANGUAGE.into(),
        }
    }

    fn text<'a>(node: &Node<'_>, src: &'a str) -> &'a str {
        src.get(node.start_byte()..node.end_byte()).unwrap_or("")
    }

    /// 1-based character column of a byte offset, given the Tree-sitter
    /// byte column on the same row.
    fn char_column(src: &str, byte: usize, byte_column: usize) -> usize {
        let line_start = byte.saturating_sub(byte_column);
        src.get(line_start..byte)
            .map_or(byte_column, |prefix| prefix.chars().count())
            + 1
    }

    fn span(node: &Node<'_>, src: &str) -> ElementSpan {
        let start = node.start_position();
        let end = node.end_position();
        ElementSpan::at(
            start.row + 1,
            Self::char_column(src, node.start_byte(), start.column),
        )
        .with_end(
            end.row + 1,
            Self::char_column(src, node.end_byte(), end.column),
        )
        .with_offsets(node.start_byte(), node.end_byte())
    }

    fn attribute(node: &Node<'_>, src: &str) -> Option<(String, String)> {
        let mut name = None;
        let mut value = String::new();

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "attribute_name" => name = Some(Self::text(&child, src).to_ascii_lowercase()),
                "attribute_value" => value = Self::text(&child, src).to_owned(),
                "quoted_attribute_value" => {
                    // `class=""` has no inner value node.
                    let mut inner = child.walk();
                    value = child
                        .children(&mut inner)
                        .find(|n| n.kind() == "attribute_value")
                        .map(|n| Self::text(&n, src).to_owned())
                        .unwrap_or_default();
                }
                _ => {}
            }
        }

        name.map(|name| (name, value))
    }

    /// Builds an element from its `start_tag` or `self_closing_tag` child.
    fn element(node: &Node<'_>, src: &str) -> ElementNode {
        let mut element = ElementNode::default().with_span(Self::span(node, src));

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "start_tag" | "self_closing_tag" => {
                    let mut tag_cursor = child.walk();
                    for part in child.children(&mut tag_cursor) {
                        match part.kind() {
                            "tag_name" => {
                                element.tag_name =
                                    Some(Self::text(&part, src).to_ascii_lowercase());
                            }
                            "attribute" => {
                                if let Some((name, value)) = Self::attribute(&part, src) {
                                    element = element.with_attribute(name, value);
                                }
                            }
                            _ => {}
                        }
                    }
                }
                _ => Self::collect(&child, src, &mut element.children),
            }
        }

        element
    }

    /// Appends the element nodes found at `node` to `out`. Non-element
    /// wrappers (such as error recovery nodes) are looked through.
    fn collect(node: &Node<'_>, src: &str, out: &mut Vec<ElementNode>) {
        match node.kind() {
            "element" | "script_element" | "style_element" => {
                out.push(Self::element(node, src));
            }
            "ERROR" => {
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    Self::collect(&child, src, out);
                }
            }
            _ => {}
        }
    }

    /// Wraps top-level elements into a document with a single `html`.
    ///
    /// Elements outside an explicit `html` move inside it, keeping their
    /// order relative to its children.
    fn assemble(mut top: Vec<ElementNode>) -> ElementNode {
        let html = match top.iter().position(|e| Self::is(e, "html")) {
            Some(index) => {
                let after = top.split_off(index + 1);
                let mut html = top.pop().unwrap_or_default();
                let mut children = top;
                children.append(&mut html.children);
                children.extend(after);
                html.children = children;
                html
            }
            None => {
                debug!("No <html> tag; wrapping top-level elements");
                let mut html = ElementNode::element("html");
                html.children = top;
                html
            }
        };
        ElementNode::document(vec![Self::ensure_body(html)])
    }

    /// Gives `html` exactly a `head` (when one exists or metadata needs
    /// one) followed by a `body` holding every other child.
    fn ensure_body(mut html: ElementNode) -> ElementNode {
        let mut head = None;
        let mut body: Option<ElementNode> = None;
        let mut before = Vec::new();
        let mut after = Vec::new();

        for child in std::mem::take(&mut html.children) {
            if head.is_none() && body.is_none() && before.is_empty() && Self::is(&child, "head") {
                head = Some(child);
            } else if body.is_none() && Self::is(&child, "body") {
                body = Some(child);
            } else if body.is_none() {
                before.push(child);
            } else {
                after.push(child);
            }
        }

        if head.is_none() {
            let metadata = before
                .iter()
                .take_while(|e| METADATA_TAGS.iter().any(|tag| Self::is(e, tag)))
                .count();
            if metadata > 0 {
                let mut synthesized = ElementNode::element("head");
                synthesized.children = before.drain(..metadata).collect();
                head = Some(synthesized);
            }
        }

        let mut body = body.unwrap_or_else(|| {
            debug!("No <body> tag; wrapping document content");
            ElementNode::element("body")
        });
        if !before.is_empty() || !after.is_empty() {
            let explicit = std::mem::take(&mut body.children);
            body.children = before.into_iter().chain(explicit).chain(after).collect();
        }

        html.children = head.into_iter().chain(std::iter::once(body)).collect();
        html
    }

    fn is(element: &ElementNode, tag: &str) -> bool {
        element.tag_name.as_deref() == Some(tag)
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupParser for HtmlParser {
    fn language_id(&self) -> &'static str {
        "html"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".html", ".htm"]
    }

    fn parse(&self, source: &str) -> Result<ElementNode, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::new(format!("failed to load HTML grammar: {e}")))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::new("HTML parser produced no tree"))?;
        let root = tree.root_node();
        if root.has_error() {
            debug!("HTML contains syntax errors; continuing with recovered tree");
        }

        let mut children = Vec::new();
        let mut cursor = root.walk();
        for node in root.children(&mut cursor) {
            Self::collect(&node, source, &mut children);
        }

        Ok(Self::assemble(children))
    }
}
