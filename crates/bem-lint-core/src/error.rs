//! Structural errors that stop a document from being checked.

use miette::Diagnostic;
use serde::Serialize;
use std::path::PathBuf;

use crate::types::ElementSpan;

/// An error that aborts checking of one document.
///
/// Unlike violations, a structural error leaves nothing to check: it is
/// reported on its own and the document produces no violation list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DocumentError {
    /// A class token does not fit the BEM grammar.
    #[error("class '{class}' does not follow BEM naming")]
    #[diagnostic(
        code(bem::malformed_class),
        help("use block, block__element, block_modifier or block__element_modifier_value")
    )]
    MalformedClass {
        /// The offending class token.
        class: String,
        /// Tag of the element carrying the class.
        tag_name: String,
        /// Span of the element carrying the class.
        location: Option<ElementSpan>,
    },

    /// The document has no `html` element.
    #[error("no <html> element found")]
    #[diagnostic(code(bem::missing_html))]
    MissingHtml,

    /// The `html` element has no `body` child.
    #[error("no <body> element found")]
    #[diagnostic(code(bem::missing_body))]
    MissingBody,

    /// The document file could not be read.
    #[error("failed to read {path}: {message}")]
    #[diagnostic(code(bem::read))]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error message.
        message: String,
    },

    /// The markup front end could not produce an element tree.
    #[error("failed to parse markup: {message}")]
    #[diagnostic(code(bem::parse))]
    Parse {
        /// Parser error message.
        message: String,
    },
}

impl DocumentError {
    /// Span of the element the error points at, if any.
    #[must_use]
    pub fn location(&self) -> Option<ElementSpan> {
        match self {
            Self::MalformedClass { location, .. } => *location,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_class_message_names_class() {
        let err = DocumentError::MalformedClass {
            class: "Card!Title".into(),
            tag_name: "div".into(),
            location: Some(ElementSpan::at(3, 5)),
        };
        assert_eq!(err.to_string(), "class 'Card!Title' does not follow BEM naming");
        assert_eq!(err.location(), Some(ElementSpan::at(3, 5)));
    }

    #[test]
    fn missing_roots_have_fixed_messages() {
        assert_eq!(DocumentError::MissingHtml.to_string(), "no <html> element found");
        assert_eq!(DocumentError::MissingBody.to_string(), "no <body> element found");
        assert_eq!(DocumentError::MissingBody.location(), None);
    }
}
