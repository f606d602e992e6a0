//! # bem-lint-html
//!
//! Tree-sitter based HTML front end for bem-lint.
//!
//! [`HtmlParser`] implements [`bem_lint_core::MarkupParser`]: it turns an
//! HTML document into the owned element tree the core checks, keeping tag
//! names, attributes and element spans.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod parser;

pub use parser::HtmlParser;
