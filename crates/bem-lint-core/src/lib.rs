//! # bem-lint-core
//!
//! Core framework for checking BEM (Block, Element, Modifier) class naming
//! in markup documents.
//!
//! This crate provides:
//!
//! - [`BemClass`] for parsing and classifying class tokens
//! - [`SourceElement`] and [`MarkupParser`], the seam to markup front ends
//! - [`BemTree`], the tree of class-bearing elements under `<body>`
//! - [`Rule`] trait for per-class structural rules
//! - [`Checker`] and [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] and [`DocumentOutcome`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use bem_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./site")
//!     .parser(HtmlParser::new())
//!     .rules(bem_lint_rules::all_rules())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod checker;
mod class;
mod config;
mod diagnostic;
mod element;
mod error;
mod format;
mod printer;
mod rule;
mod tree;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use checker::Checker;
pub use class::{BemClass, ClassError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use diagnostic::{render, DocumentDiagnostic, ViolationDiagnostic};
pub use element::{
    locate_body, Attribute, ElementNode, MarkupParser, ParseError, SourceElement,
};
pub use error::DocumentError;
pub use format::{
    document_messages, format_document_error, format_violation, format_violations, marker,
    violation_message,
};
pub use printer::render_outline;
pub use rule::{ClassContext, Rule, RuleBox};
pub use tree::{BemNode, BemTree, NodeId};
pub use types::{
    DocumentOutcome, DocumentReport, ElementSpan, LintResult, Severity, Violation, ViolationKind,
};
