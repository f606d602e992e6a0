//! Core types for BEM violations and lint results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::class::BemClass;
use crate::error::DocumentError;

/// Severity level for lint violations.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    #[default]
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source span of one element, as reported by the markup front end.
///
/// Lines and columns are 1-indexed and columns count characters.
/// Offsets are 0-indexed byte offsets; `end_offset` and `end_col` point
/// directly after the last character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementSpan {
    /// Line of the first character.
    pub start_line: usize,
    /// Column of the first character.
    pub start_col: usize,
    /// Byte offset of the first character.
    pub start_offset: usize,
    /// Line of the last character.
    pub end_line: usize,
    /// Column after the last character.
    pub end_col: usize,
    /// Byte offset after the last character.
    pub end_offset: usize,
}

impl ElementSpan {
    /// Creates a span that starts and ends at the given position.
    #[must_use]
    pub fn at(line: usize, col: usize) -> Self {
        Self {
            start_line: line,
            start_col: col,
            start_offset: 0,
            end_line: line,
            end_col: col,
            end_offset: 0,
        }
    }

    /// Sets the byte offsets for this span.
    #[must_use]
    pub fn with_offsets(mut self, start: usize, end: usize) -> Self {
        self.start_offset = start;
        self.end_offset = end;
        self
    }

    /// Sets the end position for this span.
    #[must_use]
    pub fn with_end(mut self, line: usize, col: usize) -> Self {
        self.end_line = line;
        self.end_col = col;
        self
    }

    /// Length of the span in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end_offset.saturating_sub(self.start_offset)
    }

    /// Returns true if the span covers no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The six BEM naming rules, with the payload each one reports.
///
/// The relational rules carry the span of the ancestor element they
/// conflict with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "kebab-case")]
pub enum ViolationKind {
    /// An element class has no ancestor carrying its block.
    NoParentBlock,
    /// An element class is repeated on an ancestor.
    RecursiveElement {
        /// Span of the ancestor carrying the same element class.
        ancestor: Option<ElementSpan>,
    },
    /// An element class (mixin) is listed before the node's block class.
    MixinBeforeBlock,
    /// A modifier is used without the class it modifies.
    OnlyModifier,
    /// A modifier is listed before the class it modifies.
    ModifierBeforeParent,
    /// A block class is repeated on an ancestor.
    RecursiveBlock {
        /// Span of the ancestor carrying the same block class.
        ancestor: Option<ElementSpan>,
    },
}

impl ViolationKind {
    /// Rule code (e.g., "BEM001").
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoParentBlock => "BEM001",
            Self::RecursiveElement { .. } => "BEM002",
            Self::MixinBeforeBlock => "BEM003",
            Self::OnlyModifier => "BEM004",
            Self::ModifierBeforeParent => "BEM005",
            Self::RecursiveBlock { .. } => "BEM006",
        }
    }

    /// Kebab-case rule name (e.g., "no-parent-block").
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoParentBlock => "no-parent-block",
            Self::RecursiveElement { .. } => "recursive-element",
            Self::MixinBeforeBlock => "mixin-before-block",
            Self::OnlyModifier => "only-modifier",
            Self::ModifierBeforeParent => "modifier-before-parent",
            Self::RecursiveBlock { .. } => "recursive-block",
        }
    }

    /// Span of the conflicting ancestor, for the relational rules.
    #[must_use]
    pub fn second_location(&self) -> Option<ElementSpan> {
        match self {
            Self::RecursiveElement { ancestor } | Self::RecursiveBlock { ancestor } => *ancestor,
            _ => None,
        }
    }
}

/// A BEM naming violation found on one class token.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    /// Which rule fired, with its rule-specific payload.
    #[serde(flatten)]
    pub kind: ViolationKind,
    /// Rule code, mirrored from `kind` for serialized output.
    pub code: &'static str,
    /// Severity of this violation.
    pub severity: Severity,
    /// The offending class token.
    pub class: BemClass,
    /// Tag name of the element carrying the class.
    pub tag_name: String,
    /// Span of the element carrying the class.
    pub location: Option<ElementSpan>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        kind: ViolationKind,
        severity: Severity,
        class: BemClass,
        tag_name: impl Into<String>,
        location: Option<ElementSpan>,
    ) -> Self {
        Self {
            kind,
            code: kind.code(),
            severity,
            class,
            tag_name: tag_name.into(),
            location,
        }
    }

    /// Raw text of the offending class.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class.raw
    }

    /// Span of the conflicting ancestor element, if any.
    #[must_use]
    pub fn second_location(&self) -> Option<ElementSpan> {
        self.kind.second_location()
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::format::format_violation(self))
    }
}

/// Outcome of checking one document.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum DocumentOutcome {
    /// No violations; carries the rendered BEM tree outline.
    Clean {
        /// Indented outline of the BEM tree.
        outline: String,
    },
    /// The document could not be checked at all.
    Failed {
        /// The single structural error.
        error: DocumentError,
    },
    /// The document was checked and violations were found.
    Violations {
        /// Violations in document order.
        violations: Vec<Violation>,
    },
}

impl DocumentOutcome {
    /// Returns true if this outcome fails the run at the given threshold.
    #[must_use]
    pub fn is_failure(&self, fail_on: Severity) -> bool {
        match self {
            Self::Clean { .. } => false,
            Self::Failed { .. } => true,
            Self::Violations { violations } => violations.iter().any(|v| v.severity >= fail_on),
        }
    }

    /// Violations of this document (empty unless checked with findings).
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Violations { violations } => violations,
            _ => &[],
        }
    }
}

/// Result of checking a single document file.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    /// Path of the document.
    pub path: PathBuf,
    /// What the check produced.
    pub outcome: DocumentOutcome,
    /// Source text, kept for rich diagnostics.
    #[serde(skip)]
    pub source: String,
}

impl DocumentReport {
    /// Creates a new report.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, outcome: DocumentOutcome) -> Self {
        Self {
            path: path.into(),
            outcome,
            source: String::new(),
        }
    }

    /// Attaches the document source text.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

/// Result of running lint analysis over a batch of documents.
#[derive(Debug, Default, Serialize)]
pub struct LintResult {
    /// One report per checked document, in discovery order.
    pub documents: Vec<DocumentReport>,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents checked.
    #[must_use]
    pub fn files_checked(&self) -> usize {
        self.documents.len()
    }

    /// All violations across documents.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.documents.iter().flat_map(|d| d.outcome.violations())
    }

    /// Number of documents that failed with a structural error.
    #[must_use]
    pub fn failed_documents(&self) -> usize {
        self.documents
            .iter()
            .filter(|d| matches!(d.outcome, DocumentOutcome::Failed { .. }))
            .count()
    }

    /// Counts violations by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.violations()
            .fold((0, 0, 0), |(e, w, i), v| match v.severity {
                Severity::Error => (e + 1, w, i),
                Severity::Warning => (e, w + 1, i),
                Severity::Info => (e, w, i + 1),
            })
    }

    /// Returns true if any document fails at the given threshold.
    #[must_use]
    pub fn has_failures(&self, fail_on: Severity) -> bool {
        self.documents.iter().any(|d| d.outcome.is_failure(fail_on))
    }

    /// Adds documents from another result.
    pub fn extend(&mut self, other: Self) {
        self.documents.extend(other.documents);
    }
}
