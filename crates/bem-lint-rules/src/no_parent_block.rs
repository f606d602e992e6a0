//! Rule to forbid elements used outside of their block.
//!
//! # Rationale
//!
//! An element (`block__element`) only has meaning inside its block. Using it
//! where no enclosing element carries the block class breaks the component
//! boundary and usually means a copy-paste from another template.
//!
//! # Detected Patterns
//!
//! - `<div class="card__title">` with no `card` anywhere above it
//! - `<div class="card__title card">` where the block only appears as a
//!   mixin on the same element
//!
//! # Good Patterns
//!
//! ```html
//! <div class="card">
//!   <h2 class="card__title">...</h2>
//! </div>
//! ```

use bem_lint_core::{ClassContext, Rule, Severity, ViolationKind};

/// Rule code for no-parent-block.
pub const CODE: &str = "BEM001";

/// Rule name for no-parent-block.
pub const NAME: &str = "no-parent-block";

/// Requires an element's block on some ancestor.
#[derive(Debug, Clone)]
pub struct NoParentBlock {
    /// Severity level.
    pub severity: Severity,
}

impl Default for NoParentBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl NoParentBlock {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NoParentBlock {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids elements outside of their block"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &ClassContext<'_>) -> Option<ViolationKind> {
        let class = ctx.class();
        class.element.as_ref()?;
        if ctx.ancestor_with_class(&class.block).is_some() {
            return None;
        }
        Some(ViolationKind::NoParentBlock)
    }
}
