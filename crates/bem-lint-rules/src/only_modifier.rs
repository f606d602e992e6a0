//! Rule to forbid modifiers without the class they modify.
//!
//! # Rationale
//!
//! A modifier changes the look or state of a block or element. On its own
//! it carries none of the base styles, so `btn_disabled` without `btn` is
//! almost always a mistake.
//!
//! # Detected Patterns
//!
//! - `class="btn_disabled"`
//! - `class="menu__item_active"` without `menu__item`

use bem_lint_core::{ClassContext, Rule, Severity, ViolationKind};

/// Rule code for only-modifier.
pub const CODE: &str = "BEM004";

/// Rule name for only-modifier.
pub const NAME: &str = "only-modifier";

/// Forbids modifier classes without their base class on the same tag.
#[derive(Debug, Clone)]
pub struct OnlyModifier {
    /// Severity level.
    pub severity: Severity,
}

impl Default for OnlyModifier {
    fn default() -> Self {
        Self::new()
    }
}

impl OnlyModifier {
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

impl Rule for OnlyModifier {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids modifiers without their block or element"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &ClassContext<'_>) -> Option<ViolationKind> {
        let base = ctx.class().modifier_base()?;
        if ctx.classes().iter().any(|c| c.raw == base) {
            return None;
        }
        Some(ViolationKind::OnlyModifier)
    }
}
