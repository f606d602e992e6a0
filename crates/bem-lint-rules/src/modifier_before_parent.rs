//! Rule to require the modified class before its modifiers.
//!
//! # Rationale
//!
//! Reading `btn btn_disabled` left to right names the thing before its
//! variant. Templates that put modifiers first are harder to scan and tend
//! to drift.
//!
//! # Detected Patterns
//!
//! - `class="btn_disabled btn"`
//! - `class="menu__item_active menu__item"`

use bem_lint_core::{ClassContext, Rule, Severity, ViolationKind};

/// Rule code for modifier-before-parent.
pub const CODE: &str = "BEM005";

/// Rule name for modifier-before-parent.
pub const NAME: &str = "modifier-before-parent";

/// Requires a modifier's base class to be listed before it.
#[derive(Debug, Clone)]
pub struct ModifierBeforeParent {
    /// Severity level.
    pub severity: Severity,
}

impl Default for ModifierBeforeParent {
    fn default() -> Self {
        Self::new()
    }
}

impl ModifierBeforeParent {
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

impl Rule for ModifierBeforeParent {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires the block or element before its modifiers"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &ClassContext<'_>) -> Option<ViolationKind> {
        let base = ctx.class().modifier_base()?;
        // First occurrence; a missing base is only-modifier's concern.
        let position = ctx.classes().iter().position(|c| c.raw == base)?;
        (position > ctx.index()).then_some(ViolationKind::ModifierBeforeParent)
    }
}
