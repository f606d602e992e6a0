//! Rule to require block classes before element mixins on the same tag.
//!
//! # Rationale
//!
//! When a tag is both a block and an element of an outer block (a mixin),
//! listing the block first keeps the component the tag *is* in front of the
//! role it *plays*.
//!
//! # Detected Patterns
//!
//! - `class="card__title heading"` where `heading` is a plain block
//!
//! # Good Patterns
//!
//! ```html
//! <h2 class="heading card__title">...</h2>
//! ```

use bem_lint_core::{ClassContext, Rule, Severity, ViolationKind};

/// Rule code for mixin-before-block.
pub const CODE: &str = "BEM003";

/// Rule name for mixin-before-block.
pub const NAME: &str = "mixin-before-block";

/// Requires plain block classes to precede element classes on a tag.
#[derive(Debug, Clone)]
pub struct MixinBeforeBlock {
    /// Severity level.
    pub severity: Severity,
}

impl Default for MixinBeforeBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl MixinBeforeBlock {
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

impl Rule for MixinBeforeBlock {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires block classes before element mixins"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &ClassContext<'_>) -> Option<ViolationKind> {
        ctx.class().element.as_ref()?;
        let last_block = ctx.classes().iter().rposition(|c| c.is_plain_block())?;
        (last_block > ctx.index()).then_some(ViolationKind::MixinBeforeBlock)
    }
}
