//! Rule trait for defining BEM naming rules.

use crate::class::BemClass;
use crate::tree::{BemNode, BemTree, NodeId};
use crate::types::{Severity, ViolationKind};

/// Everything a rule may inspect about one class token.
///
/// A rule sees the token, its position in the owning node's class list,
/// the sibling classes on the same node, and (through the ancestor walks)
/// the classed elements above it.
#[derive(Debug, Clone, Copy)]
pub struct ClassContext<'t> {
    tree: &'t BemTree<'t>,
    node: NodeId,
    index: usize,
}

impl<'t> ClassContext<'t> {
    /// Creates a context for the class at `index` on `node`.
    #[must_use]
    pub fn new(tree: &'t BemTree<'t>, node: NodeId, index: usize) -> Self {
        Self { tree, node, index }
    }

    /// The class being checked.
    #[must_use]
    pub fn class(&self) -> &'t BemClass {
        &self.classes()[self.index]
    }

    /// Position of the class within its node's class list.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// All classes on the owning node, in attribute order.
    #[must_use]
    pub fn classes(&self) -> &'t [BemClass] {
        self.tree.node(self.node).classes()
    }

    /// The owning node.
    #[must_use]
    pub fn node(&self) -> &'t BemNode<'t> {
        self.tree.node(self.node)
    }

    /// Nearest ancestor whose classes satisfy `pred`.
    pub fn find_ancestor<F>(&self, pred: F) -> Option<&'t BemNode<'t>>
    where
        F: Fn(&[BemClass]) -> bool,
    {
        self.tree.find_ancestor(self.node, pred)
    }

    /// Returns true if some ancestor's classes satisfy `pred`.
    pub fn any_ancestor<F>(&self, pred: F) -> bool
    where
        F: Fn(&[BemClass]) -> bool,
    {
        self.tree.any_ancestor(self.node, pred)
    }

    /// Nearest ancestor carrying a class with the given raw name.
    #[must_use]
    pub fn ancestor_with_class(&self, raw: &str) -> Option<&'t BemNode<'t>> {
        self.find_ancestor(|classes| classes.iter().any(|c| c.raw == raw))
    }
}

/// A per-class BEM naming rule.
///
/// Rules are evaluated independently for every class token of every node;
/// returning `Some` records one violation for that token.
///
/// # Example
///
/// ```ignore
/// use bem_lint_core::{ClassContext, Rule, ViolationKind};
///
/// pub struct OnlyModifier;
///
/// impl Rule for OnlyModifier {
///     fn name(&self) -> &'static str { "only-modifier" }
///     fn code(&self) -> &'static str { "BEM004" }
///
///     fn check(&self, ctx: &ClassContext<'_>) -> Option<ViolationKind> {
///         let base = ctx.class().modifier_base()?;
///         let present = ctx.classes().iter().any(|c| c.raw == base);
///         (!present).then_some(ViolationKind::OnlyModifier)
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "no-parent-block").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "BEM001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks one class token.
    fn check(&self, ctx: &ClassContext<'_>) -> Option<ViolationKind>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
