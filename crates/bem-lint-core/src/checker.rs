//! Per-document rule checking.

use tracing::debug;

use crate::config::Config;
use crate::element::SourceElement;
use crate::printer::render_outline;
use crate::rule::{ClassContext, Rule, RuleBox};
use crate::tree::BemTree;
use crate::types::{DocumentOutcome, Violation};

/// Runs a set of rules over BEM trees.
///
/// Checking is exhaustive: every rule is evaluated for every class token
/// of every node, and nothing short-circuits on the first finding.
pub struct Checker {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Checker {
    /// Creates a checker with the given rules and a default configuration.
    #[must_use]
    pub fn new(rules: Vec<RuleBox>) -> Self {
        Self {
            rules,
            config: Config::default(),
        }
    }

    /// Sets the configuration used for enabling rules and severities.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the number of enabled rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.enabled_rules().count()
    }

    fn enabled_rules(&self) -> impl Iterator<Item = &RuleBox> {
        self.rules
            .iter()
            .filter(|rule| self.config.is_rule_enabled(rule.name()))
    }

    /// Checks a built tree and returns violations in document order:
    /// nodes in pre-order, classes in attribute order, rules in
    /// registration order.
    #[must_use]
    pub fn check_tree(&self, tree: &BemTree<'_>) -> Vec<Violation> {
        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule {} ({})", rule.name(), rule.code());
            }
        }
        let rules: Vec<&RuleBox> = self.enabled_rules().collect();
        let mut violations = Vec::new();

        for id in tree.preorder() {
            let node = tree.node(id);
            for index in 0..node.classes().len() {
                let ctx = ClassContext::new(tree, id, index);
                for rule in &rules {
                    let Some(kind) = rule.check(&ctx) else {
                        continue;
                    };
                    let severity = self
                        .config
                        .rule_severity(rule.name())
                        .unwrap_or_else(|| rule.default_severity());
                    violations.push(Violation::new(
                        kind,
                        severity,
                        ctx.class().clone(),
                        node.tag_name(),
                        node.span(),
                    ));
                }
            }
        }

        violations
    }

    /// Builds the BEM tree for `body` and checks it.
    ///
    /// A malformed class anywhere yields [`DocumentOutcome::Failed`]; a
    /// tree without findings yields [`DocumentOutcome::Clean`] with its
    /// outline.
    #[must_use]
    pub fn check_document(&self, body: &dyn SourceElement) -> DocumentOutcome {
        let tree = match BemTree::build(body) {
            Ok(tree) => tree,
            Err(error) => return DocumentOutcome::Failed { error },
        };
        debug!(
            "Built BEM tree with {} nodes and {} distinct classes",
            tree.len(),
            tree.all_classes().len()
        );

        let violations = self.check_tree(&tree);
        if violations.is_empty() {
            DocumentOutcome::Clean {
                outline: render_outline(&tree),
            }
        } else {
            DocumentOutcome::Violations { violations }
        }
    }
}
