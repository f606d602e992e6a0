//! Rule registry: the built-in rule set and lookup by name or code.

use crate::{
    MixinBeforeBlock, ModifierBeforeParent, NoParentBlock, OnlyModifier, RecursiveBlock,
    RecursiveElement,
};
use bem_lint_core::RuleBox;
use tracing::warn;

/// Returns all available rules, in evaluation order.
///
/// The order is the order violations for one class token are reported in.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(NoParentBlock::new()),
        Box::new(RecursiveElement::new()),
        Box::new(MixinBeforeBlock::new()),
        Box::new(OnlyModifier::new()),
        Box::new(ModifierBeforeParent::new()),
        Box::new(RecursiveBlock::new()),
    ]
}

/// Returns the rules matching the given names or codes.
///
/// Matching is case-insensitive. Evaluation order is kept regardless of the
/// order of `names`; unknown names are logged and ignored.
#[must_use]
pub fn rules_by_name<S: AsRef<str>>(names: &[S]) -> Vec<RuleBox> {
    let wanted: Vec<String> = names
        .iter()
        .map(|n| n.as_ref().trim().to_ascii_lowercase())
        .filter(|n| !n.is_empty())
        .collect();

    let rules = all_rules();
    for name in &wanted {
        let known = rules
            .iter()
            .any(|r| r.name() == name || r.code().eq_ignore_ascii_case(name));
        if !known {
            warn!("Unknown rule: {name}");
        }
    }

    rules
        .into_iter()
        .filter(|r| {
            wanted
                .iter()
                .any(|n| r.name() == n || r.code().eq_ignore_ascii_case(n))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rules_in_table_order() {
        let codes: Vec<_> = all_rules().iter().map(|r| r.code()).collect();
        assert_eq!(
            codes,
            ["BEM001", "BEM002", "BEM003", "BEM004", "BEM005", "BEM006"]
        );
    }

    #[test]
    fn test_rule_names_are_unique() {
        let rules = all_rules();
        let mut names: Vec<_> = rules.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), rules.len());
    }

    #[test]
    fn test_rules_by_name_accepts_names_and_codes() {
        let rules = rules_by_name(&["recursive-block", "bem001", "no-such-rule"]);
        let names: Vec<_> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["no-parent-block", "recursive-block"]);
    }

    #[test]
    fn test_rules_by_name_empty() {
        assert!(rules_by_name::<&str>(&[]).is_empty());
        assert!(rules_by_name(&[" "]).is_empty());
    }
}
