//! # bem-lint-rules
//!
//! Built-in BEM naming rules for bem-lint.
//!
//! Every rule looks at one class token at a time, together with the other
//! classes on the same tag and the classed elements above it.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | BEM001 | `no-parent-block` | Forbids elements outside of their block |
//! | BEM002 | `recursive-element` | Forbids elements nested in an element with the same name |
//! | BEM003 | `mixin-before-block` | Requires block classes before element mixins |
//! | BEM004 | `only-modifier` | Forbids modifiers without their block or element |
//! | BEM005 | `modifier-before-parent` | Requires the block or element before its modifiers |
//! | BEM006 | `recursive-block` | Forbids blocks nested in a block with the same name |
//!
//! ## Usage
//!
//! ```ignore
//! use bem_lint_core::Analyzer;
//! use bem_lint_html::HtmlParser;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./site")
//!     .parser(HtmlParser::new())
//!     .rules(bem_lint_rules::all_rules())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod mixin_before_block;
mod modifier_before_parent;
mod no_parent_block;
mod only_modifier;
mod recursive_block;
mod recursive_element;
mod registry;

pub use mixin_before_block::MixinBeforeBlock;
pub use modifier_before_parent::ModifierBeforeParent;
pub use no_parent_block::NoParentBlock;
pub use only_modifier::OnlyModifier;
pub use recursive_block::RecursiveBlock;
pub use recursive_element::RecursiveElement;
pub use registry::{all_rules, rules_by_name};

/// Re-export core types for convenience.
pub use bem_lint_core::{Rule, Severity, Violation};
