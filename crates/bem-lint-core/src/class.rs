//! BEM class-token parser.
//!
//! A class token is decomposed positionally by one fixed pattern:
//!
//! ```text
//! token := block ("__" element)? ("_" modName)? ("_" modValue)?
//! ```
//!
//! Segments are case-insensitive and restricted to `[a-z0-9-]`. Whether a
//! modifier's base class is actually present is left to the rules.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const CLASS_PATTERN: &str =
    r"(?i)^([a-z0-9-]+)(?:__([a-z0-9-]+))?(?:_([a-z0-9-]+))?(?:_([a-z0-9-]+))?$";

#[allow(clippy::expect_used)] // constant pattern, covered by tests
fn class_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CLASS_PATTERN).expect("class pattern must compile"))
}

/// Error returned for a token that does not fit the BEM grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassError {
    /// The token cannot be decomposed into block/element/modifier segments.
    #[error("class '{0}' does not follow BEM naming")]
    Malformed(String),
}

/// Parsed representation of one class token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BemClass {
    /// The original token, unmodified.
    pub raw: String,
    /// Leading block identifier.
    pub block: String,
    /// Element name, from a `__` segment.
    pub element: Option<String>,
    /// Modifier key, from the first `_` segment.
    pub mod_name: Option<String>,
    /// Modifier value, from the second `_` segment.
    pub mod_value: Option<String>,
}

impl BemClass {
    /// Parses a single whitespace-free class token.
    ///
    /// # Errors
    ///
    /// Returns [`ClassError::Malformed`] if the token does not match the
    /// BEM grammar.
    pub fn parse(token: &str) -> Result<Self, ClassError> {
        let caps = class_regex()
            .captures(token)
            .ok_or_else(|| ClassError::Malformed(token.to_string()))?;
        let segment = |i: usize| caps.get(i).map(|m| m.as_str().to_string());

        Ok(Self {
            raw: token.to_string(),
            block: segment(1).unwrap_or_default(),
            element: segment(2),
            mod_name: segment(3),
            mod_value: segment(4),
        })
    }

    /// True for a block class with neither element nor modifier.
    #[must_use]
    pub fn is_plain_block(&self) -> bool {
        self.element.is_none() && self.mod_name.is_none()
    }

    /// Returns `block__element` for element classes.
    #[must_use]
    pub fn element_class(&self) -> Option<String> {
        self.element
            .as_ref()
            .map(|element| format!("{}__{element}", self.block))
    }

    /// Returns the class a modifier applies to: `block__element` for an
    /// element modifier, `block` for a block modifier.
    #[must_use]
    pub fn modifier_base(&self) -> Option<String> {
        self.mod_name.as_ref()?;
        Some(self.element_class().unwrap_or_else(|| self.block.clone()))
    }
}

impl std::fmt::Display for BemClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for BemClass {
    type Err = ClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
