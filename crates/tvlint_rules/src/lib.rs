//! # tvlint_rules
//!
//! Diagnostic model, rule abstraction and built-in rules for tvlint.
//!
//! This crate provides:
//! - [`Diagnostic`], [`Highlight`] and [`Edit`], the values rules produce
//! - The [`Rule`] trait and the [`RuleContext`] it is given
//! - The eight built-in rules, in engine order via [`builtin_rules`]
//!
//! Rules never fail on unexpected node shapes; they skip them. The only
//! error a rule reports is [`RuleError::InvalidOptions`].

mod diagnostic;
mod error;
mod rule;
pub mod rules;

#[cfg(test)]
pub(crate) mod test_utils;

pub use diagnostic::{Diagnostic, Edit, Highlight, Severity};
pub use error::RuleError;
pub use rule::{Rule, RuleContext, RuleOutput};
pub use rules::builtin_rules;
