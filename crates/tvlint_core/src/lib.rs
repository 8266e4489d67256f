//! # tvlint_core
//!
//! Core analysis engine for tvlint.
//!
//! This crate provides:
//! - The main [`Linter`], which selects rules by file kind and merges their output
//! - Configuration loading ([`LinterConfig`])
//! - Safe edit application ([`apply_edits`]) and iterative fixing ([`FixCoordinator`])
//! - Parallel analysis of independent files
//!
//! ## Example
//!
//! ```rust,ignore
//! use tvlint_core::{FileKind, Linter, LinterConfig, apply_edits};
//!
//! let linter = Linter::new(LinterConfig::from_file("tvlint.jsonc")?)?;
//! let result = linter.analyze(source, FileKind::Tsx);
//! for diagnostic in &result.diagnostics {
//!     println!("{}: {}", diagnostic.rule_id, diagnostic.message);
//! }
//! let fixed = apply_edits(source, &result.edits)?;
//! ```

mod config;
mod error;
mod fix;
mod fixer;
mod linter;
mod result;

pub use config::{LinterConfig, RuleOption};
pub use error::LinterError;
pub use fix::{FixCoordinator, FixOutcome, FixStatus};
pub use fixer::apply_edits;
pub use linter::{Linter, MAX_FILE_SIZE, analyze};
pub use result::AnalysisResult;

pub use tvlint_ast::{Location, Position, Span};
pub use tvlint_parser::FileKind;
pub use tvlint_rules::{Diagnostic, Edit, Highlight, Severity};
