//! Iterative fixing.

use blake3::Hash;
use tracing::debug;
use tvlint_parser::FileKind;

use crate::{Linter, LinterError, apply_edits};

/// How an iterative fix run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixStatus {
    /// An analysis produced no more edits.
    Converged {
        /// Number of analyses run.
        iterations: usize,
    },
    /// Edits were still being produced when the iteration limit was hit.
    MaxIterationsReached {
        /// Edits applied in the last round.
        remaining: usize,
    },
    /// Applying edits returned to an earlier text.
    CycleDetected {
        /// Number of distinct texts in the cycle.
        cycle_length: usize,
    },
}

/// The text after fixing, and how the run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    /// The fixed content.
    pub content: String,
    /// Total number of edits applied.
    pub edits_applied: usize,
    /// Why the run stopped.
    pub status: FixStatus,
}

impl FixOutcome {
    /// Whether the content differs from the input.
    pub fn modified(&self) -> bool {
        self.edits_applied > 0
    }
}

/// Repeatedly analyzes and applies edits until the text is stable.
#[derive(Debug, Clone)]
pub struct FixCoordinator {
    max_iterations: usize,
}

impl FixCoordinator {
    /// Creates a coordinator with the default limit of 3 edit rounds.
    pub fn new() -> Self {
        Self { max_iterations: 3 }
    }

    /// Sets the maximum number of edit rounds.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Fixes `source` with the linter's edits.
    ///
    /// Fails if the source does not parse or a round's edits conflict.
    pub fn fix(
        &self,
        linter: &Linter,
        source: &str,
        kind: FileKind,
    ) -> Result<FixOutcome, LinterError> {
        let mut content = source.to_string();
        let mut edits_applied = 0;

        let status = self.apply_iterative(&mut content, |current| {
            let edits = linter.try_analyze(current, kind)?.edits;
            if edits.is_empty() {
                return Ok(None);
            }
            let fixed = apply_edits(current, &edits)?;
            edits_applied += edits.len();
            Ok(Some((fixed, edits.len())))
        })?;

        Ok(FixOutcome {
            content,
            edits_applied,
            status,
        })
    }

    /// Drives a fix function until it yields nothing, the iteration limit
    /// is reached, or the content repeats.
    ///
    /// `apply_fix` returns the new content and how many edits produced it.
    pub(crate) fn apply_iterative<F>(
        &self,
        content: &mut String,
        mut apply_fix: F,
    ) -> Result<FixStatus, LinterError>
    where
        F: FnMut(&str) -> Result<Option<(String, usize)>, LinterError>,
    {
        let mut history: Vec<Hash> = vec![hash_content(content)];
        let mut iterations = 0;
        let mut remaining = 0;

        while iterations < self.max_iterations {
            iterations += 1;

            let Some((fixed, count)) = apply_fix(content.as_str())? else {
                return Ok(FixStatus::Converged { iterations });
            };
            debug!("Fix round {} applied {} edits", iterations, count);
            remaining = count;
            *content = fixed;

            let current_hash = hash_content(content);
            if let Some(prev_idx) = history.iter().position(|h| *h == current_hash) {
                return Ok(FixStatus::CycleDetected {
                    cycle_length: history.len() - prev_idx,
                });
            }
            history.push(current_hash);
        }

        Ok(FixStatus::MaxIterationsReached { remaining })
    }
}

impl Default for FixCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

fn hash_content(content: &str) -> Hash {
    blake3::hash(content.as_bytes())
}
