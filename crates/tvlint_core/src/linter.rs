//! Core analysis engine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, warn};

use tvlint_parser::{FileKind, Parser, parser_for};
use tvlint_rules::{Highlight, Rule, RuleContext, RuleOutput, Severity, builtin_rules};

use crate::{AnalysisResult, LinterConfig, LinterError};

/// Files larger than this are refused by [`Linter::analyze_file`].
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// A built-in rule together with its configuration.
struct ConfiguredRule {
    rule: Box<dyn Rule>,
    /// The configured override, else the rule's default.
    severity: Severity,
    options: serde_json::Value,
}

/// The core analysis engine.
///
/// Holds the enabled rules in their fixed order and runs them against one
/// parsed source at a time. A `Linter` keeps no state between calls, so it
/// can be shared freely across threads.
pub struct Linter {
    /// Linter configuration.
    config: LinterConfig,
    /// Pre-computed hash of the configuration.
    config_hash: String,
    /// Enabled rules, in engine order.
    rules: Vec<ConfiguredRule>,
}

impl Linter {
    /// Creates a new linter with the given configuration.
    ///
    /// Fails if the configuration names a rule that does not exist.
    pub fn new(config: LinterConfig) -> Result<Self, LinterError> {
        let builtin = builtin_rules();

        if let Some(unknown) = config
            .options
            .keys()
            .find(|id| !builtin.iter().any(|r| r.id() == id.as_str()))
        {
            return Err(LinterError::config(format!("Unknown rule '{}'", unknown)));
        }

        let rules: Vec<ConfiguredRule> = builtin
            .into_iter()
            .filter(|rule| config.is_rule_enabled(rule.id()))
            .map(|rule| {
                let option = config.rule(rule.id());
                ConfiguredRule {
                    severity: option
                        .and_then(|o| o.severity())
                        .unwrap_or_else(|| rule.default_severity()),
                    options: option.map(|o| o.options()).unwrap_or_default(),
                    rule,
                }
            })
            .collect();

        debug!("Enabled {} rules", rules.len());

        // Pre-compute config hash
        let config_hash = config.hash();

        Ok(Self {
            config,
            config_hash,
            rules,
        })
    }

    /// The configuration this linter was built from.
    pub fn config(&self) -> &LinterConfig {
        &self.config
    }

    /// Digest of the configuration, see [`LinterConfig::hash`].
    pub fn config_hash(&self) -> &str {
        &self.config_hash
    }

    /// Ids of the rules that run on `kind`, in execution order.
    pub fn rule_ids(&self, kind: FileKind) -> Vec<&'static str> {
        self.rules_for(kind).map(|entry| entry.rule.id()).collect()
    }

    fn rules_for(&self, kind: FileKind) -> impl Iterator<Item = &ConfiguredRule> {
        self.rules
            .iter()
            .filter(move |entry| entry.rule.applies_to(kind))
    }

    /// Analyzes `source` as a file of the given kind.
    ///
    /// A source that fails to parse yields an empty result.
    pub fn analyze(&self, source: &str, kind: FileKind) -> AnalysisResult {
        match self.try_analyze(source, kind) {
            Ok(result) => result,
            Err(e) => {
                warn!("Skipping analysis of {} source: {}", kind, e);
                AnalysisResult::new()
            }
        }
    }

    /// Like [`analyze`](Self::analyze), but reports parse failures.
    pub fn try_analyze(&self, source: &str, kind: FileKind) -> Result<AnalysisResult, LinterError> {
        debug!("Analyzing {} source ({} bytes)", kind, source.len());

        let tree = parser_for(kind).parse(source)?;
        let line_index = tree.line_index();
        let ctx = RuleContext::new(&tree, kind);

        let mut result = AnalysisResult::new();
        for entry in self.rules_for(kind) {
            let id = entry.rule.id();
            let start = Instant::now();
            let checked = entry.rule.check(&ctx.with_options(&entry.options));
            if self.config.timings {
                debug!("Rule '{}' took {:?}", id, start.elapsed());
            }

            let RuleOutput {
                diagnostics,
                highlights,
                edits,
            } = match checked {
                Ok(output) => output,
                Err(e) => {
                    warn!("Rule '{}' failed: {}", id, e);
                    continue;
                }
            };

            result
                .diagnostics
                .extend(diagnostics.into_iter().map(|mut diagnostic| {
                    diagnostic.severity = entry.severity;
                    diagnostic.loc = line_index.location(diagnostic.span);
                    diagnostic
                }));
            result.highlights.extend(highlights);
            result.edits.extend(edits);
        }

        if self.config.highlight_diagnostics {
            let marked: Vec<_> = result
                .diagnostics
                .iter()
                .map(|d| Highlight::new(d.rule_id.clone(), d.span))
                .collect();
            result.highlights.extend(marked);
        }

        debug!(
            "Found {} diagnostics, {} highlights, {} edits",
            result.diagnostics.len(),
            result.highlights.len(),
            result.edits.len()
        );

        Ok(result)
    }

    /// Reads and analyzes one file. The kind is taken from its extension.
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<AnalysisResult, LinterError> {
        let path = path.as_ref();
        debug!("Analyzing {}", path.display());

        let kind = FileKind::from_path(path).ok_or_else(|| {
            LinterError::file(format!("Unsupported file type: {}", path.display()))
        })?;

        let metadata = fs::metadata(path).map_err(|e| {
            LinterError::file(format!(
                "Failed to read metadata for {}: {}",
                path.display(),
                e
            ))
        })?;

        if !metadata.is_file() {
            return Err(LinterError::file(format!(
                "Not a regular file: {}",
                path.display()
            )));
        }

        if metadata.len() > MAX_FILE_SIZE {
            return Err(LinterError::file(format!(
                "File size exceeds limit of {} bytes: {}",
                MAX_FILE_SIZE,
                path.display()
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| LinterError::file(format!("Failed to read {}: {}", path.display(), e)))?;

        self.try_analyze(&content, kind)
    }

    /// Analyzes files in parallel using rayon.
    ///
    /// Every file is analyzed independently; results come back in input
    /// order, paired with their path.
    pub fn analyze_files(
        &self,
        paths: &[PathBuf],
    ) -> Vec<(PathBuf, Result<AnalysisResult, LinterError>)> {
        paths
            .par_iter()
            .map(|path| {
                let result = self.analyze_file(path);
                if let Err(ref error) = result {
                    warn!("Failed to analyze {}: {}", path.display(), error);
                }
                (path.clone(), result)
            })
            .collect()
    }
}

impl std::fmt::Debug for Linter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<_> = self.rules.iter().map(|entry| entry.rule.id()).collect();
        f.debug_struct("Linter")
            .field("rules", &ids)
            .field("config_hash", &self.config_hash)
            .finish()
    }
}

/// Analyzes `source` with the default configuration.
pub fn analyze(source: &str, kind: FileKind) -> AnalysisResult {
    match Linter::new(LinterConfig::default()) {
        Ok(linter) => linter.analyze(source, kind),
        Err(e) => {
            warn!("Failed to create default linter: {}", e);
            AnalysisResult::new()
        }
    }
}
