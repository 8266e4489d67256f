//! Linter configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use tvlint_rules::Severity;

use crate::LinterError;

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Result<Validator, String>> = OnceLock::new();

/// Configuration for the linter.
///
/// ```jsonc
/// {
///   "options": {
///     "handler-naming": "warning",
///     "switch-default": false,
///     "explicit-return-type": { "nested_functions": true }
///   },
///   "highlight_diagnostics": false,
///   "timings": false
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinterConfig {
    /// Rule configuration (enable/disable/severity/options), keyed by rule id.
    #[serde(default)]
    pub options: BTreeMap<String, RuleOption>,

    /// Whether every diagnostic span is also reported as a highlight.
    #[serde(default)]
    pub highlight_diagnostics: bool,

    /// Whether to log per-rule timings.
    #[serde(default)]
    pub timings: bool,
}

/// Configuration for a single rule (in options map).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RuleOption {
    /// Rule is enabled/disabled (boolean).
    Enabled(bool),
    /// Rule is enabled with severity string ("error", "warning", "off").
    Severity(String),
    /// Rule is enabled with specific options object.
    Options(serde_json::Value),
}

impl RuleOption {
    /// Returns whether the rule is enabled.
    pub fn is_enabled(&self) -> bool {
        match self {
            RuleOption::Enabled(enabled) => *enabled,
            RuleOption::Severity(s) => s != "off",
            RuleOption::Options(_) => true,
        }
    }

    /// Returns the configured severity override, if any.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            RuleOption::Severity(s) => Severity::from_name(s),
            RuleOption::Enabled(_) | RuleOption::Options(_) => None,
        }
    }

    /// Gets the rule options as JSON value.
    pub fn options(&self) -> serde_json::Value {
        match self {
            RuleOption::Enabled(_) => serde_json::Value::Null,
            RuleOption::Severity(_) => serde_json::Value::Null,
            RuleOption::Options(v) => v.clone(),
        }
    }
}

impl LinterConfig {
    /// Creates a new empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a `.json` or `.jsonc` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LinterError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LinterError::config(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        Self::from_json(&content)
    }

    /// Parses configuration from a JSON string (comments and trailing commas
    /// allowed) with schema validation.
    pub fn from_json(json: &str) -> Result<Self, LinterError> {
        let parse_options = jsonc_parser::ParseOptions::default();
        let value = jsonc_parser::parse_to_serde_value(json, &parse_options)
            .map_err(|e| LinterError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));

        let schema = CONFIG_SCHEMA
            .get_or_init(compile_schema)
            .as_ref()
            .map_err(|e| LinterError::config(e.clone()))?;

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(LinterError::config(format!(
                "Config validation failed: {}",
                error_msg
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| LinterError::config(format!("Invalid config: {}", e)))
    }

    /// Returns the option entry for a rule, if configured.
    pub fn rule(&self, id: &str) -> Option<&RuleOption> {
        self.options.get(id)
    }

    /// Returns whether a rule is enabled. Unconfigured rules are enabled.
    pub fn is_rule_enabled(&self, id: &str) -> bool {
        self.rule(id).is_none_or(RuleOption::is_enabled)
    }

    /// Computes a digest of the configuration.
    pub fn hash(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_default();
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}

fn compile_schema() -> Result<Validator, String> {
    let schema_json: serde_json::Value = serde_json::from_str(SCHEMA_JSON)
        .map_err(|e| format!("Invalid embedded config schema: {}", e))?;
    Validator::new(&schema_json).map_err(|e| format!("Invalid config schema compilation: {}", e))
}
