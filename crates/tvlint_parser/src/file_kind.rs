//! Source file kinds.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// The kind of source file being analyzed.
///
/// Selects both the grammar and the rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Plain TypeScript (`.ts`).
    Ts,
    /// TypeScript with JSX (`.tsx`).
    Tsx,
}

impl FileKind {
    /// Maps a file extension (without the leading dot) to a kind.
    pub fn from_extension(extension: &str) -> Option<Self> {
        if extension.eq_ignore_ascii_case("ts") {
            Some(Self::Ts)
        } else if extension.eq_ignore_ascii_case("tsx") {
            Some(Self::Tsx)
        } else {
            None
        }
    }

    /// Infers the kind from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// The file extension for this kind.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Ts => "ts",
            Self::Tsx => "tsx",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for FileKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s.trim_start_matches('.'))
            .ok_or_else(|| ParseError::UnknownKind(s.to_string()))
    }
}
