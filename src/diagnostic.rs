//! @ai:module:intent Define data structures for structural diagnostics
//! @ai:module:layer domain
//! @ai:module:public_api Diagnostic, DiagnosticKind, FileReport
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// @ai:intent A single structural defect found in cleaned source text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: usize,
    pub column: usize,
}

/// @ai:intent Categorizes the three kinds of delimiter findings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A closing delimiter with nothing left on the stack to close.
    UnmatchedClosing { found: char },
    /// A closing delimiter whose kind does not pair with the innermost
    /// open delimiter.
    MismatchedDelimiter {
        found: char,
        opener: char,
        opener_line: usize,
    },
    /// An opening delimiter still unclosed at end of text.
    UnclosedOpening { opener: char },
}

/// @ai:intent All diagnostics produced for one file, in discovery order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

impl Diagnostic {
    /// @ai:intent Create a diagnostic at a 1-based line/column position
    pub fn new(kind: DiagnosticKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }

    /// @ai:intent Human-readable message for this finding
    /// @ai:effects pure
    pub fn message(&self) -> String {
        match &self.kind {
            DiagnosticKind::UnmatchedClosing { found } => {
                format!("Unmatched closing '{}'", found)
            }
            DiagnosticKind::MismatchedDelimiter {
                found,
                opener,
                opener_line,
            } => format!(
                "Mismatched delimiter. Found '{}' but expected to close '{}' from line {}",
                found, opener, opener_line
            ),
            DiagnosticKind::UnclosedOpening { opener } => {
                format!("Unclosed '{}'", opener)
            }
        }
    }
}

impl FileReport {
    /// @ai:intent Check if the file had no findings
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
