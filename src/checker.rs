//! @ai:module:intent Check files and directory trees for delimiter balance
//! @ai:module:layer application
//! @ai:module:public_api analyze, check_file, check_path, CheckResult
//! @ai:module:depends_on cleaner, matcher, diagnostic, language, error
//! @ai:module:stateless true

use crate::cleaner::clean_source;
use crate::diagnostic::{Diagnostic, FileReport};
use crate::error::{Error, Result};
use crate::language;
use crate::matcher::match_delimiters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use walkdir::WalkDir;

/// @ai:intent Analyze one file's text for delimiter problems
/// @ai:post diagnostics in discovery order, unclosed openers last
/// @ai:idempotent true
/// @ai:effects pure
pub fn analyze(text: &str) -> Vec<Diagnostic> {
    match_delimiters(&clean_source(text))
}

/// @ai:intent Result of checking a file or directory tree
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CheckResult {
    pub files_checked: usize,
    /// Reports for files that had findings. Clean files are counted, not listed.
    pub reports: Vec<FileReport>,
}

impl CheckResult {
    /// @ai:intent Check if the run passed (no findings in any file)
    pub fn passed(&self) -> bool {
        self.reports.is_empty()
    }

    /// @ai:intent Number of files with at least one finding
    pub fn files_with_errors(&self) -> usize {
        self.reports.len()
    }

    /// @ai:intent Total findings across all files
    pub fn total_diagnostics(&self) -> usize {
        self.reports.iter().map(|r| r.diagnostics.len()).sum()
    }

    /// @ai:intent Merge another check result into this one
    pub fn merge(&mut self, other: CheckResult) {
        self.files_checked += other.files_checked;
        self.reports.extend(other.reports);
    }

    fn record(&mut self, report: FileReport) {
        self.files_checked += 1;
        if !report.is_clean() {
            self.reports.push(report);
        }
    }
}

/// @ai:intent Check a single file
/// @ai:pre path exists and is readable
/// @ai:effects fs:read
///
/// An explicitly named file is checked whatever its extension.
pub fn check_file(path: &Path) -> Result<FileReport> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(FileReport {
        path: path.to_path_buf(),
        diagnostics: analyze(&content),
    })
}

/// @ai:intent Check a file, or every Kotlin file under a directory
/// @ai:effects fs:read
pub fn check_path(path: &Path) -> Result<CheckResult> {
    let mut result = CheckResult::default();

    if path.is_file() {
        result.record(check_file(path)?);
        return Ok(result);
    }

    for entry in WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let file_path = entry.path();

        if !language::is_kotlin_file(file_path) || language::in_build_output(file_path) {
            continue;
        }

        tracing::debug!("checking {}", file_path.display());
        result.record(check_file(file_path)?);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_analyze_clean_source() {
        let diags = analyze("fun main() {\n    println(\"hi\")\n}\n");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_analyze_ignores_brackets_in_strings_and_comments() {
        assert!(analyze("val s = \"{{{\"").is_empty());
        assert!(analyze("// }}}\n/* ]]] */\n").is_empty());
    }

    #[test]
    fn test_analyze_escaped_quote_then_unclosed_brace() {
        let diags = analyze("\"\\\"\"{");
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].kind,
            crate::diagnostic::DiagnosticKind::UnclosedOpening { opener: '{' }
        );
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let text = "fun broken() { (]\n";
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn test_analyze_multiline_string_quirk() {
        // Newlines inside a string literal are consumed during cleaning, so
        // positions after the literal shift up by the lines it spanned.
        let diags = analyze("val s = \"a\nb\"\n{");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 2);
        assert_eq!(diags[0].column, 1);
    }

    #[test]
    fn test_check_file_reports_findings() {
        let mut file = NamedTempFile::with_suffix(".kt").unwrap();
        write!(file, "fun f() {{\n    val x = listOf(1\n}}\n").unwrap();

        let report = check_file(file.path()).unwrap();
        assert!(!report.is_clean());
    }

    #[test]
    fn test_check_file_missing_path() {
        let err = check_file(Path::new("/no/such/File.kt")).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[test]
    fn test_check_path_single_clean_file() {
        let mut file = NamedTempFile::with_suffix(".kt").unwrap();
        write!(file, "class A {{}}\n").unwrap();

        let result = check_path(file.path()).unwrap();
        assert_eq!(result.files_checked, 1);
        assert!(result.passed());
    }

    #[test]
    fn test_check_path_walks_directory_and_skips_build() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::create_dir_all(dir.path().join("build/generated")).unwrap();

        fs::write(dir.path().join("src/Good.kt"), "fun ok() {}\n").unwrap();
        fs::write(dir.path().join("src/Bad.kt"), "fun broken() {\n").unwrap();
        fs::write(dir.path().join("src/notes.txt"), "{ [ (\n").unwrap();
        fs::write(
            dir.path().join("build/generated/Gen.kt"),
            "fun gen() {\n",
        )
        .unwrap();

        let result = check_path(dir.path()).unwrap();
        assert_eq!(result.files_checked, 2);
        assert_eq!(result.files_with_errors(), 1);
        assert_eq!(result.total_diagnostics(), 1);
        assert!(result.reports[0].path.ends_with("Bad.kt"));
    }

    #[test]
    fn test_merge() {
        let mut a = CheckResult {
            files_checked: 2,
            reports: vec![],
        };
        let b = CheckResult {
            files_checked: 3,
            reports: vec![FileReport {
                path: "X.kt".into(),
                diagnostics: vec![],
            }],
        };
        a.merge(b);
        assert_eq!(a.files_checked, 5);
        assert_eq!(a.reports.len(), 1);
    }
}
