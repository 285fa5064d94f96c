//! @ai:module:intent Structural syntax checking for Kotlin source files
//! @ai:module:layer infrastructure
//! @ai:module:public_api cleaner, matcher, checker, diagnostic, language, output, error
//! @ai:module:stateless true
//!
//! # ktcheck
//!
//! A library for catching unbalanced or mismatched grouping delimiters
//! (`{}`, `[]`, `()`) in Kotlin source files without running a full Gradle
//! build. Source text is first cleaned of string literals, char literals and
//! comments, then scanned with a single delimiter stack.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ktcheck::{checker, output};
//! use std::path::Path;
//!
//! // Analyze text directly
//! for diagnostic in checker::analyze("fun f() { (]\n") {
//!     println!("Line {}, Col {}: {}", diagnostic.line, diagnostic.column, diagnostic.message());
//! }
//!
//! // Check a whole source tree
//! let result = checker::check_path(Path::new(".")).unwrap();
//! println!("{}", output::format_check_result(&result, output::OutputFormat::Text));
//! ```

pub mod checker;
pub mod cleaner;
pub mod diagnostic;
pub mod error;
pub mod language;
pub mod matcher;
pub mod output;

pub use checker::{analyze, check_file, check_path, CheckResult};
pub use cleaner::clean_source;
pub use diagnostic::{Diagnostic, DiagnosticKind, FileReport};
pub use error::{Error, Result};
pub use language::{in_build_output, is_kotlin_file};
pub use matcher::match_delimiters;
pub use output::{format_check_result, OutputFormat};
