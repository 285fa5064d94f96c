//! @ai:module:intent Format check results for terminal and JSON output
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, format_check_result
//! @ai:module:depends_on checker, diagnostic
//! @ai:module:stateless true

use crate::checker::CheckResult;
use colored::Colorize;

/// @ai:intent Output format options
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonPretty,
}

/// @ai:intent Format a check result as a string
/// @ai:effects pure
pub fn format_check_result(result: &CheckResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(result).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(result).unwrap_or_default(),
        OutputFormat::Text => format_check_result_text(result),
    }
}

/// @ai:intent Format a check result as human-readable text
/// @ai:effects pure
fn format_check_result_text(result: &CheckResult) -> String {
    let mut output = String::new();

    if result.passed() {
        output.push_str(&format!(
            "{} All {} Kotlin files passed structural checks\n",
            "✓".green().bold(),
            result.files_checked
        ));
        return output;
    }

    output.push_str(&format!("{}\n\n", "Structural errors found:".red().bold()));

    for report in &result.reports {
        output.push_str(&format!(
            "{}:\n",
            report.path.display().to_string().bold()
        ));

        for diagnostic in &report.diagnostics {
            output.push_str(&format!(
                "  Line {}, Col {}: {}\n",
                diagnostic.line,
                diagnostic.column,
                diagnostic.message()
            ));
        }

        output.push('\n');
    }

    output.push_str(&format!(
        "Checked {} Kotlin files, {} with errors\n",
        result.files_checked,
        result.files_with_errors().to_string().red().bold()
    ));

    output
}
