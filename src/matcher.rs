//! @ai:module:intent Match grouping delimiters over cleaned source text
//! @ai:module:layer domain
//! @ai:module:public_api match_delimiters
//! @ai:module:depends_on diagnostic
//! @ai:module:stateless true

use crate::diagnostic::{Diagnostic, DiagnosticKind};

/// @ai:intent An open delimiter awaiting its matching close
#[derive(Debug, Clone, Copy)]
struct Frame {
    opener: char,
    line: usize,
    column: usize,
}

/// @ai:intent Scan cleaned text and report every delimiter problem
/// @ai:pre input has had strings, char literals and comments removed
/// @ai:post closing-delimiter findings appear in text order, unclosed openers after them in opening order
/// @ai:effects pure
///
/// Positions are 1-based. All three delimiter families share one stack, so a
/// `[` opened inside `{` must close before the `}` does. A mismatched closer
/// still pops its frame, keeping one bad closer from cascading into a
/// spurious finding for every closer after it.
pub fn match_delimiters(cleaned: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut line = 1;
    let mut column = 0;

    for ch in cleaned.chars() {
        column += 1;
        if ch == '\n' {
            line += 1;
            column = 0;
            continue;
        }

        match ch {
            '{' | '[' | '(' => stack.push(Frame {
                opener: ch,
                line,
                column,
            }),
            '}' | ']' | ')' => {
                let expected = match ch {
                    '}' => '{',
                    ']' => '[',
                    _ => '(',
                };

                match stack.pop() {
                    None => diagnostics.push(Diagnostic::new(
                        DiagnosticKind::UnmatchedClosing { found: ch },
                        line,
                        column,
                    )),
                    Some(frame) => {
                        if frame.opener != expected {
                            diagnostics.push(Diagnostic::new(
                                DiagnosticKind::MismatchedDelimiter {
                                    found: ch,
                                    opener: frame.opener,
                                    opener_line: frame.line,
                                },
                                line,
                                column,
                            ));
                        }
                    }
                }
            }
            _ => {}
        }
    }

    for frame in stack {
        diagnostics.push(Diagnostic::new(
            DiagnosticKind::UnclosedOpening {
                opener: frame.opener,
            },
            frame.line,
            frame.column,
        ));
    }

    diagnostics
}
