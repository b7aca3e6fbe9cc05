//! Command implementations for the exprcheck CLI.
//!
//! Each command returns `CliResult<ExitCode>`; rejected input becomes a `CliError` carrying the
//! rendered diagnostic so `run()` can print it and exit with a failure code.

use std::fs;
use std::io;

use tracing::{debug, info};

use exprcheck_syntax::{CheckError, check, diagnostics, lexer, parser};

use super::{CliError, CliResult, ExitCode};
use crate::config::ShellConfig;
use crate::repl::Repl;

/// Maximum file size accepted by `check --file` (10 MB)
const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Read a file, refusing anything larger than `MAX_SOURCE_SIZE`.
///
/// ## Errors
/// - The file cannot be accessed or read
/// - The file is not valid UTF-8
/// - The file exceeds `MAX_SOURCE_SIZE`
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Run the interactive shell on stdin/stdout.
pub fn repl(config: ShellConfig) -> CliResult<ExitCode> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Repl::new(stdin.lock(), stdout.lock(), config);
    let summary = shell.run().map_err(|e| CliError::failure(format!("Error: {}", e)))?;
    info!(
        lines = summary.lines,
        accepted = summary.accepted,
        rejected = summary.rejected(),
        "session summary"
    );
    Ok(ExitCode::SUCCESS)
}

/// Check a single line.
pub fn check_text(text: &str, trace: bool) -> CliResult<ExitCode> {
    let text = text.trim();
    if trace {
        return trace_text(text);
    }
    match check(text) {
        Ok(_) => {
            println!("valid");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Err(CliError::failure(diagnostics::render(text, &err).trim_end())),
    }
}

/// A rejected line of a checked file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// 1-based line number
    pub line: usize,
    /// Trimmed line text
    pub text: String,
    pub error: CheckError,
}

/// Check every non-blank line of `source` independently.
///
/// Returns the number of lines checked together with the failures, in line order.
pub fn check_lines(source: &str) -> (usize, Vec<LineFailure>) {
    let mut checked = 0;
    let mut failures = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }
        checked += 1;
        if let Err(error) = check(text) {
            debug!(line = idx + 1, error = %error, "line rejected");
            failures.push(LineFailure {
                line: idx + 1,
                text: text.to_string(),
                error,
            });
        }
    }
    (checked, failures)
}

/// Check each line of a file and report every rejected line.
pub fn check_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let (checked, failures) = check_lines(&source);

    if failures.is_empty() {
        println!("{}: {} line(s) valid", file_path, checked);
        return Ok(ExitCode::SUCCESS);
    }

    let mut msg = String::new();
    for failure in &failures {
        msg.push_str(&format!("{}:{}: {}\n", file_path, failure.line, failure.error.kind()));
        msg.push_str(&diagnostics::render(&failure.text, &failure.error));
        msg.push('\n');
    }
    msg.push_str(&format!(
        "{}: {} of {} line(s) rejected",
        file_path,
        failures.len(),
        checked
    ));
    Err(CliError::failure(msg))
}

/// Print the token sequence of a line, one token per row with its byte span.
pub fn lex_text(text: &str) -> CliResult<ExitCode> {
    let text = text.trim();
    let tokens = lexer::scan(text).map_err(|err| CliError::failure(diagnostics::render(text, &err).trim_end()))?;
    for tok in &tokens {
        println!("{:>4}..{:<4} {}", tok.span.start, tok.span.end, tok);
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the recognizer trace of a line followed by the verdict.
pub fn trace_text(text: &str) -> CliResult<ExitCode> {
    let text = text.trim();
    let tokens = lexer::scan(text).map_err(|err| CliError::failure(diagnostics::render(text, &err).trim_end()))?;
    let (result, trace) = parser::parse_traced(&tokens);
    for line in &trace {
        println!("{}", line);
    }
    match result {
        Ok(()) => {
            println!("valid");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Err(CliError::failure(diagnostics::render(text, &err).trim_end())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use exprcheck_syntax::ErrorKind;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("exprcheck_{}_{}.txt", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_check_lines_skips_blank_lines() {
        let (checked, failures) = check_lines("x = 5\n\n   \n3 + 4 * 2;\n");
        assert_eq!(checked, 2);
        assert!(failures.is_empty());
    }

    #[test]
    fn test_check_lines_reports_line_numbers() {
        let source = "f(1, 2, 3)\nx =\n\n\"open\n1 2\n";
        let (checked, failures) = check_lines(source);
        assert_eq!(checked, 4);
        let lines: Vec<usize> = failures.iter().map(|f| f.line).collect();
        assert_eq!(lines, vec![2, 4, 5]);
        assert_eq!(failures[0].error.kind(), ErrorKind::Syntax);
        assert_eq!(failures[1].error.kind(), ErrorKind::Lexical);
        assert_eq!(failures[1].text, "\"open");
        assert_eq!(
            failures[2].error.to_string(),
            "input not fully consumed: found NUMBER after a complete statement"
        );
    }

    #[test]
    fn test_check_lines_handles_crlf() {
        let (checked, failures) = check_lines("x = 1;\r\ny = 2\r\n");
        assert_eq!(checked, 2);
        assert!(failures.is_empty());
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("/definitely/not/here.txt").unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
    }

    #[test]
    fn test_check_file_all_valid() {
        let path = temp_file("valid", "x = 5\nf(a, b)\n");
        let result = check_file(&path.to_string_lossy());
        let _ = fs::remove_file(&path);
        assert_eq!(result.unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_check_file_reports_failures() {
        let path = temp_file("invalid", "x = 5\n)\n");
        let result = check_file(&path.to_string_lossy());
        let _ = fs::remove_file(&path);
        let err = result.unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains(":2: syntax error"));
        assert!(err.message.ends_with("1 of 2 line(s) rejected"));
    }

    #[test]
    fn test_check_text_verdicts() {
        assert_eq!(check_text("  x = 5  ", false).unwrap(), ExitCode::SUCCESS);
        let err = check_text("x =", false).unwrap_err();
        assert!(err.message.contains("expected a primary value, found END"));
    }

    #[test]
    fn test_trace_text_failure() {
        let err = trace_text("1 2").unwrap_err();
        assert!(err.message.contains("input not fully consumed"));
    }

    #[test]
    fn test_lex_text_accepts_valid_tokens() {
        assert_eq!(lex_text("null + \"s\"").unwrap(), ExitCode::SUCCESS);
    }
}
