//! The `lex` command: print token streams.

use std::fmt::Write as _;

use elkj_lexer::{lex, LexIssue, LexOutput, LineOffsetTable, SourceBuffer, Token};
use serde::Serialize;

use super::{collect_output, for_each_file, render_issue, CommandOutput, FileReport};
use crate::{CliError, LexConfig};

/// One file in `--json` output.
#[derive(Serialize)]
struct FileDump<'a> {
    path: &'a str,
    tokens: Vec<Token<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    issues: Option<&'a [LexIssue]>,
}

/// Lex every file and render its tokens.
///
/// With `--json` the whole run prints a single JSON array with one object
/// per file.
pub fn lex_files(paths: &[String], config: &LexConfig) -> Result<CommandOutput, CliError> {
    if config.json {
        let dumps = for_each_file(paths, config, |path, source| {
            json_source(path, source, config)
        })?;
        let errors = dumps.iter().map(|d| d.errors).sum();
        let objects: Vec<&str> = dumps.iter().map(|d| d.output.as_str()).collect();
        let stdout = format!("[{}]\n", objects.join(","));
        return Ok(CommandOutput { stdout, errors });
    }
    let reports = for_each_file(paths, config, |path, source| {
        Ok(render_source(path, source, config))
    })?;
    Ok(collect_output(reports))
}

fn selected<'a>(output: &'a LexOutput<'a>, config: &LexConfig) -> Vec<Token<'a>> {
    if config.trivia {
        output.tokens.iter().copied().collect()
    } else {
        output.tokens.significant().collect()
    }
}

/// Compact JSON object for one file.
pub(super) fn json_source(
    path: &str,
    source: &str,
    config: &LexConfig,
) -> Result<FileReport, CliError> {
    let buf = SourceBuffer::new(source);
    let output = lex(&buf);
    let dump = FileDump {
        path,
        tokens: selected(&output, config),
        issues: config.issues.then_some(output.issues.as_slice()),
    };
    Ok(FileReport {
        output: serde_json::to_string(&dump)?,
        errors: issue_errors(&output, config),
    })
}

/// Error-level issues count toward the exit code only when shown.
fn issue_errors(output: &LexOutput<'_>, config: &LexConfig) -> usize {
    if config.issues {
        output.issues.iter().filter(|i| i.is_error()).count()
    } else {
        0
    }
}

/// Text listing for one file.
pub(super) fn render_source(path: &str, source: &str, config: &LexConfig) -> FileReport {
    let buf = SourceBuffer::new(source);
    let output = lex(&buf);
    let tokens = selected(&output, config);

    let mut out = String::new();
    let _ = writeln!(out, "Tokens for '{path}' ({} tokens):", tokens.len());
    for tok in &tokens {
        let _ = writeln!(
            out,
            "  {:<18} {:?} @ {}",
            tok.display_name(),
            tok.lexeme,
            tok.span
        );
    }

    if config.issues && !output.issues.is_empty() {
        let table = LineOffsetTable::build(source);
        let _ = writeln!(out, "Issues:");
        for issue in &output.issues {
            render_issue(&mut out, path, source, &table, issue);
        }
    }

    FileReport {
        output: out,
        errors: issue_errors(&output, config),
    }
}
