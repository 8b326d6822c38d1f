//! The `check` command: report lexical issues.

use elkj_lexer::{lex, LineOffsetTable, SourceBuffer};

use super::{collect_output, for_each_file, render_issue, CommandOutput, FileReport};
use crate::{CliError, LexConfig};

/// Check every file and render its issues.
///
/// A file without issues contributes no output.
pub fn check_files(paths: &[String], config: &LexConfig) -> Result<CommandOutput, CliError> {
    let reports = for_each_file(paths, config, |path, source| Ok(check_source(path, source)))?;
    Ok(collect_output(reports))
}

/// Render the issues of one document.
pub(super) fn check_source(path: &str, source: &str) -> FileReport {
    let buf = SourceBuffer::new(source);
    let output = lex(&buf);
    let mut rendered = String::new();
    if !output.issues.is_empty() {
        let table = LineOffsetTable::build(source);
        for issue in &output.issues {
            render_issue(&mut rendered, path, source, &table, issue);
        }
    }
    FileReport {
        output: rendered,
        errors: output.issues.iter().filter(|i| i.is_error()).count(),
    }
}
