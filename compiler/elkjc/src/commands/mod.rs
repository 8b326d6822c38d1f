//! Command handlers for the `elkj` CLI.
//!
//! Each handler reads its files in parallel, renders one report per file,
//! and returns the reports in input order. Shared helpers like
//! [`read_file`] live here in the module root.

use std::fmt::Write as _;

use elkj_lexer::{LexIssue, LineOffsetTable};
use rayon::prelude::*;
use tracing::debug;

use crate::{CliError, LexConfig};

mod check;
mod lex;

pub use check::check_files;
pub use lex::lex_files;

/// Rendered output for one input file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReport {
    /// Text for stdout.
    pub output: String,
    /// Number of error-level issues found.
    pub errors: usize,
}

/// Output of a whole command run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Text for stdout, files in input order.
    pub stdout: String,
    /// Error-level issues across all files.
    pub errors: usize,
}

impl CommandOutput {
    /// Process exit code: 1 if any error-level issue was found.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.errors > 0)
    }
}

type ParseArgs = fn(&[String]) -> Result<(LexConfig, Vec<String>), CliError>;
type Command = fn(&[String], &LexConfig) -> Result<CommandOutput, CliError>;

/// Run the command named by `args[0]` (program name already stripped).
///
/// `Ok(None)` means help was requested.
pub fn dispatch(args: &[String]) -> Result<Option<CommandOutput>, CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Err(CliError::MissingCommand);
    };
    match command.as_str() {
        "lex" => run(rest, LexConfig::parse_lex_args, lex_files).map(Some),
        "check" => run(rest, LexConfig::parse_check_args, check_files).map(Some),
        "help" | "--help" | "-h" => Ok(None),
        other => Err(CliError::Usage(format!(
            "unknown command '{other}'\nRun 'elkj help' for usage"
        ))),
    }
}

fn run(args: &[String], parse: ParseArgs, command: Command) -> Result<CommandOutput, CliError> {
    let (mut config, paths) = parse(args)?;
    config.apply_env()?;
    command(&paths, &config)
}

/// Read a source file, mapping I/O failures to readable errors.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::from_io(path, e))
}

/// Run `render` over every path on the configured pool.
///
/// Reports come back in the order of `paths`. The first unreadable file
/// aborts the run.
fn for_each_file<F>(
    paths: &[String],
    config: &LexConfig,
    render: F,
) -> Result<Vec<FileReport>, CliError>
where
    F: Fn(&str, &str) -> Result<FileReport, CliError> + Sync,
{
    let pool = config.thread_pool()?;
    debug!(
        files = paths.len(),
        threads = pool.current_num_threads(),
        "processing files"
    );
    pool.install(|| {
        paths
            .par_iter()
            .map(|path| {
                let source = read_file(path)?;
                render(path, &source)
            })
            .collect()
    })
}

/// `path:line:col: severity: message`, plus a `help:` line when the issue
/// has a hint.
fn render_issue(
    out: &mut String,
    path: &str,
    source: &str,
    table: &LineOffsetTable,
    issue: &LexIssue,
) {
    let (line, col) = table.offset_to_line_col(source, issue.span.start);
    let severity = issue.severity();
    let _ = writeln!(out, "{path}:{line}:{col}: {severity}: {issue}");
    if let Some(hint) = issue.hint() {
        let _ = writeln!(out, "    help: {hint}");
    }
}

/// Join per-file reports in input order.
fn collect_output(reports: Vec<FileReport>) -> CommandOutput {
    reports
        .into_iter()
        .fold(CommandOutput::default(), |mut acc, report| {
            acc.stdout.push_str(&report.output);
            acc.errors += report.errors;
            acc
        })
}

/// Print usage information.
pub fn print_usage() {
    print!("{}", usage());
}

/// The `help` text.
pub fn usage() -> &'static str {
    "elkj - lexer for ELK Graph JSON\n\
     \n\
     Usage: elkj <command> [options] <files...>\n\
     \n\
     Commands:\n\
     \x20 lex <files...>     Print the token stream of each file\n\
     \x20 check <files...>   Report lexical issues as path:line:col: severity: message\n\
     \x20 help               Show this message\n\
     \n\
     Lex options:\n\
     \x20 --trivia           Include whitespace and comment tokens\n\
     \x20 --json             Print tokens as a JSON array\n\
     \x20 --issues           Append lexical issues after the tokens\n\
     \n\
     Options for both:\n\
     \x20 --threads=<n>      Lex at most <n> files at once\n\
     \n\
     Environment:\n\
     \x20 ELKJ_THREADS       Default for --threads\n\
     \x20 RUST_LOG           Enable tracing output (e.g. RUST_LOG=elkj_lexer=debug)\n"
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
