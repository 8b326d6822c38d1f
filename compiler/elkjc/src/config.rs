//! Command configuration from arguments and environment.

use crate::CliError;

/// Environment variable capping the number of worker threads.
pub const THREADS_ENV: &str = "ELKJ_THREADS";

/// Configuration for the `lex` and `check` commands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexConfig {
    /// Print whitespace and comment tokens too.
    pub trivia: bool,
    /// Print a JSON array instead of text.
    pub json: bool,
    /// Append lexical issues to each file's token listing.
    pub issues: bool,
    /// Worker thread cap; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl LexConfig {
    /// Parse `lex` arguments into a config and the input paths.
    pub fn parse_lex_args(args: &[String]) -> Result<(LexConfig, Vec<String>), CliError> {
        parse_args(args, true)
    }

    /// Parse `check` arguments; output flags are rejected.
    pub fn parse_check_args(args: &[String]) -> Result<(LexConfig, Vec<String>), CliError> {
        parse_args(args, false)
    }

    /// Fill `threads` from [`THREADS_ENV`] unless `--threads` already set it.
    pub fn apply_env(&mut self) -> Result<(), CliError> {
        if self.threads.is_none() {
            let value = std::env::var(THREADS_ENV).ok();
            self.threads = parse_threads(value.as_deref(), THREADS_ENV)?;
        }
        Ok(())
    }

    /// Build the worker pool files are lexed on.
    pub fn thread_pool(&self) -> Result<rayon::ThreadPool, CliError> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = self.threads {
            builder = builder.num_threads(threads);
        }
        Ok(builder.build()?)
    }
}

fn parse_args(
    args: &[String],
    allow_output_flags: bool,
) -> Result<(LexConfig, Vec<String>), CliError> {
    let mut config = LexConfig::default();
    let mut paths = Vec::new();
    let mut options_done = false;

    for arg in args {
        if options_done || !arg.starts_with('-') {
            paths.push(arg.clone());
            continue;
        }
        match arg.as_str() {
            "--" => options_done = true,
            "--trivia" if allow_output_flags => config.trivia = true,
            "--json" if allow_output_flags => config.json = true,
            "--issues" if allow_output_flags => config.issues = true,
            other => {
                if let Some(value) = other.strip_prefix("--threads=") {
                    config.threads = parse_threads(Some(value), "--threads")?;
                } else {
                    return Err(CliError::Usage(format!("unknown option: {other}")));
                }
            }
        }
    }

    if paths.is_empty() {
        return Err(CliError::Usage("no input files".to_string()));
    }
    Ok((config, paths))
}

/// A positive thread count; `None` when unset or empty.
fn parse_threads(value: Option<&str>, source: &str) -> Result<Option<usize>, CliError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    match value.parse::<usize>() {
        Ok(0) | Err(_) => Err(CliError::Usage(format!(
            "{source} must be a positive integer, got '{value}'"
        ))),
        Ok(n) => Ok(Some(n)),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
