//! CLI tool to break down a regular expression and show its matches.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use regularish::telemetry::{self, LOG_ENV};
use regularish::{FlagSupportCache, Query, RegexCompiler, RenderOptions, Report, Style, render};

#[derive(Debug, Parser)]
#[command(
    name = "regularish",
    version,
    about = "Break down a regular expression and highlight its matches line by line"
)]
struct Cli {
    /// Pattern to analyse.
    #[arg(conflicts_with = "demo")]
    pattern: Option<String>,

    /// Flag letters, e.g. `gi`.
    #[arg(short, long, default_value = "")]
    flags: String,

    /// File to match against; `-` or no value reads stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Use the built-in demo pattern, flags, and input.
    #[arg(long)]
    demo: bool,

    /// When to highlight matches with terminal colours.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Log filter, e.g. `regularish=debug`.
    #[arg(long)]
    log: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Failures that stop the tool before a report can be printed.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("stdin: {0}")]
    ReadStdin(#[source] io::Error),
    #[error(transparent)]
    Telemetry(#[from] telemetry::TelemetryError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Print the report; returns whether the pattern compiled.
fn run(cli: &Cli) -> Result<bool, CliError> {
    let env_filter = std::env::var(LOG_ENV).ok();
    telemetry::initialise(&telemetry::resolve_filter(
        cli.log.as_deref(),
        env_filter.as_deref(),
    ))?;

    let query = if cli.demo {
        Query::demo()
    } else {
        Query::new(
            cli.pattern.clone().unwrap_or_default(),
            cli.flags.clone(),
            read_input(cli.input.as_deref())?,
        )
    };

    let compiler = RegexCompiler::new();
    let mut cache = FlagSupportCache::new();
    let report = Report::compute(&compiler, &query, &mut cache);

    let style = match cli.color {
        ColorChoice::Always => Style::Ansi,
        ColorChoice::Never => Style::Plain,
        ColorChoice::Auto if io::stdout().is_terminal() => Style::Ansi,
        ColorChoice::Auto => Style::Plain,
    };

    print!("{}", render(&report, &RenderOptions { style }));
    Ok(report.error.is_none())
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    let mut content = match path {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).map_err(|source| CliError::ReadFile {
                path: path.display().to_string(),
                source,
            })?
        }
        // Nothing piped in and no file named: match against empty input.
        None if io::stdin().is_terminal() => String::new(),
        _ => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map_err(CliError::ReadStdin)?;
            content
        }
    };

    // The final newline of a file would otherwise show up as an extra empty line.
    if content.ends_with('\n') {
        content.pop();
    }
    Ok(content)
}
