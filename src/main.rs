#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic)]

use clap::{Parser, ValueEnum};
use e2e_stats::{
    Report, ReportError, load_config,
    output::{TabStyle, format_tab, to_json},
    print_report, run,
};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Tab,
}

#[derive(Parser, Debug)]
#[command(version, about = "Print the ServiCollantas E2E testing summary.")]
struct Args {
    /// Output format: text (default), json or tab
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Table style to use with --output tab
    #[arg(long, value_enum, default_value_t = TabStyle::Rounded)]
    tab_style: TabStyle,

    /// TOML file overriding built-in statistics or commands
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log debug info to stderr
    #[arg(long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn render(report: &Report, args: &Args) -> Result<(), ReportError> {
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.output {
        OutputFormat::Text => print_report(&mut out, report)?,
        OutputFormat::Json => {
            let text = to_json(report)?;
            writeln!(out, "{text}")?;
            out.flush()?;
        }
        OutputFormat::Tab => {
            let text = format_tab(report, args.tab_style);
            writeln!(out, "{text}")?;
            out.flush()?;
        }
    }
    debug!(output = ?args.output, "report written");
    Ok(())
}

fn execute(args: &Args) -> Result<(), ReportError> {
    match (&args.config, args.output) {
        (None, OutputFormat::Text) => run(),
        (Some(path), _) => render(&load_config(path)?, args),
        (None, _) => render(&Report::default(), args),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);
    debug!(output = ?args.output, config = ?args.config, "rendering report");
    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_broken_pipe() => {
            debug!("stdout closed early: {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
