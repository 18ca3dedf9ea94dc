//! Binary diagnostic report CLI.
//!
//! Reads a report of equal-width binary strings and prints the power
//! consumption and/or life support ratings derived from it.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use diagnostic::exit_codes;
use diagnostic::io::config::{DEFAULT_CONFIG_PATH, load_config, require_config};
use diagnostic::logging;
use diagnostic::summary::{Format, Section, render, summarize_file};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "diagnostic",
    version,
    about = "Derive power consumption and life support ratings from a binary diagnostic report"
)]
struct Cli {
    /// TOML config file. Without this flag `diagnostic.toml` is used when
    /// present; a file named here must exist.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print gamma and epsilon rates and their product.
    Power(ReportArgs),
    /// Print the most and least common bit-criteria ratings and their product.
    LifeSupport(ReportArgs),
    /// Print both power consumption and life support.
    Report(ReportArgs),
}

#[derive(Args)]
struct ReportArgs {
    /// Report file: one binary string per line.
    input: PathBuf,

    /// Print JSON instead of text.
    #[arg(long, conflicts_with = "text")]
    json: bool,

    /// Print text even when the config sets `json = true`.
    #[arg(long)]
    text: bool,
}

fn main() {
    logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                exit_codes::USAGE
            } else {
                exit_codes::OK
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::for_error(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => require_config(path)?,
        None => load_config(Path::new(DEFAULT_CONFIG_PATH))?,
    };
    debug!(path = ?cli.config, ?config, "config loaded");
    let (section, args) = match cli.command {
        Command::Power(args) => (Section::Power, args),
        Command::LifeSupport(args) => (Section::LifeSupport, args),
        Command::Report(args) => (Section::All, args),
    };
    let format = if args.text {
        Format::Text
    } else if args.json || config.json {
        Format::Json
    } else {
        Format::Text
    };
    let summary = summarize_file(&args.input, &config, section)?;
    print!("{}", render(&summary, format)?);
    Ok(())
}
