//! notemark - Notes corpus converter and restyler

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use notemark::corpus::{
    self, ConvertReport, StyleReport, WhitespaceReport, read_text, title_from_path,
};
use notemark::{CorpusConfig, canonicalize, decode};

#[derive(Parser)]
#[command(name = "notemark")]
#[command(version, about = "Convert and restyle a notes corpus", long_about = None)]
#[command(after_help = "EXAMPLES:
    notemark convert                Convert docs-rtf/*.rtf to <Topic>/<Topic>.md
    notemark style --dry-run        List documents that would be restyled
    notemark all --root ~/notes     Convert, clean whitespace, then restyle
    notemark decode note.rtf        Print one decoded document")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert legacy RTF sources into Markdown documents
    Convert {
        #[command(flatten)]
        args: RunArgs,

        /// Directory holding the .rtf sources [default: ROOT/docs-rtf]
        #[arg(long, value_name = "DIR")]
        source: Option<PathBuf>,
    },
    /// Canonicalize every Markdown document
    Style {
        #[command(flatten)]
        args: RunArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Replace no-break spaces in every Markdown document
    Nbsp {
        #[command(flatten)]
        args: RunArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Run convert, nbsp and style in order
    All {
        #[command(flatten)]
        args: RunArgs,
    },
    /// Decode one RTF file to stdout
    Decode {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Canonicalize one Markdown file to stdout
    Canonicalize {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Title used when the document has no heading [default: from path]
        #[arg(long)]
        title: Option<String>,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Corpus root directory
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Report what would change without writing
    #[arg(long)]
    dry_run: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct FilterArgs {
    /// Directory name to skip (repeatable) [default: .git, docs-rtf, scripts]
    #[arg(long, value_name = "NAME")]
    exclude: Vec<String>,
}

impl RunArgs {
    fn config(&self) -> CorpusConfig {
        CorpusConfig::new(&self.root).with_dry_run(self.dry_run)
    }
}

impl FilterArgs {
    fn apply(&self, config: CorpusConfig) -> CorpusConfig {
        if self.exclude.is_empty() {
            config
        } else {
            config.with_exclude(self.exclude.iter().cloned())
        }
    }
}

#[derive(Serialize)]
struct AllReport {
    convert: ConvertReport,
    nbsp: WhitespaceReport,
    style: StyleReport,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Convert { args, source } => {
            let mut config = args.config();
            if let Some(source) = source {
                config = config.with_source_dir(source);
            }
            let report = corpus::convert_legacy(&config)?;
            emit(args.json, &report, print_convert)
        }
        Command::Style { args, filter } => {
            let config = filter.apply(args.config());
            let report = corpus::restyle(&config)?;
            emit(args.json, &report, print_style)
        }
        Command::Nbsp { args, filter } => {
            let config = filter.apply(args.config());
            let report = corpus::clean_whitespace(&config)?;
            emit(args.json, &report, print_whitespace)
        }
        Command::All { args } => {
            let config = args.config();
            let report = AllReport {
                convert: corpus::convert_legacy(&config)?,
                nbsp: corpus::clean_whitespace(&config)?,
                style: corpus::restyle(&config)?,
            };
            emit(args.json, &report, |r| {
                print_convert(&r.convert);
                print_whitespace(&r.nbsp);
                print_style(&r.style);
            })
        }
        Command::Decode { file } => {
            print!("{}", decode(&read_text(&file)?));
            Ok(())
        }
        Command::Canonicalize { file, title } => {
            let title = title.unwrap_or_else(|| title_from_path(&file));
            print!("{}", canonicalize(&read_text(&file)?, &title));
            Ok(())
        }
    }
}

fn emit<T: Serialize>(
    json: bool,
    report: &T,
    human: impl FnOnce(&T),
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        human(report);
    }
    Ok(())
}

fn print_convert(report: &ConvertReport) {
    println!("Converted {} file(s):", report.written.len());
    for path in &report.written {
        println!(" - {}", path.display());
    }
    print_skipped(&report.skipped);
}

fn print_style(report: &StyleReport) {
    println!("Styled {} Markdown file(s).", report.changed.len());
    print_skipped(&report.skipped);
}

fn print_whitespace(report: &WhitespaceReport) {
    println!(
        "Replaced NBSPs in {} file(s), total {} replacement(s).",
        report.changed.len(),
        report.replacements
    );
    print_skipped(&report.skipped);
}

fn print_skipped(skipped: &[PathBuf]) {
    for path in skipped {
        eprintln!("skipped: {}", path.display());
    }
}
