//! NewsCheck CLI - check whether a piece of content looks like genuine news.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use newscheck_core::{ContentType, Locale};
use tracing_subscriber::EnvFilter;

mod commands;
mod exit_codes;
mod utils;

use commands::check::CheckArgs;
use exit_codes::ExitCode;

const EXIT_CODES_HELP: &str = "\
Exit codes:
  0   authentic or uncertain verdict
  1   general error
  64  usage error
  65  content judged fake
  66  input file unreadable";

#[derive(Parser)]
#[command(name = "newscheck")]
#[command(author, version, about = "News content verification", long_about = None)]
#[command(after_help = EXIT_CODES_HELP)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical fingerprint of a text (stdin when FILE is omitted or '-')
    Fingerprint {
        /// Path to the content file
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Verify a piece of content (stdin when FILE is omitted or '-')
    Check {
        /// Path to the content file; image/video must be a data: URL
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Content type: text, image or video
        #[arg(short = 't', long = "type", default_value = "text")]
        content_type: ContentType,

        /// JSON array of verified articles to match against
        #[arg(short, long, value_name = "PATH")]
        articles: Option<PathBuf>,

        /// Language for the report: en or ta
        #[arg(short, long, default_value = "en")]
        lang: Locale,

        /// Print the verdict as JSON instead of a report
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "newscheck=debug,newscheck_core=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Fingerprint { file } => commands::fingerprint::execute(file),
        Commands::Check {
            file,
            content_type,
            articles,
            lang,
            json,
        } => {
            commands::check::execute(CheckArgs {
                file,
                content_type,
                articles,
                locale: lang,
                json,
            })
            .await
        }
    }
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                exit_codes::USAGE_ERROR
            } else {
                exit_codes::SUCCESS
            };
            // --help and --version also arrive here
            let _ = e.print();
            return exit_status(code);
        }
    };

    init_tracing(cli.verbose);

    let exit = run(cli)
        .await
        .unwrap_or_else(|err| ExitCode::from_anyhow(&err));

    if let Some(message) = &exit.message {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }
    exit_status(exit.code)
}

fn exit_status(code: i32) -> std::process::ExitCode {
    std::process::ExitCode::from(u8::try_from(code).unwrap_or(1))
}
