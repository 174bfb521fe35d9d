//! Lintra CLI - code quality analyzer.

mod formatters;
mod run;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lintra")]
#[command(about = "Analyze code for security, performance, and style issues", long_about = None)]
struct Cli {
    /// File to analyze; `-` or absent reads from stdin
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Language of the submitted code
    ///
    /// Inferred from the file extension when omitted; defaults to
    /// "javascript" for stdin input.
    #[arg(short, long, value_name = "LANGUAGE")]
    language: Option<String>,

    /// Output format
    #[arg(short, long = "output", value_enum, default_value = "human")]
    format: OutputFormat,

    /// Skip the LLM suggestion service even when an API key is configured
    #[arg(long)]
    no_llm: bool,

    /// Model identifier for the suggestion service
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,

    /// Suggestion service timeout in seconds
    #[arg(long, value_name = "SECS")]
    llm_timeout: Option<u64>,

    /// List registered rules and exit
    #[arg(long)]
    list_rules: bool,

    /// Verbose output
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    run::run(run::RunOptions {
        path: cli.path,
        language: cli.language,
        format: cli.format,
        no_llm: cli.no_llm,
        model: cli.model,
        llm_timeout: cli.llm_timeout,
        list_rules: cli.list_rules,
    })
    .await
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lintra={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
