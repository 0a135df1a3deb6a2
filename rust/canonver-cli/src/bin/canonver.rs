//! canonver CLI — normalize loose version labels.

use canonver_cli::colors::red;
use canonver_cli::commands::{self, RenderOptions};
use canonver_cli::config::{CanonverConfig, OutputFormat};
use canonver_cli::CliError;

use clap::{Parser as ClapParser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(
    name = "canonver",
    version,
    about = "Normalize loose version labels into canonical semantic versions",
    help_template = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}

Examples:
  canonver normalize go1.22.3 1.20rc1      Print v1.22.3 and v1.20.0-rc1
  canonver compare go1.21 go1.22           Print <
  canonver sort v1.2 1.10 1.9              Sort by version precedence
  canonver check go1.22.3 --at-least 1.21  Exit 1 if the version is older
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to a canonver.toml (defaults to searching upwards from the cwd)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize each input; an empty input prints "absent"
    Normalize {
        /// Raw version strings
        inputs: Vec<String>,
        /// Omit the leading "v"
        #[arg(long)]
        standard: bool,
        /// Also read newline-separated inputs from stdin
        #[arg(long)]
        stdin: bool,
    },
    /// Compare two versions and print <, = or >
    Compare {
        left: String,
        right: String,
    },
    /// Sort versions by precedence
    Sort {
        inputs: Vec<String>,
        /// Newest first
        #[arg(long)]
        reverse: bool,
    },
    /// Check that a version is at least a given minimum
    Check {
        version: String,
        /// Minimum acceptable version
        #[arg(long)]
        at_least: String,
    },
    /// Print a default canonver.toml
    InitConfig,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CANONVER_LOG")
        .unwrap_or_else(|_| EnvFilter::new("canonver=warn,canonver_cli=warn,canonver_core=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<CanonverConfig, CliError> {
    match path {
        Some(path) => CanonverConfig::load_from(path),
        None => Ok(CanonverConfig::load()),
    }
}

fn run(cli: Cli) -> Result<i32, CliError> {
    let config = load_config(cli.config.as_ref())?;
    let mut opts = RenderOptions::from_config(&config);
    if cli.json {
        opts.format = OutputFormat::Json;
    }
    // Pipes and files get plain text so scripts can match on it
    if cli.no_color || opts.format == OutputFormat::Json || !std::io::stdout().is_terminal() {
        opts.color = false;
    }

    let (output, code) = match cli.command {
        Commands::Normalize {
            mut inputs,
            standard,
            stdin,
        } => {
            if stdin {
                inputs.extend(commands::read_inputs(std::io::stdin().lock())?);
            }
            opts.standard |= standard;
            (commands::normalize_all(&inputs, &opts)?, 0)
        }
        Commands::Compare { left, right } => (commands::compare(&left, &right, &opts)?, 0),
        Commands::Sort { inputs, reverse } => (commands::sort(&inputs, reverse, &opts)?, 0),
        Commands::Check { version, at_least } => {
            let outcome = commands::check(&version, &at_least, &opts)?;
            (outcome.output, if outcome.satisfied { 0 } else { 1 })
        }
        Commands::InitConfig => (CanonverConfig::default_template().trim_end().to_string(), 0),
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(code)
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{} {}", red("error:"), err);
            process::exit(2);
        }
    }
}
