//! ---
//! greet_section: "05-external-interfaces"
//! greet_subsection: "binary"
//! greet_type: "source"
//! greet_scope: "code"
//! greet_description: "Control CLI for inspecting and changing a greeting."
//! greet_version: "v0.1.0"
//! greet_owner: "tbd"
//! ---
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use greet_common::{init_tracing, AppConfig, ConfigError};
use greet_core::Greeting;
use greet_extract::{extract_submissions, ExtractOptions};
use tracing::{debug, info};

const SERVICE_NAME: &str = "greetctl";
const DEFAULT_CONFIG_CANDIDATES: &[&str] = &["greet.toml"];

#[derive(Debug, Parser)]
#[command(
    author,
    disable_version_flag = true,
    about = "Greeting and submission control utility",
    long_about = None
)]
struct Cli {
    #[arg(
        short = 'V',
        long = "version",
        action = ArgAction::SetTrue,
        help = "Print version information and exit"
    )]
    version: bool,
    #[arg(
        short,
        long,
        global = true,
        value_name = "PATH",
        help = "Configuration file to load instead of the default search"
    )]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Print the effective greeting")]
    Show,
    #[command(about = "Replace the greeting message and print it")]
    Set {
        #[arg(
            allow_hyphen_values = true,
            help = "New message; any text, including an empty string or one starting with '-'"
        )]
        message: String,
    },
    #[command(about = "Print the effective configuration as TOML")]
    Config,
    #[command(about = "Unpack a submission archive into group and student folders")]
    Extract(ExtractArgs),
}

#[derive(Debug, Args)]
struct ExtractArgs {
    #[arg(
        short = 'z',
        long = "zipfile",
        value_name = "ZIP",
        help = "Submission archive to extract"
    )]
    zipfile: PathBuf,
    #[arg(
        short = 'o',
        long = "outdir",
        value_name = "DIR",
        help = "Target directory; must not exist"
    )]
    outdir: PathBuf,
    #[arg(
        short = 'g',
        long = "groups",
        value_name = "CSV",
        help = "Group file with STUDENT_ID,GROUP_ID rows"
    )]
    groups: PathBuf,
    #[arg(
        short = 'u',
        long = "unpack-only",
        help = "Unpack only; do not compile or run submissions"
    )]
    unpack_only: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("{} {}", SERVICE_NAME, env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let (config, source) = load_config(cli.config.as_deref())?;
    let _guard = init_tracing(SERVICE_NAME, &config.logging)
        .context("failed to initialise tracing")?;
    match &source {
        Some(path) => debug!(source = %path.display(), "configuration loaded"),
        None => debug!("no configuration file found; using defaults"),
    }

    match cli.command {
        Some(Commands::Show) => {
            println!("{}", effective_greeting(&config));
        }
        Some(Commands::Set { message }) => {
            let mut greeting = effective_greeting(&config);
            greeting.set_message(message);
            info!(len = greeting.message().len(), "greeting message replaced");
            println!("{greeting}");
        }
        Some(Commands::Config) => {
            print!("{}", config.to_toml_string()?);
        }
        Some(Commands::Extract(args)) => {
            let options = ExtractOptions {
                archive: args.zipfile,
                output_dir: args.outdir,
                groups_file: args.groups,
                unpack_only: args.unpack_only,
            };
            let report = extract_submissions(&options).with_context(|| {
                format!("unable to extract {}", options.archive.display())
            })?;
            print!("{report}");
        }
        None => {
            Cli::command().print_help()?;
            println!();
        }
    }
    Ok(())
}

fn effective_greeting(config: &AppConfig) -> Greeting {
    let mut greeting = Greeting::new();
    config.apply_to(&mut greeting);
    greeting
}

/// Resolve the effective configuration. An explicit path must load; the
/// default search falls back to built-in defaults when nothing is found.
fn load_config(explicit: Option<&Path>) -> Result<(AppConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let config = AppConfig::from_path(path)
            .with_context(|| format!("unable to load configuration {}", path.display()))?;
        return Ok((config, Some(path.to_path_buf())));
    }
    match AppConfig::load_with_source(DEFAULT_CONFIG_CANDIDATES) {
        Ok(loaded) => Ok((loaded.config, Some(loaded.source))),
        Err(ConfigError::NotFound { .. }) => Ok((AppConfig::default(), None)),
        Err(err) => Err(err).context("unable to load configuration"),
    }
}
