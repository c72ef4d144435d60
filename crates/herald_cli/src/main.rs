//! Herald CLI — issue configure-time diagnostics from the command line.
//!
//! `herald issue` renders one message the way the build tool would, honoring
//! `herald.toml` and `-W` options; `herald flags` prints the resolved warning
//! switches.

#![warn(missing_docs)]

mod flags;
mod issue;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use herald_config::{ConfigError, HeraldConfig, WarningFlags, CONFIG_FILE_NAME};
use herald_diagnostics::{Frame, Severity};
use tracing_subscriber::EnvFilter;

/// Herald — diagnostic reporting for build configuration.
#[derive(Parser, Debug)]
#[command(name = "herald", version, about = "Herald diagnostic reporter")]
pub struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Directory containing `herald.toml` (defaults to the current directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Warning options: `-Wdev`, `-Wno-dev`, `-Werror=dev`, `-Wno-error=dev`,
    /// and the same for `deprecated`.
    #[arg(short = 'W', global = true, value_name = "OPTION", allow_hyphen_values = true)]
    pub warnings: Vec<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Issue a single diagnostic message.
    Issue(IssueArgs),
    /// Print the resolved warning switches.
    Flags,
}

/// Arguments for the `herald issue` subcommand.
#[derive(Parser, Debug)]
pub struct IssueArgs {
    /// Message severity.
    #[arg(value_enum)]
    pub severity: SeverityArg,

    /// Message text.
    pub text: String,

    /// Call context as `FILE[:LINE[:COMMAND]]`, innermost first.
    #[arg(long = "frame", value_name = "FRAME")]
    pub frames: Vec<Frame>,

    /// Append the program stack to internal errors.
    #[arg(long)]
    pub native_stack: bool,
}

/// Severity names accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeverityArg {
    /// Debug log.
    Log,
    /// Plain warning.
    Warning,
    /// Fatal error.
    FatalError,
    /// Internal error.
    InternalError,
    /// Developer warning.
    DevWarning,
    /// Developer error.
    DevError,
    /// Deprecation warning.
    DeprecationWarning,
    /// Deprecation error.
    DeprecationError,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Log => Severity::Log,
            SeverityArg::Warning => Severity::Warning,
            SeverityArg::FatalError => Severity::FatalError,
            SeverityArg::InternalError => Severity::InternalError,
            SeverityArg::DevWarning => Severity::DeveloperWarning,
            SeverityArg::DevError => Severity::DeveloperError,
            SeverityArg::DeprecationWarning => Severity::DeprecationWarning,
            SeverityArg::DeprecationError => Severity::DeprecationError,
        }
    }
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to use colored output.
    pub color: bool,
    /// Directory holding `herald.toml`, if given.
    pub config: Option<PathBuf>,
    /// Warning option bodies, in command-line order.
    pub warnings: Vec<String>,
}

impl GlobalArgs {
    /// Resolves the warning switches from `herald.toml` and `-W` options.
    ///
    /// An explicit `--config` directory must contain `herald.toml`; without
    /// it, a missing file in the current directory means defaults.
    pub fn warning_flags(&self) -> Result<WarningFlags, ConfigError> {
        let config = match &self.config {
            Some(dir) => herald_config::load_config(dir)?,
            None if Path::new(CONFIG_FILE_NAME).is_file() => {
                herald_config::load_config(Path::new("."))?
            }
            None => HeraldConfig::default(),
        };
        herald_config::resolve_flags(&config, &self.warnings)
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        color,
        config: cli.config,
        warnings: cli.warnings,
    };

    let result = match cli.command {
        Command::Issue(ref args) => issue::run(args, &global),
        Command::Flags => flags::run(&global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
