//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Validate every catalog of a project
//! - `lookup`: Translate one message the way a running application would
//! - `stats`: Translation progress per catalog
//! - `dump`: Print one catalog as JSON
//! - `fmt`: Rewrite catalogs in lupdate layout
//! - `init`: Initialize tsling configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag of the selected command.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Fmt(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.verbose,
            Some(Command::Dump(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by project-wide commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory (default: current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn root_dir(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub rules: Vec<CheckRule>,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Catalog file (.ts)
    pub file: PathBuf,

    /// Context name (e.g. QFileDialog)
    #[arg(long)]
    pub context: String,

    /// Source text
    #[arg(long)]
    pub source: String,

    /// Disambiguation comment
    #[arg(long)]
    pub comment: Option<String>,

    /// Count used to pick a numerus form
    #[arg(short = 'n', long = "count")]
    pub count: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct DumpCommand {
    /// Catalog file (.ts)
    pub file: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct FmtCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for unfinished, empty, inconsistent or duplicate messages
    Check(CheckCommand),
    /// Look up the translation of one message, falling back to the source text
    Lookup(LookupCommand),
    /// Show translation progress per catalog
    Stats(StatsCommand),
    /// Print a catalog as JSON
    Dump(DumpCommand),
    /// Rewrite catalogs in the layout lupdate writes
    Fmt(FmtCommand),
    /// Initialize a new .tslingrc.json configuration file
    Init,
}
