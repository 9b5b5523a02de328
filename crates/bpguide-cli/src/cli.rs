//! CLI argument definitions for the guide exporter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bpguide",
    version,
    about = "Unifier BP Guide - export the guide as static HTML and check its content",
    long_about = "Export the Oracle Unifier BP Guide as static HTML documents.\n\n\
                  Each document shows one section with the sidebar closed; sidebar\n\
                  entries link to the sibling documents."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write one HTML document per section plus index.html.
    Render(RenderArgs),

    /// List the sidebar groups and their sections.
    Sections(SectionsArgs),

    /// Lint the section, content and community tables.
    Check,
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Output directory for the documents.
    #[arg(long = "out-dir", value_name = "DIR", default_value = "site")]
    pub out_dir: PathBuf,

    /// Render only these section ids (repeatable). Unknown ids render the
    /// placeholder page.
    #[arg(long = "section", value_name = "ID", conflicts_with = "all")]
    pub sections: Vec<String>,

    /// Also render content bodies that no sidebar entry reaches.
    #[arg(long = "all")]
    pub all: bool,
}

#[derive(Parser)]
pub struct SectionsArgs {
    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
