//! CLI argument parsing for confmerge.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! actual merge logic lives in the `merge` module; this layer only
//! binds flags to engine inputs.

use crate::dialect::Dialect;
use clap::Parser;
use std::path::PathBuf;

/// Merge a template fragment into a configuration file, preserving the
/// user's own customizations.
///
/// Machine-managed regions are delimited by comment markers; everything
/// outside them belongs to the user and survives every merge. Exit code
/// 0 means success, 1 error, 2 fresh install (target created from
/// scratch).
#[derive(Parser, Debug)]
#[command(name = "confmerge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target configuration file to merge into (e.g. ~/.zshrc).
    #[arg(long)]
    pub target: PathBuf,

    /// Template file whose content goes into the managed section.
    #[arg(long)]
    pub template: PathBuf,

    /// Section identifier used in the markers (e.g. zsh-base, vimrc).
    #[arg(long)]
    pub section: String,

    /// Comment dialect of the target file.
    #[arg(long = "type", value_enum)]
    pub dialect: Dialect,

    /// Compute and print the summary without writing any file.
    #[arg(long)]
    pub dry_run: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Print the merge result as JSON instead of the summary.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
