//! CLI argument parsing for relmake targets.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Global CLI arguments shared by every target.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, env = "PYTHON", global = true)]
    /// Python interpreter used for all delegated tooling. Falls back to the
    /// PYTHON env var, then to `python3`.
    pub python: Option<String>,

    #[arg(long, env = "PIP_ARGS", global = true, allow_hyphen_values = true)]
    /// Extra arguments forwarded to `pip install`, whitespace separated.
    /// Falls back to the PIP_ARGS env var.
    pub pip_args: Option<String>,

    #[arg(long, global = true)]
    /// Path to a relmake.toml configuration file. Defaults to
    /// `relmake.toml` in the current directory when present.
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Target to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Build and release targets.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the package in place with setup.py.
    Build,

    /// Install the package with pip, honoring --pip-args.
    Install,

    /// Uninstall the package with pip.
    Uninstall,

    /// Install the package, then generate HTML documentation.
    Doc,

    /// Run the configured lint tool.
    Check,

    /// Run the configured test matrix runner.
    Test,

    /// Publish a release documented in the changelog: tag, push, build an
    /// sdist, and upload it to the package index.
    Release {
        /// Version to release. Must appear in the changelog on a line not
        /// marked unreleased (`/xx`).
        version: String,
    },

    /// Remove build, dist, doc, and cache artifacts.
    Clean,
}
