//! Common functionality shared between targets
use std::env;

use crate::{
    cli,
    config::{self, Config},
    pipeline::Step,
    result::Result,
};
use color_eyre::eyre::ContextCompat;

/// Resolve effective configuration: relmake.toml values (or defaults) with
/// CLI flags layered on top.
pub fn resolve_config(args: &cli::Args) -> Result<Config> {
    let mut config = config::load(args.config.as_deref())?;

    if let Some(python) = &args.python {
        config.python = python.clone();
    }

    if let Some(pip_args) = &args.pip_args {
        config.pip_args =
            pip_args.split_whitespace().map(String::from).collect();
    }

    if config.package.is_empty() {
        config.package = project_basename()?;
    }

    Ok(config)
}

/// Default package name: the basename of the current directory.
fn project_basename() -> Result<String> {
    let cwd = env::current_dir()?;
    let basename = cwd
        .file_name()
        .wrap_err("failed to determine project directory name")?;
    Ok(basename.display().to_string())
}

/// Step invoking the configured Python interpreter with the given argv.
pub fn python_step(config: &Config, args: &[&str]) -> Step {
    Step::new(&config.python).args(args.iter().copied())
}

/// Step invoking the configured Python interpreter with a configured tool
/// command (lint, test runner).
pub fn python_tool_step(config: &Config, command: &[String]) -> Step {
    Step::new(&config.python).args(command)
}

/// Steps installing the current project with pip, honoring extra pip args.
pub fn install_steps(config: &Config) -> Vec<Step> {
    let step = Step::new(&config.python)
        .args(["-m", "pip", "install"])
        .args(&config.pip_args)
        .arg(".");

    vec![step]
}
