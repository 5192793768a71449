use clap::Parser;

mod changelog;
mod cli;
mod command;
mod config;
mod error;
mod pipeline;
mod repo;
mod result;

use crate::result::Result;

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("relmake")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    match &cli_args.command {
        cli::Command::Build => command::build::execute(&cli_args),
        cli::Command::Install => command::install::execute(&cli_args),
        cli::Command::Uninstall => command::uninstall::execute(&cli_args),
        cli::Command::Doc => command::doc::execute(&cli_args),
        cli::Command::Check => command::check::execute(&cli_args),
        cli::Command::Test => command::test::execute(&cli_args),
        cli::Command::Release { version } => {
            command::release::execute(&cli_args, version)
        }
        cli::Command::Clean => command::clean::execute(&cli_args),
    }
}
