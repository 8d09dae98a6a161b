//! # create-semantic-module
//!
//! Sets up commitizen, commitlint and husky in a JavaScript module.
//!
//! Startup: `.env`, arguments, app config, logging, then one scaffolding
//! run. Every failure ends up in [`report`], which prints it and picks the
//! exit code:
//!
//! | Code | Meaning                                       |
//! |------|-----------------------------------------------|
//! |  0   | Module ready, or `--help` / `--version`       |
//! |  1   | I/O or package-manager failure                |
//! |  2   | Bad arguments, malformed manifest, cancelled  |
//! |  3   | `package.json` not found                      |
//! |  4   | App config or `.yo-rc.json` unreadable        |

use std::{io::IsTerminal as _, process::ExitCode};

use clap::Parser;
use tracing::{debug, info, warn};

use crate::{cli::Cli, config::AppConfig, error::CliError, output::OutputManager};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
#[cfg(feature = "interactive")]
mod prompter;

fn main() -> ExitCode {
    // Before tracing, so RUST_LOG from .env is honoured.
    let _ = dotenvy::dotenv();

    let args = cli::filter_unknown_options(std::env::args_os());
    let cli = match Cli::try_parse_from(args.kept) {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version land here as well, with `use_stderr() == false`.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let verbose = cli.global.verbose > 0;
    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let err = CliError::Config {
                message: format!("{e:#}"),
                source: Some(e.into()),
            };
            let color = logging::stderr_color(
                &cli.global,
                &AppConfig::default(),
                std::io::stderr().is_terminal(),
            );
            return report(&err, verbose, color);
        }
    };

    if let Err(e) = logging::init_logging(&cli.global, &config) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }
    let color = logging::stderr_color(&cli.global, &config, std::io::stderr().is_terminal());

    for option in &args.ignored {
        warn!(option = %option, "Ignoring unrecognized option");
    }
    debug!(
        module_name = cli.module_name.as_deref().or(cli.module_name_arg.as_deref()),
        yes = cli.yes,
        skip_install = cli.skip_install,
        "Arguments parsed"
    );

    let output = OutputManager::new(&cli.global, &config);

    match commands::generate::execute(cli, config, output) {
        Ok(()) => {
            info!("Scaffolding finished");
            ExitCode::SUCCESS
        }
        Err(err) => report(&err, verbose, color),
    }
}

/// Print `err` to stderr and turn it into the process exit code.
fn report(err: &CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();
    eprint!("{}", err.render(verbose, color));
    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_no_subcommands() {
        assert_eq!(Cli::command().get_subcommands().count(), 0);
    }
}
