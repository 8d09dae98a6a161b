//! Tracing subscriber for the binary.
//!
//! The core and adapter crates only emit events; this is the one place a
//! subscriber is installed. Events go to stderr so stdout carries only the
//! summary.
//!
//! `-q` → error, default → warn, `-v` → info, `-vv` → debug, `-vvv` → trace.
//! `RUST_LOG`, when set, replaces the whole filter.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{cli::GlobalArgs, config::AppConfig};

/// Targets that follow the verbosity flags.
const WORKSPACE_TARGETS: [&str; 3] = [
    "create_semantic_module",
    "semantic_module_core",
    "semantic_module_adapters",
];

pub fn init_logging(args: &GlobalArgs, config: &AppConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directives(level_for(args)))?,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(args.verbose >= 2)
        .with_ansi(stderr_color(args, config, std::io::stderr().is_terminal()))
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("a tracing subscriber is already installed: {e}"))
}

/// Colour on stderr: a terminal, and neither `--no-color` nor
/// `output.no_color` set.
pub fn stderr_color(args: &GlobalArgs, config: &AppConfig, terminal: bool) -> bool {
    terminal && !args.no_color && !config.output.no_color
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Same level for every workspace crate; dependencies stay silent.
fn directives(level: LevelFilter) -> String {
    let mut directives = vec!["off".to_string()];
    directives.extend(WORKSPACE_TARGETS.iter().map(|target| format!("{target}={level}")));
    directives.join(",")
}
