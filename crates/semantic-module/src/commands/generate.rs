//! The one thing the binary does: scaffold a semantic module.
//!
//! Responsibility: wire the adapters, run the orchestrator, and report what
//! happened. No business logic lives here.

use std::path::Path;

use tracing::{debug, info, instrument};

use semantic_module_adapters::{
    DefaultsPrompter, JsonFileStore, LocalFilesystem, ProcessInstaller, SimpleRenderer,
};
use semantic_module_core::application::{ScaffoldOrchestrator, ports::Prompter};

use crate::{cli::Cli, config::AppConfig, error::CliResult, output::OutputManager};

/// Run all four phases against the current directory.
#[instrument(skip_all)]
pub fn execute(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir()?;
    scaffold_in(&cwd, &cli, &config, &output)
}

fn scaffold_in(
    base: &Path,
    cli: &Cli,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let invocation = cli.invocation();
    let destination = invocation.destination(base);
    let skip_install = cli.skip_install || config.install.skip;

    debug!(
        destination = %destination.display(),
        skip_install,
        yes = cli.yes,
        "Invocation resolved"
    );

    let store = JsonFileStore::open(
        &destination,
        &config.store.file_name,
        config.store.namespace.as_str(),
    )?;

    let prompter = build_prompter(cli.yes, output)?;

    let report = ScaffoldOrchestrator::new(
        destination,
        Box::new(store),
        prompter,
        Box::new(LocalFilesystem::new()),
        Box::new(SimpleRenderer::new()),
        Box::new(ProcessInstaller::new()),
    )
    .skip_install(skip_install)
    .run(&invocation)?;

    output.summary(&report)?;
    info!(destination = %report.destination.display(), "Module ready");
    Ok(())
}

/// Terminal prompts when someone is there to answer them, defaults otherwise.
fn build_prompter(yes: bool, output: &OutputManager) -> CliResult<Box<dyn Prompter>> {
    if yes {
        return Ok(Box::new(DefaultsPrompter::new()));
    }

    #[cfg(feature = "interactive")]
    {
        if console::user_attended_stderr() {
            output.banner()?;
            return Ok(Box::new(crate::prompter::DialoguerPrompter::new(
                output.supports_color(),
            )));
        }
        output.warning("No terminal attached; using default answers")?;
    }

    #[cfg(not(feature = "interactive"))]
    output.warning("Built without interactive prompts; using default answers")?;

    Ok(Box::new(DefaultsPrompter::new()))
}
