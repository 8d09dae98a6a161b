//! Option resolution - the first phase.
//!
//! Seeds the persisted store from the invocation: the module name, then the
//! built-in defaults with any recognized flags laid over them.

use tracing::{debug, instrument};

use crate::{
    application::ports::ConfigStore,
    domain::{ConfigValue, Invocation, OptionKey, ResolvedConfig},
    error::ScaffoldResult,
};

/// What option resolution hands to interactive collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionSeed {
    /// Module name from the flag or positional argument.
    pub module_name: Option<String>,
    /// `false` when the packager flag was given explicitly.
    pub prompt_packager: bool,
}

/// Resolve the invocation against the persisted store.
///
/// Store writes, in order:
/// 1. `moduleName`, when one was given
/// 2. recognized flags layered over the built-in defaults, written with
///    `defaults`: values already in the store win over both
#[instrument(skip_all)]
pub fn resolve_options(
    invocation: &Invocation,
    store: &dyn ConfigStore,
) -> ScaffoldResult<ResolutionSeed> {
    let module_name = invocation.module_name().map(str::to_string);
    let prompt_packager = invocation.flag(OptionKey::Packager).is_none();

    if let Some(name) = &module_name {
        store.set(OptionKey::ModuleName, ConfigValue::text(name.as_str()))?;
    }

    // The module name has already been written above.
    let flags: ResolvedConfig = ResolvedConfig::from_flags(invocation.flags())
        .iter()
        .filter(|(key, _)| *key != OptionKey::ModuleName)
        .map(|(key, value)| (key, value.clone()))
        .collect();

    let mut seed = ResolvedConfig::builtin_defaults();
    seed.merge(&flags);
    store.defaults(&seed)?;

    debug!(
        module_name = module_name.as_deref().unwrap_or("<current directory>"),
        prompt_packager,
        flags = flags.len(),
        "Options resolved"
    );

    Ok(ResolutionSeed {
        module_name,
        prompt_packager,
    })
}
