//! What the user typed: a positional module name and a bag of flags.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::OptionKey;

/// Raw command-line input, before any resolution.
///
/// Flags are kept as strings keyed by whatever name the caller used, so
/// programmatic callers can pass unrecognized keys; they are filtered out
/// during option resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    module_name_arg: Option<String>,
    flags: BTreeMap<String, String>,
}

impl Invocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the positional module-name argument.
    pub fn with_module_name_arg(mut self, name: impl Into<String>) -> Self {
        self.module_name_arg = Some(name.into());
        self
    }

    /// Add a raw flag.
    pub fn with_flag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.flags.insert(key.into(), value.into());
        self
    }

    /// Add a flag for a recognized option, using its stored spelling.
    pub fn with_option(self, key: OptionKey, value: impl Into<String>) -> Self {
        self.with_flag(key.as_str(), value)
    }

    pub fn flags(&self) -> &BTreeMap<String, String> {
        &self.flags
    }

    /// Raw value of a recognized option flag, under either spelling.
    pub fn flag(&self, key: OptionKey) -> Option<&str> {
        self.flags
            .get(key.as_str())
            .or_else(|| self.flags.get(key.flag_name()))
            .map(String::as_str)
    }

    /// The `moduleName` flag wins over the positional argument.
    ///
    /// Empty names count as absent.
    pub fn module_name(&self) -> Option<&str> {
        let non_empty = |name: &&str| !name.is_empty();
        self.flag(OptionKey::ModuleName)
            .filter(non_empty)
            .or(self.module_name_arg.as_deref().filter(non_empty))
    }

    /// Directory the artifacts are written to.
    ///
    /// `base` joined with the module name, or `base` itself when none was
    /// given.
    pub fn destination(&self, base: &Path) -> PathBuf {
        match self.module_name() {
            Some(name) => base.join(name),
            None => base.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_positional() {
        let inv = Invocation::new()
            .with_module_name_arg("positional")
            .with_flag("module-name", "flagged");
        assert_eq!(inv.module_name(), Some("flagged"));
    }

    #[test]
    fn positional_is_used_without_flag() {
        let inv = Invocation::new().with_module_name_arg("foo");
        assert_eq!(inv.module_name(), Some("foo"));
        assert_eq!(inv.destination(Path::new("/work")), PathBuf::from("/work/foo"));
    }

    #[test]
    fn no_module_name_means_base_directory() {
        let inv = Invocation::new();
        assert_eq!(inv.module_name(), None);
        assert_eq!(inv.destination(Path::new("/work")), PathBuf::from("/work"));
    }

    #[test]
    fn empty_module_name_is_ignored() {
        let inv = Invocation::new().with_module_name_arg("");
        assert_eq!(inv.module_name(), None);
    }

    #[test]
    fn empty_module_name_flag_falls_back_to_positional() {
        let inv = Invocation::new()
            .with_module_name_arg("foo")
            .with_flag("moduleName", "");
        assert_eq!(inv.module_name(), Some("foo"));
        assert_eq!(inv.destination(Path::new("/work")), PathBuf::from("/work/foo"));
    }

    #[test]
    fn flag_lookup_accepts_camel_case() {
        let inv = Invocation::new().with_option(OptionKey::Packager, "yarn");
        assert_eq!(inv.flag(OptionKey::Packager), Some("yarn"));
        assert_eq!(inv.flag(OptionKey::CommitizenAdapter), None);
    }
}
